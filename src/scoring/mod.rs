pub mod assessment;
pub mod classification;
pub mod niosh;
pub mod owas;
pub mod reba;
pub mod rula;
mod tables;

pub use assessment::{assess, Assessment};
pub use classification::{classify, Classification, NioshBand, OwasCategory, RebaBand, RiskBand, RulaBand};
pub use niosh::{score_niosh, NioshScore};
pub use owas::{score_owas, OwasScore};
pub use reba::{score_reba, RebaScore};
pub use rula::{score_rula, RulaScore};
