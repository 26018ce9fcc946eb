pub mod advisor;
pub mod config;
pub mod locale;
pub mod method;
pub mod observation;
pub mod output;
pub mod scoring;
pub mod tracing_init;

pub use advisor::{corrections, Correction};
pub use locale::Locale;
pub use method::Method;
pub use observation::Observation;
pub use scoring::{assess, Assessment, Classification};
