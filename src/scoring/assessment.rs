use serde::Serialize;

use super::classification::Classification;
use super::niosh::{score_niosh, NioshScore};
use super::owas::{score_owas, OwasScore};
use super::reba::{score_reba, RebaScore};
use super::rula::{score_rula, RulaScore};
use crate::locale::Locale;
use crate::method::Method;
use crate::observation::Observation;

/// Score result for one observation, tagged by method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "UPPERCASE")]
pub enum Assessment {
    Reba(RebaScore),
    Rula(RulaScore),
    Owas(OwasScore),
    Niosh(NioshScore),
}

impl Assessment {
    pub fn method(&self) -> Method {
        match self {
            Assessment::Reba(_) => Method::Reba,
            Assessment::Rula(_) => Method::Rula,
            Assessment::Owas(_) => Method::Owas,
            Assessment::Niosh(_) => Method::Niosh,
        }
    }

    pub fn classification(&self) -> &Classification {
        match self {
            Assessment::Reba(score) => &score.classification,
            Assessment::Rula(score) => &score.classification,
            Assessment::Owas(score) => &score.classification,
            Assessment::Niosh(score) => &score.classification,
        }
    }

    /// The number the classification is taken from: REBA/RULA total, OWAS
    /// category or NIOSH lifting index.
    pub fn headline(&self) -> f64 {
        match self {
            Assessment::Reba(score) => score.total as f64,
            Assessment::Rula(score) => score.total as f64,
            Assessment::Owas(score) => score.category.number() as f64,
            Assessment::Niosh(score) => score.li,
        }
    }
}

/// Score an observation with the method it is tagged with.
///
/// Returns `None` when the scoring function reports no result; callers
/// should treat that as "not enough data to show a score".
pub fn assess(observation: &Observation, locale: Locale) -> Option<Assessment> {
    let assessment = match observation {
        Observation::Reba(reba) => score_reba(reba, locale).map(Assessment::Reba),
        Observation::Rula(rula) => score_rula(rula, locale).map(Assessment::Rula),
        Observation::Owas(owas) => Some(Assessment::Owas(score_owas(owas, locale))),
        Observation::Niosh(niosh) => Some(Assessment::Niosh(score_niosh(niosh, locale))),
    };

    if let Some(ref assessment) = assessment {
        debug_assert_eq!(assessment.classification().band.method(), assessment.method());
        tracing::debug!(
            method = %assessment.method(),
            headline = assessment.headline(),
            band = assessment.classification().band.key(),
            "assessed observation"
        );
    }

    assessment
}
