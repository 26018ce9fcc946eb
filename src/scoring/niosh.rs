//! Revised NIOSH lifting equation
//!
//! RWL = LC x HM x VM x DM x AM x FM x CM, and LI = weight / RWL.

use serde::Serialize;

use super::classification::{classify, Classification, NioshBand, RiskBand};
use crate::locale::Locale;
use crate::observation::{Coupling, NioshObservation};

/// Load constant in kg
pub const LOAD_CONSTANT: f64 = 23.0;

/// Frequency multiplier. Frequency and duration are not yet used to
/// derive it.
pub const FREQUENCY_MULTIPLIER: f64 = 0.78;

/// Horizontal and vertical-travel distances below this floor (cm) are
/// treated as the floor.
const DISTANCE_FLOOR: f64 = 25.0;

/// Knuckle height (cm) at which the vertical multiplier is 1
const OPTIMAL_ORIGIN: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NioshScore {
    /// Recommended weight limit in kg
    #[serde(rename = "RWL")]
    pub rwl: f64,
    /// Lifting index
    #[serde(rename = "LI")]
    pub li: f64,
    #[serde(rename = "HM")]
    pub hm: f64,
    #[serde(rename = "VM")]
    pub vm: f64,
    #[serde(rename = "DM")]
    pub dm: f64,
    #[serde(rename = "AM")]
    pub am: f64,
    #[serde(rename = "FM")]
    pub fm: f64,
    #[serde(rename = "CM")]
    pub cm: f64,
    #[serde(flatten)]
    pub classification: Classification,
}

impl Coupling {
    /// good 1.0, fair 0.95, anything else 0.9
    pub fn multiplier(&self) -> f64 {
        match self {
            Coupling::Good => 1.0,
            Coupling::Fair => 0.95,
            Coupling::Poor | Coupling::Other(_) => 0.9,
        }
    }
}

/// Compute the recommended weight limit and lifting index for a lift.
///
/// RWL, LI and the multipliers are rounded to two decimals, and a value
/// that is not finite (e.g. from a NaN measurement) is reported as 0. LI is
/// 0 when RWL rounds to 0.
pub fn score_niosh(observation: &NioshObservation, locale: Locale) -> NioshScore {
    let hm = (DISTANCE_FLOOR / observation.h_dist.max(DISTANCE_FLOOR)).min(1.0);
    let vm = 1.0 - 0.003 * (observation.v_origin - OPTIMAL_ORIGIN).abs();
    let dm = 0.82 + 4.5 / observation.v_dist.max(DISTANCE_FLOOR);
    let am = 1.0 - 0.0032 * observation.asymmetry;
    let fm = FREQUENCY_MULTIPLIER;
    let cm = observation.coupling.multiplier();

    let rwl = round2(LOAD_CONSTANT * hm * vm * dm * am * fm * cm);
    let li = lifting_index(observation.weight, rwl);

    NioshScore {
        rwl,
        li,
        hm: round2(hm),
        vm: round2(vm),
        dm: round2(dm),
        am: round2(am),
        fm,
        cm,
        classification: classify(RiskBand::Niosh(NioshBand::from_lifting_index(li)), locale),
    }
}

fn lifting_index(weight: f64, rwl: f64) -> f64 {
    if rwl == 0.0 {
        return 0.0;
    }
    round2(weight / rwl)
}

/// Round to two decimals; non-finite values become 0
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_lift() -> NioshObservation {
        NioshObservation {
            weight: 10.0,
            h_dist: 25.0,
            v_dist: 75.0,
            v_origin: 75.0,
            asymmetry: 0.0,
            ..NioshObservation::default()
        }
    }

    #[test]
    fn test_reference_lift() {
        let result = score_niosh(&reference_lift(), Locale::En);
        assert_eq!(result.hm, 1.0);
        assert_eq!(result.vm, 1.0);
        assert_eq!(result.dm, 0.88);
        assert_eq!(result.am, 1.0);
        assert_eq!(result.cm, 1.0);
        assert_eq!(result.fm, 0.78);
        // 23 x 0.88 x 0.78 = 15.7872
        assert!((result.rwl - 15.79).abs() < 1e-9);
        assert!((result.li - 0.63).abs() < 1e-9);
        assert_eq!(result.classification.level, "safe");
    }

    #[test]
    fn test_distance_floors() {
        let close = NioshObservation {
            h_dist: 10.0,
            v_dist: 0.0,
            ..reference_lift()
        };
        let result = score_niosh(&close, Locale::En);
        assert_eq!(result.hm, 1.0);
        // 0.82 + 4.5 / 25
        assert_eq!(result.dm, 1.0);
    }

    #[test]
    fn test_far_reach_lowers_limit() {
        let far = NioshObservation {
            h_dist: 50.0,
            ..reference_lift()
        };
        let result = score_niosh(&far, Locale::En);
        assert_eq!(result.hm, 0.5);
        assert!(result.rwl < score_niosh(&reference_lift(), Locale::En).rwl);
    }

    #[test]
    fn test_vertical_and_asymmetry_multipliers() {
        let lift = NioshObservation {
            v_origin: 25.0,
            asymmetry: 90.0,
            ..reference_lift()
        };
        let result = score_niosh(&lift, Locale::En);
        assert_eq!(result.vm, 0.85);
        assert_eq!(result.am, 0.71);
    }

    #[test]
    fn test_coupling_multiplier() {
        let fair = NioshObservation {
            coupling: Coupling::Fair,
            ..reference_lift()
        };
        assert_eq!(score_niosh(&fair, Locale::En).cm, 0.95);

        let other = NioshObservation {
            coupling: Coupling::Other("wet".to_string()),
            ..reference_lift()
        };
        assert_eq!(score_niosh(&other, Locale::En).cm, 0.9);
    }

    #[test]
    fn test_heavy_load_is_high_risk() {
        let heavy = NioshObservation {
            weight: 40.0,
            ..reference_lift()
        };
        let result = score_niosh(&heavy, Locale::En);
        assert!(result.li > 2.0);
        assert_eq!(result.classification.band, RiskBand::Niosh(NioshBand::HighRisk));
    }

    #[test]
    fn test_zero_limit_gives_zero_index() {
        // a 312.5 degree twist drives AM, and so RWL, to zero
        let twisted = NioshObservation {
            asymmetry: 312.5,
            ..reference_lift()
        };
        let result = score_niosh(&twisted, Locale::En);
        assert_eq!(result.rwl, 0.0);
        assert_eq!(result.li, 0.0);
        assert!(!result.li.is_nan());
    }

    #[test]
    fn test_non_finite_input_gives_zero_index() {
        let broken = NioshObservation {
            v_origin: f64::NAN,
            ..reference_lift()
        };
        let result = score_niosh(&broken, Locale::En);
        assert_eq!(result.li, 0.0);
        assert_eq!(result.rwl, 0.0);
        assert_eq!(result.vm, 0.0);

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["RWL"], 0.0);
        assert_eq!(json["VM"], 0.0);
        assert_eq!(json["LI"], 0.0);
    }

    #[test]
    fn test_frequency_and_duration_do_not_change_result() {
        let busy = NioshObservation {
            frequency: 12.0,
            duration: 8.0,
            ..reference_lift()
        };
        assert_eq!(
            score_niosh(&busy, Locale::En),
            score_niosh(&reference_lift(), Locale::En)
        );
    }
}
