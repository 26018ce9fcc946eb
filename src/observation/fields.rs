//! Field catalog for observation records
//!
//! Ranges, labels and per-value descriptions for every field a caller can
//! fill in. The scoring functions never consult this; it exists for the
//! surfaces that collect input and for clamping estimates.

use crate::method::Method;

/// An ordinal field (REBA, RULA, OWAS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Record key, as written in observation files
    pub key: &'static str,
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    /// Meaning of each value from `min` to `max`
    pub options: &'static [&'static str],
    pub help: &'static str,
}

impl FieldSpec {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Description of one value, if it is in range
    pub fn option(&self, value: i32) -> Option<&'static str> {
        if !self.contains(value) {
            return None;
        }
        self.options.get((value - self.min) as usize).copied()
    }
}

/// A continuous NIOSH measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
}

pub const REBA_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "neck",
        label: "Neck",
        min: 1,
        max: 3,
        options: &["under 20°", "over 20° or deviated", "bent backward"],
        help: "Forward flexion of the neck",
    },
    FieldSpec {
        key: "trunk",
        label: "Trunk",
        min: 1,
        max: 5,
        options: &["upright", "0-20°", "20-60°", "over 60°", "twisted or side-bent"],
        help: "Flexion of the trunk",
    },
    FieldSpec {
        key: "legs",
        label: "Legs",
        min: 1,
        max: 4,
        options: &[
            "seated",
            "standing on both feet",
            "weight on one leg",
            "knees bent over 60°",
        ],
        help: "Leg posture and weight distribution",
    },
    FieldSpec {
        key: "upperArm",
        label: "Upper arm",
        min: 1,
        max: 6,
        options: &[
            "within 20° forward or back",
            "20-45°",
            "45-90°",
            "over 90°",
            "shoulder raised",
            "arm above head",
        ],
        help: "Upper arm angle relative to the trunk",
    },
    FieldSpec {
        key: "lowerArm",
        label: "Lower arm",
        min: 1,
        max: 3,
        options: &["60-100°", "under 60°", "over 100°"],
        help: "Elbow angle",
    },
    FieldSpec {
        key: "wrist",
        label: "Wrist",
        min: 1,
        max: 3,
        options: &["neutral", "bent 0-15°", "bent over 15°"],
        help: "Wrist deviation",
    },
    FieldSpec {
        key: "load",
        label: "Load / force",
        min: 0,
        max: 3,
        options: &["under 5 kg", "5-10 kg", "over 10 kg", "shock or sudden force"],
        help: "Weight of the load or applied force",
    },
    FieldSpec {
        key: "coupling",
        label: "Coupling",
        min: 0,
        max: 3,
        options: &["good", "fair", "poor", "unacceptable"],
        help: "Grip quality on the tool or load",
    },
    FieldSpec {
        key: "activity",
        label: "Activity",
        min: 0,
        max: 3,
        options: &["static posture", "repetitive", "rapid change", "unstable"],
        help: "Nature of the work activity",
    },
];

pub const RULA_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "upperArm",
        label: "Upper arm",
        min: 1,
        max: 6,
        options: &[
            "within 20° forward or back",
            "20-45°",
            "45-90°",
            "over 90°",
            "shoulder raised",
            "supported",
        ],
        help: "Upper arm angle",
    },
    FieldSpec {
        key: "lowerArm",
        label: "Lower arm",
        min: 1,
        max: 3,
        options: &["60-100°", "under 60°", "over 100°"],
        help: "Elbow angle",
    },
    FieldSpec {
        key: "wrist",
        label: "Wrist",
        min: 1,
        max: 4,
        options: &["neutral", "slight deviation", "bent 15° or more", "bent and deviated"],
        help: "Wrist position",
    },
    FieldSpec {
        key: "wristTwist",
        label: "Wrist twist",
        min: 1,
        max: 2,
        options: &["mid-range", "near end of range"],
        help: "Wrist rotation",
    },
    FieldSpec {
        key: "neck",
        label: "Neck",
        min: 1,
        max: 6,
        options: &["0-10°", "10-20°", "over 20°", "extended", "side-bent", "twisted"],
        help: "Neck position",
    },
    FieldSpec {
        key: "trunk",
        label: "Trunk",
        min: 1,
        max: 6,
        options: &["upright", "0-20°", "20-60°", "over 60°", "side-bent", "twisted"],
        help: "Trunk position",
    },
    FieldSpec {
        key: "legs",
        label: "Legs",
        min: 1,
        max: 2,
        options: &["both feet supported", "one foot or unstable"],
        help: "Leg support",
    },
    FieldSpec {
        key: "muscle",
        label: "Muscle use",
        min: 0,
        max: 1,
        options: &["intermittent", "static for over 1 minute"],
        help: "Repetition and static holding",
    },
    FieldSpec {
        key: "force",
        label: "Force / load",
        min: 0,
        max: 3,
        options: &["under 2 kg", "2-10 kg", "over 10 kg", "sudden shock"],
        help: "Applied force",
    },
];

pub const OWAS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "back",
        label: "Back",
        min: 1,
        max: 4,
        options: &["straight", "bent forward", "twisted or side-bent", "bent and twisted"],
        help: "Back posture",
    },
    FieldSpec {
        key: "arms",
        label: "Arms",
        min: 1,
        max: 3,
        options: &[
            "both below shoulder",
            "one above shoulder",
            "both above shoulder",
        ],
        help: "Arm position relative to the shoulders",
    },
    FieldSpec {
        key: "legs",
        label: "Legs",
        min: 1,
        max: 7,
        options: &[
            "sitting",
            "standing on both straight legs",
            "standing on one straight leg",
            "standing on both bent legs",
            "standing on one bent leg",
            "kneeling",
            "walking",
        ],
        help: "Leg posture",
    },
    FieldSpec {
        key: "load",
        label: "Load",
        min: 1,
        max: 3,
        options: &["under 10 kg", "10-20 kg", "over 20 kg"],
        help: "Weight handled",
    },
];

pub const NIOSH_FIELDS: &[NumericFieldSpec] = &[
    NumericFieldSpec {
        key: "weight",
        label: "Load weight",
        unit: "kg",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "hDist",
        label: "Horizontal distance",
        unit: "cm",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "vDist",
        label: "Vertical travel",
        unit: "cm",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "vOrigin",
        label: "Origin height",
        unit: "cm",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "asymmetry",
        label: "Asymmetry angle",
        unit: "°",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "frequency",
        label: "Lift frequency",
        unit: "lifts/min",
        min: 0.0,
    },
    NumericFieldSpec {
        key: "duration",
        label: "Work duration",
        unit: "h",
        min: 0.0,
    },
];

/// Ordinal fields for a method, in display order. Empty for NIOSH.
pub fn fields_for(method: Method) -> &'static [FieldSpec] {
    match method {
        Method::Reba => REBA_FIELDS,
        Method::Rula => RULA_FIELDS,
        Method::Owas => OWAS_FIELDS,
        Method::Niosh => &[],
    }
}

pub fn field_spec(method: Method, key: &str) -> Option<&'static FieldSpec> {
    fields_for(method).iter().find(|f| f.key == key)
}

pub fn numeric_field_spec(key: &str) -> Option<&'static NumericFieldSpec> {
    NIOSH_FIELDS.iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{Observation, OwasObservation, RebaObservation, RulaObservation};

    #[test]
    fn test_every_field_has_one_option_per_value() {
        for method in [Method::Reba, Method::Rula, Method::Owas] {
            for field in fields_for(method) {
                assert_eq!(
                    field.options.len() as i32,
                    field.max - field.min + 1,
                    "{}.{}",
                    method,
                    field.key
                );
            }
        }
    }

    #[test]
    fn test_catalog_keys_match_record_keys() {
        let reba = RebaObservation::default();
        for field in REBA_FIELDS {
            assert!(reba.get(field.key).is_some(), "reba.{}", field.key);
        }
        let rula = RulaObservation::default();
        for field in RULA_FIELDS {
            assert!(rula.get(field.key).is_some(), "rula.{}", field.key);
        }
        let owas = OwasObservation::default();
        for field in OWAS_FIELDS {
            assert!(owas.get(field.key).is_some(), "owas.{}", field.key);
        }
    }

    #[test]
    fn test_defaults_sit_at_field_minimum() {
        let reba = RebaObservation::default();
        for field in REBA_FIELDS {
            assert_eq!(reba.get(field.key), Some(field.min), "reba.{}", field.key);
        }
        let Observation::Owas(owas) = Observation::default_for(Method::Owas) else {
            panic!("expected OWAS observation");
        };
        for field in OWAS_FIELDS {
            assert_eq!(owas.get(field.key), Some(field.min), "owas.{}", field.key);
        }
    }

    #[test]
    fn test_clamp_and_option() {
        let neck = field_spec(Method::Reba, "neck").unwrap();
        assert_eq!(neck.clamp(0), 1);
        assert_eq!(neck.clamp(9), 3);
        assert_eq!(neck.option(3), Some("bent backward"));
        assert_eq!(neck.option(4), None);
    }

    #[test]
    fn test_lookup_is_per_method() {
        assert_eq!(field_spec(Method::Rula, "neck").unwrap().max, 6);
        assert_eq!(field_spec(Method::Reba, "neck").unwrap().max, 3);
        assert!(field_spec(Method::Owas, "neck").is_none());
        assert!(field_spec(Method::Niosh, "weight").is_none());
        assert_eq!(numeric_field_spec("vOrigin").unwrap().unit, "cm");
    }
}
