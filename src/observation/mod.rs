pub mod estimate;
pub mod fields;
pub mod validation;

pub use estimate::{apply_estimate, load_estimate, PostureEstimate};
pub use fields::{field_spec, fields_for, numeric_field_spec, FieldSpec, NumericFieldSpec, NIOSH_FIELDS};
pub use validation::validate_observation;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::method::Method;

/// Observed posture for one assessment, tagged by method.
///
/// Example YAML:
/// ```yaml
/// method: REBA
/// neck: 2
/// trunk: 3
/// upperArm: 4
/// activity: 1
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "UPPERCASE")]
pub enum Observation {
    Reba(RebaObservation),
    Rula(RulaObservation),
    Owas(OwasObservation),
    Niosh(NioshObservation),
}

impl Observation {
    pub fn method(&self) -> Method {
        match self {
            Observation::Reba(_) => Method::Reba,
            Observation::Rula(_) => Method::Rula,
            Observation::Owas(_) => Method::Owas,
            Observation::Niosh(_) => Method::Niosh,
        }
    }

    /// Starting record for a fresh assessment: every ordinal field at the
    /// bottom of its range, NIOSH at a 10 kg lift from hip height.
    pub fn default_for(method: Method) -> Self {
        match method {
            Method::Reba => Observation::Reba(RebaObservation::default()),
            Method::Rula => Observation::Rula(RulaObservation::default()),
            Method::Owas => Observation::Owas(OwasObservation::default()),
            Method::Niosh => Observation::Niosh(NioshObservation {
                weight: 10.0,
                v_dist: 75.0,
                ..NioshObservation::default()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RebaObservation {
    pub neck: i32,
    pub trunk: i32,
    pub legs: i32,
    pub upper_arm: i32,
    pub lower_arm: i32,
    pub wrist: i32,
    pub load: i32,
    pub coupling: i32,
    pub activity: i32,
}

impl Default for RebaObservation {
    fn default() -> Self {
        Self {
            neck: 1,
            trunk: 1,
            legs: 1,
            upper_arm: 1,
            lower_arm: 1,
            wrist: 1,
            load: 0,
            coupling: 0,
            activity: 0,
        }
    }
}

impl RebaObservation {
    pub fn get(&self, key: &str) -> Option<i32> {
        Some(match key {
            "neck" => self.neck,
            "trunk" => self.trunk,
            "legs" => self.legs,
            "upperArm" => self.upper_arm,
            "lowerArm" => self.lower_arm,
            "wrist" => self.wrist,
            "load" => self.load,
            "coupling" => self.coupling,
            "activity" => self.activity,
            _ => return None,
        })
    }

    /// Set a field by its record key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: i32) -> bool {
        let slot = match key {
            "neck" => &mut self.neck,
            "trunk" => &mut self.trunk,
            "legs" => &mut self.legs,
            "upperArm" => &mut self.upper_arm,
            "lowerArm" => &mut self.lower_arm,
            "wrist" => &mut self.wrist,
            "load" => &mut self.load,
            "coupling" => &mut self.coupling,
            "activity" => &mut self.activity,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RulaObservation {
    pub upper_arm: i32,
    pub lower_arm: i32,
    pub wrist: i32,
    pub wrist_twist: i32,
    pub neck: i32,
    pub trunk: i32,
    pub legs: i32,
    pub muscle: i32,
    pub force: i32,
}

impl Default for RulaObservation {
    fn default() -> Self {
        Self {
            upper_arm: 1,
            lower_arm: 1,
            wrist: 1,
            wrist_twist: 1,
            neck: 1,
            trunk: 1,
            legs: 1,
            muscle: 0,
            force: 0,
        }
    }
}

impl RulaObservation {
    pub fn get(&self, key: &str) -> Option<i32> {
        Some(match key {
            "upperArm" => self.upper_arm,
            "lowerArm" => self.lower_arm,
            "wrist" => self.wrist,
            "wristTwist" => self.wrist_twist,
            "neck" => self.neck,
            "trunk" => self.trunk,
            "legs" => self.legs,
            "muscle" => self.muscle,
            "force" => self.force,
            _ => return None,
        })
    }

    pub fn set(&mut self, key: &str, value: i32) -> bool {
        let slot = match key {
            "upperArm" => &mut self.upper_arm,
            "lowerArm" => &mut self.lower_arm,
            "wrist" => &mut self.wrist,
            "wristTwist" => &mut self.wrist_twist,
            "neck" => &mut self.neck,
            "trunk" => &mut self.trunk,
            "legs" => &mut self.legs,
            "muscle" => &mut self.muscle,
            "force" => &mut self.force,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct OwasObservation {
    pub back: i32,
    pub arms: i32,
    pub legs: i32,
    pub load: i32,
}

impl Default for OwasObservation {
    fn default() -> Self {
        Self {
            back: 1,
            arms: 1,
            legs: 1,
            load: 1,
        }
    }
}

impl OwasObservation {
    pub fn get(&self, key: &str) -> Option<i32> {
        Some(match key {
            "back" => self.back,
            "arms" => self.arms,
            "legs" => self.legs,
            "load" => self.load,
            _ => return None,
        })
    }

    pub fn set(&mut self, key: &str, value: i32) -> bool {
        let slot = match key {
            "back" => &mut self.back,
            "arms" => &mut self.arms,
            "legs" => &mut self.legs,
            "load" => &mut self.load,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Hand-to-load grip quality for the lifting equation.
///
/// Any value other than good/fair/poor is kept as `Other` and scored like
/// a poor grip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Coupling {
    #[default]
    Good,
    Fair,
    Poor,
    Other(String),
}

impl Coupling {
    pub fn as_str(&self) -> &str {
        match self {
            Coupling::Good => "good",
            Coupling::Fair => "fair",
            Coupling::Poor => "poor",
            Coupling::Other(raw) => raw,
        }
    }
}

impl From<String> for Coupling {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "good" => Coupling::Good,
            "fair" => Coupling::Fair,
            "poor" => Coupling::Poor,
            _ => Coupling::Other(raw),
        }
    }
}

impl From<Coupling> for String {
    fn from(coupling: Coupling) -> Self {
        coupling.as_str().to_string()
    }
}

impl fmt::Display for Coupling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifting task measurements. Distances are in centimetres, weight in kg.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NioshObservation {
    pub weight: f64,
    /// Horizontal distance from the hands to the midpoint between the ankles
    pub h_dist: f64,
    /// Vertical travel distance of the lift
    pub v_dist: f64,
    /// Height of the hands at the origin of the lift
    pub v_origin: f64,
    /// Trunk twist in degrees
    pub asymmetry: f64,
    // frequency and duration are carried for callers; the frequency
    // multiplier is currently a constant
    pub frequency: f64,
    pub duration: f64,
    pub coupling: Coupling,
}

impl Default for NioshObservation {
    fn default() -> Self {
        Self {
            weight: 0.0,
            h_dist: 25.0,
            v_dist: 0.0,
            v_origin: 75.0,
            asymmetry: 0.0,
            frequency: 1.0,
            duration: 1.0,
            coupling: Coupling::Good,
        }
    }
}

impl NioshObservation {
    pub fn get(&self, key: &str) -> Option<f64> {
        Some(match key {
            "weight" => self.weight,
            "hDist" => self.h_dist,
            "vDist" => self.v_dist,
            "vOrigin" => self.v_origin,
            "asymmetry" => self.asymmetry,
            "frequency" => self.frequency,
            "duration" => self.duration,
            _ => return None,
        })
    }

    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "weight" => &mut self.weight,
            "hDist" => &mut self.h_dist,
            "vDist" => &mut self.v_dist,
            "vOrigin" => &mut self.v_origin,
            "asymmetry" => &mut self.asymmetry,
            "frequency" => &mut self.frequency,
            "duration" => &mut self.duration,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Load an observation record from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, names an
/// unknown method, or contains a field the method does not define.
pub fn load_observation(path: &Path) -> Result<Observation> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read observation file at {}", path.display()))?;
    parse_observation(&content, is_json(path))
        .with_context(|| format!("Failed to parse observation in {}", path.display()))
}

/// Parse an observation record from text
pub fn parse_observation(content: &str, json: bool) -> Result<Observation> {
    let observation = if json {
        serde_json::from_str(content)?
    } else {
        serde_saphyr::from_str(content)?
    };
    Ok(observation)
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
