use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::fields::{field_spec, numeric_field_spec};
use super::Observation;

/// Parameter estimate proposed by an external posture-recognition service.
///
/// Keys use the same names as observation records, but values are
/// best-effort numbers in arbitrary ranges.
///
/// Example JSON:
/// ```json
/// {
///   "estimatedParameters": { "neck": 2.4, "trunk": 7, "upperArm": 3 },
///   "observations": "Worker leans over a low bench."
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureEstimate {
    #[serde(default)]
    pub estimated_parameters: BTreeMap<String, f64>,
    #[serde(default)]
    pub observations: Option<String>,
}

/// Merge an estimate into an observation record.
///
/// Only keys the record's method defines are applied. Ordinal values are
/// rounded and clamped into the field's range; NIOSH measurements are
/// floored at their lower bound. Non-finite values and unknown keys are
/// skipped.
///
/// Returns the record keys that were applied, in key order.
pub fn apply_estimate(observation: &mut Observation, estimate: &PostureEstimate) -> Vec<&'static str> {
    let method = observation.method();
    let mut applied = Vec::new();

    for (key, &value) in &estimate.estimated_parameters {
        if !value.is_finite() {
            tracing::debug!(%method, key = key.as_str(), "skipping non-finite estimate");
            continue;
        }

        let ordinal = field_spec(method, key).map(|spec| (spec.key, spec.clamp(value.round() as i32)));

        let accepted = match observation {
            Observation::Reba(reba) => ordinal.and_then(|(field, v)| reba.set(field, v).then_some(field)),
            Observation::Rula(rula) => ordinal.and_then(|(field, v)| rula.set(field, v).then_some(field)),
            Observation::Owas(owas) => ordinal.and_then(|(field, v)| owas.set(field, v).then_some(field)),
            Observation::Niosh(niosh) => numeric_field_spec(key)
                .and_then(|spec| niosh.set(spec.key, value.max(spec.min)).then_some(spec.key)),
        };

        match accepted {
            Some(field) => {
                tracing::debug!(%method, field, value, "applied estimate");
                applied.push(field);
            }
            None => {
                tracing::debug!(%method, key = key.as_str(), "estimate key not used by method");
            }
        }
    }

    applied
}

/// Load an estimate payload from a JSON (or YAML) file
pub fn load_estimate(path: &Path) -> Result<PostureEstimate> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read estimate file at {}", path.display()))?;

    let estimate = if super::is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse estimate: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse estimate: invalid YAML in {}", path.display()))?
    };

    Ok(estimate)
}
