use super::fields::{fields_for, NIOSH_FIELDS};
use super::{Coupling, Observation};

/// Check every field of an observation against the field catalog.
/// Returns all out-of-range fields at once (not just the first).
///
/// Scoring never requires this: the engine clamps at table-index level.
/// It exists so callers can warn about, or refuse, records that would be
/// silently clamped.
pub fn validate_observation(observation: &Observation) -> Result<(), Vec<String>> {
    let method = observation.method();
    let prefix = method.name().to_ascii_lowercase();
    let mut errors = Vec::new();

    if let Observation::Niosh(niosh) = observation {
        for spec in NIOSH_FIELDS {
            let Some(value) = niosh.get(spec.key) else {
                continue;
            };
            if !value.is_finite() {
                errors.push(format!("{}.{}: must be a finite number", prefix, spec.key));
            } else if value < spec.min {
                errors.push(format!(
                    "{}.{}: {} is below the minimum of {} {}",
                    prefix, spec.key, value, spec.min, spec.unit
                ));
            }
        }
        if let Coupling::Other(raw) = &niosh.coupling {
            errors.push(format!(
                "{}.coupling: unknown value '{}' (expected good, fair or poor)",
                prefix, raw
            ));
        }
    } else {
        for spec in fields_for(method) {
            let value = match observation {
                Observation::Reba(reba) => reba.get(spec.key),
                Observation::Rula(rula) => rula.get(spec.key),
                Observation::Owas(owas) => owas.get(spec.key),
                Observation::Niosh(_) => None,
            };
            if let Some(value) = value {
                if !spec.contains(value) {
                    errors.push(format!(
                        "{}.{}: {} outside [{}, {}]",
                        prefix, spec.key, value, spec.min, spec.max
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
