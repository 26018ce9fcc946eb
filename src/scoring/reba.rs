use serde::Serialize;

use super::classification::{classify, Classification, RebaBand, RiskBand};
use super::tables::{clamp_index, REBA_TABLE_A, REBA_TABLE_B, REBA_TABLE_C};
use crate::locale::Locale;
use crate::observation::RebaObservation;

/// Highest Group A / Group B score after load or coupling is added
const MAX_GROUP_SCORE: i32 = 12;
const MAX_TOTAL: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebaScore {
    /// Neck, trunk and legs, plus load
    pub score_a: i32,
    /// Upper arm, lower arm and wrist, plus coupling
    pub score_b: i32,
    pub score_c: i32,
    /// Final score, 1-15
    pub total: i32,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Score a posture with REBA.
///
/// Steps:
/// - scoreA = min(TABLE_A[neck][trunk][legs] + load, 12)
/// - scoreB = min(TABLE_B[upperArm][lowerArm][wrist] + coupling, 12)
/// - scoreC = TABLE_C[scoreA - 1][scoreB - 1]
/// - total  = min(scoreC + activity, 15)
///
/// Returns `None` if a table lookup misses.
pub fn score_reba(observation: &RebaObservation, locale: Locale) -> Option<RebaScore> {
    let Some((score_a, score_b, score_c)) = group_scores(observation) else {
        tracing::warn!(?observation, "REBA table lookup missed");
        return None;
    };

    let total = score_c.saturating_add(observation.activity).min(MAX_TOTAL);

    Some(RebaScore {
        score_a,
        score_b,
        score_c,
        total,
        classification: classify(RiskBand::Reba(RebaBand::from_total(total)), locale),
    })
}

fn group_scores(observation: &RebaObservation) -> Option<(i32, i32, i32)> {
    let neck = clamp_index(observation.neck.saturating_sub(1), 2);
    let trunk = clamp_index(observation.trunk.saturating_sub(1), 4);
    let legs = clamp_index(observation.legs.saturating_sub(1), 3);
    let raw_a = *REBA_TABLE_A.get(neck)?.get(trunk)?.get(legs)?;
    let score_a = raw_a.saturating_add(observation.load).min(MAX_GROUP_SCORE);

    let upper_arm = clamp_index(observation.upper_arm.saturating_sub(1), 5);
    let lower_arm = clamp_index(observation.lower_arm.saturating_sub(1), 2);
    let wrist = clamp_index(observation.wrist.saturating_sub(1), 2);
    // A wrist score past the table's last column reads as 0
    let raw_b = REBA_TABLE_B
        .get(upper_arm)?
        .get(lower_arm)?
        .get(wrist)
        .copied()
        .unwrap_or(0);
    let score_b = raw_b.saturating_add(observation.coupling).min(MAX_GROUP_SCORE);

    let row = clamp_index(score_a.saturating_sub(1), 11);
    let col = clamp_index(score_b.saturating_sub(1), 11);
    let score_c = *REBA_TABLE_C.get(row)?.get(col)?;

    Some((score_a, score_b, score_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(fields: [i32; 9]) -> RebaObservation {
        let [neck, trunk, legs, upper_arm, lower_arm, wrist, load, coupling, activity] = fields;
        RebaObservation {
            neck,
            trunk,
            legs,
            upper_arm,
            lower_arm,
            wrist,
            load,
            coupling,
            activity,
        }
    }

    #[test]
    fn test_neutral_posture_is_negligible() {
        let result = score_reba(&RebaObservation::default(), Locale::En).unwrap();
        assert_eq!(result.score_a, 1);
        assert_eq!(result.score_b, 1);
        assert_eq!(result.score_c, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.classification.level, "negligible");
    }

    #[test]
    fn test_load_and_coupling_add_before_table_c() {
        // TABLE_A[1][2][1] = 5, +2 load = 7
        // TABLE_B[3][1][0] = 4, +1 coupling = 5
        // TABLE_C[6][4] = 9, +1 activity = 10
        let result = score_reba(&observation([2, 3, 2, 4, 2, 1, 2, 1, 1]), Locale::En).unwrap();
        assert_eq!(result.score_a, 7);
        assert_eq!(result.score_b, 5);
        assert_eq!(result.score_c, 9);
        assert_eq!(result.total, 10);
        assert_eq!(result.classification.band, RiskBand::Reba(RebaBand::High));
    }

    #[test]
    fn test_worst_posture_caps_at_fifteen() {
        let result = score_reba(&observation([3, 5, 4, 6, 3, 2, 3, 3, 3]), Locale::En).unwrap();
        assert_eq!(result.score_a, 12);
        assert_eq!(result.score_b, 11);
        assert_eq!(result.score_c, 12);
        assert_eq!(result.total, 15);
        assert_eq!(result.classification.level, "very-high");
    }

    #[test]
    fn test_group_scores_cap_at_twelve() {
        // TABLE_A[2][4][3] = 9, +3 load = 12; a larger load still gives 12
        let result = score_reba(&observation([3, 5, 4, 1, 1, 1, 9, 0, 0]), Locale::En).unwrap();
        assert_eq!(result.score_a, 12);
    }

    #[test]
    fn test_third_wrist_column_reads_as_zero() {
        // TABLE_B has two wrist columns; wrist=3 misses and counts as 0
        let result = score_reba(&observation([1, 1, 1, 1, 1, 3, 0, 2, 0]), Locale::En).unwrap();
        assert_eq!(result.score_b, 2);
        let without_coupling = score_reba(&observation([1, 1, 1, 1, 1, 3, 0, 0, 0]), Locale::En).unwrap();
        assert_eq!(without_coupling.score_b, 0);
        assert_eq!(without_coupling.score_c, 1);
    }

    #[test]
    fn test_out_of_range_fields_clamp_to_table_edges() {
        let wild = score_reba(&observation([-4, 99, 0, 40, -1, 2, 0, 0, 0]), Locale::En).unwrap();
        let edge = score_reba(&observation([1, 5, 1, 6, 1, 2, 0, 0, 0]), Locale::En).unwrap();
        assert_eq!(wild, edge);
    }

    #[test]
    fn test_extreme_integers_do_not_overflow() {
        let result = score_reba(
            &observation([i32::MIN, i32::MAX, i32::MIN, i32::MAX, i32::MIN, i32::MAX, i32::MAX, i32::MAX, i32::MAX]),
            Locale::En,
        )
        .unwrap();
        assert_eq!(result.total, 15);
    }

    #[test]
    fn test_boundary_between_low_and_medium() {
        // TABLE_C[0][0] = 1; activity lifts the total one step at a time
        let three = score_reba(&observation([1, 1, 1, 1, 1, 1, 0, 0, 2]), Locale::En).unwrap();
        assert_eq!(three.total, 3);
        assert_eq!(three.classification.level, "low");

        let four = score_reba(&observation([1, 1, 1, 1, 1, 1, 0, 0, 3]), Locale::En).unwrap();
        assert_eq!(four.total, 4);
        assert_eq!(four.classification.level, "medium");
    }

    #[test]
    fn test_persian_text() {
        let result = score_reba(&RebaObservation::default(), Locale::Fa).unwrap();
        assert_eq!(result.classification.level, "بی‌خطر");
        assert_eq!(result.classification.color, "#16a34a");
    }
}
