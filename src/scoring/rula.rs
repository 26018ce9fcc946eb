use serde::Serialize;

use super::classification::{classify, Classification, RiskBand, RulaBand};
use super::tables::{clamp_index, RULA_TABLE_C, RULA_TABLE_D};
use crate::locale::Locale;
use crate::observation::RulaObservation;

const MAX_SCORE: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulaScore {
    /// Upper-limb branch (arm and wrist) with muscle use and force
    pub score_c: i32,
    /// Neck, trunk and legs branch with muscle use and force
    pub score_d: i32,
    /// Larger of the two branches, 1-8
    pub total: i32,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Score a posture with RULA.
///
/// The upper-limb and neck/trunk branches are scored independently and the
/// larger one becomes the total. Returns `None` if a table lookup misses.
pub fn score_rula(observation: &RulaObservation, locale: Locale) -> Option<RulaScore> {
    let Some((score_c, score_d)) = branch_scores(observation) else {
        tracing::warn!(?observation, "RULA table lookup missed");
        return None;
    };

    let total = score_c.max(score_d);

    Some(RulaScore {
        score_c,
        score_d,
        total,
        classification: classify(RiskBand::Rula(RulaBand::from_total(total)), locale),
    })
}

fn branch_scores(observation: &RulaObservation) -> Option<(i32, i32)> {
    let extra = observation.muscle.saturating_add(observation.force);

    let arm = clamp_index(
        observation
            .upper_arm
            .saturating_add(observation.lower_arm)
            .saturating_sub(2),
        11,
    );
    let wrist = clamp_index(observation.wrist.saturating_sub(1), 3);
    let raw_a = *RULA_TABLE_C.get(arm)?.get(wrist)?;
    let group_a = raw_a
        .saturating_add(observation.wrist_twist)
        .saturating_sub(1)
        .min(MAX_SCORE);
    let score_c = group_a.saturating_add(extra).min(MAX_SCORE);

    let body = clamp_index(
        observation
            .neck
            .saturating_add(observation.trunk)
            .saturating_sub(2),
        11,
    );
    let legs = clamp_index(observation.legs.saturating_sub(1), 3);
    let group_b = (*RULA_TABLE_D.get(body)?.get(legs)?).min(MAX_SCORE);
    let score_d = group_b.saturating_add(extra).min(MAX_SCORE);

    Some((score_c, score_d))
}
