use serde::Serialize;

use super::classification::{classify, Classification, OwasCategory, RiskBand};
use crate::locale::Locale;
use crate::observation::OwasObservation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwasScore {
    pub category: OwasCategory,
    /// Raw back, arms, legs and load digits, e.g. "1221". Diagnostic only.
    pub code: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Classify a posture with OWAS.
///
/// Rules, first match wins:
/// 1. back 1, arms <= 2, legs 1-3 -> category 1
/// 2. back 1, arms <= 3, legs 4-6 -> category 2
/// 3. back 2, arms <= 2, legs <= 3 -> category 2
/// 4. back 3-4 or arms 3         -> category 3
/// 5. anything else              -> category 4
pub fn score_owas(observation: &OwasObservation, locale: Locale) -> OwasScore {
    let category = categorize(observation);
    let code = format!(
        "{}{}{}{}",
        observation.back, observation.arms, observation.legs, observation.load
    );

    OwasScore {
        category,
        code,
        classification: classify(RiskBand::Owas(category), locale),
    }
}

fn categorize(observation: &OwasObservation) -> OwasCategory {
    let OwasObservation { back, arms, legs, .. } = *observation;

    if back == 1 && arms <= 2 && (1..=3).contains(&legs) {
        OwasCategory::Low
    } else if back == 1 && arms <= 3 && (4..=6).contains(&legs) {
        OwasCategory::Medium
    } else if back == 2 && arms <= 2 && legs <= 3 {
        OwasCategory::Medium
    } else if back == 3 || back == 4 || arms == 3 {
        OwasCategory::High
    } else {
        OwasCategory::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owas(back: i32, arms: i32, legs: i32, load: i32) -> OwasObservation {
        OwasObservation { back, arms, legs, load }
    }

    #[test]
    fn test_sitting_upright_is_category_one() {
        let result = score_owas(&owas(1, 1, 2, 1), Locale::En);
        assert_eq!(result.category, OwasCategory::Low);
        assert_eq!(result.category.number(), 1);
        assert_eq!(result.code, "1121");
        assert_eq!(result.classification.level, "low");
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(categorize(&owas(1, 3, 5, 1)), OwasCategory::Medium);
        assert_eq!(categorize(&owas(2, 2, 3, 1)), OwasCategory::Medium);
        assert_eq!(categorize(&owas(3, 1, 1, 1)), OwasCategory::High);
        assert_eq!(categorize(&owas(2, 3, 1, 1)), OwasCategory::High);
        // arms 3 with straight back and legs 1-3 skips rule 1 and lands on rule 4
        assert_eq!(categorize(&owas(1, 3, 2, 1)), OwasCategory::High);
    }

    #[test]
    fn test_fall_through_is_critical() {
        // walking with a bent back matches none of rules 1-4
        assert_eq!(categorize(&owas(2, 1, 7, 1)), OwasCategory::Critical);
        assert_eq!(categorize(&owas(1, 1, 7, 1)), OwasCategory::Critical);
    }

    #[test]
    fn test_load_only_affects_code() {
        let light = score_owas(&owas(2, 1, 4, 1), Locale::En);
        let heavy = score_owas(&owas(2, 1, 4, 3), Locale::En);
        assert_eq!(light.category, heavy.category);
        assert_eq!(heavy.code, "2143");
    }

    #[test]
    fn test_out_of_range_values_still_categorized() {
        assert_eq!(categorize(&owas(0, 0, 0, 0)), OwasCategory::Critical);
        assert_eq!(categorize(&owas(9, 9, 9, 9)), OwasCategory::Critical);
        assert_eq!(categorize(&owas(4, 9, 9, 9)), OwasCategory::High);
    }
}
