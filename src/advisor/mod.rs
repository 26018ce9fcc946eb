//! Rule-based remediation suggestions
//!
//! Each method has a fixed rule list that is walked in order. Rules look at
//! the raw observation fields, plus the score for REBA's break rule and
//! NIOSH's weight limit. The order of the output is the order a reader
//! should act on.

mod text;

pub use text::Remedy;

use serde::Serialize;

use crate::locale::Locale;
use crate::method::Method;
use crate::observation::{Observation, OwasObservation, RebaObservation, RulaObservation};
use crate::scoring::{Assessment, NioshScore, RebaScore};

/// REBA totals above this get a break schedule
const BREAK_THRESHOLD: i32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correction {
    pub title: String,
    pub detail: String,
    pub icon: &'static str,
}

impl Correction {
    pub fn from_remedy(remedy: Remedy, locale: Locale) -> Self {
        Self {
            title: remedy.title(locale).to_string(),
            detail: remedy.detail(locale),
            icon: remedy.icon(),
        }
    }
}

/// Derive the ordered correction list for one scored observation.
///
/// Returns an empty list when there is no assessment yet, or when the
/// method, assessment and observation do not all describe the same method.
pub fn corrections(
    method: Method,
    assessment: Option<&Assessment>,
    observation: &Observation,
    locale: Locale,
) -> Vec<Correction> {
    let Some(assessment) = assessment else {
        return Vec::new();
    };

    let remedies = match (method, assessment, observation) {
        (Method::Reba, Assessment::Reba(score), Observation::Reba(reba)) => reba_remedies(score, reba),
        (Method::Rula, Assessment::Rula(_), Observation::Rula(rula)) => rula_remedies(rula),
        (Method::Owas, Assessment::Owas(_), Observation::Owas(owas)) => owas_remedies(owas),
        (Method::Niosh, Assessment::Niosh(score), Observation::Niosh(_)) => niosh_remedies(score),
        _ => {
            tracing::debug!(
                %method,
                assessed = %assessment.method(),
                observed = %observation.method(),
                "method mismatch, no corrections"
            );
            Vec::new()
        }
    };

    remedies
        .into_iter()
        .map(|remedy| Correction::from_remedy(remedy, locale))
        .collect()
}

fn reba_remedies(score: &RebaScore, observation: &RebaObservation) -> Vec<Remedy> {
    let mut remedies = Vec::new();
    if observation.neck >= 2 {
        remedies.push(Remedy::MonitorHeight);
    }
    if observation.trunk >= 3 {
        remedies.push(Remedy::Backrest);
    }
    if observation.upper_arm >= 3 {
        remedies.push(Remedy::DeskHeight);
    }
    if observation.legs >= 3 {
        remedies.push(Remedy::Footrest);
    }
    if score.total > BREAK_THRESHOLD {
        remedies.push(Remedy::BreakSchedule);
    }
    remedies.push(Remedy::ChairSpec);
    remedies
}

fn rula_remedies(observation: &RulaObservation) -> Vec<Remedy> {
    let mut remedies = vec![Remedy::Armrest, Remedy::KeyboardPosition];
    if observation.neck > 2 {
        remedies.push(Remedy::DocumentHolder);
    }
    remedies.push(Remedy::ErgonomicMouse);
    remedies
}

fn owas_remedies(observation: &OwasObservation) -> Vec<Remedy> {
    let mut remedies = Vec::new();
    if observation.back >= 3 {
        remedies.push(Remedy::StandingWorkstation);
    }
    if observation.arms >= 2 {
        remedies.push(Remedy::ToolLayout);
    }
    remedies.push(Remedy::InclinedSurface);
    remedies
}

fn niosh_remedies(score: &NioshScore) -> Vec<Remedy> {
    vec![
        Remedy::ReduceLoad(score.rwl),
        Remedy::HorizontalDistance,
        Remedy::LiftHeight,
        Remedy::ReduceTwisting,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::assess;

    fn icons(list: &[Correction]) -> Vec<&'static str> {
        list.iter().map(|c| c.icon).collect()
    }

    fn advise(observation: &Observation, locale: Locale) -> Vec<Correction> {
        let assessment = assess(observation, locale);
        corrections(observation.method(), assessment.as_ref(), observation, locale)
    }

    #[test]
    fn test_no_assessment_gives_no_corrections() {
        let observation = Observation::default_for(Method::Rula);
        assert!(corrections(Method::Rula, None, &observation, Locale::En).is_empty());
    }

    #[test]
    fn test_reba_neutral_posture_only_gets_chair_spec() {
        let list = advise(&Observation::Reba(RebaObservation::default()), Locale::En);
        assert_eq!(icons(&list), vec!["✏️"]);
    }

    #[test]
    fn test_reba_rules_in_fixed_order() {
        let observation = Observation::Reba(RebaObservation {
            neck: 2,
            trunk: 3,
            legs: 3,
            upper_arm: 3,
            activity: 3,
            load: 3,
            ..RebaObservation::default()
        });
        let list = advise(&observation, Locale::En);
        assert_eq!(icons(&list), vec!["🖥️", "🪑", "📐", "🦶", "⏱️", "✏️"]);
        assert_eq!(list[0].title, "Monitor height");
    }

    #[test]
    fn test_break_schedule_starts_above_seven() {
        // TABLE_A[0][4][2] = 7 and TABLE_A[0][4][3] = 8, TABLE_C column 0 keeps them
        let seven = RebaObservation {
            trunk: 5,
            legs: 3,
            ..RebaObservation::default()
        };
        let eight = RebaObservation { legs: 4, ..seven };

        let Some(Assessment::Reba(score)) = assess(&Observation::Reba(seven), Locale::En) else {
            panic!("expected a REBA assessment");
        };
        assert_eq!(score.total, 7);
        assert!(!icons(&advise(&Observation::Reba(seven), Locale::En)).contains(&"⏱️"));

        let Some(Assessment::Reba(score)) = assess(&Observation::Reba(eight), Locale::En) else {
            panic!("expected a REBA assessment");
        };
        assert_eq!(score.total, 8);
        assert!(icons(&advise(&Observation::Reba(eight), Locale::En)).contains(&"⏱️"));
    }

    #[test]
    fn test_document_holder_starts_at_neck_three() {
        let with_neck = |neck| {
            Observation::Rula(RulaObservation {
                neck,
                ..RulaObservation::default()
            })
        };
        assert!(!icons(&advise(&with_neck(2), Locale::En)).contains(&"📄"));
        assert!(icons(&advise(&with_neck(3), Locale::En)).contains(&"📄"));
    }

    #[test]
    fn test_rula_unconditional_suggestions() {
        let list = advise(&Observation::Rula(RulaObservation::default()), Locale::En);
        assert_eq!(icons(&list), vec!["💪", "⌨️", "🖱️"]);

        let bent_neck = Observation::Rula(RulaObservation {
            neck: 3,
            ..RulaObservation::default()
        });
        let list = advise(&bent_neck, Locale::En);
        assert_eq!(icons(&list), vec!["💪", "⌨️", "📄", "🖱️"]);
    }

    #[test]
    fn test_owas_rules() {
        let observation = Observation::Owas(OwasObservation {
            back: 4,
            arms: 2,
            ..OwasObservation::default()
        });
        let list = advise(&observation, Locale::Fa);
        assert_eq!(icons(&list), vec!["🏗️", "🔧", "📐"]);
        assert_eq!(list[2].title, "صفحه شیب‌دار");
    }

    #[test]
    fn test_niosh_always_four_and_mentions_limit() {
        let observation = Observation::default_for(Method::Niosh);
        let list = advise(&observation, Locale::En);
        assert_eq!(icons(&list), vec!["⚖️", "📏", "⬆️", "🔄"]);
        let Some(Assessment::Niosh(score)) = assess(&observation, Locale::En) else {
            panic!("expected a NIOSH assessment");
        };
        assert!(list[0].detail.contains(&score.rwl.to_string()));
    }

    #[test]
    fn test_mismatched_method_gives_no_corrections() {
        let observation = Observation::default_for(Method::Owas);
        let assessment = assess(&observation, Locale::En);
        assert!(corrections(Method::Reba, assessment.as_ref(), &observation, Locale::En).is_empty());
    }
}
