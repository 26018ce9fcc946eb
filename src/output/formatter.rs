use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::advisor::Correction;
use crate::locale::Locale;
use crate::method::Method;
use crate::observation::{fields_for, NIOSH_FIELDS};
use crate::scoring::Assessment;

/// Indent of correction details under their title
const DETAIL_INDENT: usize = 7;

/// Narrowest width details are wrapped to
const MIN_WRAP_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (no wrapping)
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Parse a `#rrggbb` color into its channels
fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn paint(text: &str, hex: &str, use_colors: bool) -> String {
    match (use_colors, hex_to_rgb(hex)) {
        (true, Some((r, g, b))) => text.truecolor(r, g, b).bold().to_string(),
        _ => text.to_string(),
    }
}

/// Word-wrap text to `width` characters, counting chars rather than bytes.
/// A word longer than the width gets a line of its own.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// One-line summary of the numbers behind a result
pub fn format_score_line(assessment: &Assessment) -> String {
    match assessment {
        Assessment::Reba(score) => format!(
            "A {} · B {} · C {} · total {}",
            score.score_a, score.score_b, score.score_c, score.total
        ),
        Assessment::Rula(score) => format!(
            "C {} · D {} · total {}",
            score.score_c, score.score_d, score.total
        ),
        Assessment::Owas(score) => format!(
            "category {} (code {})",
            score.category.number(),
            score.code
        ),
        Assessment::Niosh(score) => format!(
            "RWL {} kg · LI {} (HM {} · VM {} · DM {} · AM {} · FM {} · CM {})",
            score.rwl, score.li, score.hm, score.vm, score.dm, score.am, score.fm, score.cm
        ),
    }
}

/// Format one assessed observation with its corrections.
///
/// `width` is the terminal width; details are not wrapped when it is None.
pub fn format_assessment(
    source: &str,
    assessment: &Assessment,
    corrections: &[Correction],
    use_colors: bool,
    width: Option<usize>,
) -> String {
    let method = assessment.method();
    let classification = assessment.classification();

    let header = if use_colors {
        format!("{}  {}", source.bold(), paint(method.name(), method.color(), true))
    } else {
        format!("{}  {}", source, method.name())
    };

    let mut lines = vec![
        header,
        format!("  Score:  {}", format_score_line(assessment)),
        format!(
            "  Level:  {}",
            paint(classification.level, classification.color, use_colors)
        ),
        format!("  Action: {}", classification.action),
    ];

    if !corrections.is_empty() {
        lines.push("  Corrections:".to_string());
    }
    for correction in corrections {
        let title = if use_colors {
            correction.title.bold().to_string()
        } else {
            correction.title.clone()
        };
        lines.push(format!("    {} {}", correction.icon, title));

        let indent = " ".repeat(DETAIL_INDENT);
        let detail_lines = match width {
            Some(width) => wrap_text(
                &correction.detail,
                width.saturating_sub(DETAIL_INDENT).max(MIN_WRAP_WIDTH),
            ),
            None => vec![correction.detail.clone()],
        };
        for line in detail_lines {
            let line = if use_colors {
                line.dimmed().to_string()
            } else {
                line
            };
            lines.push(format!("{}{}", indent, line));
        }
    }

    lines.join("\n")
}

/// Line printed when the scoring function reported no result
pub fn format_no_result(source: &str, method: Method) -> String {
    format!("{}  {}\n  No result: not enough data to score", source, method.name())
}

/// Field catalog for one method
pub fn format_fields(method: Method) -> String {
    let mut lines = vec![format!("{} fields:", method.name())];

    if method == Method::Niosh {
        for field in NIOSH_FIELDS {
            lines.push(format!(
                "  {:<12} {} ({}, min {})",
                field.key, field.label, field.unit, field.min
            ));
        }
        lines.push(format!("  {:<12} Coupling (good, fair, poor)", "coupling"));
        return lines.join("\n");
    }

    for field in fields_for(method) {
        lines.push(format!(
            "  {:<12} {} [{}-{}]  {}",
            field.key, field.label, field.min, field.max, field.help
        ));
        for value in field.min..=field.max {
            if let Some(option) = field.option(value) {
                lines.push(format!("      {} - {}", value, option));
            }
        }
    }
    lines.join("\n")
}

/// Method listing for `ergoscore methods`
pub fn format_methods(locale: Locale, use_colors: bool) -> String {
    Method::ALL
        .iter()
        .map(|method| {
            format!(
                "{:<6} {}\n       {}",
                paint(method.name(), method.color(), use_colors),
                method.full_name(),
                method.description(locale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::corrections;
    use crate::observation::{Observation, RebaObservation};
    use crate::scoring::assess;

    fn sample() -> (Assessment, Vec<Correction>) {
        let observation = Observation::Reba(RebaObservation {
            neck: 2,
            trunk: 3,
            ..RebaObservation::default()
        });
        let assessment = assess(&observation, Locale::En).unwrap();
        let list = corrections(Method::Reba, Some(&assessment), &observation, Locale::En);
        (assessment, list)
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#1f6feb"), Some((0x1f, 0x6f, 0xeb)));
        assert_eq!(hex_to_rgb("1f6feb"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("unbreakableword", 5), vec!["unbreakableword"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // each Persian word is 6 chars but 12 bytes
        assert_eq!(wrap_text("کیبورد کیبورد", 13), vec!["کیبورد کیبورد"]);
    }

    #[test]
    fn test_format_assessment_plain() {
        let (assessment, list) = sample();
        let text = format_assessment("desk.yaml", &assessment, &list, false, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "desk.yaml  REBA");
        assert!(lines[1].contains("total"));
        assert!(lines[2].ends_with("low"));
        assert!(text.contains("Corrections:"));
        assert!(text.contains("🖥️ Monitor height"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_format_assessment_wraps_details() {
        let (assessment, list) = sample();
        let text = format_assessment("desk.yaml", &assessment, &list, false, Some(40));
        for line in text.lines().filter(|l| l.starts_with("       ")) {
            assert!(line.chars().count() <= 40 || !line.trim().contains(' '));
        }
    }

    #[test]
    fn test_format_assessment_colored() {
        let (assessment, list) = sample();
        let text = format_assessment("desk.yaml", &assessment, &list, true, None);
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_score_line_per_method() {
        for method in Method::ALL {
            let assessment = assess(&Observation::default_for(method), Locale::En).unwrap();
            assert!(!format_score_line(&assessment).is_empty());
        }
        let niosh = assess(&Observation::default_for(Method::Niosh), Locale::En).unwrap();
        assert!(format_score_line(&niosh).starts_with("RWL "));
    }

    #[test]
    fn test_format_fields() {
        let text = format_fields(Method::Owas);
        assert!(text.starts_with("OWAS fields:"));
        assert!(text.contains("legs"));
        assert!(text.contains("      7 - walking"));
        assert!(!text.contains("      8 - "));

        let niosh = format_fields(Method::Niosh);
        assert!(niosh.contains("hDist"));
        assert!(niosh.contains("coupling"));
    }

    #[test]
    fn test_format_methods_lists_all() {
        let text = format_methods(Locale::En, false);
        for method in Method::ALL {
            assert!(text.contains(method.full_name()));
        }
    }

    #[test]
    fn test_no_result_line() {
        assert!(format_no_result("a.yaml", Method::Rula).contains("No result"));
    }
}
