//! Plain-text rendering of a computed report for the terminal.

use crate::core::interpretation::interpretation;
use crate::core::numerology::alphabet_position;
use crate::domain::model::{CharValue, LifePath, NameNumbers, NumerologyReport, Settings};
use std::fmt::Write;

pub fn join_steps(steps: &[u64]) -> String {
    steps
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// `a + b + c = total`
pub fn sum_expression(chars: &[CharValue], total: u64) -> String {
    let terms = chars
        .iter()
        .map(|cv| cv.value.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{} = {}", terms, total)
}

pub fn render_summary(report: &NumerologyReport) -> String {
    let mut out = String::new();

    if let Some(name) = &report.name {
        render_overview(&mut out, name, &report.settings);
        render_breakdown(&mut out, name, report.settings.show_intermediate);
        render_partition(&mut out, name, report.settings.show_intermediate);
    }

    render_birth_date(&mut out, report.life_path.as_ref(), report.settings.show_intermediate);
    out
}

fn render_overview(out: &mut String, name: &NameNumbers, settings: &Settings) {
    let _ = writeln!(out, "== Core Numbers ==");
    let _ = writeln!(out, "Expression / Destiny (Full Name): {}", name.expression.value);
    let _ = writeln!(
        out,
        "System: {} • Master numbers kept: {} • Digits-as-numbers: {}",
        settings.system, settings.keep_master, settings.digits_as_numbers
    );
    let _ = writeln!(out, "Interpretation: {}", interpretation(name.expression.value));
    let _ = writeln!(out);
}

fn render_breakdown(out: &mut String, name: &NameNumbers, show_intermediate: bool) {
    let _ = writeln!(out, "== How this was calculated ==");
    let _ = writeln!(out, "1) Cleaned Name: {}", name.cleaned_name);
    let _ = writeln!(out, "2) Character-by-character values");
    let _ = writeln!(out, "   {:<10} {:>10} {:>12}", "Character", "Alphabet #", "Mapped Value");
    for cv in &name.breakdown {
        let _ = writeln!(
            out,
            "   {:<10} {:>10} {:>12}",
            cv.character,
            alphabet_position(cv.character),
            cv.value
        );
    }

    let positions = name
        .breakdown
        .iter()
        .map(|cv| alphabet_position(cv.character).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let values = name
        .breakdown
        .iter()
        .map(|cv| cv.value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "3) Alphabet positions: {}", positions);
    let _ = writeln!(out, "   Mapped values:      {}", values);
    let _ = writeln!(
        out,
        "4) Total sum: {}",
        sum_expression(&name.breakdown, name.expression.total)
    );

    let reduction = if show_intermediate {
        join_steps(&name.expression.steps)
    } else {
        name.expression.value.to_string()
    };
    let _ = writeln!(out, "5) Reduction: {}", reduction);
    let _ = writeln!(out);
}

fn render_partition(out: &mut String, name: &NameNumbers, show_intermediate: bool) {
    let _ = writeln!(out, "== Vowel & Consonant Numbers ==");

    let sections = [
        ("Soul Urge (Vowels)", &name.soul_urge, &name.vowels),
        ("Personality (Consonants)", &name.personality, &name.consonants),
    ];

    for (label, reduction, chars) in sections {
        let _ = writeln!(out, "{}: {}", label, reduction.value);
        if show_intermediate {
            let _ = writeln!(out, "   {}", join_steps(&reduction.steps));
        }
        let _ = writeln!(out, "   Interpretation: {}", interpretation(reduction.value));
        if !chars.is_empty() {
            let listed = chars
                .iter()
                .map(|cv| format!("{}={}", cv.character, cv.value))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "   Breakdown: {}", listed);
        }
    }
    let _ = writeln!(out);
}

fn render_birth_date(out: &mut String, life_path: Option<&LifePath>, show_intermediate: bool) {
    let _ = writeln!(out, "== Life Path (Birth Date) ==");

    let Some(lp) = life_path else {
        let _ = writeln!(out, "No birth date given; pass one to compute the Life Path number.");
        return;
    };

    let _ = writeln!(
        out,
        "Day reduced: {}   Month reduced: {}   Year reduced: {}",
        lp.day_reduced, lp.month_reduced, lp.year_reduced
    );
    if show_intermediate {
        let _ = writeln!(
            out,
            "{} + {} + {} = {} → {}",
            lp.day_reduced,
            lp.month_reduced,
            lp.year_reduced,
            lp.sum_total,
            join_steps(&lp.final_steps)
        );
    }
    let _ = writeln!(out, "Life Path Number: {}", lp.final_number);
    let _ = writeln!(out, "Interpretation: {}", interpretation(lp.final_number));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::build_report;
    use crate::domain::model::Subject;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_join_steps() {
        assert_eq!(join_steps(&[1990, 19, 10, 1]), "1990 → 19 → 10 → 1");
        assert_eq!(join_steps(&[7]), "7");
    }

    #[test]
    fn test_summary_shows_sum_and_steps() {
        let subject = Subject::new(Some("Ada".to_string()), NaiveDate::from_ymd_opt(1990, 5, 15));
        let report = build_report(subject, Settings::default(), Utc::now());
        let text = render_summary(&report);

        assert!(text.contains("Expression / Destiny (Full Name): 6"));
        assert!(text.contains("4) Total sum: 1 + 4 + 1 = 6"));
        assert!(text.contains("3) Alphabet positions: 1 4 1"));
        assert!(text.contains("6 + 5 + 1 = 12 → 12 → 3"));
        assert!(text.contains("Life Path Number: 3"));
        assert!(text.contains("Creativity, expression, optimism."));
    }

    #[test]
    fn test_hide_intermediate_prints_final_only() {
        let settings = Settings {
            show_intermediate: false,
            ..Settings::default()
        };
        let subject = Subject::new(Some("Ada Lovelace".to_string()), None);
        let report = build_report(subject, settings, Utc::now());
        let text = render_summary(&report);

        assert!(text.contains("5) Reduction: 9\n"));
        assert!(!text.contains("36 → 9"));
        assert!(text.contains("No birth date given"));
    }
}
