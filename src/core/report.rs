use crate::core::numerology::{compute_life_path, compute_numerology};
use crate::domain::model::{NumerologyReport, Settings, Subject};
use chrono::{DateTime, Utc};

/// 依設定計算單一對象的完整報告
pub fn build_report(subject: Subject, settings: Settings, generated_at: DateTime<Utc>) -> NumerologyReport {
    let name = subject
        .input_name()
        .map(|name| compute_numerology(name, &settings));

    let life_path = subject
        .birth_date
        .map(|date| compute_life_path(date, settings.keep_master));

    NumerologyReport {
        subject,
        settings,
        generated_at,
        name,
        life_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_report_with_name_and_date() {
        let subject = Subject::new(
            Some("Ada Lovelace".to_string()),
            NaiveDate::from_ymd_opt(1815, 12, 10),
        );
        let report = build_report(subject, Settings::default(), fixed_time());

        let name = report.name.as_ref().unwrap();
        assert_eq!(name.expression.value, 9);
        let lp = report.life_path.as_ref().unwrap();
        // 1815 -> 15 -> 6, 12 -> 3, 10 -> 1
        assert_eq!(lp.year_reduced, 6);
        assert_eq!(lp.month_reduced, 3);
        assert_eq!(lp.day_reduced, 1);
        assert_eq!(lp.final_number, 1);
        assert_eq!(report.generated_at, fixed_time());
    }

    #[test]
    fn test_blank_name_skips_name_numbers() {
        let subject = Subject::new(Some("   ".to_string()), NaiveDate::from_ymd_opt(1990, 5, 15));
        let report = build_report(subject, Settings::default(), fixed_time());

        assert!(report.name.is_none());
        assert_eq!(report.life_path.unwrap().final_number, 3);
    }

    #[test]
    fn test_name_only_has_no_life_path() {
        let subject = Subject::new(Some("ACME Innovations Ltd.".to_string()), None);
        let report = build_report(subject, Settings::default(), fixed_time());

        assert!(report.name.is_some());
        assert!(report.life_path.is_none());
    }
}
