pub mod bundle;
pub mod csv;
pub mod json;
pub mod metrics;
pub mod pdf;

use crate::domain::model::{Artifact, ExportFailure, ExportFormat, NumerologyReport};
use crate::export::json::ReportPayload;
use crate::utils::error::Result;

pub const DEFAULT_CSV_NAME: &str = "numerology_breakdown.csv";
pub const DEFAULT_JSON_NAME: &str = "numerology_report.json";
pub const DEFAULT_PDF_NAME: &str = "numerology_report.pdf";
pub const DEFAULT_BUNDLE_NAME: &str = "numerology_report.zip";

pub fn default_file_name(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => DEFAULT_CSV_NAME,
        ExportFormat::Json => DEFAULT_JSON_NAME,
        ExportFormat::Pdf => DEFAULT_PDF_NAME,
    }
}

#[derive(Debug, Default)]
pub struct RenderedExports {
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<ExportFailure>,
}

/// Serializes one report into the requested formats. The CSV is skipped when
/// no name was computed; a PDF failure is recorded instead of aborting.
pub fn render_exports<F>(
    report: &NumerologyReport,
    formats: &[ExportFormat],
    file_name: F,
) -> Result<RenderedExports>
where
    F: Fn(ExportFormat) -> String,
{
    let mut rendered = RenderedExports::default();
    let payload = ReportPayload::from_report(report);

    for format in formats {
        let bytes = match format {
            ExportFormat::Csv => match &report.name {
                Some(name) => self::csv::breakdown_csv(name)?,
                None => {
                    tracing::debug!("Skipping CSV export: no name to break down");
                    continue;
                }
            },
            ExportFormat::Json => json::report_json(report)?,
            ExportFormat::Pdf => match pdf::report_pdf(&payload) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("⚠️ {}", e);
                    rendered.failures.push(ExportFailure {
                        format: *format,
                        message: e.to_string(),
                    });
                    continue;
                }
            },
        };

        rendered.artifacts.push(Artifact {
            format: *format,
            file_name: file_name(*format),
            bytes,
        });
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::build_report;
    use crate::domain::model::{Settings, Subject};
    use chrono::{NaiveDate, Utc};

    fn names(format: ExportFormat) -> String {
        default_file_name(format).to_string()
    }

    #[test]
    fn test_all_formats_for_full_report() {
        let subject = Subject::new(Some("Ada Lovelace".to_string()), NaiveDate::from_ymd_opt(1990, 5, 15));
        let report = build_report(subject, Settings::default(), Utc::now());

        let rendered = render_exports(&report, &ExportFormat::ALL, names).unwrap();
        assert!(rendered.failures.is_empty());
        let files: Vec<&str> = rendered.artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(files, vec![DEFAULT_CSV_NAME, DEFAULT_JSON_NAME, DEFAULT_PDF_NAME]);
    }

    #[test]
    fn test_date_only_report_skips_csv() {
        let subject = Subject::new(None, NaiveDate::from_ymd_opt(1990, 5, 15));
        let report = build_report(subject, Settings::default(), Utc::now());

        let rendered = render_exports(&report, &ExportFormat::ALL, names).unwrap();
        assert!(rendered.artifacts.iter().all(|a| a.format != ExportFormat::Csv));
        assert_eq!(rendered.artifacts.len(), 2);
    }

    #[test]
    fn test_pdf_failure_keeps_other_exports() {
        let subject = Subject::new(Some("Ольга".to_string()), None);
        let report = build_report(subject, Settings::default(), Utc::now());

        let rendered = render_exports(&report, &ExportFormat::ALL, names).unwrap();
        assert_eq!(rendered.failures.len(), 1);
        assert_eq!(rendered.failures[0].format, ExportFormat::Pdf);
        assert!(rendered.failures[0].message.starts_with("PDF generation failed"));
        // 西里爾字母清理後為空字串，但 CSV 仍輸出表頭
        assert_eq!(rendered.artifacts.len(), 2);
    }
}
