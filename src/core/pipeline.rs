use crate::core::numerology::clean_name;
use crate::core::report::build_report;
use crate::domain::model::{ExportSummary, NumerologyReport, Subject};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::export::{bundle, render_exports};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::validate_subject;
use chrono::{DateTime, Utc};

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generated_at: Option<DateTime<Utc>>,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            generated_at: None,
        }
    }

    /// 固定報告時間戳（測試用）
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }
}

/// 目錄名稱中姓名部分的最大長度
pub const MAX_SLUG_LEN: usize = 40;

/// Subdirectory for one report when several subjects are exported together.
pub fn subject_dir(index: usize, report: &NumerologyReport) -> String {
    let slug = report
        .subject
        .input_name()
        .map(|name| {
            let mut slug = clean_name(name).to_ascii_lowercase();
            // clean_name 只留 ASCII，依位元組截斷不會切到字元
            slug.truncate(MAX_SLUG_LEN);
            slug
        })
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| "subject".to_string());
    format!("{:02}_{}", index + 1, slug)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn collect(&self) -> Result<Vec<Subject>> {
        let subjects = self.config.subjects();
        if subjects.is_empty() {
            return Err(NumerologyError::MissingConfigError {
                field: "subjects".to_string(),
            });
        }

        for (i, subject) in subjects.iter().enumerate() {
            validate_subject(&format!("subjects[{}]", i), subject)?;
        }

        tracing::debug!("Collected {} subject(s)", subjects.len());
        Ok(subjects)
    }

    async fn compute(&self, subjects: Vec<Subject>) -> Result<Vec<NumerologyReport>> {
        let settings = self.config.settings();
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);

        tracing::debug!(
            "Computing with system={}, keep_master={}, digits_as_numbers={}, y_as_vowel={}",
            settings.system,
            settings.keep_master,
            settings.digits_as_numbers,
            settings.y_as_vowel
        );

        Ok(subjects
            .into_iter()
            .map(|subject| build_report(subject, settings, generated_at))
            .collect())
    }

    async fn export(&self, reports: &[NumerologyReport]) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        let multiple = reports.len() > 1;

        for (i, report) in reports.iter().enumerate() {
            let prefix = if multiple {
                format!("{}/", subject_dir(i, report))
            } else {
                String::new()
            };

            let rendered = render_exports(report, self.config.output_formats(), |format| {
                self.config.file_name(format)
            })?;
            summary.failures.extend(rendered.failures);

            if let Some(bundle_name) = self.config.bundle_name() {
                let data = bundle::zip_artifacts(&rendered.artifacts)?;
                let path = format!("{}{}", prefix, bundle_name);
                tracing::debug!("Writing ZIP bundle ({} bytes) to storage", data.len());
                summary.written.push(self.storage.write_file(&path, &data).await?);
                continue;
            }

            for artifact in &rendered.artifacts {
                let path = format!("{}{}", prefix, artifact.file_name);
                summary
                    .written
                    .push(self.storage.write_file(&path, &artifact.bytes).await?);
            }
        }

        Ok(summary)
    }
}
