use crate::domain::model::{ExportSummary, NumerologyReport};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub reports: Vec<NumerologyReport>,
    pub summary: ExportSummary,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🔢 Starting numerology report");

        let subjects = self.pipeline.collect().await?;
        tracing::info!("📥 Collected {} subject(s)", subjects.len());

        let reports = self.pipeline.compute(subjects).await?;
        tracing::info!("🧮 Computed {} report(s)", reports.len());

        let summary = self.pipeline.export(&reports).await?;
        tracing::info!("💾 Wrote {} file(s)", summary.written.len());
        for failure in &summary.failures {
            tracing::warn!("⚠️ {} export skipped: {}", failure.format, failure.message);
        }

        Ok(RunOutcome { reports, summary })
    }
}
