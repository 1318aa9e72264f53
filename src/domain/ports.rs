use crate::domain::model::{ExportFormat, ExportSummary, NumerologyReport, Settings, Subject};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Writes `data` under `path` and returns where it ended up.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn settings(&self) -> Settings;
    fn subjects(&self) -> Vec<Subject>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[ExportFormat];
    fn file_name(&self, format: ExportFormat) -> String;
    /// ZIP 檔名；`None` 表示不打包
    fn bundle_name(&self) -> Option<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<Vec<Subject>>;
    async fn compute(&self, subjects: Vec<Subject>) -> Result<Vec<NumerologyReport>>;
    async fn export(&self, reports: &[NumerologyReport]) -> Result<ExportSummary>;
}
