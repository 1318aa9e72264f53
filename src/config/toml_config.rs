use crate::domain::model::{ExportFormat, Settings, Subject};
use crate::domain::ports::ConfigProvider;
use crate::export::{default_file_name, DEFAULT_BUNDLE_NAME};
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{
    validate_file_name, validate_output_formats, validate_path, validate_subject, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub settings: Settings,
    pub output: OutputConfig,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,
    pub bundle: Option<BundleConfig>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn default_formats() -> Vec<ExportFormat> {
    ExportFormat::ALL.to_vec()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUBJECT_NAME})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.output_path", &self.output.output_path)?;
        validate_output_formats("output.formats", &self.output.formats)?;

        for format in &self.output.formats {
            validate_file_name(&format!("output.filenames.{}", format), &self.file_name(*format))?;
        }
        if let Some(name) = self.bundle_name() {
            validate_file_name("output.bundle.filename", &name)?;
        }

        if self.subjects.is_empty() {
            return Err(NumerologyError::MissingConfigError {
                field: "subjects".to_string(),
            });
        }
        for (i, subject) in self.subjects.iter().enumerate() {
            validate_subject(&format!("subjects[{}]", i), subject)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn settings(&self) -> Settings {
        self.settings
    }

    fn subjects(&self) -> Vec<Subject> {
        self.subjects.clone()
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[ExportFormat] {
        &self.output.formats
    }

    fn file_name(&self, format: ExportFormat) -> String {
        let configured = self.output.filenames.as_ref().and_then(|f| match format {
            ExportFormat::Csv => f.csv.clone(),
            ExportFormat::Json => f.json.clone(),
            ExportFormat::Pdf => f.pdf.clone(),
        });
        configured.unwrap_or_else(|| default_file_name(format).to_string())
    }

    fn bundle_name(&self) -> Option<String> {
        let bundle = self.output.bundle.as_ref().filter(|b| b.enabled)?;
        Some(
            bundle
                .filename
                .clone()
                .unwrap_or_else(|| DEFAULT_BUNDLE_NAME.to_string()),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NumerologySystem;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[settings]
system = "Chaldean"
keep_master = false

[output]
output_path = "./reports"
formats = ["csv", "json"]

[[subjects]]
name = "Ada Lovelace"
birth_date = "1815-12-10"

[[subjects]]
birth_date = "1990-05-15"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.settings.system, NumerologySystem::Chaldean);
        assert!(!config.settings.keep_master);
        // 未指定的設定沿用預設值
        assert!(config.settings.y_as_vowel);
        assert_eq!(config.output_formats(), &[ExportFormat::Csv, ExportFormat::Json]);
        assert_eq!(config.subjects.len(), 2);
        assert_eq!(config.subjects[0].name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(config.subjects[1].birth_date, NaiveDate::from_ymd_opt(1990, 5, 15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_formats_and_file_names() {
        let toml_content = r#"
[output]
output_path = "./reports"

[output.filenames]
pdf = "summary.pdf"

[output.bundle]
enabled = true

[[subjects]]
name = "Grace Hopper"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_formats(), &ExportFormat::ALL);
        assert_eq!(config.file_name(ExportFormat::Pdf), "summary.pdf");
        assert_eq!(config.file_name(ExportFormat::Csv), "numerology_breakdown.csv");
        assert_eq!(config.bundle_name().as_deref(), Some(DEFAULT_BUNDLE_NAME));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMEROLOGY_TEST_SUBJECT", "Alan Turing");

        let toml_content = r#"
[output]
output_path = "./reports"

[[subjects]]
name = "${NUMEROLOGY_TEST_SUBJECT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.subjects[0].name.as_deref(), Some("Alan Turing"));

        std::env::remove_var("NUMEROLOGY_TEST_SUBJECT");
    }

    #[test]
    fn test_config_validation() {
        let no_subjects = r#"
[output]
output_path = "./reports"
"#;
        let config = TomlConfig::from_toml_str(no_subjects).unwrap();
        assert!(matches!(
            config.validate(),
            Err(NumerologyError::MissingConfigError { .. })
        ));

        let bad_filename = r#"
[output]
output_path = "./reports"

[output.filenames]
json = "nested/report.json"

[[subjects]]
name = "Ada"
"#;
        let config = TomlConfig::from_toml_str(bad_filename).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let toml_content = r#"
[output]
output_path = "./reports"
formats = ["xml"]
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[output]
output_path = "./reports"

[[subjects]]
name = "File Test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.subjects[0].name.as_deref(), Some("File Test"));
    }
}
