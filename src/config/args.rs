use crate::domain::model::{ExportFormat, NumerologySystem, Settings, Subject};
use crate::domain::ports::ConfigProvider;
use crate::export::{default_file_name, DEFAULT_BUNDLE_NAME};
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_formats, validate_path, validate_subject, Validate};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numerology-report")]
#[command(about = "Numerology calculator with CSV, JSON and PDF export")]
pub struct CliConfig {
    /// Full name (person or company)
    #[arg(long)]
    pub name: Option<String>,

    /// Birth date for the Life Path number
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub birth_date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = NumerologySystem::Pythagorean)]
    pub system: NumerologySystem,

    /// Keep master numbers (11, 22, 33)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub keep_master: bool,

    /// Treat digits in the name as numbers
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub digits_as_numbers: bool,

    /// Treat 'Y' as a vowel for Soul Urge
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub y_as_vowel: bool,

    /// Show reduction steps
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_intermediate: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = vec![ExportFormat::Csv, ExportFormat::Json, ExportFormat::Pdf]
    )]
    pub formats: Vec<ExportFormat>,

    /// Pack every export into a single ZIP file
    #[arg(long)]
    pub bundle: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn settings(&self) -> Settings {
        Settings {
            system: self.system,
            keep_master: self.keep_master,
            digits_as_numbers: self.digits_as_numbers,
            y_as_vowel: self.y_as_vowel,
            show_intermediate: self.show_intermediate,
        }
    }

    fn subjects(&self) -> Vec<Subject> {
        vec![Subject::new(self.name.clone(), self.birth_date)]
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[ExportFormat] {
        &self.formats
    }

    fn file_name(&self, format: ExportFormat) -> String {
        default_file_name(format).to_string()
    }

    fn bundle_name(&self) -> Option<String> {
        self.bundle.then(|| DEFAULT_BUNDLE_NAME.to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.formats)?;
        for subject in self.subjects() {
            validate_subject("input", &subject)?;
        }
        Ok(())
    }
}
