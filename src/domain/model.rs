use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 姓名數字的對照系統
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NumerologySystem {
    #[default]
    #[serde(alias = "pythagorean")]
    Pythagorean,
    #[serde(alias = "chaldean")]
    Chaldean,
}

impl NumerologySystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumerologySystem::Pythagorean => "Pythagorean",
            NumerologySystem::Chaldean => "Chaldean",
        }
    }
}

impl fmt::Display for NumerologySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumerologySystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pythagorean" => Ok(NumerologySystem::Pythagorean),
            "chaldean" => Ok(NumerologySystem::Chaldean),
            other => Err(format!("unknown numerology system: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub system: NumerologySystem,
    pub keep_master: bool,
    pub digits_as_numbers: bool,
    pub y_as_vowel: bool,
    pub show_intermediate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            system: NumerologySystem::Pythagorean,
            keep_master: true,
            digits_as_numbers: true,
            y_as_vowel: true,
            show_intermediate: true,
        }
    }
}

/// 要計算的對象：姓名與出生日期至少要有一個
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subject {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl Subject {
    pub fn new(name: Option<String>, birth_date: Option<NaiveDate>) -> Self {
        Self { name, birth_date }
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Name as entered, or `None` when it is blank.
    pub fn input_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|_| self.has_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharValue {
    #[serde(rename = "char")]
    pub character: char,
    pub value: u32,
}

/// 數字化約結果：總和、最終值與每一步
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    pub total: u64,
    pub value: u64,
    pub steps: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameNumbers {
    pub cleaned_name: String,
    pub breakdown: Vec<CharValue>,
    pub vowels: Vec<CharValue>,
    pub consonants: Vec<CharValue>,
    pub expression: Reduction,
    pub soul_urge: Reduction,
    pub personality: Reduction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePath {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub year_reduced: u64,
    pub year_steps: Vec<u64>,
    pub month_reduced: u64,
    pub month_steps: Vec<u64>,
    pub day_reduced: u64,
    pub day_steps: Vec<u64>,
    pub sum_total: u64,
    #[serde(rename = "final")]
    pub final_number: u64,
    pub final_steps: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumerologyReport {
    pub subject: Subject,
    pub settings: Settings,
    pub generated_at: DateTime<Utc>,
    pub name: Option<NameNumbers>,
    pub life_path: Option<LifePath>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 單一匯出檔案（尚未寫入儲存）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub format: ExportFormat,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: Vec<String>,
    pub failures: Vec<ExportFailure>,
}
