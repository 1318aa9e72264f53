use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InputError { message: String },

    #[error("PDF generation failed: {message}")]
    PdfError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Export,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NumerologyError::ConfigValidationError { .. }
            | NumerologyError::InvalidConfigValueError { .. }
            | NumerologyError::MissingConfigError { .. } => ErrorCategory::Configuration,
            NumerologyError::InputError { .. } => ErrorCategory::Input,
            NumerologyError::CsvError(_)
            | NumerologyError::SerializationError(_)
            | NumerologyError::ZipError(_)
            | NumerologyError::PdfError { .. } => ErrorCategory::Export,
            NumerologyError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // PDF 失敗不影響其他匯出
            NumerologyError::PdfError { .. } => ErrorSeverity::Low,
            NumerologyError::InputError { .. } => ErrorSeverity::Medium,
            NumerologyError::ConfigValidationError { .. }
            | NumerologyError::InvalidConfigValueError { .. }
            | NumerologyError::MissingConfigError { .. }
            | NumerologyError::CsvError(_)
            | NumerologyError::SerializationError(_)
            | NumerologyError::ZipError(_) => ErrorSeverity::High,
            NumerologyError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NumerologyError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and field names".to_string()
            }
            NumerologyError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            NumerologyError::MissingConfigError { field } => {
                format!("Add the missing '{}' setting", field)
            }
            NumerologyError::InputError { .. } => {
                "Provide a name and/or a birth date (YYYY-MM-DD)".to_string()
            }
            NumerologyError::PdfError { .. } => {
                "Remove characters the PDF core fonts cannot encode, or export CSV/JSON only"
                    .to_string()
            }
            NumerologyError::CsvError(_)
            | NumerologyError::SerializationError(_)
            | NumerologyError::ZipError(_) => "Retry the export; report a bug if it persists".to_string(),
            NumerologyError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Nothing to calculate: {}", self),
            ErrorCategory::Export => format!("Export failed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 依嚴重程度決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
