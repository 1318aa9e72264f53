use crate::domain::model::{ExportFormat, Subject};
use crate::utils::error::{NumerologyError, Result};
use chrono::Datelike;
use std::collections::HashSet;

/// 出生年份允許範圍
pub const MIN_BIRTH_YEAR: i32 = 1;
pub const MAX_BIRTH_YEAR: i32 = 9999;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_name(field_name: &str, file_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, file_name)?;
    validate_path(field_name, file_name)?;

    if file_name.contains('/') || file_name.contains('\\') {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 輸出格式不可為空且不可重複
pub fn validate_output_formats(field_name: &str, formats: &[ExportFormat]) -> Result<()> {
    if formats.is_empty() {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for format in formats {
        if !seen.insert(format) {
            return Err(NumerologyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.to_string(),
                reason: "Output format listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_subject(field_name: &str, subject: &Subject) -> Result<()> {
    if !subject.has_name() && subject.birth_date.is_none() {
        return Err(NumerologyError::InputError {
            message: format!("{} needs a name or a birth date", field_name),
        });
    }

    if let Some(date) = subject.birth_date {
        validate_range(
            &format!("{}.birth_date", field_name),
            date.year(),
            MIN_BIRTH_YEAR,
            MAX_BIRTH_YEAR,
        )?;
    }
    Ok(())
}
