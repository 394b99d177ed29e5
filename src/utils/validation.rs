use crate::utils::datetime::format_instant;
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDateTime;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects strftime patterns that cannot render a local date-time, so a bad
/// `--date-format` fails up front rather than mid-table.
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    format_instant(NaiveDateTime::default(), format).map_err(|_| {
        TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Not a strftime pattern for a local date-time".to_string(),
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "domains.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("display.date_format", "%Y-%m-%d").is_ok());
        assert!(validate_date_format("display.date_format", "%d/%m/%Y %H:%M").is_ok());
        assert!(validate_date_format("display.date_format", "   ").is_err());
        assert!(validate_date_format("display.date_format", "%Q").is_err());
    }

    #[test]
    fn test_offset_specifiers_are_rejected() {
        assert!(validate_date_format("--date-format", "%z").is_err());
        assert!(validate_date_format("--date-format", "%Y-%m-%d %Z").is_err());
        assert!(validate_date_format("--date-format", "%:z").is_err());
    }
}
