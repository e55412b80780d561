use crate::utils::error::{PatternError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn device_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").expect("device code pattern is valid"))
}

pub fn is_device_code(value: &str) -> bool {
    device_code_pattern().is_match(value)
}

pub fn validate_device_code(field_name: &str, value: &str) -> Result<()> {
    if !is_device_code(value) {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be exactly four digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatternError::InvalidConfigValueError {
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
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_device_code() {
        assert!(validate_device_code("command.device_code", "1234").is_ok());
        assert!(validate_device_code("command.device_code", "0000").is_ok());
        assert!(validate_device_code("command.device_code", "123").is_err());
        assert!(validate_device_code("command.device_code", "12345").is_err());
        assert!(validate_device_code("command.device_code", "12a4").is_err());
        assert!(validate_device_code("command.device_code", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("facade.item", "printer").is_ok());
        assert!(validate_non_empty_string("facade.item", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("state.gumballs", 5u32, 0, 10_000).is_ok());
        assert!(validate_range("state.gumballs", 10_001u32, 0, 10_000).is_err());
    }
}
