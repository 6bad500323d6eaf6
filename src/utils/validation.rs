use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
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
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !allowed.contains(&value.to_ascii_lowercase().as_str()) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.precision", 2usize, 0, 12).is_ok());
        assert!(validate_range("output.precision", 0usize, 0, 12).is_ok());
        assert!(validate_range("output.precision", 13usize, 0, 12).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["trace", "debug", "info"];
        assert!(validate_one_of("logging.level", "debug", &levels).is_ok());
        assert!(validate_one_of("logging.level", "INFO", &levels).is_ok());
        assert!(validate_one_of("logging.level", "loud", &levels).is_err());
        assert!(validate_one_of("logging.level", "  ", &levels).is_err());
    }
}
