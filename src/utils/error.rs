use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number for {what}: {input:?}")]
    InvalidNumber { what: String, input: String },

    #[error("Input ended before {what} was read")]
    UnexpectedEndOfInput { what: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::DivisionByZero => ErrorSeverity::Low,
            CalcError::UnexpectedEndOfInput { .. } => ErrorSeverity::Medium,
            CalcError::InvalidNumber { .. }
            | CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CalcError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for an error that reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::DivisionByZero => "The divisor cannot be zero.".to_string(),
            CalcError::InvalidNumber { what, input } => {
                format!("{input:?} is not a valid number for the {what}.")
            }
            CalcError::UnexpectedEndOfInput { what } => {
                format!("No input was given for the {what}.")
            }
            CalcError::IoError(e) => format!("Could not read from or write to the console: {e}"),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "Use a non-zero divisor.",
            CalcError::InvalidNumber { .. } => "Enter a decimal number such as 42 or 7.5.",
            CalcError::UnexpectedEndOfInput { .. } => {
                "Provide two numbers and an operator on standard input."
            }
            CalcError::IoError(_) => "Check that standard input and output are available.",
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(CalcError::DivisionByZero.exit_code(), 0);
        assert_eq!(
            CalcError::UnexpectedEndOfInput {
                what: "first operand".to_string()
            }
            .exit_code(),
            2
        );
        assert_eq!(
            CalcError::InvalidNumber {
                what: "first operand".to_string(),
                input: "abc".to_string()
            }
            .exit_code(),
            1
        );
        let io = CalcError::from(std::io::Error::other("closed"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_names_the_input() {
        let err = CalcError::InvalidNumber {
            what: "second operand".to_string(),
            input: "x1".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("\"x1\""));
        assert!(message.contains("second operand"));
    }
}
