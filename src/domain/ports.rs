use crate::utils::error::{CalcError, Result};

/// Whitespace-delimited token input.
pub trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>>;

    /// Next token as a finite number. `inf`, `NaN` and overflowing literals
    /// are rejected like any other malformed input.
    fn next_number(&mut self, what: &str) -> Result<f64> {
        let token = self
            .next_token()?
            .ok_or_else(|| CalcError::UnexpectedEndOfInput {
                what: what.to_string(),
            })?;

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::InvalidNumber {
                what: what.to_string(),
                input: token,
            }),
        }
    }
}

/// One layer of configuration. `None` means "not set here".
pub trait ConfigProvider {
    fn precision(&self) -> Option<usize>;
    fn log_level(&self) -> Option<&str>;
}
