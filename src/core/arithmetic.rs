use crate::domain::model::Operator;
use crate::utils::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails with `DivisionByZero` for either signed zero.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn apply(operator: Operator, a: f64, b: f64) -> Result<f64> {
    match operator {
        Operator::Add => Ok(add(a, b)),
        Operator::Subtract => Ok(subtract(a, b)),
        Operator::Multiply => Ok(multiply(a, b)),
        Operator::Divide => divide(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [(f64, f64); 6] = [
        (6.0, 3.0),
        (7.5, 2.5),
        (-4.25, 0.5),
        (1e300, 1e-300),
        (0.1, 0.2),
        (-0.0, 8.0),
    ];

    #[test]
    fn test_operations_match_ieee_arithmetic() {
        for (a, b) in SAMPLES {
            assert_eq!(add(a, b), a + b);
            assert_eq!(subtract(a, b), a - b);
            assert_eq!(multiply(a, b), a * b);
            assert_eq!(divide(a, b).unwrap(), a / b);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(10.0, 0.0), Err(CalcError::DivisionByZero)));
        assert!(matches!(divide(10.0, -0.0), Err(CalcError::DivisionByZero)));
        assert!(matches!(divide(0.0, 0.0), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_operations_are_idempotent() {
        for (a, b) in SAMPLES {
            for op in Operator::ALL {
                let first = apply(op, a, b).unwrap();
                let second = apply(op, a, b).unwrap();
                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }

    #[test]
    fn test_apply_dispatches() {
        assert_eq!(apply(Operator::Add, 6.0, 3.0).unwrap(), 9.0);
        assert_eq!(apply(Operator::Subtract, 6.0, 3.0).unwrap(), 3.0);
        assert_eq!(apply(Operator::Multiply, 6.0, 3.0).unwrap(), 18.0);
        assert_eq!(apply(Operator::Divide, 6.0, 3.0).unwrap(), 2.0);
        assert!(apply(Operator::Divide, 6.0, 0.0).is_err());
    }
}
