use crate::core::arithmetic;
use crate::utils::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// The four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Matches the token exactly; anything but `+ - * /` is unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        arithmetic::apply(self, lhs, rhs)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub rhs: f64,
    pub operator: Operator,
}

impl Calculation {
    pub fn new(lhs: f64, rhs: f64, operator: Operator) -> Self {
        Self { lhs, rhs, operator }
    }

    pub fn evaluate(&self) -> Result<f64> {
        self.operator.apply(self.lhs, self.rhs)
    }

    /// `<lhs> <op> <rhs> = <result>` with every number at `precision` decimals.
    pub fn render(&self, result: f64, precision: usize) -> String {
        format!(
            "{} {} {} = {}",
            format_fixed(self.lhs, precision),
            self.operator,
            format_fixed(self.rhs, precision),
            format_fixed(result, precision)
        )
    }
}

/// Rounds the shortest decimal form of `value` half away from zero, so
/// `1.005` prints as `1.01` at two places. Values outside the `Decimal`
/// range keep the plain `{:.N}` rendering.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let rounded = Decimal::from_str(&value.to_string()).ok().and_then(|d| {
        let dp = u32::try_from(precision).ok()?;
        Some(d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    });

    match rounded {
        Some(d) => format!("{:.*}", precision, d),
        None => format!("{:.*}", precision, value),
    }
}

/// What a single session produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Computed { calculation: Calculation, result: f64 },
    DivisionByZero { calculation: Calculation },
    InvalidOperator { token: String },
}
