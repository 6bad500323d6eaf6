use crate::domain::model::{Calculation, Operator, Outcome};
use crate::domain::ports::TokenSource;
use crate::utils::error::{CalcError, Result};
use std::io::Write;

pub const WELCOME_BANNER: &str = "Welcome to the simple calculator!";
pub const FIRST_OPERAND_PROMPT: &str = "Enter the first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter the second number: ";
pub const OPERATOR_PROMPT: &str = "Choose an operation (+, -, *, /): ";
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: the divisor cannot be zero.";
pub const INVALID_OPERATOR_MESSAGE: &str = "Invalid operator, please enter +, -, *, or /.";

/// One prompt, compute and print dialogue over a token source and a writer.
pub struct CalculatorSession<S: TokenSource, W: Write> {
    input: S,
    output: W,
    precision: usize,
}

impl<S: TokenSource, W: Write> CalculatorSession<S, W> {
    pub fn new(input: S, output: W, precision: usize) -> Self {
        Self {
            input,
            output,
            precision,
        }
    }

    /// Runs the dialogue to completion. The session, and with it the input,
    /// is consumed on every path, including errors.
    pub fn run(mut self) -> Result<Outcome> {
        writeln!(self.output, "{WELCOME_BANNER}")?;

        let (lhs, rhs) = self.prompt_operands()?;
        tracing::debug!(lhs, rhs, "operands read");

        let token = self.prompt_operator()?;
        tracing::debug!(%token, "operator read");

        let outcome = self.compute_and_print(lhs, rhs, token)?;
        tracing::debug!(?outcome, "session finished");
        Ok(outcome)
    }

    fn prompt_operands(&mut self) -> Result<(f64, f64)> {
        self.prompt(FIRST_OPERAND_PROMPT)?;
        let lhs = self.input.next_number("first operand")?;

        self.prompt(SECOND_OPERAND_PROMPT)?;
        let rhs = self.input.next_number("second operand")?;

        Ok((lhs, rhs))
    }

    fn prompt_operator(&mut self) -> Result<String> {
        writeln!(self.output, "{OPERATOR_PROMPT}")?;
        self.input
            .next_token()?
            .ok_or_else(|| CalcError::UnexpectedEndOfInput {
                what: "operator".to_string(),
            })
    }

    fn compute_and_print(&mut self, lhs: f64, rhs: f64, token: String) -> Result<Outcome> {
        let Some(operator) = Operator::from_token(&token) else {
            tracing::info!(%token, "unrecognized operator");
            writeln!(self.output, "{INVALID_OPERATOR_MESSAGE}")?;
            return Ok(Outcome::InvalidOperator { token });
        };

        let calculation = Calculation::new(lhs, rhs, operator);
        match calculation.evaluate() {
            Ok(result) => {
                writeln!(self.output, "{}", calculation.render(result, self.precision))?;
                Ok(Outcome::Computed {
                    calculation,
                    result,
                })
            }
            Err(CalcError::DivisionByZero) => {
                tracing::info!(lhs, "division by zero rejected");
                writeln!(self.output, "{DIVISION_BY_ZERO_MESSAGE}")?;
                Ok(Outcome::DivisionByZero { calculation })
            }
            Err(e) => Err(e),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
