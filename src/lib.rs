pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::console::TokenReader;
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::session::CalculatorSession;
pub use domain::model::{Calculation, Operator, Outcome};
pub use utils::error::{CalcError, Result};
