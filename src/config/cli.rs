use crate::core::ConfigProvider;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "simple-calc")]
#[command(about = "Reads two numbers and an operator from stdin and prints the result")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Decimal places in the result line [default: 2]")]
    pub precision: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn log_level(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let config = CliConfig::try_parse_from(["simple-calc"]).unwrap();
        assert!(config.config.is_none());
        assert!(config.precision.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_flags() {
        let config = CliConfig::try_parse_from([
            "simple-calc",
            "--config",
            "calc.toml",
            "--precision",
            "3",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.config, Some(PathBuf::from("calc.toml")));
        assert_eq!(ConfigProvider::precision(&config), Some(3));
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(CliConfig::try_parse_from(["simple-calc", "6"]).is_err());
    }
}
