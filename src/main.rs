use clap::Parser;
use simple_calc::core::ConfigProvider;
use simple_calc::utils::{logger, validation::Validate};
use simple_calc::{
    CalcError, CalculatorSession, CliConfig, Outcome, Settings, TokenReader, TomlConfig,
};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    tracing::debug!(?cli, ?settings, "starting simple-calc");

    if let Err(e) = run(&settings) {
        tracing::error!("Calculation aborted: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_settings(cli: &CliConfig) -> Result<Settings, CalcError> {
    let file = cli.config.as_ref().map(TomlConfig::from_file).transpose()?;
    if let Some(file) = &file {
        file.validate()?;
    }

    let mut layers: Vec<&dyn ConfigProvider> = vec![cli];
    if let Some(file) = &file {
        layers.push(file);
    }

    let settings = Settings::resolve(&layers);
    settings.validate()?;
    Ok(settings)
}

fn run(settings: &Settings) -> Result<Outcome, CalcError> {
    // The locked stdin lives inside the session and is released when `run`
    // returns, whichever way it returns.
    let input = TokenReader::new(io::stdin().lock());
    let output = io::stdout().lock();

    CalculatorSession::new(input, output, settings.precision).run()
}
