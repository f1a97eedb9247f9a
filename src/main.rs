use std::process::ExitCode;

use clap::Parser;
use notify_line::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli::load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli::init_logger_from_settings(&settings) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(
        application = %settings.application.name,
        version = %settings.application.version,
        "Starting"
    );

    match cli::execute_command(&cli, settings).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}
