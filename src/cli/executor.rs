//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::send::SendArgs;
use super::handlers::{CheckCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use std::process::ExitCode;

/// Execute a CLI command with the given settings
///
/// # Returns
/// `ExitCode::SUCCESS` when the command did what was asked. A notification
/// rejected by LINE yields `ExitCode::FAILURE` without an error value, since
/// the rejection has already been logged.
///
/// # Errors
/// Validation, configuration, I/O and transport errors
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<ExitCode> {
    validate_command_args(cli)?;

    match &cli.command {
        Commands::Send {
            message,
            url,
            file,
            sticker_package_id,
            sticker_id,
            data,
        } => {
            let args = SendArgs {
                url: url.clone(),
                file: file.clone(),
                sticker_package_id: sticker_package_id.clone(),
                sticker_id: sticker_id.clone(),
                data: data.clone(),
            };

            let result = SendCommandHandler::new(&settings)?
                .execute(message, args)
                .await?;

            Ok(if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Check => {
            CheckCommandHandler::new(settings).execute()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })
}
