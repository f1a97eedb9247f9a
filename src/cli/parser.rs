//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Send notifications through LINE Notify
#[derive(Parser, Debug)]
#[command(name = "notify-line")]
#[command(about = "Send notifications through LINE Notify")]
#[command(long_about = "
notify-line posts a message to the LINE Notify API, optionally with an image
(public URL or local file) and a sticker.

EXAMPLES:
    # Send a text message
    notify-line send \"Backup finished\"

    # Attach a public image
    notify-line send \"Front door\" --url https://cam.example/door.jpg

    # Upload a local image
    notify-line send \"Chart\" --file ./chart.png

    # Send a sticker without text
    notify-line send --sticker-package-id 446 --sticker-id 1988

    # Pass options as JSON
    notify-line send \"Deploy done\" --data '{\"stkpkgid\": 1, \"stkid\": 2}'

    # Validate configuration without sending anything
    notify-line --config /etc/notify-line/production.toml check

The access token is read from --access-token, LINE_NOTIFY_ACCESS_TOKEN,
LINE_NOTIFY_LINE__ACCESS_TOKEN, or line.access_token in the configuration.
")]
#[command(version = crate::clap_long_version())]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Read this TOML file instead of the layered files in the configuration
    /// directory. Environment variables still apply on top of it.
    ///
    /// Example: --config /etc/notify-line/production.toml
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// LINE Notify access token
    ///
    /// Overrides the token from configuration files and
    /// LINE_NOTIFY_LINE__ACCESS_TOKEN.
    #[arg(long, value_name = "TOKEN", env = "LINE_NOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one notification
    ///
    /// Exits with a non-zero status when the image file cannot be read, when
    /// LINE cannot be reached, or when LINE rejects the request.
    ///
    /// Examples:
    ///   notify-line send "hello"
    ///   notify-line send "look" --url https://img.example/a.png
    ///   notify-line send --sticker-package-id 1 --sticker-id 2
    Send {
        /// Message text (may be empty when sending a sticker or image)
        #[arg(value_name = "MESSAGE", default_value = "")]
        message: String,

        /// Public image URL, used for both the full-size image and the thumbnail
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Local image file to upload
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Sticker package id
        #[arg(long, value_name = "ID")]
        sticker_package_id: Option<String>,

        /// Sticker id
        #[arg(long, value_name = "ID")]
        sticker_id: Option<String>,

        /// Options as a JSON object with keys url, file, stkpkgid, stkid
        ///
        /// Explicit flags take precedence over keys given here.
        #[arg(long, value_name = "JSON", value_parser = super::validation::validate_json_data)]
        data: Option<serde_json::Value>,
    },
    /// Validate configuration and exit
    ///
    /// Loads and validates the configuration and reports whether an access
    /// token is available. Nothing is sent. Returns a non-zero status when
    /// the configuration is unusable for sending.
    Check,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(token) = &self.access_token
            && token.trim().is_empty()
        {
            return Err("--access-token cannot be empty".to_string());
        }

        Ok(())
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["notify-line", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["notify-line", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["notify-line"]).is_err());
    }

    #[test]
    fn test_send_message_only() {
        let cli = Cli::try_parse_from(["notify-line", "send", "hello"]).unwrap();
        match cli.command {
            Commands::Send {
                message,
                url,
                file,
                sticker_package_id,
                sticker_id,
                data,
            } => {
                assert_eq!(message, "hello");
                assert!(url.is_none());
                assert!(file.is_none());
                assert!(sticker_package_id.is_none());
                assert!(sticker_id.is_none());
                assert!(data.is_none());
            }
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn test_send_defaults_to_empty_message() {
        let cli = Cli::try_parse_from([
            "notify-line",
            "send",
            "--sticker-package-id",
            "446",
            "--sticker-id",
            "1988",
        ])
        .unwrap();
        match cli.command {
            Commands::Send {
                message,
                sticker_package_id,
                sticker_id,
                ..
            } => {
                assert_eq!(message, "");
                assert_eq!(sticker_package_id.as_deref(), Some("446"));
                assert_eq!(sticker_id.as_deref(), Some("1988"));
            }
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn test_send_with_file_and_data() {
        let cli = Cli::try_parse_from([
            "notify-line",
            "send",
            "pic",
            "--file",
            "chart.png",
            "--data",
            r#"{"stkid": 2}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Send { file, data, .. } => {
                assert_eq!(file, Some(PathBuf::from("chart.png")));
                assert_eq!(data, Some(serde_json::json!({"stkid": 2})));
            }
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn test_send_passes_ids_and_urls_verbatim() {
        let cli = Cli::try_parse_from([
            "notify-line",
            "send",
            "--url",
            "ftp://x/a.png",
            "--sticker-id",
            " abc ",
        ])
        .unwrap();
        match cli.command {
            Commands::Send { url, sticker_id, .. } => {
                assert_eq!(url.as_deref(), Some("ftp://x/a.png"));
                assert_eq!(sticker_id.as_deref(), Some(" abc "));
            }
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn test_send_rejects_non_object_data() {
        assert!(Cli::try_parse_from(["notify-line", "send", "--data", "[1]"]).is_err());
        assert!(Cli::try_parse_from(["notify-line", "send", "--data", "{oops"]).is_err());
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::try_parse_from(["notify-line", "--env", "prod", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert!(matches!(cli.env, Some(Environment::Production)));
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["notify-line", "--verbose", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err =
            Cli::try_parse_from(["notify-line", "--verbose", "--quiet", "check"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_access_token_flag() {
        let cli = Cli::try_parse_from(["notify-line", "--access-token", "abc", "check"]).unwrap();
        assert_eq!(cli.access_token.as_deref(), Some("abc"));
        assert!(cli.validate().is_ok());

        let cli = Cli::try_parse_from(["notify-line", "--access-token", " ", "check"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_environment_conversion() {
        let env: crate::config::Environment = Environment::Staging.into();
        assert_eq!(env, crate::config::Environment::Staging);
    }
}
