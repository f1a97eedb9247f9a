//! notify-line library
//!
//! Sends notifications through the LINE Notify API. The async
//! [`services::notifications::LineNotifyProvider`] does the work; the CLI,
//! configuration and logging modules wrap it for command-line use.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod services;

pub use services::notifications::{
    LineNotifyProvider, NotificationProvider, NotificationResult, SendOptions,
};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
