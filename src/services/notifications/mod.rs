//! Notification system with pluggable providers.
//!
//! The core trait `NotificationProvider` abstracts over notification
//! backends. LINE Notify is the one implemented here.

mod line_notify;
mod options;
mod provider;

pub mod notification_service;

pub use line_notify::{LINE_NOTIFY_ENDPOINT, LineNotifyProvider};
pub use notification_service::{NotificationService, create_provider};
pub use options::{SendOptions, fields, text_fields};
pub use provider::{NotificationProvider, NotificationResult};
