use thiserror::Error;

use crate::message::MessageKey;
use crate::settings::Rejection;

/// Failure reported by one of the external collaborators.
#[derive(Debug, Error)]
pub enum JitsiError {
    /// User or channel lookup failed.
    #[error("directory error: {0}")]
    Directory(String),

    /// Posting to the chat platform failed.
    #[error("channel error: {0}")]
    Channel(String),

    /// Settings persistence failed.
    #[error("store error: {0}")]
    Store(String),

    /// The meeting-start subsystem failed.
    #[error("meeting error: {0}")]
    Meeting(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Terminal outcome of a failed command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("lookup failed: {0}")]
    Lookup(#[source] JitsiError),

    #[error("unable to get user settings: {0}")]
    SettingsLoad(#[source] JitsiError),

    #[error("unable to set user settings: {0}")]
    SettingsSave(#[source] JitsiError),

    #[error("validation failed: {0}")]
    Validation(#[from] Rejection),

    #[error("meeting start failed: {0}")]
    MeetingStart(#[source] JitsiError),
}

impl CommandError {
    /// The localized message shown to the invoking user.
    ///
    /// Lookup and meeting-start failures share one generic message; the
    /// underlying cause is only logged.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::Lookup(_) | Self::MeetingStart(_) => MessageKey::StartFailed,
            Self::SettingsLoad(_) => MessageKey::SettingsUnableToGet,
            Self::SettingsSave(_) => MessageKey::SettingsUnableToSet,
            Self::Validation(r) => r.message_key(),
        }
    }
}
