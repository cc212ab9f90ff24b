use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named values substituted into a localized message template.
pub type TemplateData = BTreeMap<String, String>;

/// A slash-command invocation as delivered by the chat platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandArgs {
    /// The full command line, including the leading trigger (e.g. `/jitsi settings see`).
    pub command: String,
    pub user_id: String,
    pub channel_id: String,
    /// Thread root the command was typed in. Empty outside threads.
    #[serde(default)]
    pub root_id: String,
}

/// How the platform should display a direct command response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
}

/// The value returned to the platform for every invocation.
///
/// The default value is an empty acknowledgment: user-visible output has
/// already been delivered as an ephemeral post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl CommandResponse {
    /// An ephemeral response rendered directly by the platform.
    pub fn ephemeral(channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::Ephemeral),
            channel_id: channel_id.into(),
            text: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.response_type.is_none() && self.text.is_empty()
    }
}

/// A chat post, either created in a channel or delivered ephemerally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Author of the post (the bot account).
    #[serde(default)]
    pub user_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub root_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub post_type: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// A chat user as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    /// Preferred locale code (e.g. `en`, `es`). Empty when unknown.
    #[serde(default)]
    pub locale: String,
}

/// A chat channel as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    /// `O` open, `P` private, `D` direct, `G` group.
    #[serde(default, rename = "type")]
    pub channel_type: String,
}

/// A meeting created by the meeting-start subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Room name on the video bridge.
    pub id: String,
    pub url: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
}

/// Every user-visible message, addressed by a stable catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    HelpTitle,
    HelpText,
    SettingsCurrentValues,
    SettingsUnableToGet,
    SettingsUnableToSet,
    SettingsInvalidParameters,
    SettingsWrongEmbeddedValue,
    SettingsWrongNamingSchemeValue,
    SettingsWrongShowPrejoinPageValue,
    SettingsWrongField,
    SettingsUpdated,
    StartFailed,
    AskMeetingName,
    MeetingStarted,
}

impl MessageKey {
    pub const ALL: [MessageKey; 14] = [
        Self::HelpTitle,
        Self::HelpText,
        Self::SettingsCurrentValues,
        Self::SettingsUnableToGet,
        Self::SettingsUnableToSet,
        Self::SettingsInvalidParameters,
        Self::SettingsWrongEmbeddedValue,
        Self::SettingsWrongNamingSchemeValue,
        Self::SettingsWrongShowPrejoinPageValue,
        Self::SettingsWrongField,
        Self::SettingsUpdated,
        Self::StartFailed,
        Self::AskMeetingName,
        Self::MeetingStarted,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::HelpTitle => "jitsi.command.help.title",
            Self::HelpText => "jitsi.command.help.text",
            Self::SettingsCurrentValues => "jitsi.command.settings.current_values",
            Self::SettingsUnableToGet => "jitsi.command.settings.unable_to_get",
            Self::SettingsUnableToSet => "jitsi.command.settings.unable_to_set",
            Self::SettingsInvalidParameters => "jitsi.command.settings.invalid_parameters",
            Self::SettingsWrongEmbeddedValue => "jitsi.command.settings.wrong_embedded_value",
            Self::SettingsWrongNamingSchemeValue => {
                "jitsi.command.settings.wrong_naming_scheme_value"
            }
            Self::SettingsWrongShowPrejoinPageValue => {
                "jitsi.command.settings.wrong_show_prejoin_page_value"
            }
            Self::SettingsWrongField => "jitsi.command.settings.wrong_field",
            Self::SettingsUpdated => "jitsi.command.settings.updated",
            Self::StartFailed => "jitsi.command.start.failed",
            Self::AskMeetingName => "jitsi.meeting.ask_name",
            Self::MeetingStarted => "jitsi.meeting.started",
        }
    }
}
