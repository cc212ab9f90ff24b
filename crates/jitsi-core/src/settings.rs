//! Per-user meeting settings and the field-level validator.
//!
//! Updates are expressed as a [`SettingUpdate`] that is either parsed
//! successfully or rejected with a [`Rejection`]. Only a parsed update can be
//! applied, so a rejected value never reaches the settings store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::MessageKey;

const VALUE_TRUE: &str = "true";
const VALUE_FALSE: &str = "false";

/// How a new meeting's room name is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// Random English words in title case.
    #[default]
    Words,
    /// A universally unique identifier.
    Uuid,
    /// Team, channel and random text, or a personal name in direct messages.
    Mattermost,
    /// Prompt the user every time a meeting is started without a topic.
    Ask,
}

impl NamingScheme {
    pub const ALL: [NamingScheme; 4] = [Self::Words, Self::Uuid, Self::Mattermost, Self::Ask];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Uuid => "uuid",
            Self::Mattermost => "mattermost",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a token that is not one of the four naming schemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming scheme: {0}")]
pub struct UnknownNamingScheme(pub String);

impl FromStr for NamingScheme {
    type Err = UnknownNamingScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(Self::Words),
            "uuid" => Ok(Self::Uuid),
            "mattermost" => Ok(Self::Mattermost),
            "ask" => Ok(Self::Ask),
            other => Err(UnknownNamingScheme(other.to_string())),
        }
    }
}

/// The settings record stored for every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Render meetings inside the chat client instead of a separate window.
    pub embedded: bool,
    /// Show the pre-join lobby when the meeting is embedded.
    pub show_prejoin_page: bool,
    pub naming_scheme: NamingScheme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            embedded: false,
            show_prejoin_page: true,
            naming_scheme: NamingScheme::Words,
        }
    }
}

impl UserSettings {
    /// Return a copy of these settings with a single field replaced.
    #[must_use]
    pub fn apply(&self, update: SettingUpdate) -> Self {
        let mut next = *self;
        match update {
            SettingUpdate::Embedded(v) => next.embedded = v,
            SettingUpdate::ShowPrejoinPage(v) => next.show_prejoin_page = v,
            SettingUpdate::NamingScheme(v) => next.naming_scheme = v,
        }
        next
    }
}

/// User-editable fields, named by their command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Embedded,
    ShowPrejoinPage,
    NamingScheme,
}

impl SettingField {
    /// Look up a field by its exact command token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "embedded" => Some(Self::Embedded),
            "show_prejoin_page" => Some(Self::ShowPrejoinPage),
            "naming_scheme" => Some(Self::NamingScheme),
            _ => None,
        }
    }
}

/// A validated change to exactly one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingUpdate {
    Embedded(bool),
    ShowPrejoinPage(bool),
    NamingScheme(NamingScheme),
}

impl SettingUpdate {
    /// Parse a `(field, value)` pair typed by the user.
    pub fn parse(field: &str, value: &str) -> Result<Self, Rejection> {
        match SettingField::parse(field) {
            Some(SettingField::Embedded) => parse_bool(value)
                .map(Self::Embedded)
                .ok_or(Rejection::InvalidEmbeddedValue),
            Some(SettingField::ShowPrejoinPage) => parse_bool(value)
                .map(Self::ShowPrejoinPage)
                .ok_or(Rejection::InvalidShowPrejoinValue),
            Some(SettingField::NamingScheme) => value
                .parse::<NamingScheme>()
                .map(Self::NamingScheme)
                .map_err(|_| Rejection::InvalidNamingSchemeValue),
            None => Err(Rejection::InvalidFieldName),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        VALUE_TRUE => Some(true),
        VALUE_FALSE => Some(false),
        _ => None,
    }
}

/// Validate a `(field, value)` pair against `current` and return the
/// resulting record. `current` itself is never modified.
pub fn validate(field: &str, value: &str, current: &UserSettings) -> Result<UserSettings, Rejection> {
    SettingUpdate::parse(field, value).map(|update| current.apply(update))
}

/// Why a settings command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("invalid config field")]
    InvalidFieldName,
    #[error("invalid embedded value")]
    InvalidEmbeddedValue,
    #[error("invalid naming_scheme value")]
    InvalidNamingSchemeValue,
    #[error("invalid show_prejoin_page value")]
    InvalidShowPrejoinValue,
    #[error("invalid settings parameters")]
    WrongParameterCount,
}

impl Rejection {
    /// Stable kebab-case identifier of the rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFieldName => "invalid-field-name",
            Self::InvalidEmbeddedValue => "invalid-embedded-value",
            Self::InvalidNamingSchemeValue => "invalid-naming-scheme-value",
            Self::InvalidShowPrejoinValue => "invalid-show-prejoin-value",
            Self::WrongParameterCount => "wrong-parameter-count",
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::InvalidFieldName => MessageKey::SettingsWrongField,
            Self::InvalidEmbeddedValue => MessageKey::SettingsWrongEmbeddedValue,
            Self::InvalidNamingSchemeValue => MessageKey::SettingsWrongNamingSchemeValue,
            Self::InvalidShowPrejoinValue => MessageKey::SettingsWrongShowPrejoinPageValue,
            Self::WrongParameterCount => MessageKey::SettingsInvalidParameters,
        }
    }
}
