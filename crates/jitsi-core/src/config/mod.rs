mod channels;
mod defaults;

#[cfg(test)]
mod tests;

pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::JitsiError;
use crate::settings::{NamingScheme, UserSettings};
use defaults::*;

/// Environment variable consulted when `mattermost.bot_token` is empty.
pub const BOT_TOKEN_ENV: &str = "JITSI_MATTERMOST_TOKEN";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jitsi: GeneralConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub mattermost: MattermostConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub meeting: MeetingConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Slash-command registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Trigger word without the leading slash.
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
        }
    }
}

/// HTTP endpoint receiving slash commands from the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    /// Slash-command verification token. Empty = no check (local use only).
    #[serde(default)]
    pub token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
            token: String::new(),
        }
    }
}

/// Settings store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_backend")]
    pub backend: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            db_path: default_db_path(),
        }
    }
}

/// Settings reported for users who never saved their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub embedded: bool,
    #[serde(default = "default_true")]
    pub show_prejoin_page: bool,
    #[serde(default = "default_naming_scheme")]
    pub naming_scheme: NamingScheme,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            embedded: false,
            show_prejoin_page: default_true(),
            naming_scheme: default_naming_scheme(),
        }
    }
}

impl DefaultsConfig {
    pub fn user_settings(&self) -> UserSettings {
        UserSettings {
            embedded: self.embedded,
            show_prejoin_page: self.show_prejoin_page,
            naming_scheme: self.naming_scheme,
        }
    }
}

/// Video bridge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale used when the user's own locale is unknown.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, JitsiError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JitsiError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        parse(&content)?
    } else {
        Config::default()
    };

    if config.mattermost.bot_token.is_empty() {
        if let Ok(token) = std::env::var(BOT_TOKEN_ENV) {
            config.mattermost.bot_token = token;
        }
    }

    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, JitsiError> {
    toml::from_str(content).map_err(|e| JitsiError::Config(format!("failed to parse config: {e}")))
}
