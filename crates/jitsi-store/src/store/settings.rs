//! Per-user settings records, stored as JSON under `config_<user_id>`.

use super::Store;
use async_trait::async_trait;
use jitsi_core::{error::JitsiError, settings::UserSettings, traits::SettingsStore};
use tracing::debug;

const KEY_PREFIX: &str = "config_";

/// Settings store with a configured default record for unknown users.
#[derive(Clone)]
pub struct UserSettingsStore {
    store: Store,
    defaults: UserSettings,
}

impl UserSettingsStore {
    pub fn new(store: Store, defaults: UserSettings) -> Self {
        Self { store, defaults }
    }

    fn key(user_id: &str) -> String {
        format!("{KEY_PREFIX}{user_id}")
    }
}

#[async_trait]
impl SettingsStore for UserSettingsStore {
    async fn get(&self, user_id: &str) -> Result<UserSettings, JitsiError> {
        match self.store.get_value(&Self::key(user_id)).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                debug!("no stored settings for {user_id}, using defaults");
                Ok(self.defaults)
            }
        }
    }

    async fn set(&self, user_id: &str, settings: &UserSettings) -> Result<(), JitsiError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set_value(&Self::key(user_id), &raw).await
    }
}
