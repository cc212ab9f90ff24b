use serde::{Deserialize, Serialize};

/// Mattermost server connection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MattermostConfig {
    /// Base URL of the server (e.g. `https://chat.example.com`).
    #[serde(default)]
    pub url: String,
    /// Personal access token of the bot account.
    #[serde(default)]
    pub bot_token: String,
    /// User id of the bot account; authors every post.
    #[serde(default)]
    pub bot_user_id: String,
}

impl MattermostConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.bot_token.is_empty()
    }
}
