//! Mattermost REST API (v4) client.
//!
//! Implements user/channel lookup and post delivery with the bot account's
//! personal access token.
//! Docs: <https://api.mattermost.com>

mod api;
pub(crate) mod types;


use jitsi_core::config::MattermostConfig;

/// Mattermost client authenticated as the bot account.
pub struct MattermostClient {
    config: MattermostConfig,
    client: reqwest::Client,
    base_url: String,
}

impl MattermostClient {
    /// Create a new client from config.
    pub fn new(config: MattermostConfig) -> Self {
        let base_url = format!("{}/api/v4", config.url.trim_end_matches('/'));
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// User id of the bot account.
    pub fn bot_user_id(&self) -> &str {
        &self.config.bot_user_id
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
