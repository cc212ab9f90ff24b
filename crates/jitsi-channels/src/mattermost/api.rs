//! Directory lookups and post delivery.

use super::types::{EphemeralRequest, MmError};
use super::MattermostClient;
use async_trait::async_trait;
use jitsi_core::{
    error::JitsiError,
    message::{Channel, Post, User},
    traits::{Directory, Poster},
};
use serde::de::DeserializeOwned;
use tracing::debug;

impl MattermostClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, JitsiError> {
        let resp = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(&self.config.bot_token)
            .send()
            .await
            .map_err(|e| JitsiError::Directory(format!("mattermost GET {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(JitsiError::Directory(format!(
                "mattermost GET {path} failed ({status}): {}",
                MmError::from_body(&body).describe()
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| JitsiError::Directory(format!("mattermost GET {path}: bad body: {e}")))
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, JitsiError> {
        let resp = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(&self.config.bot_token)
            .json(body)
            .send()
            .await
            .map_err(|e| JitsiError::Channel(format!("mattermost POST {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(JitsiError::Channel(format!(
                "mattermost POST {path} failed ({status}): {}",
                MmError::from_body(&body).describe()
            )));
        }

        Ok(resp)
    }
}

#[async_trait]
impl Directory for MattermostClient {
    async fn get_user(&self, user_id: &str) -> Result<User, JitsiError> {
        self.get_json(&format!("users/{user_id}")).await
    }

    async fn get_channel(&self, channel_id: &str) -> Result<Channel, JitsiError> {
        self.get_json(&format!("channels/{channel_id}")).await
    }
}

#[async_trait]
impl Poster for MattermostClient {
    async fn send_ephemeral(&self, user_id: &str, post: Post) -> Result<(), JitsiError> {
        let body = EphemeralRequest {
            user_id,
            post: &post,
        };
        self.post_json("posts/ephemeral", &body).await?;
        debug!("ephemeral post delivered to {user_id} in {}", post.channel_id);
        Ok(())
    }

    async fn create_post(&self, post: Post) -> Result<Post, JitsiError> {
        let resp = self.post_json("posts", &post).await?;
        resp.json::<Post>()
            .await
            .map_err(|e| JitsiError::Channel(format!("mattermost POST posts: bad body: {e}")))
    }
}
