//! Mattermost API request and error types.

use jitsi_core::message::Post;
use serde::{Deserialize, Serialize};

/// Body of `POST /posts/ephemeral`.
#[derive(Debug, Serialize)]
pub(crate) struct EphemeralRequest<'a> {
    pub user_id: &'a str,
    pub post: &'a Post,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MmError {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
}

impl MmError {
    /// Best-effort parse of an error body.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: body.to_string(),
            ..Default::default()
        })
    }

    pub fn describe(&self) -> String {
        if self.id.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, self.id)
        }
    }
}
