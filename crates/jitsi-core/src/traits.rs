use crate::{
    error::JitsiError,
    message::{Channel, Meeting, MessageKey, Post, TemplateData, User},
    settings::UserSettings,
};
use async_trait::async_trait;

/// User and channel lookup on the chat platform.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<User, JitsiError>;

    async fn get_channel(&self, channel_id: &str) -> Result<Channel, JitsiError>;
}

/// Outgoing messages to the chat platform.
#[async_trait]
pub trait Poster: Send + Sync {
    /// Deliver a post visible only to `user_id`.
    async fn send_ephemeral(&self, user_id: &str, post: Post) -> Result<(), JitsiError>;

    /// Create a regular post in a channel and return it as stored.
    async fn create_post(&self, post: Post) -> Result<Post, JitsiError>;
}

/// Per-user settings persistence.
///
/// `get` must synthesize the default record when the user has none stored.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<UserSettings, JitsiError>;

    async fn set(&self, user_id: &str, settings: &UserSettings) -> Result<(), JitsiError>;
}

/// Produces every user-visible string, in the invoking user's language.
#[async_trait]
pub trait Localizer: Send + Sync {
    async fn localize(&self, user_id: &str, key: MessageKey, data: &TemplateData) -> String;
}

/// The meeting-creation subsystem.
#[async_trait]
pub trait MeetingStarter: Send + Sync {
    /// Start a meeting in `channel` right away.
    async fn start_meeting(
        &self,
        user: &User,
        channel: &Channel,
        explicit_name: &str,
        topic: &str,
        force_prompt: bool,
        root_id: &str,
    ) -> Result<Meeting, JitsiError>;

    /// Ask the user interactively how the meeting should be named.
    async fn ask_meeting_type(
        &self,
        user: &User,
        channel: &Channel,
        root_id: &str,
    ) -> Result<(), JitsiError>;
}
