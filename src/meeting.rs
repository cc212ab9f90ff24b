//! Meeting-start delegate: announces a Jitsi room in the invoking channel.
//!
//! Room naming beyond an explicit name or a random UUID belongs to the video
//! bridge integration and is not done here.

use crate::i18n;
use async_trait::async_trait;
use chrono::Utc;
use jitsi_core::{
    error::JitsiError,
    message::{Channel, Meeting, MessageKey, Post, User},
    traits::{Localizer, MeetingStarter, Poster},
};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Post type rendered as a meeting card by the webapp.
pub const MEETING_POST_TYPE: &str = "custom_jitsi";

/// Starts meetings by posting their link to the channel.
pub struct JitsiMeetings {
    poster: Arc<dyn Poster>,
    localizer: Arc<dyn Localizer>,
    bot_id: String,
    trigger: String,
    server_url: String,
}

impl JitsiMeetings {
    pub fn new(
        poster: Arc<dyn Poster>,
        localizer: Arc<dyn Localizer>,
        bot_id: impl Into<String>,
        trigger: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            poster,
            localizer,
            bot_id: bot_id.into(),
            trigger: trigger.into(),
            server_url: server_url.into(),
        }
    }

    fn meeting_url(&self, room: &str) -> String {
        format!("{}/{room}", self.server_url.trim_end_matches('/'))
    }
}

fn meeting_props(meeting: &Meeting, creator: &User) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("meeting_id".into(), json!(meeting.id));
    props.insert("meeting_link".into(), json!(meeting.url));
    props.insert("meeting_topic".into(), json!(meeting.topic));
    props.insert("meeting_personal".into(), json!(false));
    props.insert("meeting_creator_username".into(), json!(creator.username));
    props
}

#[async_trait]
impl MeetingStarter for JitsiMeetings {
    /// `force_prompt` is ignored: this starter never defers to a prompt once
    /// asked to start.
    async fn start_meeting(
        &self,
        user: &User,
        channel: &Channel,
        explicit_name: &str,
        topic: &str,
        _force_prompt: bool,
        root_id: &str,
    ) -> Result<Meeting, JitsiError> {
        let room = if explicit_name.is_empty() {
            Uuid::new_v4().simple().to_string()
        } else {
            explicit_name.to_string()
        };
        let meeting = Meeting {
            url: self.meeting_url(&room),
            topic: if topic.is_empty() {
                room.clone()
            } else {
                topic.to_string()
            },
            id: room,
            created_at: Utc::now(),
        };

        let message = self
            .localizer
            .localize(
                &user.id,
                MessageKey::MeetingStarted,
                &i18n::data([
                    ("topic", meeting.topic.clone()),
                    ("url", meeting.url.clone()),
                ]),
            )
            .await;
        let post = Post {
            user_id: self.bot_id.clone(),
            channel_id: channel.id.clone(),
            root_id: root_id.to_string(),
            message,
            post_type: MEETING_POST_TYPE.to_string(),
            props: meeting_props(&meeting, user),
            ..Default::default()
        };
        self.poster
            .create_post(post)
            .await
            .map_err(|e| JitsiError::Meeting(format!("failed to post meeting: {e}")))?;

        info!("meeting {} started by {} in {}", meeting.id, user.id, channel.id);
        Ok(meeting)
    }

    async fn ask_meeting_type(
        &self,
        user: &User,
        channel: &Channel,
        root_id: &str,
    ) -> Result<(), JitsiError> {
        let message = self
            .localizer
            .localize(
                &user.id,
                MessageKey::AskMeetingName,
                &i18n::data([("trigger", self.trigger.clone())]),
            )
            .await;
        let post = Post {
            user_id: self.bot_id.clone(),
            channel_id: channel.id.clone(),
            root_id: root_id.to_string(),
            message,
            ..Default::default()
        };
        self.poster.send_ephemeral(&user.id, post).await
    }
}
