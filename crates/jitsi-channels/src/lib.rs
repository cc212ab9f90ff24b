//! # jitsi-channels
//!
//! Chat platform integrations for jitsi-slash.

pub mod mattermost;
