//! Slash-command dispatch: tokenize, route, and run `/jitsi` subcommands.

mod help;
mod settings;
mod start;

#[cfg(test)]
mod tests;

use jitsi_core::{
    message::{CommandArgs, CommandResponse, MessageKey, Post, TemplateData},
    traits::{Directory, Localizer, MeetingStarter, Poster, SettingsStore},
};
use std::sync::Arc;
use tracing::{info, warn};

const ACTION_HELP: &str = "help";
const ACTION_SETTINGS: &str = "settings";
const ACTION_START: &str = "start";

/// Collaborators shared by every command invocation.
#[derive(Clone)]
pub struct CommandContext {
    /// Author of every post sent on the user's behalf.
    pub bot_id: String,
    /// Trigger word without the leading slash.
    pub trigger: String,
    pub directory: Arc<dyn Directory>,
    pub poster: Arc<dyn Poster>,
    pub store: Arc<dyn SettingsStore>,
    pub localizer: Arc<dyn Localizer>,
    pub meetings: Arc<dyn MeetingStarter>,
}

impl CommandContext {
    pub(crate) async fn localize(&self, args: &CommandArgs, key: MessageKey, data: &TemplateData) -> String {
        self.localizer.localize(&args.user_id, key, data).await
    }

    /// Deliver `message` to the invoking user only. Failures are logged and
    /// never change the command outcome.
    pub(crate) async fn post_ephemeral(&self, args: &CommandArgs, message: String) {
        let post = Post {
            user_id: self.bot_id.clone(),
            channel_id: args.channel_id.clone(),
            root_id: args.root_id.clone(),
            message,
            ..Default::default()
        };
        if let Err(e) = self.poster.send_ephemeral(&args.user_id, post).await {
            warn!("ephemeral post to {} failed: {e}", args.user_id);
        }
    }
}

/// A command line split into trigger, action, and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub trigger: &'a str,
    /// Empty when the user typed only the trigger.
    pub action: &'a str,
    pub parameters: Vec<&'a str>,
}

impl<'a> ParsedCommand<'a> {
    /// Split on whitespace runs. Returns `None` for blank input.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let trigger = tokens.next()?;
        let action = tokens.next().unwrap_or("");
        Some(Self {
            trigger,
            action,
            parameters: tokens.collect(),
        })
    }
}

/// Where a command line is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Not addressed to this command; acknowledge silently.
    Ignore,
    Help,
    Settings(Vec<&'a str>),
    /// Start a meeting. Any unrecognized action becomes part of the topic.
    Start { topic: String },
}

/// Route a raw command line for the given trigger word.
pub fn route<'a>(text: &'a str, trigger: &str) -> Route<'a> {
    let Some(parsed) = ParsedCommand::parse(text) else {
        return Route::Ignore;
    };
    if parsed.trigger.strip_prefix('/') != Some(trigger) {
        return Route::Ignore;
    }
    match parsed.action {
        ACTION_HELP => Route::Help,
        ACTION_SETTINGS => Route::Settings(parsed.parameters),
        _ => Route::Start {
            topic: meeting_topic(text),
        },
    }
}

/// Topic text after the trigger and an optional `start` keyword, with the
/// user's inner spacing preserved.
fn meeting_topic(text: &str) -> String {
    let rest = strip_token(text.trim(), None);
    strip_token(rest, Some(ACTION_START)).to_string()
}

/// Drop the first whitespace-delimited token (only if it equals `expected`,
/// when given) and trim what follows.
fn strip_token<'a>(text: &'a str, expected: Option<&str>) -> &'a str {
    let (head, tail) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));
    match expected {
        Some(token) if head != token => text,
        _ => tail.trim(),
    }
}

/// Handle one slash-command invocation and return the platform response.
pub async fn execute(ctx: &CommandContext, args: &CommandArgs) -> CommandResponse {
    match route(&args.command, &ctx.trigger) {
        Route::Ignore => CommandResponse::default(),
        Route::Help => {
            info!("[{}] /{} help", args.user_id, ctx.trigger);
            help::execute(ctx, args).await
        }
        Route::Settings(parameters) => {
            info!(
                "[{}] /{} settings ({} params)",
                args.user_id,
                ctx.trigger,
                parameters.len()
            );
            settings::execute(ctx, args, &parameters).await
        }
        Route::Start { topic } => {
            info!("[{}] /{} start in {}", args.user_id, ctx.trigger, args.channel_id);
            start::execute(ctx, args, &topic).await
        }
    }
}
