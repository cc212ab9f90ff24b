//! `/jitsi settings`: view or update the caller's meeting settings.

use super::CommandContext;
use crate::i18n;
use jitsi_core::{
    error::CommandError,
    message::{CommandArgs, CommandResponse, MessageKey, TemplateData},
    settings::{self, Rejection, UserSettings},
};
use tracing::debug;

const SEE: &str = "see";

/// What the parameters after `settings` ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SettingsAction<'a> {
    View,
    Update { field: &'a str, value: &'a str },
    Invalid,
}

impl<'a> SettingsAction<'a> {
    pub(super) fn parse(parameters: &[&'a str]) -> Self {
        match *parameters {
            [] | [SEE] => Self::View,
            [field, value] => Self::Update { field, value },
            _ => Self::Invalid,
        }
    }
}

pub(super) async fn execute(
    ctx: &CommandContext,
    args: &CommandArgs,
    parameters: &[&str],
) -> CommandResponse {
    let message = match run(ctx, args, parameters).await {
        Ok(text) => text,
        Err(e) => {
            debug!("settings command for {} failed: {e}", args.user_id);
            ctx.localize(args, e.message_key(), &TemplateData::new())
                .await
        }
    };
    ctx.post_ephemeral(args, message).await;
    CommandResponse::default()
}

/// Load, then view or validate and save. Returns the confirmation text.
async fn run(
    ctx: &CommandContext,
    args: &CommandArgs,
    parameters: &[&str],
) -> Result<String, CommandError> {
    let current = ctx
        .store
        .get(&args.user_id)
        .await
        .map_err(CommandError::SettingsLoad)?;

    match SettingsAction::parse(parameters) {
        SettingsAction::View => Ok(ctx
            .localize(args, MessageKey::SettingsCurrentValues, &view_data(&current))
            .await),
        SettingsAction::Update { field, value } => {
            let updated = settings::validate(field, value, &current)?;
            ctx.store
                .set(&args.user_id, &updated)
                .await
                .map_err(CommandError::SettingsSave)?;
            let data = i18n::data([("field", field.to_string()), ("value", value.to_string())]);
            Ok(ctx.localize(args, MessageKey::SettingsUpdated, &data).await)
        }
        SettingsAction::Invalid => Err(Rejection::WrongParameterCount.into()),
    }
}

fn view_data(current: &UserSettings) -> TemplateData {
    i18n::data([
        ("embedded", current.embedded.to_string()),
        ("show_prejoin_page", current.show_prejoin_page.to_string()),
        ("naming_scheme", current.naming_scheme.to_string()),
    ])
}
