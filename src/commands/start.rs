//! `/jitsi [start] [topic]`: start a meeting, or ask for a name first.

use super::CommandContext;
use jitsi_core::{
    error::CommandError,
    message::{CommandArgs, CommandResponse, MessageKey, TemplateData},
    settings::NamingScheme,
};
use tracing::error;

pub(super) async fn execute(
    ctx: &CommandContext,
    args: &CommandArgs,
    topic: &str,
) -> CommandResponse {
    match run(ctx, args, topic).await {
        Ok(()) => CommandResponse::default(),
        Err(e) => {
            error!(
                "could not start meeting for {} in {}: {e}",
                args.user_id, args.channel_id
            );
            let text = ctx
                .localize(args, MessageKey::StartFailed, &TemplateData::new())
                .await;
            CommandResponse::ephemeral(args.channel_id.clone(), text)
        }
    }
}

async fn run(ctx: &CommandContext, args: &CommandArgs, topic: &str) -> Result<(), CommandError> {
    let user = ctx
        .directory
        .get_user(&args.user_id)
        .await
        .map_err(CommandError::Lookup)?;
    let channel = ctx
        .directory
        .get_channel(&args.channel_id)
        .await
        .map_err(CommandError::Lookup)?;
    let settings = ctx
        .store
        .get(&args.user_id)
        .await
        .map_err(CommandError::SettingsLoad)?;

    if settings.naming_scheme == NamingScheme::Ask && topic.is_empty() {
        ctx.meetings
            .ask_meeting_type(&user, &channel, &args.root_id)
            .await
            .map_err(CommandError::MeetingStart)?;
    } else {
        ctx.meetings
            .start_meeting(&user, &channel, "", topic, false, &args.root_id)
            .await
            .map_err(CommandError::MeetingStart)?;
    }
    Ok(())
}
