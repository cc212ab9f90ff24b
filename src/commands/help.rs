//! `/jitsi help`: the fixed command reference.

use super::CommandContext;
use crate::i18n;
use jitsi_core::message::{CommandArgs, CommandResponse, MessageKey, TemplateData};

pub(super) async fn execute(ctx: &CommandContext, args: &CommandArgs) -> CommandResponse {
    let title = ctx
        .localize(args, MessageKey::HelpTitle, &TemplateData::new())
        .await;
    let text = ctx
        .localize(
            args,
            MessageKey::HelpText,
            &i18n::data([("trigger", ctx.trigger.clone())]),
        )
        .await;
    ctx.post_ephemeral(args, title + &text).await;
    CommandResponse::default()
}
