//! HTTP endpoint for Mattermost slash-command requests.
//!
//! Mattermost posts the command form to `POST /commands` and renders the JSON
//! response. `GET /api/health` reports uptime for monitoring.

use crate::commands::{self, CommandContext};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Form, Router,
};
use jitsi_core::{
    config::ApiConfig,
    message::{CommandArgs, CommandResponse},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{info, warn};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    ctx: CommandContext,
    token: Option<String>,
    uptime: Instant,
}

impl ApiState {
    pub fn new(ctx: CommandContext, config: &ApiConfig) -> Self {
        let token = if config.token.is_empty() {
            None
        } else {
            Some(config.token.clone())
        };
        Self {
            ctx,
            token,
            uptime: Instant::now(),
        }
    }
}

/// Slash-command request form as sent by Mattermost.
#[derive(Debug, Deserialize)]
struct SlashCommandForm {
    command: String,
    #[serde(default)]
    text: String,
    user_id: String,
    channel_id: String,
    #[serde(default)]
    root_id: String,
    #[serde(default)]
    token: String,
}

impl SlashCommandForm {
    /// Mattermost splits the trigger from the rest; handlers expect the line
    /// the user typed.
    fn into_args(self) -> CommandArgs {
        let command = if self.text.is_empty() {
            self.command
        } else {
            format!("{} {}", self.command, self.text)
        };
        CommandArgs {
            command,
            user_id: self.user_id,
            channel_id: self.channel_id,
            root_id: self.root_id,
        }
    }
}

/// Constant-time string comparison to prevent timing attacks on token validation.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// `POST /commands`: run one slash command.
async fn handle_command(
    State(state): State<ApiState>,
    Form(form): Form<SlashCommandForm>,
) -> Result<Json<CommandResponse>, (StatusCode, Json<Value>)> {
    if let Some(expected) = &state.token {
        if !constant_time_eq(&form.token, expected) {
            warn!("rejected slash command from {}: invalid token", form.user_id);
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "invalid token"})),
            ));
        }
    }

    let args = form.into_args();
    Ok(Json(commands::execute(&state.ctx, &args).await))
}

/// `GET /api/health`: liveness with uptime.
async fn health(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
    }))
}

/// Build the axum router with shared state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/commands", post(handle_command))
        .route("/api/health", get(health))
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(config: &ApiConfig, state: ApiState) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("slash-command endpoint listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("slash-command endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
