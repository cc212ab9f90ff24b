mod api;
mod commands;
mod i18n;
mod meeting;

use clap::{Parser, Subcommand};
use jitsi_channels::mattermost::MattermostClient;
use jitsi_core::{config, shellexpand};
use jitsi_store::{Store, UserSettingsStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "jitsi-slash",
    version,
    about = "Jitsi slash command and per-user meeting settings for Mattermost"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(
        short,
        long,
        global = true,
        env = "JITSI_SLASH_CONFIG",
        default_value = "config.toml"
    )]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the slash-command endpoint.
    Serve,
    /// Print the effective configuration and check the settings store.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_tracing(&cfg.jitsi)?;
    info!("{}", config_origin(&cli.config));

    match cli.command {
        Commands::Serve => serve(cfg).await?,
        Commands::Status => status(&cli.config, &cfg).await,
    }

    Ok(())
}

/// Console plus daily-rolling file output. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(general: &config::GeneralConfig) -> anyhow::Result<WorkerGuard> {
    let log_dir = PathBuf::from(shellexpand(&general.data_dir)).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::daily(&log_dir, "jitsi-slash.log");
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&general.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

/// Where the effective configuration came from. Logged once the subscriber
/// is up, since loading happens before it.
fn config_origin(path: &str) -> String {
    if Path::new(path).exists() {
        format!("config loaded from {path}")
    } else {
        format!("config file not found at {path}, using defaults")
    }
}

async fn serve(cfg: config::Config) -> anyhow::Result<()> {
    if !cfg.mattermost.is_configured() {
        anyhow::bail!(
            "Mattermost is not configured. Set mattermost.url and mattermost.bot_token \
             in the config file (or {}).",
            config::BOT_TOKEN_ENV
        );
    }

    let mattermost = Arc::new(MattermostClient::new(cfg.mattermost.clone()));
    let bot_id = mattermost.bot_user_id().to_string();

    let store = Store::new(&cfg.store).await?;
    let settings = Arc::new(UserSettingsStore::new(store, cfg.defaults.user_settings()));

    let localizer = Arc::new(i18n::I18n::new(
        mattermost.clone(),
        cfg.i18n.default_locale.clone(),
    ));
    let meetings = Arc::new(meeting::JitsiMeetings::new(
        mattermost.clone(),
        localizer.clone(),
        bot_id.clone(),
        cfg.command.trigger.clone(),
        cfg.meeting.server_url.clone(),
    ));

    let ctx = commands::CommandContext {
        bot_id,
        trigger: cfg.command.trigger.clone(),
        directory: mattermost.clone(),
        poster: mattermost,
        store: settings,
        localizer,
        meetings,
    };

    info!(
        "{} starting: /{} for {}",
        cfg.jitsi.name, cfg.command.trigger, cfg.mattermost.url
    );
    api::serve(&cfg.api, api::ApiState::new(ctx, &cfg.api)).await
}

async fn status(config_path: &str, cfg: &config::Config) {
    println!("{} status\n", cfg.jitsi.name);
    println!("Config:     {config_path}");
    println!("Trigger:    /{}", cfg.command.trigger);
    println!("Endpoint:   {}:{}/commands", cfg.api.host, cfg.api.port);
    println!(
        "Token:      {}",
        if cfg.api.token.is_empty() {
            "not checked"
        } else {
            "required"
        }
    );
    println!("Meetings:   {}", cfg.meeting.server_url);
    println!(
        "Defaults:   embedded={} show_prejoin_page={} naming_scheme={}",
        cfg.defaults.embedded, cfg.defaults.show_prejoin_page, cfg.defaults.naming_scheme
    );
    println!();

    println!(
        "  mattermost: {}",
        if cfg.mattermost.is_configured() {
            "configured"
        } else {
            "missing url or bot_token"
        }
    );

    let store = match Store::new(&cfg.store).await {
        Ok(store) => store.ping().await.map(|()| "reachable".to_string()),
        Err(e) => Err(e),
    };
    match store {
        Ok(state) => println!("  store:      {state} ({})", shellexpand(&cfg.store.db_path)),
        Err(e) => println!("  store:      error: {e}"),
    }
}
