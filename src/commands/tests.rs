use super::settings::SettingsAction;
use super::*;
use crate::i18n;
use async_trait::async_trait;
use jitsi_core::error::JitsiError;
use jitsi_core::message::{Channel, Meeting, User};
use jitsi_core::settings::{NamingScheme, UserSettings};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// --- Fakes ---

#[derive(Default)]
struct FakeDirectory {
    fail_user: bool,
    fail_channel: bool,
}

#[async_trait]
impl Directory for FakeDirectory {
    async fn get_user(&self, user_id: &str) -> Result<User, JitsiError> {
        if self.fail_user {
            return Err(JitsiError::Directory("user not found".into()));
        }
        Ok(User {
            id: user_id.to_string(),
            username: "alice".to_string(),
            locale: "en".to_string(),
        })
    }

    async fn get_channel(&self, channel_id: &str) -> Result<Channel, JitsiError> {
        if self.fail_channel {
            return Err(JitsiError::Directory("channel not found".into()));
        }
        Ok(Channel {
            id: channel_id.to_string(),
            name: "town-square".to_string(),
            ..Default::default()
        })
    }
}

#[derive(Default)]
struct FakeStore {
    records: Mutex<HashMap<String, UserSettings>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_get: bool,
    fail_set: bool,
}

impl FakeStore {
    fn with(user_id: &str, settings: UserSettings) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .unwrap()
            .insert(user_id.to_string(), settings);
        store
    }

    fn record(&self, user_id: &str) -> Option<UserSettings> {
        self.records.lock().unwrap().get(user_id).copied()
    }
}

#[async_trait]
impl SettingsStore for FakeStore {
    async fn get(&self, user_id: &str) -> Result<UserSettings, JitsiError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(JitsiError::Store("db locked".into()));
        }
        Ok(self.record(user_id).unwrap_or_default())
    }

    async fn set(&self, user_id: &str, settings: &UserSettings) -> Result<(), JitsiError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_set {
            return Err(JitsiError::Store("disk full".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(user_id.to_string(), *settings);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingPoster {
    ephemeral: Mutex<Vec<(String, Post)>>,
    fail: bool,
}

impl RecordingPoster {
    fn messages(&self) -> Vec<String> {
        self.ephemeral
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.message.clone())
            .collect()
    }
}

#[async_trait]
impl Poster for RecordingPoster {
    async fn send_ephemeral(&self, user_id: &str, post: Post) -> Result<(), JitsiError> {
        self.ephemeral
            .lock()
            .unwrap()
            .push((user_id.to_string(), post));
        if self.fail {
            return Err(JitsiError::Channel("websocket closed".into()));
        }
        Ok(())
    }

    async fn create_post(&self, post: Post) -> Result<Post, JitsiError> {
        Ok(post)
    }
}

/// Prefixes every rendered English message with its catalog id.
struct KeyedLocalizer;

#[async_trait]
impl Localizer for KeyedLocalizer {
    async fn localize(&self, _user_id: &str, key: MessageKey, data: &TemplateData) -> String {
        format!("{}|{}", key.id(), i18n::localize_for("en", key, data))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MeetingCall {
    Start { topic: String, root_id: String },
    Ask { root_id: String },
}

#[derive(Default)]
struct FakeMeetings {
    calls: Mutex<Vec<MeetingCall>>,
    fail: bool,
}

#[async_trait]
impl MeetingStarter for FakeMeetings {
    async fn start_meeting(
        &self,
        _user: &User,
        _channel: &Channel,
        explicit_name: &str,
        topic: &str,
        force_prompt: bool,
        root_id: &str,
    ) -> Result<Meeting, JitsiError> {
        assert!(explicit_name.is_empty());
        assert!(!force_prompt);
        self.calls.lock().unwrap().push(MeetingCall::Start {
            topic: topic.to_string(),
            root_id: root_id.to_string(),
        });
        if self.fail {
            return Err(JitsiError::Meeting("bridge unavailable".into()));
        }
        Ok(Meeting {
            id: "room".to_string(),
            url: "https://meet.example.com/room".to_string(),
            topic: topic.to_string(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn ask_meeting_type(
        &self,
        _user: &User,
        _channel: &Channel,
        root_id: &str,
    ) -> Result<(), JitsiError> {
        self.calls.lock().unwrap().push(MeetingCall::Ask {
            root_id: root_id.to_string(),
        });
        Ok(())
    }
}

struct Harness {
    ctx: CommandContext,
    store: Arc<FakeStore>,
    poster: Arc<RecordingPoster>,
    meetings: Arc<FakeMeetings>,
}

fn harness_with(
    directory: FakeDirectory,
    store: FakeStore,
    poster: RecordingPoster,
    meetings: FakeMeetings,
) -> Harness {
    let store = Arc::new(store);
    let poster = Arc::new(poster);
    let meetings = Arc::new(meetings);
    let ctx = CommandContext {
        bot_id: "bot1".to_string(),
        trigger: "jitsi".to_string(),
        directory: Arc::new(directory),
        poster: poster.clone(),
        store: store.clone(),
        localizer: Arc::new(KeyedLocalizer),
        meetings: meetings.clone(),
    };
    Harness {
        ctx,
        store,
        poster,
        meetings,
    }
}

fn harness(store: FakeStore) -> Harness {
    harness_with(
        FakeDirectory::default(),
        store,
        RecordingPoster::default(),
        FakeMeetings::default(),
    )
}

fn args(command: &str) -> CommandArgs {
    CommandArgs {
        command: command.to_string(),
        user_id: "user1".to_string(),
        channel_id: "chan1".to_string(),
        root_id: "root1".to_string(),
    }
}

fn stored() -> UserSettings {
    UserSettings {
        embedded: false,
        show_prejoin_page: true,
        naming_scheme: NamingScheme::Uuid,
    }
}

// --- Tokenizer ---

#[test]
fn test_parse_splits_on_whitespace_runs() {
    let parsed = ParsedCommand::parse("  /jitsi \t settings   embedded\ntrue ").unwrap();
    assert_eq!(parsed.trigger, "/jitsi");
    assert_eq!(parsed.action, "settings");
    assert_eq!(parsed.parameters, vec!["embedded", "true"]);
}

#[test]
fn test_parse_trigger_only() {
    let parsed = ParsedCommand::parse("/jitsi").unwrap();
    assert_eq!(parsed.action, "");
    assert!(parsed.parameters.is_empty());
}

#[test]
fn test_parse_blank_input() {
    assert!(ParsedCommand::parse("").is_none());
    assert!(ParsedCommand::parse("   ").is_none());
}

// --- Router ---

#[test]
fn test_route_known_actions() {
    assert_eq!(route("/jitsi help", "jitsi"), Route::Help);
    assert_eq!(route("/jitsi settings", "jitsi"), Route::Settings(vec![]));
    assert_eq!(
        route("/jitsi settings naming_scheme ask", "jitsi"),
        Route::Settings(vec!["naming_scheme", "ask"])
    );
}

#[test]
fn test_route_start_and_fallback() {
    let start = |topic: &str| Route::Start {
        topic: topic.to_string(),
    };
    assert_eq!(route("/jitsi", "jitsi"), start(""));
    assert_eq!(route("/jitsi start", "jitsi"), start(""));
    assert_eq!(route("/jitsi start Daily  sync", "jitsi"), start("Daily  sync"));
    assert_eq!(route("/jitsi bogus", "jitsi"), start("bogus"));
    assert_eq!(route("/jitsi bogus topic here", "jitsi"), start("bogus topic here"));
    assert_eq!(route("/jitsi starter", "jitsi"), start("starter"));
    assert_eq!(route("/jitsi HELP", "jitsi"), start("HELP"));
}

#[test]
fn test_route_ignores_other_triggers() {
    assert_eq!(route("/zoom start", "jitsi"), Route::Ignore);
    assert_eq!(route("/Jitsi help", "jitsi"), Route::Ignore);
    assert_eq!(route("jitsi help", "jitsi"), Route::Ignore);
    assert_eq!(route("/jitsihelp", "jitsi"), Route::Ignore);
    assert_eq!(route("", "jitsi"), Route::Ignore);
}

#[test]
fn test_route_custom_trigger() {
    assert_eq!(route("/meet help", "meet"), Route::Help);
    assert_eq!(route("/jitsi help", "meet"), Route::Ignore);
}

#[test]
fn test_settings_action_by_parameter_count() {
    assert_eq!(SettingsAction::parse(&[]), SettingsAction::View);
    assert_eq!(SettingsAction::parse(&["see"]), SettingsAction::View);
    assert_eq!(
        SettingsAction::parse(&["embedded", "true"]),
        SettingsAction::Update {
            field: "embedded",
            value: "true"
        }
    );
    assert_eq!(SettingsAction::parse(&["embedded"]), SettingsAction::Invalid);
    assert_eq!(SettingsAction::parse(&["see", "x"]), SettingsAction::Update {
        field: "see",
        value: "x"
    });
    assert_eq!(
        SettingsAction::parse(&["embedded", "true", "false"]),
        SettingsAction::Invalid
    );
}

// --- Settings handler ---

#[tokio::test]
async fn test_update_embedded_true() {
    let h = harness(FakeStore::with("user1", stored()));
    let resp = execute(&h.ctx, &args("/jitsi settings embedded true")).await;

    assert!(resp.is_empty());
    let record = h.store.record("user1").unwrap();
    assert!(record.embedded);
    assert_eq!(record.show_prejoin_page, stored().show_prejoin_page);
    assert_eq!(record.naming_scheme, stored().naming_scheme);

    let messages = h.poster.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("jitsi.command.settings.updated|"));
    assert!(messages[0].contains("embedded: `true`"));
}

#[tokio::test]
async fn test_invalid_naming_scheme_never_writes() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings naming_scheme frobnicate")).await;

    assert_eq!(h.store.writes.load(Ordering::SeqCst), 0);
    assert_eq!(h.store.record("user1"), Some(stored()));
    let messages = h.poster.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("jitsi.command.settings.wrong_naming_scheme_value|"));
}

#[tokio::test]
async fn test_every_invalid_value_skips_save() {
    let cases = [
        ("/jitsi settings embedded yes", "jitsi.command.settings.wrong_embedded_value"),
        (
            "/jitsi settings show_prejoin_page 1",
            "jitsi.command.settings.wrong_show_prejoin_page_value",
        ),
        ("/jitsi settings theme dark", "jitsi.command.settings.wrong_field"),
    ];
    for (command, key) in cases {
        let h = harness(FakeStore::with("user1", stored()));
        execute(&h.ctx, &args(command)).await;
        assert_eq!(h.store.writes.load(Ordering::SeqCst), 0, "{command}");
        assert!(h.poster.messages()[0].starts_with(key), "{command}");
    }
}

#[tokio::test]
async fn test_view_renders_stored_values() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings see")).await;

    let messages = h.poster.messages();
    assert_eq!(
        messages,
        vec![
            "jitsi.command.settings.current_values|###### Jitsi Settings:\n\
             * Embedded: `false`\n\
             * Show Pre-join Page: `true`\n\
             * Naming Scheme: `uuid`"
                .to_string()
        ]
    );
    assert_eq!(h.store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_view_without_parameters_uses_defaults() {
    let h = harness(FakeStore::default());
    execute(&h.ctx, &args("/jitsi settings")).await;
    assert!(h.poster.messages()[0].contains("Naming Scheme: `words`"));
    assert_eq!(h.store.record("user1"), None, "defaults are not persisted");
}

#[tokio::test]
async fn test_single_parameter_is_wrong_count() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings embedded")).await;

    assert_eq!(h.store.writes.load(Ordering::SeqCst), 0);
    assert!(h.poster.messages()[0].starts_with("jitsi.command.settings.invalid_parameters|"));
}

#[tokio::test]
async fn test_load_failure_stops_before_parameters() {
    let h = harness(FakeStore {
        fail_get: true,
        ..Default::default()
    });
    execute(&h.ctx, &args("/jitsi settings embedded")).await;

    assert_eq!(h.store.writes.load(Ordering::SeqCst), 0);
    let messages = h.poster.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("jitsi.command.settings.unable_to_get|"));
}

#[tokio::test]
async fn test_save_failure_reports_unable_to_set() {
    let h = harness(FakeStore {
        fail_set: true,
        ..Default::default()
    });
    execute(&h.ctx, &args("/jitsi settings naming_scheme ask")).await;

    assert_eq!(h.store.writes.load(Ordering::SeqCst), 1);
    assert!(h.poster.messages()[0].starts_with("jitsi.command.settings.unable_to_set|"));
}

#[tokio::test]
async fn test_update_then_view_round_trip() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings naming_scheme mattermost")).await;
    execute(&h.ctx, &args("/jitsi settings see")).await;

    let messages = h.poster.messages();
    assert!(messages[1].contains("Naming Scheme: `mattermost`"));
}

#[tokio::test]
async fn test_repeated_update_is_idempotent() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings show_prejoin_page false")).await;
    let once = h.store.record("user1");
    execute(&h.ctx, &args("/jitsi settings show_prejoin_page false")).await;
    assert_eq!(h.store.record("user1"), once);
    assert_eq!(once.map(|s| s.show_prejoin_page), Some(false));
}

#[tokio::test]
async fn test_ephemeral_post_addressing() {
    let h = harness(FakeStore::default());
    execute(&h.ctx, &args("/jitsi settings see")).await;

    let posts = h.poster.ephemeral.lock().unwrap();
    let (user_id, post) = &posts[0];
    assert_eq!(user_id, "user1");
    assert_eq!(post.user_id, "bot1");
    assert_eq!(post.channel_id, "chan1");
    assert_eq!(post.root_id, "root1");
}

#[tokio::test]
async fn test_failed_ephemeral_post_is_not_an_error() {
    let h = harness_with(
        FakeDirectory::default(),
        FakeStore::default(),
        RecordingPoster {
            fail: true,
            ..Default::default()
        },
        FakeMeetings::default(),
    );
    let resp = execute(&h.ctx, &args("/jitsi settings embedded true")).await;
    assert!(resp.is_empty());
    assert_eq!(h.store.record("user1").map(|s| s.embedded), Some(true));
}

// --- Help ---

#[tokio::test]
async fn test_help_posts_document_without_store_access() {
    let h = harness(FakeStore::default());
    let resp = execute(&h.ctx, &args("/jitsi help")).await;

    assert!(resp.is_empty());
    assert_eq!(h.store.reads.load(Ordering::SeqCst), 0);
    assert_eq!(h.store.writes.load(Ordering::SeqCst), 0);
    let messages = h.poster.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("jitsi.command.help.title|"));
    assert!(messages[0].contains("`/jitsi settings see`"));
}

#[tokio::test]
async fn test_help_title_and_document_on_separate_lines() {
    let h = harness(FakeStore::default());
    execute(&h.ctx, &args("/jitsi help")).await;

    let message = &h.poster.messages()[0];
    let (title, text) = message
        .split_once('\n')
        .expect("title line then document");
    assert_eq!(
        title,
        "jitsi.command.help.title|###### Mattermost Jitsi Plugin - Slash Command help"
    );
    assert!(text.starts_with("jitsi.command.help.text|* `/jitsi` - Create a new meeting"));
}

// --- Start meeting ---

#[tokio::test]
async fn test_ask_scheme_without_topic_prompts() {
    let h = harness(FakeStore::with(
        "user1",
        UserSettings {
            naming_scheme: NamingScheme::Ask,
            ..stored()
        },
    ));
    let resp = execute(&h.ctx, &args("/jitsi")).await;

    assert!(resp.is_empty());
    assert_eq!(
        *h.meetings.calls.lock().unwrap(),
        vec![MeetingCall::Ask {
            root_id: "root1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_ask_scheme_with_topic_starts_directly() {
    let h = harness(FakeStore::with(
        "user1",
        UserSettings {
            naming_scheme: NamingScheme::Ask,
            ..stored()
        },
    ));
    execute(&h.ctx, &args("/jitsi start Planning")).await;
    assert_eq!(
        *h.meetings.calls.lock().unwrap(),
        vec![MeetingCall::Start {
            topic: "Planning".to_string(),
            root_id: "root1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_words_scheme_starts_immediately() {
    let h = harness(FakeStore::with(
        "user1",
        UserSettings {
            naming_scheme: NamingScheme::Words,
            ..stored()
        },
    ));
    execute(&h.ctx, &args("/jitsi")).await;
    assert_eq!(
        *h.meetings.calls.lock().unwrap(),
        vec![MeetingCall::Start {
            topic: String::new(),
            root_id: "root1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_unknown_action_becomes_topic() {
    let h = harness(FakeStore::default());
    let resp = execute(&h.ctx, &args("/jitsi bogus")).await;

    assert!(resp.is_empty());
    assert!(h.poster.messages().is_empty());
    assert_eq!(
        *h.meetings.calls.lock().unwrap(),
        vec![MeetingCall::Start {
            topic: "bogus".to_string(),
            root_id: "root1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_lookup_failure_returns_generic_ephemeral() {
    for directory in [
        FakeDirectory {
            fail_user: true,
            ..Default::default()
        },
        FakeDirectory {
            fail_channel: true,
            ..Default::default()
        },
    ] {
        let h = harness_with(
            directory,
            FakeStore::default(),
            RecordingPoster::default(),
            FakeMeetings::default(),
        );
        let resp = execute(&h.ctx, &args("/jitsi start")).await;

        assert_eq!(
            resp,
            CommandResponse::ephemeral(
                "chan1",
                "jitsi.command.start.failed|We could not start a meeting at this time."
            )
        );
        assert!(h.meetings.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_meeting_failure_returns_generic_ephemeral() {
    let h = harness_with(
        FakeDirectory::default(),
        FakeStore::default(),
        RecordingPoster::default(),
        FakeMeetings {
            fail: true,
            ..Default::default()
        },
    );
    let resp = execute(&h.ctx, &args("/jitsi start Retro")).await;
    assert!(resp.text.starts_with("jitsi.command.start.failed|"));
    assert!(!resp.text.contains("bridge unavailable"));
}

#[tokio::test]
async fn test_settings_load_failure_in_start_path_is_generic() {
    let h = harness(FakeStore {
        fail_get: true,
        ..Default::default()
    });
    let resp = execute(&h.ctx, &args("/jitsi")).await;
    assert!(resp.text.starts_with("jitsi.command.start.failed|"));
}

// --- No-op ---

#[tokio::test]
async fn test_other_trigger_is_silent_noop() {
    let h = harness(FakeStore::default());
    let resp = execute(&h.ctx, &args("/zoom settings embedded true")).await;

    assert!(resp.is_empty());
    assert!(h.poster.messages().is_empty());
    assert_eq!(h.store.reads.load(Ordering::SeqCst), 0);
    assert!(h.meetings.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_invocation_does_not_poison_next() {
    let h = harness(FakeStore::with("user1", stored()));
    execute(&h.ctx, &args("/jitsi settings embedded maybe")).await;
    execute(&h.ctx, &args("/jitsi settings embedded true")).await;
    assert_eq!(h.store.record("user1").map(|s| s.embedded), Some(true));
}
