use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.command.trigger, "jitsi");
    assert_eq!(cfg.api.port, 8066);
    assert_eq!(cfg.store.backend, "sqlite");
    assert_eq!(cfg.meeting.server_url, "https://meet.jit.si");
    assert_eq!(cfg.i18n.default_locale, "en");
    assert_eq!(cfg.defaults.user_settings(), UserSettings::default());
}

#[test]
fn test_defaults_section_from_toml() {
    let toml_str = r#"
        [defaults]
        embedded = true
        naming_scheme = "ask"
    "#;
    let cfg = parse(toml_str).unwrap();
    let settings = cfg.defaults.user_settings();
    assert!(settings.embedded);
    assert!(settings.show_prejoin_page, "missing key keeps its default");
    assert_eq!(settings.naming_scheme, NamingScheme::Ask);
}

#[test]
fn test_unknown_naming_scheme_is_a_config_error() {
    let toml_str = r#"
        [defaults]
        naming_scheme = "random"
    "#;
    let err = parse(toml_str).unwrap_err();
    assert!(matches!(err, JitsiError::Config(_)));
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [jitsi]
        data_dir = "/var/lib/jitsi-slash"
        log_level = "debug"

        [command]
        trigger = "meet"

        [mattermost]
        url = "https://chat.example.com"
        bot_token = "tok"
        bot_user_id = "bot1"

        [api]
        host = "0.0.0.0"
        port = 9000
        token = "slash-secret"

        [meeting]
        server_url = "https://video.example.com"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.jitsi.data_dir, "/var/lib/jitsi-slash");
    assert_eq!(cfg.jitsi.name, "jitsi-slash");
    assert_eq!(cfg.command.trigger, "meet");
    assert!(cfg.mattermost.is_configured());
    assert_eq!(cfg.mattermost.bot_user_id, "bot1");
    assert_eq!(cfg.api.port, 9000);
    assert_eq!(cfg.api.token, "slash-secret");
    assert_eq!(cfg.meeting.server_url, "https://video.example.com");
}

#[test]
fn test_load_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.command.trigger, "jitsi");
}

#[test]
fn test_load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nport = 7000\n").unwrap();
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.api.port, 7000);
}

#[test]
fn test_shellexpand() {
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    if let Some(home) = std::env::var_os("HOME") {
        assert_eq!(
            shellexpand("~/x.db"),
            format!("{}/x.db", home.to_string_lossy())
        );
    }
}
