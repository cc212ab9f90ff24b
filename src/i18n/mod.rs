//! Internationalization: localized strings for command responses.
//!
//! Uses a static `t(key, locale)` catalog lookup and renders the result as a
//! `minijinja` template with the caller's template data.
//! Supported locales: English (fallback), Spanish, German, French.

mod commands;
mod meeting;


use async_trait::async_trait;
use jitsi_core::{
    message::{MessageKey, TemplateData},
    traits::{Directory, Localizer},
};
use minijinja::Environment;
use std::sync::Arc;
use tracing::{debug, warn};

/// Locales with a full translation.
pub const LOCALES: [&str; 4] = ["en", "es", "de", "fr"];

/// Reduce a platform locale (`pt-BR`, `es_ES`, `DE`) to its language code.
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Return the localized template for `key` in the given `locale`.
/// Falls back to English for unsupported locales.
pub fn t(key: MessageKey, locale: &str) -> &'static str {
    let lang = normalize_locale(locale);
    let lang = if LOCALES.contains(&lang.as_str()) {
        lang.as_str()
    } else {
        "en"
    };
    commands::lookup(key, lang)
        .or_else(|| meeting::lookup(key, lang))
        .unwrap_or("???")
}

/// Render a catalog template with `data`.
///
/// Placeholders use `{{ name }}`; missing names render empty. Trailing
/// newlines are kept. A template that fails to render is returned verbatim.
pub fn render(template: &str, data: &TemplateData) -> String {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    match env.render_str(template, data) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to render message template: {e}");
            template.to_string()
        }
    }
}

/// Localize `key` for an explicit locale.
pub fn localize_for(locale: &str, key: MessageKey, data: &TemplateData) -> String {
    render(t(key, locale), data)
}

/// Catalog-backed [`Localizer`] that resolves each user's locale through the
/// directory.
pub struct I18n {
    directory: Arc<dyn Directory>,
    default_locale: String,
}

impl I18n {
    pub fn new(directory: Arc<dyn Directory>, default_locale: impl Into<String>) -> Self {
        Self {
            directory,
            default_locale: default_locale.into(),
        }
    }

    async fn user_locale(&self, user_id: &str) -> String {
        match self.directory.get_user(user_id).await {
            Ok(user) if !user.locale.trim().is_empty() => user.locale,
            Ok(_) => self.default_locale.clone(),
            Err(e) => {
                debug!("locale lookup for {user_id} failed, using default: {e}");
                self.default_locale.clone()
            }
        }
    }
}

#[async_trait]
impl Localizer for I18n {
    async fn localize(&self, user_id: &str, key: MessageKey, data: &TemplateData) -> String {
        let locale = self.user_locale(user_id).await;
        localize_for(&locale, key, data)
    }
}

/// Build template data from `(name, value)` pairs.
pub fn data<const N: usize>(pairs: [(&str, String); N]) -> TemplateData {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
