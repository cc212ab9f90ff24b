//! Default value functions used by serde for config deserialization.

use crate::settings::NamingScheme;

pub fn default_name() -> String {
    "jitsi-slash".to_string()
}

pub fn default_data_dir() -> String {
    "~/.jitsi-slash".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_trigger() -> String {
    "jitsi".to_string()
}

pub fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_api_port() -> u16 {
    8066
}

pub fn default_store_backend() -> String {
    "sqlite".to_string()
}

pub fn default_db_path() -> String {
    "~/.jitsi-slash/data/settings.db".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_naming_scheme() -> NamingScheme {
    NamingScheme::Words
}

pub fn default_server_url() -> String {
    "https://meet.jit.si".to_string()
}

pub fn default_locale() -> String {
    "en".to_string()
}
