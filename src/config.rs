use anyhow::{Result, bail};
use std::path::PathBuf;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

const DEFAULT_TITLE: &str = "YourChatbot";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SenderMode {
    Remote { send_url: String, reset_url: String },
    Simulated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub sender: SenderMode,
    pub title: String,
    /// Header logo, also used as the bot avatar. Empty when unset.
    pub logo_url: String,
    pub welcome_message: Option<String>,
    pub storage_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let send_url = get("CHAT_SEND_URL");
        let mode = get("CHAT_SENDER").map(|m| m.to_ascii_lowercase());
        let sender = match (mode.as_deref(), send_url) {
            (Some("simulated"), _) | (None, None) => SenderMode::Simulated,
            (Some("remote") | None, Some(send_url)) => {
                let reset_url =
                    get("CHAT_RESET_URL").unwrap_or_else(|| sibling_reset_url(&send_url));
                SenderMode::Remote {
                    send_url,
                    reset_url,
                }
            }
            (Some("remote"), None) => bail!("CHAT_SENDER=remote requires CHAT_SEND_URL"),
            (Some(other), _) => {
                bail!("Unknown CHAT_SENDER '{other}'. Valid options: 'remote', 'simulated'")
            }
        };

        Ok(Self {
            sender,
            title: get("CHAT_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            logo_url: get("CHAT_LOGO_URL").unwrap_or_default(),
            welcome_message: get("CHAT_WELCOME_MESSAGE"),
            storage_dir: get("CHAT_STORAGE_DIR").map(PathBuf::from),
        })
    }
}

/// `http://host/api/send` -> `http://host/api/reset`.
fn sibling_reset_url(send_url: &str) -> String {
    let trimmed = send_url.trim_end_matches('/');
    let path_start = match trimmed.find("://") {
        Some(scheme_end) => trimmed[scheme_end + 3..]
            .find('/')
            .map(|idx| scheme_end + 3 + idx),
        None => trimmed.find('/'),
    };
    match (path_start, trimmed.rfind('/')) {
        (Some(start), Some(last)) if last >= start => format!("{}/reset", &trimmed[..last]),
        _ => format!("{trimmed}/reset"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

/// Keys that pick the sender. They are applied from the bundle as a group.
const SENDER_KEYS: [&str; 3] = ["CHAT_SENDER", "CHAT_SEND_URL", "CHAT_RESET_URL"];

fn load_bundled_config() {
    let is_set = |key: &str| std::env::var_os(key).is_some();
    for (key, value) in bundled_defaults(BUNDLED_CONFIG, is_set) {
        // SAFETY: We're setting env vars at startup before any threads are spawned
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Bundle entries that are not already set. When any sender key is set, no
/// sender key is taken from the bundle, so a lone `CHAT_SEND_URL` is never
/// paired with a bundled `CHAT_SENDER`.
fn bundled_defaults(contents: &str, is_set: impl Fn(&str) -> bool) -> Vec<(String, String)> {
    let sender_configured = SENDER_KEYS.iter().any(|key| is_set(key));
    parse_env_lines(contents)
        .into_iter()
        .filter(|(key, _)| !is_set(key))
        .filter(|(key, _)| !(sender_configured && SENDER_KEYS.contains(&key.as_str())))
        .collect()
}

/// `KEY=VALUE` pairs, skipping blanks and `#` comments.
fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
