use crate::storage::SharedStore;
use crate::types::ThemePreference;
use tracing::{info, warn};

/// Storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Class mirrored onto the page root; dark is the unclassed default.
    pub body_class: &'static str,
}

pub fn theme_definition(mode: ThemePreference) -> ThemeDefinition {
    match mode {
        ThemePreference::Dark => ThemeDefinition {
            css: DARK_THEME,
            body_class: "",
        },
        ThemePreference::Light => ThemeDefinition {
            css: LIGHT_THEME,
            body_class: "light",
        },
    }
}

/// Theme preference mirrored between the page and the preference store.
pub struct ThemeToggle {
    store: SharedStore,
    current: ThemePreference,
}

impl ThemeToggle {
    /// Reads the persisted preference once. Missing or unreadable values mean dark.
    pub fn load(store: SharedStore) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| ThemePreference::parse(&raw))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn definition(&self) -> ThemeDefinition {
        theme_definition(self.current)
    }

    /// Flips the theme and persists the new value. A failed write only logs.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.opposite();
        self.current = next;
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            warn!(error = %err, "could not persist theme preference");
        }
        info!(theme = next.as_str(), "theme changed");
        next
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d0f12;
    --color-bg-secondary: #16191e;
    --color-text-primary: #f2f2f2;
    --color-text-muted: #9aa0a6;
    --color-border: #2a2e35;
    --color-input-bg: #16191e;
    --color-chat-user-bg: #3b6cf6;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #1f232a;
    --color-chat-bot-text: #f2f2f2;
    --color-timestamp: #7c828a;
}
.page { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f4f5f7;
    --color-text-primary: #111111;
    --color-text-muted: #5f6368;
    --color-border: #d6d9de;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #2f5ee0;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #eef0f3;
    --color-chat-bot-text: #111111;
    --color-timestamp: #6b7178;
}
.page.light { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom-color: var(--color-border); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
"#;
