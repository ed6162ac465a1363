//! Integration tests for preference storage and the theme toggle
//!
//! Uses a temporary directory so nothing touches the real data dir.

use std::sync::Arc;
use yourchatbot::storage::{FileStore, PreferenceStore, default_store};
use yourchatbot::theme::{THEME_STORAGE_KEY, ThemeToggle};
use yourchatbot::types::ThemePreference;

mod file_store_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("prefs"));

        store.set("theme", "light").expect("Failed to set storage");

        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_get_nonexistent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nonexistent_key"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.set("theme", "dark").expect("Failed to set");
        store.set("theme", "light").expect("Failed to overwrite");

        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_special_characters_in_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.set("user:preferences:theme", "dark").expect("Failed to set");

        assert_eq!(store.get("user:preferences:theme"), Some("dark".to_string()));
        assert!(dir.path().join("user_preferences_theme.pref").exists());
    }

    #[test]
    fn test_default_store_honors_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = default_store(Some(dir.path().to_path_buf()));

        store.set("theme", "light").expect("Failed to set");

        assert!(dir.path().join("theme.pref").exists());
    }
}

mod theme_persistence_tests {
    use super::*;

    #[test]
    fn preference_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut first = ThemeToggle::load(Arc::new(FileStore::new(dir.path())));
        assert_eq!(first.current(), ThemePreference::Dark);
        first.toggle();

        let second = ThemeToggle::load(Arc::new(FileStore::new(dir.path())));
        assert_eq!(second.current(), ThemePreference::Light);
    }

    #[test]
    fn double_toggle_restores_stored_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(FileStore::new(dir.path()));
        store.set(THEME_STORAGE_KEY, "dark").expect("Failed to set");

        let mut toggle = ThemeToggle::load(store.clone());
        toggle.toggle();
        toggle.toggle();

        assert_eq!(store.get(THEME_STORAGE_KEY), Some("dark".to_string()));
    }

    #[test]
    fn unwritable_directory_degrades_to_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").expect("write blocker");

        let mut toggle = ThemeToggle::load(Arc::new(FileStore::new(blocker.join("prefs"))));
        assert_eq!(toggle.current(), ThemePreference::Dark);
        assert_eq!(toggle.toggle(), ThemePreference::Light);
    }
}
