//! Integration tests for environment loading
//!
//! Kept to a single test: it mutates the process environment, which the other
//! test binaries never see but parallel tests in this one would.

use yourchatbot::config::{AppConfig, SenderMode, load_dotenv};

#[test]
fn send_url_alone_selects_remote_after_loading_defaults() {
    // SAFETY: the only test in this binary, so no other thread reads the environment
    unsafe {
        std::env::remove_var("CHAT_SENDER");
        std::env::remove_var("CHAT_RESET_URL");
        std::env::set_var("CHAT_SEND_URL", "http://127.0.0.1:5050/api/send");
    }

    load_dotenv();
    let config = AppConfig::from_env().expect("config");

    assert_eq!(
        config.sender,
        SenderMode::Remote {
            send_url: "http://127.0.0.1:5050/api/send".into(),
            reset_url: "http://127.0.0.1:5050/api/reset".into(),
        }
    );
    assert_eq!(config.title, "YourChatbot");
}
