use tracing::info;
use tracing_subscriber::EnvFilter;
use yourchatbot::config::{AppConfig, load_dotenv};

fn main() {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            std::process::exit(1);
        }
    };
    info!(title = %config.title, sender = ?config.sender, "starting chat client");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(yourchatbot::ui::App);
}
