use crate::config::AppConfig;
use crate::sender::sender_from_config;
use crate::storage::default_store;
use crate::theme::ThemeToggle;
use crate::types::ThemePreference;
use crate::views::ChatView;
use dioxus::prelude::*;

const CHAT_CSS: Asset = asset!("/assets/chat.css");

/// Root component. Expects an [`AppConfig`] in the launch context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_hook(|| default_store(config.storage_dir.clone()));
    let theme = use_signal(|| ThemeToggle::load(store));
    use_context_provider(|| sender_from_config(&config));

    let definition = theme.read().definition();
    rsx! {
        ThemeStyles { css: definition.css }
        div { class: "page {definition.body_class}",
            AppHeader {
                title: config.title.clone(),
                logo_url: config.logo_url.clone(),
                theme,
            }
            ChatView {
                avatar_src: config.logo_url.clone(),
                welcome: config.welcome_message.clone().unwrap_or_default(),
            }
        }
    }
}

#[component]
fn ThemeStyles(css: &'static str) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        style { dangerous_inner_html: "{css}" }
    }
}

#[component]
fn AppHeader(title: String, logo_url: String, theme: Signal<ThemeToggle>) -> Element {
    let mut theme = theme;
    let label = match theme.read().current() {
        ThemePreference::Dark => "Light mode",
        ThemePreference::Light => "Dark mode",
    };
    rsx! {
        div { class: "header",
            if !logo_url.is_empty() {
                img { class: "logo", src: "{logo_url}", alt: "{title}" }
            }
            h1 { class: "title", "{title}" }
            button {
                id: "themeToggle",
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    theme.with_mut(|toggle| {
                        toggle.toggle();
                    });
                },
                "{label}"
            }
        }
    }
}
