use crate::bubble::Bubble;
use crate::sender::{SharedSender, request_reset};
use crate::session::{ChatSession, KeyAction, key_action};
use dioxus::events::Key;
use dioxus::prelude::*;

const SCROLL_TO_NEWEST: &str = r#"
const win = document.getElementById('chat-window');
if (win) { win.scrollTop = win.scrollHeight; }
"#;

const FOCUS_INPUT: &str = r#"document.getElementById('user-input')?.focus();"#;

#[component]
pub fn ChatView(avatar_src: String, welcome: String) -> Element {
    let sender = use_context::<SharedSender>();
    let mut session = use_signal(|| ChatSession::new(avatar_src).with_welcome(Some(welcome)));

    let scroll_marker = use_memo(move || session.read().scroll_requests());
    use_effect(move || {
        let _ = scroll_marker();
        let _ = document::eval(SCROLL_TO_NEWEST);
    });

    let focus_marker = use_memo(move || session.read().focus_requests());
    use_effect(move || {
        let _ = focus_marker();
        let _ = document::eval(FOCUS_INPUT);
    });

    let submit = use_callback({
        let sender = sender.clone();
        move |text: String| {
            let Some(pending) = session.with_mut(|s| s.begin_submit(&text)) else {
                return;
            };
            let sender = sender.clone();
            spawn(async move {
                let outcome = sender.send(pending.text()).await;
                session.with_mut(|s| s.complete_submit(pending, outcome));
            });
        }
    });

    let on_reset = move |_| {
        let sender = sender.clone();
        spawn(async move {
            request_reset(sender.as_ref()).await;
            session.with_mut(|s| s.reload());
        });
    };

    let view = session();
    let typing_class = if view.is_typing_visible() {
        "typing"
    } else {
        "typing hidden"
    };

    rsx! {
        div { id: "chat-window", class: "chat-window",
            for (i, bubble) in view.transcript().iter().enumerate() {
                BubbleView { key: "{view.generation()}-{i}", bubble: bubble.clone() }
            }
        }
        div { id: "typing", class: typing_class, "Bot is typing…" }
        form {
            id: "chat-form",
            class: "composer",
            onsubmit: move |ev| {
                ev.prevent_default();
                let text = session.read().input().to_string();
                submit.call(text);
            },
            textarea {
                id: "user-input",
                rows: "1",
                placeholder: "Type your message…",
                value: "{view.input()}",
                disabled: !view.is_input_enabled(),
                autofocus: true,
                oninput: move |ev| session.with_mut(|s| s.set_input(ev.value())),
                onkeydown: move |ev| {
                    if key_action(ev.key() == Key::Enter, ev.modifiers().shift()) == KeyAction::Submit {
                        ev.prevent_default();
                        let text = session.read().input().to_string();
                        submit.call(text);
                    }
                },
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: !view.is_input_enabled() || view.input().trim().is_empty(),
                "Send"
            }
            button {
                id: "reset-btn",
                class: "btn",
                r#type: "button",
                onclick: on_reset,
                "Reset"
            }
        }
    }
}

#[component]
fn BubbleView(bubble: Bubble) -> Element {
    let time = bubble.formatted_time();
    rsx! {
        div { class: bubble.class(),
            if let Some(src) = bubble.avatar() {
                img { class: "bubble-avatar", src: "{src}", alt: "Bot" }
            }
            div { class: "bubble-body",
                div { class: "bubble-text", "{bubble.text()}" }
                div { class: "meta", "{time}" }
            }
        }
    }
}
