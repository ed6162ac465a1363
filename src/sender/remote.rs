use super::{ChatError, ChatResult, MessageSender};
use crate::types::BotReply;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub struct RemoteSender {
    client: Client,
    send_url: String,
    reset_url: String,
}

impl RemoteSender {
    pub fn new(send_url: String, reset_url: String) -> Self {
        Self {
            client: Client::new(),
            send_url,
            reset_url,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a str,
}

/// Truthiness of a JSON value: `null`, `false`, `0`, `""` and a missing key are falsy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Maps a send-endpoint body onto a reply.
///
/// The HTTP status is not consulted. A falsy or missing `ok` is a rejection.
/// An acknowledged reply needs a `bot` value; a missing or null `bot.text`
/// renders as an empty bubble, and non-string text is shown as its JSON form.
pub fn interpret_reply(body: &str) -> ChatResult<BotReply> {
    let data: Value = serde_json::from_str(body)?;
    if data.is_null() {
        return Err(ChatError::Decode("reply body is null".to_string()));
    }
    if !is_truthy(data.get("ok")) {
        return Err(ChatError::Rejected);
    }
    let bot = match data.get("bot") {
        None | Some(Value::Null) => return Err(ChatError::MissingReply),
        Some(bot) => bot,
    };
    let text = match bot.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    Ok(BotReply::new(text))
}

#[async_trait]
impl MessageSender for RemoteSender {
    async fn send(&self, text: &str) -> ChatResult<BotReply> {
        debug!(url = %self.send_url, "posting chat message");
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendRequest { message: text })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "chat endpoint answered");
        interpret_reply(&body)
    }

    async fn reset(&self) -> ChatResult<()> {
        self.client.post(&self.reset_url).send().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledged_reply_yields_text() {
        assert_eq!(
            interpret_reply(r#"{"ok":true,"bot":{"text":"Hi there"}}"#),
            Ok(BotReply::new("Hi there"))
        );
    }

    #[test]
    fn unacknowledged_reply_is_rejection() {
        assert_eq!(interpret_reply(r#"{"ok":false}"#), Err(ChatError::Rejected));
        assert_eq!(
            interpret_reply(r#"{"error":"session expired"}"#),
            Err(ChatError::Rejected)
        );
    }

    #[test]
    fn falsy_ok_values_are_rejections() {
        for body in [
            r#"{"ok":null}"#,
            r#"{"ok":0}"#,
            r#"{"ok":""}"#,
            r#"{"ok":false,"bot":{"text":"ignored"}}"#,
        ] {
            assert_eq!(interpret_reply(body), Err(ChatError::Rejected), "{body}");
        }
        assert_eq!(interpret_reply("[]"), Err(ChatError::Rejected));
    }

    #[test]
    fn truthy_ok_values_are_accepted() {
        assert_eq!(
            interpret_reply(r#"{"ok":1,"bot":{"text":"yes"}}"#),
            Ok(BotReply::new("yes"))
        );
        assert_eq!(
            interpret_reply(r#"{"ok":"true","bot":{"text":42}}"#),
            Ok(BotReply::new("42"))
        );
    }

    #[test]
    fn acknowledged_without_bot_is_missing_reply() {
        assert_eq!(interpret_reply(r#"{"ok":true}"#), Err(ChatError::MissingReply));
        assert_eq!(
            interpret_reply(r#"{"ok":true,"bot":null}"#),
            Err(ChatError::MissingReply)
        );
    }

    #[test]
    fn null_or_missing_text_renders_empty() {
        assert_eq!(interpret_reply(r#"{"ok":true,"bot":{}}"#), Ok(BotReply::new("")));
        assert_eq!(
            interpret_reply(r#"{"ok":true,"bot":{"text":null}}"#),
            Ok(BotReply::new(""))
        );
    }

    #[test]
    fn non_json_body_is_decode_error() {
        assert!(matches!(
            interpret_reply("<html>502 Bad Gateway</html>"),
            Err(ChatError::Decode(_))
        ));
        assert!(matches!(interpret_reply("null"), Err(ChatError::Decode(_))));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(SendRequest { message: "Hallo" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hallo" }));
    }
}
