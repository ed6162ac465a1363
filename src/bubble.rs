use crate::types::Role;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const BUBBLE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

/// One rendered chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    role: Role,
    text: String,
    avatar: Option<String>,
    created_at: OffsetDateTime,
}

impl Bubble {
    pub fn user(text: impl Into<String>) -> Self {
        Self::at(Role::User, text, None, OffsetDateTime::now_utc())
    }

    /// Bot bubbles always carry an avatar source, empty when no logo is configured.
    pub fn bot(text: impl Into<String>, avatar_src: impl Into<String>) -> Self {
        Self::at(
            Role::Bot,
            text,
            Some(avatar_src.into()),
            OffsetDateTime::now_utc(),
        )
    }

    pub fn at(
        role: Role,
        text: impl Into<String>,
        avatar: Option<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        let avatar = match role {
            Role::Bot => Some(avatar.unwrap_or_default()),
            Role::User => None,
        };
        Self {
            role,
            text: text.into(),
            avatar,
            created_at,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn class(&self) -> &'static str {
        match self.role {
            Role::User => "bubble user",
            Role::Bot => "bubble bot with-avatar",
        }
    }

    /// Local `HH:MM`, or UTC when the local offset cannot be determined.
    pub fn formatted_time(&self) -> String {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        format_in_offset(self.created_at, offset)
    }
}

fn format_in_offset(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    timestamp
        .to_offset(offset)
        .format(BUBBLE_TIME_FORMAT)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn user_bubble_has_no_avatar() {
        let bubble = Bubble::user("Hallo");
        assert_eq!(bubble.role(), Role::User);
        assert_eq!(bubble.avatar(), None);
        assert_eq!(bubble.class(), "bubble user");
    }

    #[test]
    fn bot_bubble_avatar_defaults_to_empty() {
        let bubble = Bubble::at(Role::Bot, "Hi", None, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(bubble.avatar(), Some(""));
        assert_eq!(bubble.class(), "bubble bot with-avatar");

        let with_logo = Bubble::bot("Hi", "/static/logo.png");
        assert_eq!(with_logo.avatar(), Some("/static/logo.png"));
    }

    #[test]
    fn formats_two_digit_hour_and_minute() {
        let ts = datetime!(2024-03-01 07:05 UTC);
        assert_eq!(format_in_offset(ts, UtcOffset::UTC), "07:05");
        assert_eq!(format_in_offset(ts, offset!(+9)), "16:05");
        assert_eq!(format_in_offset(ts, offset!(-8)), "23:05");
    }
}
