//! Conversation event types

use serde::{Deserialize, Serialize};

/// Who produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    User,
    Bot,
}

/// A single entry in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub message: String,
}

impl Event {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::User,
            message: message.into(),
        }
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Bot,
            message: message.into(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.kind == EventKind::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_shape() {
        let user = serde_json::to_value(Event::user("Hello")).unwrap();
        assert_eq!(user, json!({"type": "user", "message": "Hello"}));

        let bot = serde_json::to_value(Event::bot("Hi")).unwrap();
        assert_eq!(bot, json!({"type": "bot", "message": "Hi"}));
    }

    #[test]
    fn test_is_bot() {
        assert!(Event::bot("x").is_bot());
        assert!(!Event::user("x").is_bot());
    }
}
