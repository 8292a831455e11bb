//! # Domain Types
//!
//! Knowledge-base rows and the slice of the dialogue tracker that actions read.

use serde::{Deserialize, Serialize};

/// A `predefined_questions` row as the store returns it. `keywords` is still serialized.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question_text: String,
    pub keywords: String,
}

/// A canonical question an admin has prepared an answer for.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedQuestion {
    pub id: i64,
    pub question_text: String,
    pub keywords: Vec<String>,
}

/// An admin-supplied answer, joined with the admin's username.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AdminAnswer {
    pub answer: String,
    pub question_id: i64,
    pub admin_username: String,
    pub active: bool,
}

/// Conversation state sent by the dialogue host. Only the fields actions use are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub latest_message: Option<LatestMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
}

impl Tracker {
    #[cfg(test)]
    pub fn with_text(text: &str) -> Self {
        Self {
            sender_id: None,
            latest_message: Some(LatestMessage {
                text: Some(text.to_string()),
            }),
        }
    }

    /// Text of the latest user message, if the host sent one.
    pub fn latest_text(&self) -> Option<&str> {
        self.latest_message.as_ref()?.text.as_deref()
    }
}

/// One message uttered back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMessage {
    pub text: String,
}

/// Tracker event an action asks the host to apply. The lookup action returns none.
pub type ActionEvent = serde_json::Value;
