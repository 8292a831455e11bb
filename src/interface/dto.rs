//! # Webhook DTOs
//!
//! Wire types of the custom-action webhook the dialogue host calls.

use serde::{Deserialize, Serialize};

use crate::application::registry::ActionOutcome;
use crate::domain::types::{ActionEvent, BotMessage, Tracker};

/// Body of `POST /webhook`.
#[derive(Debug, Default, Deserialize)]
pub struct ActionCall {
    #[serde(default)]
    pub next_action: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    #[serde(default)]
    pub version: Option<String>,
}

impl ActionCall {
    /// Requested action name, if present and not blank.
    pub fn action_name(&self) -> Option<&str> {
        self.next_action
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// The tracker, with the top-level `sender_id` filled in when the tracker lacks one.
    pub fn into_tracker(self) -> Tracker {
        let mut tracker = self.tracker;
        if tracker.sender_id.is_none() {
            tracker.sender_id = self.sender_id;
        }
        tracker
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<ActionEvent>,
    pub responses: Vec<ResponseMessage>,
}

impl From<ActionOutcome> for ActionResponse {
    fn from(outcome: ActionOutcome) -> Self {
        Self {
            events: outcome.events,
            responses: outcome.responses.into_iter().map(ResponseMessage::from).collect(),
        }
    }
}

/// One bot message in the layout the host expects, with the rich-content slots left empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub text: String,
    #[serde(default)]
    pub buttons: Vec<serde_json::Value>,
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
    #[serde(default)]
    pub custom: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attachment: Option<serde_json::Value>,
    #[serde(default)]
    pub response: Option<String>,
}

impl From<BotMessage> for ResponseMessage {
    fn from(message: BotMessage) -> Self {
        Self {
            text: message.text,
            buttons: Vec::new(),
            elements: Vec::new(),
            custom: serde_json::Map::new(),
            image: None,
            attachment: None,
            response: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionError {
    pub error: String,
    pub action_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionInfo {
    pub name: String,
}
