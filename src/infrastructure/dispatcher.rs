//! # Collecting Dispatcher
//!
//! Implements the `Dispatcher` trait by buffering uttered messages until the action returns,
//! so they can be sent back to the dialogue host in one webhook response.

use crate::domain::traits::Dispatcher;
use crate::domain::types::BotMessage;

#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were uttered.
    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter(&mut self, text: &str) {
        tracing::debug!("Bot uttering: {}", text);
        self.messages.push(BotMessage {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_utterance_order() {
        let mut dispatcher = CollectingDispatcher::new();
        dispatcher.utter("first");
        dispatcher.utter("second");

        let texts: Vec<_> = dispatcher.into_messages().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
