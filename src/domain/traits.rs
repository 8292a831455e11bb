//! # Domain Traits
//!
//! Abstract interfaces for the pieces the lookup action talks to (store, dispatch channel)
//! and for actions themselves. Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::types::{ActionEvent, AdminAnswer, QuestionRow, Tracker};

/// Outbound channel back to the dialogue host.
pub trait Dispatcher: Send {
    /// Queue a text message for the user.
    fn utter(&mut self, text: &str);
}

/// Source of knowledge-base sessions. Each invocation opens its own.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn open(&self) -> Result<Box<dyn KnowledgeSession>, StoreError>;
}

/// One open connection to the question/answer tables.
#[async_trait]
pub trait KnowledgeSession: Send {
    /// All predefined questions, ascending by id.
    async fn predefined_questions(&mut self) -> Result<Vec<QuestionRow>, StoreError>;

    /// Active answers for `question_id`, ascending by answer id.
    async fn active_answers(&mut self, question_id: i64) -> Result<Vec<AdminAnswer>, StoreError>;

    /// Release the connection.
    async fn close(self: Box<Self>) -> Result<(), StoreError>;
}

/// A custom action the dialogue host can call by name.
#[async_trait]
pub trait Action: Send + Sync {
    /// Identifier the host routes on.
    fn name(&self) -> &'static str;

    async fn run(&self, dispatcher: &mut dyn Dispatcher, tracker: &Tracker) -> Vec<ActionEvent>;
}
