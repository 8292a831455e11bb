//! # Answer Lookup
//!
//! The `action_get_admin_answer` action: matches the latest user message against the
//! predefined questions and utters the first active admin answer for the matched question.
//!
//! Every invocation opens its own knowledge-base session and closes it before returning,
//! whichever way the lookup ends. Store failures never leave this module; they are logged
//! and turned into a fixed apology.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::keywords;
use crate::domain::errors::StoreError;
use crate::domain::traits::{Action, Dispatcher, KnowledgeSession, KnowledgeStore};
use crate::domain::types::{ActionEvent, AdminAnswer, Tracker};
use crate::strings::{logs, messages};

pub const ACTION_NAME: &str = "action_get_admin_answer";

/// Result of a lookup that reached the store successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Answered(AdminAnswer),
    /// No question's keywords occur in the utterance.
    NoMatch,
    /// A question matched but has no active answer.
    Unanswered { question_id: i64 },
}

impl LookupOutcome {
    /// Text to send back to the user.
    pub fn into_message(self) -> String {
        match self {
            LookupOutcome::Answered(answer) => {
                tracing::info!(
                    question_id = answer.question_id,
                    admin = %answer.admin_username,
                    "Answering from knowledge base"
                );
                answer.answer
            }
            LookupOutcome::NoMatch => messages::NO_MATCHING_QUESTION.to_string(),
            LookupOutcome::Unanswered { question_id } => {
                tracing::info!(question_id, "Matched question has no active answer");
                messages::NO_ACTIVE_ANSWER.to_string()
            }
        }
    }
}

pub struct AnswerLookupHandler {
    store: Arc<dyn KnowledgeStore>,
}

impl AnswerLookupHandler {
    pub fn new(store: Arc<dyn KnowledgeStore>) -> Self {
        Self { store }
    }

    /// Produces exactly one message for `utterance`. An absent utterance is treated as empty.
    pub async fn handle(&self, utterance: Option<&str>) -> String {
        match self.lookup(utterance.unwrap_or_default()).await {
            Ok(outcome) => outcome.into_message(),
            Err(e) => {
                tracing::error!(category = e.category(), "Database error: {}", e);
                messages::KNOWLEDGE_BASE_UNAVAILABLE.to_string()
            }
        }
    }

    /// Runs the lookup on a fresh session and closes it on every path.
    pub async fn lookup(&self, utterance: &str) -> Result<LookupOutcome, StoreError> {
        let mut session = self.store.open().await?;
        let outcome = resolve(session.as_mut(), utterance).await;

        if let Err(e) = session.close().await {
            tracing::warn!("{}", logs::session_close_failed(&e.to_string()));
        }

        outcome
    }
}

async fn resolve(
    session: &mut dyn KnowledgeSession,
    utterance: &str,
) -> Result<LookupOutcome, StoreError> {
    let rows = session.predefined_questions().await?;

    let Some(question) = keywords::first_match(rows, utterance)? else {
        return Ok(LookupOutcome::NoMatch);
    };
    tracing::info!("{}", logs::question_matched(question.id, &question.question_text));

    let answers = session.active_answers(question.id).await?;
    // `active` is filtered in SQL as well.
    match answers.into_iter().find(|a| a.active) {
        Some(answer) => Ok(LookupOutcome::Answered(answer)),
        None => Ok(LookupOutcome::Unanswered {
            question_id: question.id,
        }),
    }
}

#[async_trait]
impl Action for AnswerLookupHandler {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    async fn run(&self, dispatcher: &mut dyn Dispatcher, tracker: &Tracker) -> Vec<ActionEvent> {
        let reply = self.handle(tracker.latest_text()).await;
        dispatcher.utter(&reply);
        Vec::new()
    }
}
