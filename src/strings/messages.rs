//! # Messages
//!
//! Fixed texts uttered to the user and the error bodies returned to the dialogue host.

pub const NO_MATCHING_QUESTION: &str =
    "I couldn't understand your question. Please try rephrasing it.";
pub const NO_ACTIVE_ANSWER: &str = "I don't have an answer for that question yet.";
pub const KNOWLEDGE_BASE_UNAVAILABLE: &str =
    "Sorry, I'm having trouble accessing my knowledge base.";

pub const NO_ACTION_NAME: &str = "No action name provided.";

pub fn unknown_action(name: &str) -> String {
    format!("No registered action found for name '{name}'.")
}
