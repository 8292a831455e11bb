//! # Keyword Matching
//!
//! Decodes the keyword list stored with each predefined question and finds the first
//! question whose keywords appear in the user's message.
//!
//! Keyword lists are persisted as JSON arrays of strings (`["hours", "open"]`) and decoded
//! with `serde_json`. Stored content is data only; nothing in it is ever executed.

use crate::domain::errors::StoreError;
use crate::domain::types::{PredefinedQuestion, QuestionRow};

/// Decodes a stored keyword list. Anything but an array of strings is rejected.
pub fn parse_keywords(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

impl TryFrom<QuestionRow> for PredefinedQuestion {
    type Error = StoreError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let keywords = parse_keywords(&row.keywords).map_err(|source| {
            StoreError::MalformedKeywords {
                question_id: row.id,
                source,
            }
        })?;
        Ok(Self {
            id: row.id,
            question_text: row.question_text,
            keywords,
        })
    }
}

impl PredefinedQuestion {
    /// True when any keyword occurs in `lowered_utterance`, ignoring case.
    /// The caller lowercases the utterance once per scan.
    pub fn matches(&self, lowered_utterance: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered_utterance.contains(&k.to_lowercase()))
    }
}

/// Scans `rows` in order and returns the first question matching `utterance`.
///
/// Rows are decoded as the scan reaches them, so a malformed row after the match is never
/// looked at. A malformed row before it fails the whole scan.
pub fn first_match<I>(rows: I, utterance: &str) -> Result<Option<PredefinedQuestion>, StoreError>
where
    I: IntoIterator<Item = QuestionRow>,
{
    let lowered = utterance.to_lowercase();
    for row in rows {
        let question = PredefinedQuestion::try_from(row)?;
        if question.matches(&lowered) {
            return Ok(Some(question));
        }
    }
    Ok(None)
}
