//! # Domain Errors
//!
//! Failures that can occur while reading the knowledge base.
//! All of them end up as the same apology to the user; the variants exist for the logs.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to the knowledge base: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("timed out after {0:?} connecting to the knowledge base")]
    ConnectTimeout(Duration),

    #[error("knowledge base query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("knowledge base query timed out after {0:?}")]
    QueryTimeout(Duration),

    #[error("question {question_id} has a malformed keyword list: {source}")]
    MalformedKeywords {
        question_id: i64,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Coarse failure class used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            StoreError::Connect(_) | StoreError::ConnectTimeout(_) => "connectivity",
            StoreError::Query(_) | StoreError::QueryTimeout(_) => "query",
            StoreError::MalformedKeywords { .. } => "malformed_keywords",
        }
    }
}
