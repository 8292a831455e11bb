//! In-memory `KnowledgeStore` for tests. Orders rows by id the way the SQL queries do,
//! counts opened/closed sessions and can fail at a chosen step.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::errors::StoreError;
use crate::domain::traits::{KnowledgeSession, KnowledgeStore};
use crate::domain::types::{AdminAnswer, QuestionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Open,
    Questions,
    Answers,
    Close,
}

#[derive(Debug, Default)]
pub struct SessionCounters {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

impl SessionCounters {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
struct StoredAnswer {
    id: i64,
    answer: AdminAnswer,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    questions: Vec<QuestionRow>,
    answers: Vec<StoredAnswer>,
    failure: Option<Failure>,
    counters: Arc<SessionCounters>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(mut self, id: i64, text: &str, keywords: &str) -> Self {
        self.questions.push(QuestionRow {
            id,
            question_text: text.to_string(),
            keywords: keywords.to_string(),
        });
        self
    }

    pub fn with_answer(
        mut self,
        id: i64,
        question_id: i64,
        answer: &str,
        admin_username: &str,
        active: bool,
    ) -> Self {
        self.answers.push(StoredAnswer {
            id,
            answer: AdminAnswer {
                answer: answer.to_string(),
                question_id,
                admin_username: admin_username.to_string(),
                active,
            },
        });
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn counters(&self) -> Arc<SessionCounters> {
        self.counters.clone()
    }
}

fn refused() -> sqlx::Error {
    sqlx::Error::Io(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
}

#[async_trait]
impl KnowledgeStore for MemoryStore {
    async fn open(&self) -> Result<Box<dyn KnowledgeSession>, StoreError> {
        if self.failure == Some(Failure::Open) {
            return Err(StoreError::Connect(refused()));
        }
        self.counters.opened.fetch_add(1, Ordering::SeqCst);

        let mut questions = self.questions.clone();
        questions.sort_by_key(|q| q.id);
        let mut answers = self.answers.clone();
        answers.sort_by_key(|a| a.id);

        Ok(Box::new(MemorySession {
            questions,
            answers,
            failure: self.failure,
            counters: self.counters.clone(),
        }))
    }
}

struct MemorySession {
    questions: Vec<QuestionRow>,
    answers: Vec<StoredAnswer>,
    failure: Option<Failure>,
    counters: Arc<SessionCounters>,
}

#[async_trait]
impl KnowledgeSession for MemorySession {
    async fn predefined_questions(&mut self) -> Result<Vec<QuestionRow>, StoreError> {
        if self.failure == Some(Failure::Questions) {
            return Err(StoreError::Query(sqlx::Error::PoolClosed));
        }
        Ok(self.questions.clone())
    }

    async fn active_answers(&mut self, question_id: i64) -> Result<Vec<AdminAnswer>, StoreError> {
        if self.failure == Some(Failure::Answers) {
            return Err(StoreError::Query(refused()));
        }
        Ok(self
            .answers
            .iter()
            .filter(|a| a.answer.question_id == question_id && a.answer.active)
            .map(|a| a.answer.clone())
            .collect())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        if self.failure == Some(Failure::Close) {
            return Err(StoreError::Query(refused()));
        }
        Ok(())
    }
}
