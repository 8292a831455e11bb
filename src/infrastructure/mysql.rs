//! # MySQL Knowledge Store
//!
//! Implements `KnowledgeStore` over MySQL using `sqlx`.
//! Opens one connection per action call (no pool) and bounds the connect and every query
//! with the timeouts from `DatabaseConfig`.

use async_trait::async_trait;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use std::future::Future;
use std::time::Duration;

use crate::domain::config::DatabaseConfig;
use crate::domain::errors::StoreError;
use crate::domain::traits::{KnowledgeSession, KnowledgeStore};
use crate::domain::types::{AdminAnswer, QuestionRow};

const QUESTIONS_SQL: &str = r#"
    SELECT CAST(id AS SIGNED) AS id,
           question_text,
           CAST(keywords AS CHAR) AS keywords
    FROM predefined_questions
    ORDER BY id ASC
"#;

const ACTIVE_ANSWERS_SQL: &str = r#"
    SELECT a.answer,
           CAST(a.question_id AS SIGNED) AS question_id,
           ad.username AS admin_username,
           a.active
    FROM admin_answers a
    JOIN admins ad ON a.admin_id = ad.id
    WHERE a.question_id = ? AND a.active = 1
    ORDER BY a.id ASC
"#;

#[derive(Debug, Clone)]
pub struct MySqlKnowledgeStore {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl MySqlKnowledgeStore {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.username)
            .password(&config.resolved_password());

        Self {
            options,
            connect_timeout: config.connect_timeout(),
            query_timeout: config.query_timeout(),
        }
    }
}

#[async_trait]
impl KnowledgeStore for MySqlKnowledgeStore {
    async fn open(&self) -> Result<Box<dyn KnowledgeSession>, StoreError> {
        let conn = tokio::time::timeout(
            self.connect_timeout,
            MySqlConnection::connect_with(&self.options),
        )
        .await
        .map_err(|_| StoreError::ConnectTimeout(self.connect_timeout))?
        .map_err(StoreError::Connect)?;

        Ok(Box::new(MySqlSession {
            conn,
            query_timeout: self.query_timeout,
        }))
    }
}

/// An open MySQL connection. Dropping it without `close` still releases the socket.
struct MySqlSession {
    conn: MySqlConnection,
    query_timeout: Duration,
}

#[async_trait]
impl KnowledgeSession for MySqlSession {
    async fn predefined_questions(&mut self) -> Result<Vec<QuestionRow>, StoreError> {
        let query = sqlx::query_as::<_, QuestionRow>(QUESTIONS_SQL).fetch_all(&mut self.conn);
        bounded(self.query_timeout, query).await
    }

    async fn active_answers(&mut self, question_id: i64) -> Result<Vec<AdminAnswer>, StoreError> {
        let query = sqlx::query_as::<_, AdminAnswer>(ACTIVE_ANSWERS_SQL)
            .bind(question_id)
            .fetch_all(&mut self.conn);
        bounded(self.query_timeout, query).await
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        let limit = self.query_timeout;
        bounded(limit, self.conn.close()).await
    }
}

async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| StoreError::QueryTimeout(limit))?
        .map_err(StoreError::Query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refused_connection_is_connectivity_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            connect_timeout_secs: 2,
            ..DatabaseConfig::default()
        };
        let store = MySqlKnowledgeStore::new(&config);

        let err = match store.open().await {
            Ok(_) => panic!("nothing should be listening on port 1"),
            Err(e) => e,
        };
        assert_eq!(err.category(), "connectivity");
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, sqlx::Error>(())
        };
        let err = bounded(Duration::from_millis(10), slow).await.unwrap_err();
        assert!(matches!(err, StoreError::QueryTimeout(_)));
    }

    #[tokio::test]
    async fn test_bounded_maps_query_errors() {
        let failing = async { Err::<(), _>(sqlx::Error::RowNotFound) };
        let err = bounded(Duration::from_secs(1), failing).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_sql_declares_order() {
        assert!(QUESTIONS_SQL.contains("ORDER BY id ASC"));
        assert!(ACTIVE_ANSWERS_SQL.contains("a.active = 1"));
        assert!(ACTIVE_ANSWERS_SQL.contains("ORDER BY a.id ASC"));
    }
}
