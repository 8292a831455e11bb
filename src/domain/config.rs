//! # Configuration
//!
//! Manages the loading and parsing of the action server's configuration file (`config.yaml`).
//! Defines the structs for the HTTP listener, the knowledge-base database and log output.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads and parses the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

/// Where the webhook listens for the dialogue host.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}
fn default_server_port() -> u16 {
    5055
}

/// Connection settings for the question/answer store.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_name")]
    pub database: String,
    #[serde(default = "default_db_username")]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_env: Option<String>, // e.g. "CHATBOT_DB_PASSWORD"
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            database: default_db_name(),
            username: default_db_username(),
            password: String::new(),
            password_env: None,
            connect_timeout_secs: default_timeout_secs(),
            query_timeout_secs: default_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    /// The password to connect with. A set `password_env` variable wins over the inline value.
    pub fn resolved_password(&self) -> String {
        self.password_with(|name| std::env::var(name).ok())
    }

    fn password_with(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        self.password_env
            .as_deref()
            .and_then(lookup)
            .unwrap_or_else(|| self.password.clone())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

fn default_db_host() -> String {
    "localhost".to_string()
}
fn default_db_port() -> u16 {
    3306
}
fn default_db_name() -> String {
    "chatbot_db".to_string()
}
fn default_db_username() -> String {
    "root".to_string()
}
fn default_timeout_secs() -> u64 {
    5
}

/// Session log location.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: default_log_file(),
        }
    }
}

fn default_log_directory() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "action-server.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.server.port, 5055);
        assert_eq!(config.server.bind_address(), "0.0.0.0:5055");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.database, "chatbot_db");
        assert_eq!(config.database.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.file, "action-server.log");
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let yaml = r#"
database:
  port: 3307
  query_timeout_secs: 2
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.query_timeout(), Duration::from_secs(2));
        assert_eq!(config.database.username, "root");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 6000\ndatabase:\n  database: faq").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.database.database, "faq");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load(dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(AppConfig::from_yaml("server: [unclosed").is_err());
    }

    #[test]
    fn test_password_env_overrides_inline_password() {
        let config = DatabaseConfig {
            password: "inline".to_string(),
            password_env: Some("DB_PASSWORD".to_string()),
            ..DatabaseConfig::default()
        };
        let set = |name: &str| (name == "DB_PASSWORD").then(|| "from-env".to_string());
        assert_eq!(config.password_with(set), "from-env");
        assert_eq!(config.password_with(|_| None), "inline");
    }

    #[test]
    fn test_unset_password_env_falls_back_to_inline() {
        let config = DatabaseConfig {
            password: "inline".to_string(),
            password_env: Some("KB_ACTION_SERVER_UNSET_DB_PASSWORD_7F3A".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.resolved_password(), "inline");
    }

    #[test]
    fn test_password_without_env_is_inline() {
        let config = DatabaseConfig {
            password: "secret".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.resolved_password(), "secret");
    }
}
