//! # Action Registry
//!
//! Routes an incoming action call from the dialogue host to the action registered under
//! that name, runs it with a fresh dispatcher and collects what it uttered.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::traits::Action;
use crate::domain::types::{ActionEvent, BotMessage, Tracker};
use crate::infrastructure::dispatcher::CollectingDispatcher;
use crate::strings::logs;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no registered action found for name '{0}'")]
    UnknownAction(String),
}

/// Everything one action run produced.
#[derive(Debug, Default)]
pub struct ActionOutcome {
    pub events: Vec<ActionEvent>,
    pub responses: Vec<BotMessage>,
}

#[derive(Default, Clone)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under its own name, replacing any previous holder of that name.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let name = action.name();
        if self.actions.insert(name, action).is_some() {
            tracing::warn!("{}", logs::action_replaced(name));
        } else {
            tracing::info!("{}", logs::action_registered(name));
        }
    }

    pub fn with(mut self, action: Arc<dyn Action>) -> Self {
        self.register(action);
        self
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub async fn run(&self, name: &str, tracker: &Tracker) -> Result<ActionOutcome, RegistryError> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| RegistryError::UnknownAction(name.to_string()))?;

        tracing::info!(
            "Registry dispatching action='{}' sender='{}'",
            name,
            tracker.sender_id.as_deref().unwrap_or("unknown")
        );

        let mut dispatcher = CollectingDispatcher::new();
        let events = action.run(&mut dispatcher, tracker).await;

        Ok(ActionOutcome {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}
