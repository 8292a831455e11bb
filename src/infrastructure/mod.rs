//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., KnowledgeStore, Dispatcher).

pub mod dispatcher;
#[cfg(test)]
pub mod memory;
pub mod mysql;
