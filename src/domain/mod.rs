//! # Domain Layer
//!
//! Core definitions, types, and traits that define the knowledge-base action.
//! Independent of specific frameworks (mostly), serving as the contract for other layers.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;
