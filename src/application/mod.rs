//! # Application Layer
//!
//! Contains the core logic of the action server: keyword matching, the answer lookup
//! action, and routing of host calls to registered actions.

pub mod handler;
pub mod keywords;
pub mod registry;
