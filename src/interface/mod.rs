//! # Interface Layer
//!
//! The HTTP webhook through which the dialogue host invokes actions.

pub mod dto;
pub mod webhook;
