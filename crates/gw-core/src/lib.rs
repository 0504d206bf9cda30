//! gw-core - Core library for giveaway
//!
//! This crate provides the draw pipeline: mention extraction, the
//! exact-distinct-mentions rule, ticket assignment, the weighted draw, the
//! session context tying them together, and report export.

pub mod comment;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod session;
pub mod ticket;
pub mod types;

pub use error::{GiveawayError, Result};
pub use types::*;
