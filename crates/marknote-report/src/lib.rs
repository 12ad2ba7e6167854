//! marknote-report — Message rendering and result export.
//!
//! Turns the submitted result records into the summary message that gets
//! copied, the per-record listing, and a JSON export.

pub mod export;
pub mod message;

pub use message::{render_message, MessageTemplate, PLACEHOLDER};
