//! JSON export of result records.

use anyhow::{Context, Result};
use serde::Serialize;

use marknote_core::ResultRecord;

use crate::message::{render_message, MessageTemplate};

/// Results together with the message they render to.
#[derive(Debug, Serialize)]
pub struct ResultExport<'a> {
    pub count: usize,
    pub results: &'a [ResultRecord],
    pub message: String,
}

impl<'a> ResultExport<'a> {
    pub fn new(records: &'a [ResultRecord], template: &MessageTemplate) -> Self {
        Self {
            count: records.len(),
            results: records,
            message: render_message(records, template),
        }
    }
}

/// Pretty-printed JSON for `records`.
pub fn export_json(records: &[ResultRecord], template: &MessageTemplate) -> Result<String> {
    serde_json::to_string_pretty(&ResultExport::new(records, template))
        .context("failed to serialize results")
}
