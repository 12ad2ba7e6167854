//! Marks entry: per-test input text and its validation.

use std::collections::BTreeMap;

use crate::error::InvalidInputError;

pub const INVALID_NUMBER: &str = "Must be a valid number";
pub const INVALID_TOTAL: &str = "Must be a positive whole number";

/// Parse an obtained-marks field into a non-negative number. A blank field
/// counts as 0.
pub fn parse_obtained_marks(field: &str, text: &str) -> Result<f64, InvalidInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(InvalidInputError::new(field, INVALID_NUMBER)),
    }
}

/// Parse a manually entered total into a positive whole number.
pub fn parse_total_marks(field: &str, text: &str) -> Result<u32, InvalidInputError> {
    match text.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InvalidInputError::new(field, INVALID_TOTAL)),
    }
}

/// Raw text the user typed for one selected test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkInput {
    pub obtained: String,
    /// Only consulted when the test is not in the catalog.
    pub total: Option<String>,
}

/// Input state for the current selection, keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkInputs {
    entries: BTreeMap<String, MarkInput>,
}

impl MarkInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_obtained(&mut self, title: &str, text: impl Into<String>) {
        self.entries.entry(title.to_string()).or_default().obtained = text.into();
    }

    pub fn set_total(&mut self, title: &str, text: impl Into<String>) {
        self.entries.entry(title.to_string()).or_default().total = Some(text.into());
    }

    pub fn get(&self, title: &str) -> Option<&MarkInput> {
        self.entries.get(title)
    }

    pub fn remove(&mut self, title: &str) {
        self.entries.remove(title);
    }

    /// Keep only the entries whose title passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|title, _| keep(title));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
