//! Error types for catalog loading and result submission.
//!
//! Catalog failures are recoverable: callers at the load boundary downgrade
//! them to an empty catalog. Submission failures are surfaced to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a catalog dataset.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The dataset file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset is not valid TOML.
    #[error("failed to parse catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A marks field that the input validator rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct InvalidInputError {
    /// The field the value was entered for (usually a test title).
    pub field: String,
    /// Field-level message shown next to the input.
    pub message: String,
}

impl InvalidInputError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors that block a submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submit was requested with nothing selected.
    #[error("no tests selected")]
    NoSelection,

    /// At least one marks field did not validate.
    #[error("invalid input: {}", format_fields(.0))]
    InvalidInput(Vec<InvalidInputError>),
}

impl SubmitError {
    /// Field-level errors, if this is an input error.
    pub fn fields(&self) -> &[InvalidInputError] {
        match self {
            SubmitError::InvalidInput(fields) => fields,
            SubmitError::NoSelection => &[],
        }
    }
}

fn format_fields(fields: &[InvalidInputError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = InvalidInputError::new("Math Quiz", "Must be a valid number");
        assert_eq!(err.to_string(), "Math Quiz: Must be a valid number");
    }

    #[test]
    fn submit_error_lists_every_field() {
        let err = SubmitError::InvalidInput(vec![
            InvalidInputError::new("A", "Must be a valid number"),
            InvalidInputError::new("B", "Must be a valid number"),
        ]);
        let text = err.to_string();
        assert!(text.contains("A: Must be a valid number"));
        assert!(text.contains("B: Must be a valid number"));
        assert_eq!(err.fields().len(), 2);
        assert!(SubmitError::NoSelection.fields().is_empty());
    }
}
