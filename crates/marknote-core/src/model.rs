//! Core data model types for marknote.
//!
//! These are the types shared by the catalog, the aggregator and the
//! renderer: a flattened test descriptor and a submitted result record.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Topic name used when a dataset topic has no name.
pub const UNKNOWN_TOPIC: &str = "Unknown Topic";

/// Metadata for one test in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDescriptor {
    /// Title, the lookup key within a catalog.
    pub title: String,
    /// Free-form question reference carried through from the dataset.
    #[serde(default)]
    pub questions: String,
    /// Whether the test has already been given.
    #[serde(default, rename = "isgiven", alias = "isGiven")]
    pub is_given: bool,
    /// Number of questions, used as the total marks.
    #[serde(default)]
    pub total_questions: u32,
    /// Name of the topic the test belongs to.
    pub topic: String,
}

impl TestDescriptor {
    /// Whether the title or topic contains `query`, ignoring case. An empty
    /// query matches every test.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.topic.to_lowercase().contains(&needle)
    }
}

/// A result before it has been given an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDraft {
    pub name: String,
    pub obtained_marks: f64,
    pub total_marks: u32,
}

/// A submitted pairing of a test name with obtained and total marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Unique within the current result list.
    pub id: Uuid,
    /// Catalog title, or free text when the lookup failed.
    pub name: String,
    /// Not checked against `total_marks`.
    pub obtained_marks: f64,
    pub total_marks: u32,
}

impl ResultRecord {
    /// Assign a fresh id to a draft.
    pub fn from_draft(draft: ResultDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            obtained_marks: draft.obtained_marks,
            total_marks: draft.total_marks,
        }
    }

    /// The `obtained/total` score text.
    pub fn score(&self) -> Score {
        Score {
            obtained: self.obtained_marks,
            total: self.total_marks,
        }
    }
}

/// Obtained and total marks, displayed as `8/10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub obtained: f64,
    pub total: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.obtained, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_display_drops_trailing_zero() {
        let whole = Score {
            obtained: 8.0,
            total: 10,
        };
        assert_eq!(whole.to_string(), "8/10");

        let half = Score {
            obtained: 7.5,
            total: 10,
        };
        assert_eq!(half.to_string(), "7.5/10");
    }

    #[test]
    fn descriptor_uses_dataset_field_names() {
        let test = TestDescriptor {
            title: "Algebra 1".into(),
            questions: "1-20".into(),
            is_given: true,
            total_questions: 20,
            topic: "Algebra".into(),
        };
        let json = serde_json::to_value(&test).unwrap();
        assert_eq!(json["isgiven"], true);
        assert_eq!(json["totalQuestions"], 20);

        let parsed: TestDescriptor = serde_json::from_str(
            r#"{"title":"T","isGiven":true,"totalQuestions":5,"topic":"X"}"#,
        )
        .unwrap();
        assert!(parsed.is_given);
        assert_eq!(parsed.questions, "");
    }

    #[test]
    fn from_draft_assigns_distinct_ids() {
        let draft = ResultDraft {
            name: "Math Quiz".into(),
            obtained_marks: 8.0,
            total_marks: 10,
        };
        let a = ResultRecord::from_draft(draft.clone());
        let b = ResultRecord::from_draft(draft);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.score().to_string(), "8/10");
    }
}
