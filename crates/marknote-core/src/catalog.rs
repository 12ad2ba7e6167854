//! Test catalog loading and flattening.
//!
//! The static dataset nests tests as categories → subjects → topics → tests.
//! This module reads it into typed intermediate records, fills defaults at
//! every level, and flattens it into a list of [`TestDescriptor`]s.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CatalogLoadError;
use crate::model::{TestDescriptor, UNKNOWN_TOPIC};

// ---------------------------------------------------------------------------
// Intermediate dataset records
// ---------------------------------------------------------------------------

/// Top level of the static dataset.
#[derive(Debug, Default, Deserialize)]
pub struct RawDataset {
    /// `None` when the field is missing or is not a sequence.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub subjects: Option<Vec<RawSubject>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSubject {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub topics: Option<Vec<RawTopic>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTopic {
    /// The topic's display name.
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub tests: Option<Vec<RawTest>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTest {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub questions: Option<String>,
    #[serde(default, alias = "isGiven", deserialize_with = "lenient")]
    pub isgiven: Option<bool>,
    #[serde(default, rename = "totalQuestions", deserialize_with = "lenient_count")]
    pub total_questions: Option<u32>,
}

/// Accept any value, keeping it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accept any number that is a whole, non-negative count, including `20.0`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

/// Accept any value; a sequence keeps the object elements that have the
/// expected shape, anything else becomes `None`.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        // Derived records also accept arrays positionally, so only objects count
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

/// Flatten a dataset into test descriptors, in document order.
///
/// Missing or malformed levels are skipped. Tests without a title are
/// dropped. A dataset without a `categories` sequence yields nothing.
pub fn flatten(dataset: &RawDataset) -> Vec<TestDescriptor> {
    let Some(categories) = &dataset.categories else {
        tracing::warn!("invalid or missing categories in catalog data");
        return Vec::new();
    };

    let mut tests = Vec::new();

    for category in categories {
        let Some(subjects) = &category.subjects else {
            tracing::debug!(category = ?category.name, "category has no subjects, skipping");
            continue;
        };
        for subject in subjects {
            let Some(topics) = &subject.topics else {
                tracing::debug!(subject = ?subject.name, "subject has no topics, skipping");
                continue;
            };
            for topic in topics {
                let Some(entries) = &topic.tests else {
                    tracing::debug!(topic = ?topic.topic, "topic has no tests, skipping");
                    continue;
                };
                let topic_name = topic
                    .topic
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(UNKNOWN_TOPIC);

                for entry in entries {
                    let Some(title) = entry.title.as_deref().filter(|t| !t.is_empty()) else {
                        tracing::debug!(topic = topic_name, "test entry has no title, skipping");
                        continue;
                    };
                    tests.push(TestDescriptor {
                        title: title.to_string(),
                        questions: entry.questions.clone().unwrap_or_default(),
                        is_given: entry.isgiven.unwrap_or(false),
                        total_questions: entry.total_questions.unwrap_or(0),
                        topic: topic_name.to_string(),
                    });
                }
            }
        }
    }

    tests
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The flattened, in-memory list of available tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tests: Vec<TestDescriptor>,
}

impl Catalog {
    pub fn new(tests: Vec<TestDescriptor>) -> Self {
        Self { tests }
    }

    /// Flatten a dataset into a catalog.
    pub fn from_dataset(dataset: &RawDataset) -> Self {
        Self::new(flatten(dataset))
    }

    /// First test whose title matches exactly.
    pub fn find(&self, title: &str) -> Option<&TestDescriptor> {
        self.tests.iter().find(|t| t.title == title)
    }

    /// Tests whose title or topic contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&TestDescriptor> {
        self.tests.iter().filter(|t| t.matches(query)).collect()
    }

    /// Distinct topic names in document order.
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tests
            .iter()
            .map(|t| t.topic.as_str())
            .filter(|topic| seen.insert(*topic))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestDescriptor> {
        self.tests.iter()
    }

    pub fn as_slice(&self) -> &[TestDescriptor] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TestDescriptor;
    type IntoIter = std::slice::Iter<'a, TestDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Serialization format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "toml") {
            CatalogFormat::Toml
        } else {
            CatalogFormat::Json
        }
    }
}

/// Parse dataset text into a catalog.
pub fn parse_catalog_str(content: &str, format: CatalogFormat) -> Result<Catalog, CatalogLoadError> {
    let dataset: RawDataset = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };
    Ok(Catalog::from_dataset(&dataset))
}

/// Read and flatten a dataset file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog_str(&content, CatalogFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), tests = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Read a dataset file, degrading any failure to an empty catalog.
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("error processing catalog data: {e}");
            Catalog::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A warning from catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The test title (if applicable).
    pub title: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for entries that will behave surprisingly.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            title: None,
            message: "catalog contains no tests".into(),
        });
        return warnings;
    }

    // Lookups go by title, so later duplicates are unreachable
    let mut seen = HashSet::new();
    for test in catalog {
        if !seen.insert(test.title.as_str()) {
            warnings.push(ValidationWarning {
                title: Some(test.title.clone()),
                message: format!("duplicate title: {}", test.title),
            });
        }
    }

    for test in catalog {
        if test.total_questions == 0 {
            warnings.push(ValidationWarning {
                title: Some(test.title.clone()),
                message: "totalQuestions is missing or zero; results will be out of 0".into(),
            });
        }
    }

    for test in catalog {
        if test.topic == UNKNOWN_TOPIC {
            warnings.push(ValidationWarning {
                title: Some(test.title.clone()),
                message: "topic has no name".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "categories": [
            {
                "name": "Science",
                "subjects": [
                    {
                        "name": "Maths",
                        "topics": [
                            {
                                "topic": "Algebra",
                                "tests": [
                                    { "title": "Algebra 1", "questions": "1-20", "isgiven": true, "totalQuestions": 20 },
                                    { "title": "Algebra 2", "totalQuestions": 25 }
                                ]
                            },
                            {
                                "tests": [ { "title": "Loose Test" } ]
                            }
                        ]
                    },
                    { "name": "Physics" }
                ]
            },
            { "name": "Empty" }
        ]
    }"#;

    fn parse(json: &str) -> Catalog {
        parse_catalog_str(json, CatalogFormat::Json).unwrap()
    }

    #[test]
    fn flatten_preserves_document_order() {
        let catalog = parse(DATASET);
        let titles: Vec<_> = catalog.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Algebra 1", "Algebra 2", "Loose Test"]);
    }

    #[test]
    fn flatten_fills_defaults() {
        let catalog = parse(DATASET);

        let first = catalog.find("Algebra 1").unwrap();
        assert_eq!(first.questions, "1-20");
        assert!(first.is_given);
        assert_eq!(first.total_questions, 20);
        assert_eq!(first.topic, "Algebra");

        let second = catalog.find("Algebra 2").unwrap();
        assert_eq!(second.questions, "");
        assert!(!second.is_given);

        let loose = catalog.find("Loose Test").unwrap();
        assert_eq!(loose.total_questions, 0);
        assert_eq!(loose.topic, UNKNOWN_TOPIC);
    }

    #[test]
    fn missing_categories_yields_empty() {
        assert!(parse("{}").is_empty());
        assert!(parse(r#"{"categories": null}"#).is_empty());
        assert!(parse(r#"{"categories": {"not": "a list"}}"#).is_empty());
        assert!(parse(r#"{"categories": "nope"}"#).is_empty());
    }

    #[test]
    fn malformed_levels_are_skipped() {
        let json = r#"{
            "categories": [
                null,
                42,
                [ "Cat", [ [ "Subj", [ { "topic": "Positional", "tests": [ { "title": "Hidden" } ] } ] ] ] ],
                { "subjects": "oops" },
                { "subjects": [ { "topics": 7 }, { "topics": [ { "topic": "T", "tests": {} } ] } ] },
                { "subjects": [ { "topics": [ { "topic": "Kept", "tests": [
                    null,
                    "string entry",
                    ["Phantom"],
                    ["Phantom", "1-5", true, 5],
                    { "title": "" },
                    { "questions": "no title" },
                    { "title": "Survivor", "totalQuestions": "ten", "isgiven": "yes" }
                ] } ] } ] }
            ]
        }"#;
        let catalog = parse(json);
        assert_eq!(catalog.len(), 1);
        let test = catalog.find("Survivor").unwrap();
        assert_eq!(test.topic, "Kept");
        assert_eq!(test.total_questions, 0);
        assert!(!test.is_given);
        assert!(catalog.find("Phantom").is_none());
        assert!(catalog.find("Hidden").is_none());
    }

    #[test]
    fn whole_number_totals_accept_float_form() {
        let json = r#"{"categories":[{"subjects":[{"topics":[{"topic":"T","tests":[
            {"title":"Whole","totalQuestions":20.0},
            {"title":"Plain","totalQuestions":20},
            {"title":"Fraction","totalQuestions":20.5},
            {"title":"Negative","totalQuestions":-3},
            {"title":"Huge","totalQuestions":1e12}
        ]}]}]}]}"#;
        let catalog = parse(json);
        let total = |title: &str| catalog.find(title).unwrap().total_questions;
        assert_eq!(total("Whole"), 20);
        assert_eq!(total("Plain"), 20);
        assert_eq!(total("Fraction"), 0);
        assert_eq!(total("Negative"), 0);
        assert_eq!(total("Huge"), 0);
    }

    #[test]
    fn empty_topic_name_falls_back() {
        let json = r#"{"categories":[{"subjects":[{"topics":[{"topic":"","tests":[{"title":"A"}]}]}]}]}"#;
        assert_eq!(parse(json).find("A").unwrap().topic, UNKNOWN_TOPIC);
    }

    #[test]
    fn accepts_camel_case_is_given() {
        let json = r#"{"categories":[{"subjects":[{"topics":[{"topic":"T","tests":[{"title":"A","isGiven":true}]}]}]}]}"#;
        assert!(parse(json).find("A").unwrap().is_given);
    }

    #[test]
    fn invalid_json_is_a_load_error() {
        let err = parse_catalog_str("{ not json", CatalogFormat::Json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }

    #[test]
    fn top_level_array_is_a_load_error() {
        assert!(parse_catalog_str("[1, 2, 3]", CatalogFormat::Json).is_err());
    }

    #[test]
    fn parse_toml_dataset() {
        let toml = r#"
[[categories]]
name = "Languages"

[[categories.subjects]]
name = "English"

[[categories.subjects.topics]]
topic = "Grammar"

[[categories.subjects.topics.tests]]
title = "Tenses"
totalQuestions = 15
"#;
        let catalog = parse_catalog_str(toml, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("Tenses").unwrap().total_questions, 15);
    }

    #[test]
    fn find_returns_first_duplicate() {
        let json = r#"{"categories":[{"subjects":[{"topics":[{"topic":"T","tests":[
            {"title":"Dup","totalQuestions":1},
            {"title":"Dup","totalQuestions":2}
        ]}]}]}]}"#;
        let catalog = parse(json);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("Dup").unwrap().total_questions, 1);
    }

    #[test]
    fn search_matches_title_and_topic() {
        let catalog = parse(DATASET);
        assert_eq!(catalog.search("algebra 2").len(), 1);
        assert_eq!(catalog.search("ALGEBRA").len(), 2);
        assert_eq!(catalog.search("unknown").len(), 1);
        assert_eq!(catalog.search("").len(), 3);
        assert!(catalog.search("chemistry").is_empty());
    }

    #[test]
    fn topics_are_distinct_in_order() {
        let catalog = parse(DATASET);
        assert_eq!(catalog.topics(), vec!["Algebra", UNKNOWN_TOPIC]);
    }

    #[test]
    fn load_or_empty_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog_or_empty(&dir.path().join("missing.json"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATASET).unwrap();
        assert_eq!(load_catalog(&path).unwrap().len(), 3);
    }

    #[test]
    fn validate_reports_problems() {
        let json = r#"{"categories":[{"subjects":[{"topics":[{"tests":[
            {"title":"Dup","totalQuestions":1},
            {"title":"Dup","totalQuestions":2}
        ]}]}]}]}"#;
        let warnings = validate_catalog(&parse(json));
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("topic has no name")));

        let zero = validate_catalog(&parse(DATASET));
        assert!(zero
            .iter()
            .any(|w| w.title.as_deref() == Some("Loose Test") && w.message.contains("zero")));
    }

    #[test]
    fn validate_empty_catalog() {
        let warnings = validate_catalog(&Catalog::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no tests"));
    }
}
