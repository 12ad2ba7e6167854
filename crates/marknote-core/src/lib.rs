//! marknote-core — Test catalog, selection state, and result aggregation.
//!
//! This crate defines the data model and the state transitions that the
//! marknote front ends build on: flattening the static test dataset,
//! tracking selected tests, validating entered marks, and collecting
//! submitted results.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod results;
pub mod selection;
pub mod session;
pub mod traits;

pub use catalog::{load_catalog, load_catalog_or_empty, Catalog};
pub use error::{CatalogLoadError, InvalidInputError, SubmitError};
pub use model::{ResultDraft, ResultRecord, TestDescriptor};
pub use session::Session;
