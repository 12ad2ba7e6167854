//! Page-level state container.
//!
//! A [`Session`] owns everything a single page instance holds: the catalog,
//! the current selection, the marks typed for it, and the submitted results.
//! Each method is one user interaction and runs to completion.

use uuid::Uuid;

use crate::aggregate::aggregate;
use crate::catalog::Catalog;
use crate::error::SubmitError;
use crate::input::MarkInputs;
use crate::model::ResultRecord;
use crate::results::ResultList;
use crate::selection::SelectionSet;
use crate::traits::{Clipboard, MessageRenderer, Notice, Notifier};

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    selection: SelectionSet,
    inputs: MarkInputs,
    results: ResultList,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn inputs(&self) -> &MarkInputs {
        &self.inputs
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// Check or uncheck a title. Unchecking discards its typed marks.
    pub fn toggle(&mut self, title: &str) -> bool {
        let selected = self.selection.toggle(title);
        if !selected {
            self.inputs.remove(title);
        }
        selected
    }

    /// Single-select: make `title` the only selection, or select nothing.
    pub fn select_only(&mut self, title: Option<&str>) {
        self.selection.replace(title);
        let selection = &self.selection;
        self.inputs.retain(|t| selection.contains(t));
    }

    /// Empty the selection and every typed mark.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        self.inputs.clear();
    }

    pub fn set_obtained(&mut self, title: &str, text: impl Into<String>) {
        self.inputs.set_obtained(title, text);
    }

    pub fn set_total(&mut self, title: &str, text: impl Into<String>) {
        self.inputs.set_total(title, text);
    }

    /// Turn the selection into result records.
    ///
    /// On success the records are appended, selection and inputs are reset,
    /// and a success notice is sent. On failure nothing changes.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Result<Vec<ResultRecord>, SubmitError> {
        let drafts = match aggregate(&self.selection, &self.inputs, &self.catalog) {
            Ok(drafts) => drafts,
            Err(SubmitError::NoSelection) => {
                notifier.notify(&Notice::destructive(
                    "No tests selected",
                    "Please select at least one test.",
                ));
                return Err(SubmitError::NoSelection);
            }
            Err(e) => {
                tracing::debug!("submit rejected: {e}");
                return Err(e);
            }
        };

        let added = self.results.append(drafts).to_vec();
        self.clear_all();

        tracing::info!(added = added.len(), total = self.results.len(), "results added");
        notifier.notify(&Notice::success(
            "Tests added successfully",
            added_description(added.len()),
        ));

        Ok(added)
    }

    /// Remove a submitted record by id.
    pub fn remove(&mut self, id: Uuid) -> Option<ResultRecord> {
        self.results.remove(id)
    }

    pub fn message(&self, renderer: &dyn MessageRenderer) -> String {
        renderer.render(self.results.as_slice())
    }

    /// Render the message and hand it to the clipboard.
    ///
    /// The outcome is only reported through `notifier`.
    pub fn copy_message(
        &self,
        renderer: &dyn MessageRenderer,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
    ) {
        let message = self.message(renderer);
        match clipboard.write_text(&message) {
            Ok(()) => notifier.notify(&Notice::success(
                "Copied to clipboard",
                "The message has been copied to your clipboard.",
            )),
            Err(e) => {
                tracing::warn!("clipboard write failed: {e:#}");
                notifier.notify(&Notice::destructive("Copy failed", format!("{e:#}")));
            }
        }
    }
}

/// "1 test added to the list." / "N tests added to the list."
pub fn added_description(count: usize) -> String {
    let noun = if count == 1 { "test" } else { "tests" };
    format!("{count} {noun} added to the list.")
}
