//! The set of test titles the user has checked but not yet submitted.

use serde::{Deserialize, Serialize};

/// Ordered set of selected titles, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    titles: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `title` if selected, otherwise append it.
    ///
    /// Returns `true` if the title is selected afterwards.
    pub fn toggle(&mut self, title: &str) -> bool {
        if let Some(pos) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(pos);
            false
        } else {
            self.titles.push(title.to_string());
            true
        }
    }

    /// Replace the whole selection. Duplicates are dropped, first one wins.
    ///
    /// Single-select front ends pass zero or one title.
    pub fn replace<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles.clear();
        for title in titles {
            let title = title.into();
            if !self.contains(&title) {
                self.titles.push(title);
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.titles.clear();
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Selected titles in the order they were chosen.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Selector button label.
    pub fn label(&self) -> String {
        match self.titles.len() {
            0 => "Select tests...".to_string(),
            1 => "1 test selected".to_string(),
            n => format!("{n} tests selected"),
        }
    }
}
