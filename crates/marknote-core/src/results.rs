//! The page-level collection of submitted result records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{ResultDraft, ResultRecord};

/// Result records in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList {
    records: Vec<ResultRecord>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give each draft a fresh id and append it. Existing records are never
    /// replaced, so the same test name may appear more than once.
    ///
    /// Returns the newly added records.
    pub fn append(&mut self, drafts: Vec<ResultDraft>) -> &[ResultRecord] {
        let start = self.records.len();
        self.records
            .extend(drafts.into_iter().map(ResultRecord::from_draft));
        &self.records[start..]
    }

    /// Remove the record with `id`, keeping the others in order.
    pub fn remove(&mut self, id: Uuid) -> Option<ResultRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    pub fn get(&self, id: Uuid) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, obtained: f64, total: u32) -> ResultDraft {
        ResultDraft {
            name: name.into(),
            obtained_marks: obtained,
            total_marks: total,
        }
    }

    #[test]
    fn append_returns_new_records_only() {
        let mut list = ResultList::new();
        list.append(vec![draft("A", 1.0, 2)]);
        let added: Vec<_> = list
            .append(vec![draft("B", 3.0, 4), draft("C", 5.0, 6)])
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(added, vec!["B", "C"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn same_name_twice_gives_two_records() {
        let mut list = ResultList::new();
        list.append(vec![draft("A", 1.0, 2)]);
        list.append(vec![draft("A", 1.0, 2)]);
        assert_eq!(list.len(), 2);
        assert_ne!(list.as_slice()[0].id, list.as_slice()[1].id);
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut list = ResultList::new();
        list.append(vec![
            draft("A", 1.0, 2),
            draft("B", 1.0, 2),
            draft("C", 1.0, 2),
            draft("D", 1.0, 2),
        ]);
        let target = list.as_slice()[1].id;

        let removed = list.remove(target).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<_> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert!(list.get(target).is_none());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = ResultList::new();
        list.append(vec![draft("A", 1.0, 2)]);
        assert!(list.remove(Uuid::nil()).is_none());
        assert_eq!(list.len(), 1);
    }
}
