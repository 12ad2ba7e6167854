//! Turns a selection plus entered marks into result drafts.

use crate::catalog::Catalog;
use crate::error::{InvalidInputError, SubmitError};
use crate::input::{parse_obtained_marks, parse_total_marks, MarkInputs};
use crate::model::ResultDraft;
use crate::selection::SelectionSet;

/// Build one draft per selected title, in selection order.
///
/// Total marks come from the catalog entry with the same title. Titles the
/// catalog does not know use the manually entered total, or 0 if none was
/// given. Every field is checked before anything is returned, so a single
/// bad field rejects the whole batch.
pub fn aggregate(
    selection: &SelectionSet,
    inputs: &MarkInputs,
    catalog: &Catalog,
) -> Result<Vec<ResultDraft>, SubmitError> {
    if selection.is_empty() {
        return Err(SubmitError::NoSelection);
    }

    let mut drafts = Vec::with_capacity(selection.len());
    let mut errors: Vec<InvalidInputError> = Vec::new();

    for title in selection.titles() {
        let input = inputs.get(title);
        let obtained_text = input.map(|i| i.obtained.as_str()).unwrap_or("");

        let obtained = match parse_obtained_marks(title, obtained_text) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let total = match catalog.find(title) {
            Some(test) => Some(test.total_questions),
            None => match input.and_then(|i| i.total.as_deref()) {
                Some(text) => match parse_total_marks(title, text) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        errors.push(e);
                        None
                    }
                },
                None => {
                    tracing::debug!(title = %title, "title not in catalog, total marks default to 0");
                    Some(0)
                }
            },
        };

        if let (Some(obtained_marks), Some(total_marks)) = (obtained, total) {
            drafts.push(ResultDraft {
                name: title.clone(),
                obtained_marks,
                total_marks,
            });
        }
    }

    if !errors.is_empty() {
        return Err(SubmitError::InvalidInput(errors));
    }

    Ok(drafts)
}
