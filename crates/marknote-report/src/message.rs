//! Summary message generator.
//!
//! Produces the prose message the user copies:
//!
//! ```text
//! Hi Sir,
//!
//! Just wanted to update you about my test results - in Math Quiz I got 8/10, in Lenses I got 12/15.
//!
//! Thanks!
//!
//! Regards
//! ```
//!
//! Names and numbers are inserted verbatim, without escaping.

use marknote_core::config::MessageConfig;
use marknote_core::traits::MessageRenderer;
use marknote_core::ResultRecord;

/// Shown instead of a message while there are no results.
pub const PLACEHOLDER: &str = "Please add some test results to generate a message.";

const INTRO: &str = "Just wanted to update you about my test results - ";

/// The wording around the result sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub greeting: String,
    pub closing: String,
    pub signoff: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::from(&MessageConfig::default())
    }
}

impl From<&MessageConfig> for MessageTemplate {
    fn from(config: &MessageConfig) -> Self {
        Self {
            greeting: config.greeting.clone(),
            closing: config.closing.clone(),
            signoff: config.signoff.clone(),
        }
    }
}

impl MessageRenderer for MessageTemplate {
    fn render(&self, records: &[ResultRecord]) -> String {
        render_message(records, self)
    }
}

/// Render the summary message for `records`, in their current order.
pub fn render_message(records: &[ResultRecord], template: &MessageTemplate) -> String {
    if records.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let results = records
        .iter()
        .map(|r| format!("in {} I got {}", r.name, r.score()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\n{INTRO}{results}.\n\n{}\n\n{}",
        template.greeting, template.closing, template.signoff
    )
}

/// One `name: obtained/total` line per record, for the added-tests listing.
pub fn render_result_lines(records: &[ResultRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| format!("{}: {}", r.name, r.score()))
        .collect()
}
