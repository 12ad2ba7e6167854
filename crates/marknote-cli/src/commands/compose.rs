//! The `marknote compose` command.

use std::path::PathBuf;

use anyhow::Result;

use marknote_core::catalog::load_catalog_or_empty;
use marknote_core::{Session, SubmitError};
use marknote_report::export::export_json;
use marknote_report::message::render_result_lines;
use marknote_report::MessageTemplate;

use crate::console::{ConsoleNotifier, FileClipboard};

pub fn execute(
    catalog_path: Option<PathBuf>,
    marks: Vec<String>,
    totals: Vec<String>,
    format: String,
    copy_to: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "lines" | "json"),
        "unknown format: {format} (expected text, lines or json)"
    );

    let (config, catalog_path) = super::resolve(catalog_path, config_path)?;
    let template = MessageTemplate::from(&config.message);
    let mut session = Session::new(load_catalog_or_empty(&catalog_path));
    let notifier = ConsoleNotifier;

    for raw in &marks {
        let (title, value) = super::parse_pair(raw)?;
        if !session.selection().contains(&title) {
            session.toggle(&title);
        }
        session.set_obtained(&title, value);
    }

    for raw in &totals {
        let (title, value) = super::parse_pair(raw)?;
        if !session.selection().contains(&title) {
            tracing::warn!("total given for unselected test '{title}', ignoring");
            continue;
        }
        session.set_total(&title, value);
    }

    match session.submit(&notifier) {
        Ok(_) => {}
        Err(SubmitError::InvalidInput(fields)) => {
            for f in &fields {
                eprintln!("  [{}] {}", f.field, f.message);
            }
            anyhow::bail!("{} invalid field(s)", fields.len());
        }
        Err(e) => return Err(e.into()),
    }

    let records = session.results().as_slice();
    match format.as_str() {
        "json" => println!("{}", export_json(records, &template)?),
        "lines" => {
            for line in render_result_lines(records) {
                println!("{line}");
            }
        }
        _ => println!("{}", session.message(&template)),
    }

    if let Some(path) = copy_to {
        session.copy_message(&template, &FileClipboard::new(path), &notifier);
    }

    Ok(())
}
