//! The `marknote catalog` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use marknote_core::catalog::load_catalog_or_empty;
use marknote_core::TestDescriptor;

pub fn execute(
    catalog_path: Option<PathBuf>,
    search: Option<String>,
    topic: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, catalog_path) = super::resolve(catalog_path, config_path)?;
    let catalog = load_catalog_or_empty(&catalog_path);

    let mut tests: Vec<&TestDescriptor> = match &search {
        Some(query) => catalog.search(query),
        None => catalog.iter().collect(),
    };
    if let Some(topic) = &topic {
        tests.retain(|t| &t.topic == topic);
    }

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&tests)?);
        }
        "table" => {
            if tests.is_empty() {
                println!("No test found.");
                return Ok(());
            }
            print_table(&tests);
            println!("{} of {} tests", tests.len(), catalog.len());
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}

fn print_table(tests: &[&TestDescriptor]) {
    let mut table = Table::new();
    table.set_header(vec!["Title", "Topic", "Total", "Given", "Questions"]);

    for test in tests {
        table.add_row(vec![
            Cell::new(&test.title),
            Cell::new(&test.topic),
            Cell::new(test.total_questions),
            Cell::new(if test.is_given { "yes" } else { "no" }),
            Cell::new(&test.questions),
        ]);
    }

    println!("{table}");
}
