//! The `marknote validate` command.

use std::path::PathBuf;

use anyhow::Result;

use marknote_core::catalog::{load_catalog, validate_catalog};

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, catalog_path) = super::resolve(catalog_path, config_path)?;
    let catalog = load_catalog(&catalog_path)?;

    println!(
        "Catalog: {} ({} tests, {} topics)",
        catalog_path.display(),
        catalog.len(),
        catalog.topics().len()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .title
            .as_ref()
            .map(|title| format!("  [{title}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
