pub mod catalog;
pub mod compose;
pub mod init;
pub mod session;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use marknote_core::config::{load_config_from, MarknoteConfig};

/// Load config, letting an explicit `--catalog` win over the configured path.
pub fn resolve(
    catalog: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(MarknoteConfig, PathBuf)> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = catalog.unwrap_or_else(|| config.catalog.clone());
    Ok((config, catalog))
}

/// Split `"Title=value"` at the last `=`.
pub fn parse_pair(raw: &str) -> Result<(String, String)> {
    let Some((title, value)) = raw.rsplit_once('=') else {
        anyhow::bail!("expected TITLE=VALUE, got '{raw}'");
    };
    let title = title.trim();
    anyhow::ensure!(!title.is_empty(), "missing test title in '{raw}'");
    Ok((title.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_at_last_equals() {
        assert_eq!(
            parse_pair("Math Quiz=8").unwrap(),
            ("Math Quiz".to_string(), "8".to_string())
        );
        assert_eq!(
            parse_pair("a=b test = 7.5").unwrap(),
            ("a=b test".to_string(), "7.5".to_string())
        );
        assert!(parse_pair("no separator").is_err());
        assert!(parse_pair(" =3").is_err());
    }
}
