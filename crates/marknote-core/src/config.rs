//! marknote configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level marknote configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarknoteConfig {
    /// Path of the static test dataset.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Wording of the generated message.
    #[serde(default)]
    pub message: MessageConfig,
}

/// Wording around the list of results. The sentence structure is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_closing")]
    pub closing: String,
    #[serde(default = "default_signoff")]
    pub signoff: String,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("./catalog.json")
}
fn default_greeting() -> String {
    "Hi Sir,".to_string()
}
fn default_closing() -> String {
    "Thanks!".to_string()
}
fn default_signoff() -> String {
    "Regards".to_string()
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            closing: default_closing(),
            signoff: default_signoff(),
        }
    }
}

impl Default for MarknoteConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            message: MessageConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted as-is and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `marknote.toml` in the current directory
/// 2. `~/.config/marknote/config.toml`
///
/// `MARKNOTE_CATALOG` overrides the catalog path.
pub fn load_config_from(path: Option<&Path>) -> Result<MarknoteConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("marknote.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => MarknoteConfig::default(),
    };

    if let Ok(catalog) = std::env::var("MARKNOTE_CATALOG") {
        config.catalog = PathBuf::from(catalog);
    }

    Ok(config)
}

/// Parse config TOML, expanding `${VAR}` references in string values.
pub fn parse_config_str(content: &str) -> Result<MarknoteConfig> {
    let mut config: MarknoteConfig = toml::from_str(content)?;
    config.catalog = PathBuf::from(resolve_env_vars(&config.catalog.to_string_lossy()));
    config.message.greeting = resolve_env_vars(&config.message.greeting);
    config.message.closing = resolve_env_vars(&config.message.closing);
    config.message.signoff = resolve_env_vars(&config.message.signoff);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("marknote"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_MARKNOTE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_MARKNOTE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_MARKNOTE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_MARKNOTE_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_MARKNOTE_SELF_REF", "${_MARKNOTE_SELF_REF}");
        std::env::set_var("_MARKNOTE_OTHER", "x");
        assert_eq!(
            resolve_env_vars("a ${_MARKNOTE_SELF_REF} b ${_MARKNOTE_OTHER}"),
            "a ${_MARKNOTE_SELF_REF} b x"
        );
        std::env::remove_var("_MARKNOTE_SELF_REF");
        std::env::remove_var("_MARKNOTE_OTHER");
    }

    #[test]
    fn default_config() {
        let config = MarknoteConfig::default();
        assert_eq!(config.catalog, PathBuf::from("./catalog.json"));
        assert_eq!(config.message.greeting, "Hi Sir,");
        assert_eq!(config.message.signoff, "Regards");
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str(
            r#"
catalog = "data/tests.json"

[message]
greeting = "Dear Ms. Rao,"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog, PathBuf::from("data/tests.json"));
        assert_eq!(config.message.greeting, "Dear Ms. Rao,");
        assert_eq!(config.message.closing, "Thanks!");
    }

    #[test]
    fn parse_expands_env_vars() {
        std::env::set_var("_MARKNOTE_RECIPIENT", "Mr. Singh");
        let config = parse_config_str(
            r#"
[message]
greeting = "Hello ${_MARKNOTE_RECIPIENT},"
"#,
        )
        .unwrap();
        assert_eq!(config.message.greeting, "Hello Mr. Singh,");
        std::env::remove_var("_MARKNOTE_RECIPIENT");
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marknote.toml");
        std::fs::write(&path, "[message]\nsignoff = \"Best\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.message.signoff, "Best");
    }
}
