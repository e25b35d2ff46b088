use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MdError, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentConfig {
    /// Tag of the element wrapping the whole document.
    pub root_tag: String,
    /// Class attribute on the root element, omitted when empty.
    pub root_class: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            root_class: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Drop blocks that fail to parse instead of failing the document.
    pub skip_invalid_blocks: bool,
    /// Tag fenced code with `class="language-X"` from the fence info string.
    pub code_language_class: bool,
    pub escape_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            skip_invalid_blocks: false,
            code_language_class: true,
            escape_text: false,
        }
    }
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        // build.rs rejects a malformed default_config.toml
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys missing from the file keep their
    /// default values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| MdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| MdError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`, or return the compiled default if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::compiled_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn compiled_default_matches_default_impl() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[render]\nescape_text = true\n").unwrap();
        assert!(config.render.escape_text);
        assert!(config.render.code_language_class);
        assert_eq!(config.document.root_tag, "div");
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = PathBuf::from("/nonexistent/mdhtml/config.toml");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(matches!(Config::load(&path), Err(MdError::Io { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("mdhtml-bad-{}.toml", std::process::id()));
        fs::write(&path, "[document\nroot_tag = ").unwrap();
        let result = Config::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(MdError::ConfigParse { .. })));
    }
}
