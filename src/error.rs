use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning Markdown into an element tree.
///
/// Every variant is terminal for the operation that produced it. Callers
/// choose whether to abort the whole document or drop the offending block.
#[derive(Debug, Error)]
pub enum MdError {
    /// A styling delimiter appears an odd number of times in a plain run.
    #[error("unbalanced delimiter `{delimiter}` in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("invalid block input: {0}")]
    InvalidBlockInput(String),

    /// An untagged leaf has nothing to render.
    #[error("leaf node has no value")]
    MissingLeafValue,

    #[error("invalid parent node: {0}")]
    InvalidParentNode(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, MdError>;

impl MdError {
    pub(crate) fn unbalanced(delimiter: &str, text: &str) -> Self {
        MdError::UnbalancedDelimiter {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        }
    }
}
