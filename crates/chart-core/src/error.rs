// File: crates/chart-core/src/error.rs
// Summary: Error and issue types for sanitizing, encoding, tool dispatch, config and resources.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single untrusted element was rejected. Never surfaced to the tool caller;
/// the sanitizer filters these out and logs them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("expected an array")]
    NotAnArray,
    #[error("expected an object")]
    NotAnObject,
    #[error("element {index} is not an object")]
    ElementNotAnObject { index: usize },
    #[error("element {index}: y is not a finite number")]
    NonFiniteY { index: usize },
    #[error("element {index}: x is missing or of a disallowed kind")]
    InvalidX { index: usize },
    #[error("element {index}: `data` is not an array")]
    MissingData { index: usize },
    #[error("value {index} is not a finite number")]
    NonFiniteValue { index: usize },
    #[error("label list is empty")]
    NoLabels,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to serialize chart payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool '{name}'")]
    UnknownTool { name: String },
}

/// Errors that can occur when loading render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read UI resource {uri} from {path:?}: {source}")]
    Read {
        uri: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
