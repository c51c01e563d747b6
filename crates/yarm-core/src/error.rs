//! Error types for YAML and JSON conversion.

use thiserror::Error;

/// Errors that can occur while converting between YAML and JSON.
///
/// Variants are split by the stage that failed, not by the public operation
/// that triggered it. The underlying library error is kept as the source.
#[derive(Error, Debug)]
pub enum YarmError {
    /// The YAML stage failed: input was not valid YAML, held a mapping key JSON
    /// cannot express, or the tree could not be written back out as YAML.
    #[error("invalid YAML format: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The JSON stage failed: input was not valid JSON, or the tree held a
    /// value JSON cannot express (e.g. a non-finite float).
    #[error("invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Which format stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Yaml,
    Json,
}

impl YarmError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            YarmError::InvalidYaml(_) => Stage::Yaml,
            YarmError::InvalidJson(_) => Stage::Json,
        }
    }

    /// 1-based line of the failure, when the parser reported one.
    pub fn line(&self) -> Option<usize> {
        match self {
            YarmError::InvalidYaml(e) => e.location().map(|loc| loc.line()),
            YarmError::InvalidJson(e) if e.line() > 0 => Some(e.line()),
            YarmError::InvalidJson(_) => None,
        }
    }
}

/// Convenience alias used throughout yarm-core.
pub type Result<T> = std::result::Result<T, YarmError>;
