use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, GodzinaError>;

#[derive(Debug, Error)]
pub enum GodzinaError {
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("hour {0} is out of range 0-23")]
    HourOutOfRange(u32),

    #[error("minute {0} is out of range 0-59")]
    MinuteOutOfRange(u32),

    #[error("failed to read lexicon resource {path:?}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lexicon resource '{resource}' is not valid UTF-8")]
    LexiconEncoding { resource: String },

    #[error("lexicon resource '{resource}' has {found} entries, expected {expected}")]
    LexiconTruncated {
        resource: String,
        expected: usize,
        found: usize,
    },

    #[error("lexicon resource '{resource}' has {found} entries, at most {expected} allowed")]
    LexiconOverflow {
        resource: String,
        expected: usize,
        found: usize,
    },

    #[error("lexicon resource '{resource}' has a blank entry at index {index}")]
    LexiconBlankEntry { resource: String, index: usize },

    #[error("index {index} is outside table '{table}' (size {len})")]
    OutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GodzinaError {
    /// True for errors caused by the user-supplied time string.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GodzinaError::InvalidTimeFormat(_)
                | GodzinaError::HourOutOfRange(_)
                | GodzinaError::MinuteOutOfRange(_)
        )
    }

    /// Process exit status: 2 for a bad time string, 1 for anything else.
    pub fn exit_code(&self) -> u8 {
        if self.is_validation() {
            2
        } else {
            1
        }
    }
}
