use thiserror::Error;

/// Errors surfaced across the library boundary.
///
/// Everything that can happen while analyzing an ordinary word is expressed
/// as an empty result instead; these variants only cover broken
/// configuration and malformed input data.
#[derive(Debug, Error)]
pub enum MorphError {
    /// Inconsistent suffix graph wiring, root tables or predefined paths.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Predefined paths were queried before they were built.
    #[error("predefined paths are not created yet")]
    PathsNotCreated,

    /// A lexicon line could not be understood.
    #[error("lexicon line {line:?}: {message}")]
    Lexicon { line: String, message: String },

    /// A digit string is not a valid Turkish number.
    #[error("{0} is not a valid number")]
    InvalidNumber(String),

    #[error("embedded lexicon is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = MorphError> = std::result::Result<T, E>;

impl MorphError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        MorphError::Configuration(message.into())
    }

    pub(crate) fn lexicon(line: &str, message: impl Into<String>) -> Self {
        MorphError::Lexicon {
            line: line.to_string(),
            message: message.into(),
        }
    }
}
