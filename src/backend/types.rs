//! Backend error and voice types.

use thiserror::Error;

/// Errors that can occur when driving a speech engine.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Engine not available: {0}")]
    EngineUnavailable(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A voice known to a speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Voice name as reported by the engine.
    pub name: String,
    /// Language/locale the voice speaks.
    pub language: String,
}
