//! Speech runner implementation.

use crate::backend::{SpeechBackend, SpeechError, Voice};

/// Drives a speech backend through a single utterance.
pub struct Speaker<B: SpeechBackend> {
    backend: B,
}

impl<B: SpeechBackend> Speaker<B> {
    /// Create a new speaker on top of a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Configure the language and speak the text aloud.
    ///
    /// The text is echoed to stdout before synthesis starts, as a progress
    /// indication. The language is configured first, so a bad language code
    /// fails before any audio is produced.
    pub fn speak(&mut self, text: &str, lang: &str) -> Result<(), SpeechError> {
        self.backend.set_language(lang)?;
        log::debug!("Language set to {lang}");

        println!("Speaking: {text}");
        self.backend.speak(text)
    }

    /// List the voices available on the backend.
    pub fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        self.backend.list_voices()
    }
}
