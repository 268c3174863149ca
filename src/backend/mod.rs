//! Speech engine backends.
//!
//! Provides the trait and process-based implementations for the native
//! speech engines (eSpeak NG and the macOS `say` command).

mod espeak;
mod say;
mod types;

pub use espeak::EspeakBackend;
pub use say::SayBackend;
pub use types::{SpeechError, Voice};

use crate::cli::Engine;

/// Trait for speech engine backends.
///
/// This trait abstracts the engine-specific process handling, allowing
/// for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechBackend: Send + Sync {
    /// Select the language used for subsequent speech.
    fn set_language(&mut self, code: &str) -> Result<(), SpeechError>;

    /// Speak the text aloud, blocking until playback finishes.
    fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// List the voices known to the engine.
    fn list_voices(&self) -> Result<Vec<Voice>, SpeechError>;

    /// Engine name for diagnostics.
    fn name(&self) -> &str;
}

impl<B: SpeechBackend + ?Sized> SpeechBackend for Box<B> {
    fn set_language(&mut self, code: &str) -> Result<(), SpeechError> {
        (**self).set_language(code)
    }

    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        (**self).speak(text)
    }

    fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        (**self).list_voices()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Create a backend for the selected engine.
pub fn create_backend(engine: Engine) -> Result<Box<dyn SpeechBackend>, SpeechError> {
    match engine {
        Engine::Espeak => Ok(Box::new(EspeakBackend::new()?)),
        Engine::Say => Ok(Box::new(SayBackend::new()?)),
    }
}
