//! CLI argument definitions and input resolution.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Speak text aloud using a native speech engine.
#[derive(Parser, Debug)]
#[command(name = "speak-rs")]
#[command(about = "Speak text aloud using a native speech engine")]
#[command(version)]
pub struct Args {
    /// Text to speak
    pub text: Option<String>,

    /// Read the text from a file instead of the command line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Language/locale code for synthesis
    #[arg(short, long, default_value = "en-US")]
    pub lang: String,

    /// Speech engine to use: "espeak" (eSpeak NG) or "say" (macOS)
    #[arg(short, long, value_enum, default_value = "espeak")]
    pub engine: Engine,

    /// List the voices known to the engine and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Speech engine selection.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engine {
    /// eSpeak NG (Linux, cross-platform)
    #[default]
    #[value(name = "espeak")]
    Espeak,

    /// Apple `say` (macOS)
    #[value(name = "say")]
    Say,
}

impl Engine {
    /// Returns the CLI argument string for this engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Espeak => "espeak",
            Engine::Say => "say",
        }
    }

    /// Returns the human-readable name of the engine.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Espeak => "eSpeak NG",
            Engine::Say => "macOS say",
        }
    }
}

/// Errors that can occur when resolving the input text.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("No text to speak. Pass TEXT or --file <PATH>")]
    NoText,

    #[error("Failed to read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Args {
    /// Resolve the text to speak.
    ///
    /// The file flag wins over the positional argument: file contents are
    /// trimmed of surrounding whitespace, the positional argument is used
    /// verbatim. With neither, resolution is a usage error.
    pub fn resolve_text(&self) -> Result<String, InputError> {
        if let Some(path) = &self.file {
            let contents = fs::read_to_string(path).map_err(|source| {
                InputError::FileUnreadable {
                    path: path.clone(),
                    source,
                }
            })?;
            return Ok(contents.trim().to_string());
        }

        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        Err(InputError::NoText)
    }
}
