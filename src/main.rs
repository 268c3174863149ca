//! speak-rs CLI entry point.

use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use speak_rs::backend::{SpeechBackend, create_backend};
use speak_rs::cli::{Args, Engine, InputError};
use speak_rs::engine::Speaker;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.list_voices {
        let speaker = Speaker::new(new_backend(args.engine)?);
        return list_voices(&speaker);
    }

    // Resolve input before touching the engine, so a usage error or an
    // unreadable file never spawns a synthesis process.
    let text = match args.resolve_text() {
        Ok(text) => text,
        Err(InputError::NoText) => {
            Args::command()
                .print_help()
                .context("Failed to print usage")?;
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let mut speaker = Speaker::new(new_backend(args.engine)?);
    speaker
        .speak(&text, &args.lang)
        .context("Speech synthesis failed")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn new_backend(engine: Engine) -> Result<Box<dyn SpeechBackend>> {
    log::debug!("Using {} engine", engine.name());
    create_backend(engine).with_context(|| format!("Failed to initialize {}", engine.name()))
}

fn list_voices<B: SpeechBackend>(speaker: &Speaker<B>) -> Result<()> {
    let voices = speaker.list_voices().context("Failed to list voices")?;

    if voices.is_empty() {
        println!("No voices found.");
        return Ok(());
    }

    println!("Available voices:");
    for voice in voices {
        println!("  {} ({})", voice.name, voice.language);
    }

    Ok(())
}
