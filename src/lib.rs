//! speak-rs: command-line text-to-speech front-end.
//!
//! This crate provides a small CLI that resolves text from an argument or an
//! input file and speaks it aloud through a native speech engine
//! (eSpeak NG or the macOS `say` command).

pub mod backend;
pub mod cli;
pub mod engine;
