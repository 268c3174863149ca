//! Speech runner.
//!
//! This module provides the runner that coordinates between the CLI and
//! the speech backend to turn the resolved input text into audible speech.

mod speaker;

pub use speaker::Speaker;
