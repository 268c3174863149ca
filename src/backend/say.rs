//! macOS `say` backend.

use std::io::Write;
use std::process::{Command, Stdio};

use super::SpeechBackend;
use super::types::{SpeechError, Voice};

const SAY_BIN: &str = "say";

/// Backend that drives the macOS `say` command.
///
/// `say` selects voices rather than languages, so setting a language means
/// resolving the locale against the `say -v ?` listing and picking the
/// first matching voice.
pub struct SayBackend {
    voice: Option<String>,
}

impl SayBackend {
    /// Create a new `say` backend, probing that the command works.
    pub fn new() -> Result<Self, SpeechError> {
        let probe = Command::new(SAY_BIN)
            .arg("-v")
            .arg("?")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => Ok(Self { voice: None }),
            _ => Err(SpeechError::EngineUnavailable(format!(
                "{SAY_BIN} not found on PATH"
            ))),
        }
    }

    fn voice_listing(&self) -> Result<String, SpeechError> {
        let output = Command::new(SAY_BIN).arg("-v").arg("?").output()?;

        if !output.status.success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "{SAY_BIN} -v ? exited with {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse one line of `say -v ?` output.
///
/// Lines look like "Alex                en_US    # Most people recognize me".
/// Voice names may contain spaces ("Bad News"), so the name runs up to the
/// trailing locale token.
fn parse_voice_line(line: &str) -> Option<Voice> {
    let entry = line.split('#').next()?.trim_end();
    let language = entry.split_whitespace().last()?;
    let name = entry[..entry.len() - language.len()].trim();

    if name.is_empty() {
        return None;
    }

    Some(Voice {
        name: name.to_string(),
        language: language.to_string(),
    })
}

/// Find a voice for the locale code ("en-US" matches "en_US").
fn find_voice_for(code: &str, listing: &str) -> Option<Voice> {
    let wanted = code.trim().replace('-', "_");

    listing
        .lines()
        .filter_map(parse_voice_line)
        .find(|voice| voice.language.eq_ignore_ascii_case(&wanted))
}

impl SpeechBackend for SayBackend {
    fn set_language(&mut self, code: &str) -> Result<(), SpeechError> {
        let listing = self.voice_listing()?;
        let voice = find_voice_for(code, &listing)
            .ok_or_else(|| SpeechError::UnsupportedLanguage(code.to_string()))?;

        log::debug!("Selected voice {} for {code}", voice.name);
        self.voice = Some(voice.name);
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut cmd = Command::new(SAY_BIN);
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SpeechError::EngineUnavailable(format!("Failed to spawn {SAY_BIN}: {e}"))
            })?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                SpeechError::SynthesisFailed("Child stdin not captured".to_string())
            })?;
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("{SAY_BIN} exited with {}", output.status)
            } else {
                stderr
            };
            return Err(SpeechError::SynthesisFailed(reason));
        }

        Ok(())
    }

    fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let listing = self.voice_listing()?;
        Ok(listing.lines().filter_map(parse_voice_line).collect())
    }

    fn name(&self) -> &str {
        "say"
    }
}
