//! eSpeak NG backend.

use std::io::Write;
use std::process::{Command, Stdio};

use super::SpeechBackend;
use super::types::{SpeechError, Voice};

const ESPEAK_BIN: &str = "espeak-ng";

/// Backend that drives the `espeak-ng` command.
///
/// Text is piped to the child over stdin, so arbitrary content needs no
/// escaping. Playback goes to the default audio device and the call blocks
/// until the child exits.
pub struct EspeakBackend {
    voice: String,
}

impl EspeakBackend {
    /// Create a new eSpeak backend, probing that the binary is on PATH.
    pub fn new() -> Result<Self, SpeechError> {
        let probe = Command::new(ESPEAK_BIN)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => Ok(Self {
                voice: "en-us".to_string(),
            }),
            _ => Err(SpeechError::EngineUnavailable(format!(
                "{ESPEAK_BIN} not found on PATH"
            ))),
        }
    }
}

/// Map a locale code to an eSpeak voice identifier.
///
/// eSpeak voice names are lowercase with dashes ("en-us", "fr-fr").
fn voice_for_language(code: &str) -> Result<String, SpeechError> {
    let code = code.trim();
    if code.is_empty()
        || !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SpeechError::UnsupportedLanguage(code.to_string()));
    }

    Ok(code.to_ascii_lowercase().replace('_', "-"))
}

/// Parse `espeak-ng --voices` output.
///
/// Columns: Pty, Language, Age/Gender, VoiceName, File, Other Languages.
/// The voice name may contain spaces ("English (America)"), so it runs
/// from the fourth field up to the file field.
fn parse_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1) // header row
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let language = fields.get(1)?;
            let name: Vec<&str> = fields
                .get(3..)?
                .iter()
                .take_while(|field| !field.contains('/'))
                .copied()
                .collect();

            if name.is_empty() {
                return None;
            }

            Some(Voice {
                name: name.join(" "),
                language: (*language).to_string(),
            })
        })
        .collect()
}

impl SpeechBackend for EspeakBackend {
    fn set_language(&mut self, code: &str) -> Result<(), SpeechError> {
        self.voice = voice_for_language(code)?;
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        log::debug!("Running {ESPEAK_BIN} with voice {}", self.voice);

        let mut child = Command::new(ESPEAK_BIN)
            .arg("-v")
            .arg(&self.voice)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SpeechError::EngineUnavailable(format!("Failed to spawn {ESPEAK_BIN}: {e}"))
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
                format!("{ESPEAK_BIN} exited with {}", output.status)
            } else {
                stderr
            };
            return Err(SpeechError::SynthesisFailed(reason));
        }

        Ok(())
    }

    fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let output = Command::new(ESPEAK_BIN).arg("--voices").output()?;

        if !output.status.success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "{ESPEAK_BIN} --voices exited with {}",
                output.status
            )));
        }

        Ok(parse_voices(&String::from_utf8_lossy(&output.stdout)))
    }

    fn name(&self) -> &str {
        "espeak-ng"
    }
}
