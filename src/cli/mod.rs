//! CLI argument parsing and input resolution.

mod args;

pub use args::{Args, Engine, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ===========================================
    // Args parsing tests
    // ===========================================

    #[test]
    fn test_args_positional_text() {
        let args = Args::parse_from(["speak-rs", "Hello world"]);
        assert_eq!(args.text.as_deref(), Some("Hello world"));
        assert!(args.file.is_none());
    }

    #[test]
    fn test_args_default_lang() {
        let args = Args::parse_from(["speak-rs", "Hello"]);
        assert_eq!(args.lang, "en-US");
    }

    #[test]
    fn test_args_lang_flag() {
        let args = Args::parse_from(["speak-rs", "-l", "fr-FR", "Bonjour"]);
        assert_eq!(args.lang, "fr-FR");
    }

    #[test]
    fn test_args_file_flag() {
        let args = Args::parse_from(["speak-rs", "--file", "notes.txt"]);
        assert_eq!(args.file.as_deref(), Some(std::path::Path::new("notes.txt")));
    }

    #[test]
    fn test_args_default_engine_is_espeak() {
        let args = Args::parse_from(["speak-rs", "Hello"]);
        assert_eq!(args.engine, Engine::Espeak);
    }

    #[test]
    fn test_args_engine_say() {
        let args = Args::parse_from(["speak-rs", "-e", "say", "Hello"]);
        assert_eq!(args.engine, Engine::Say);
    }

    #[test]
    fn test_args_rejects_unknown_engine() {
        let result = Args::try_parse_from(["speak-rs", "-e", "festival", "Hello"]);
        assert!(result.is_err());
    }

    // ===========================================
    // Engine enum tests
    // ===========================================

    #[test]
    fn test_engine_default_is_espeak() {
        assert_eq!(Engine::default(), Engine::Espeak);
    }

    #[test]
    fn test_engine_as_str() {
        assert_eq!(Engine::Espeak.as_str(), "espeak");
        assert_eq!(Engine::Say.as_str(), "say");
    }

    #[test]
    fn test_engine_name() {
        assert_eq!(Engine::Espeak.name(), "eSpeak NG");
        assert_eq!(Engine::Say.name(), "macOS say");
    }

    // ===========================================
    // Args::resolve_text tests
    // ===========================================

    #[test]
    fn test_resolve_text_positional_verbatim() {
        let args = Args::parse_from(["speak-rs", "  Hello world  "]);
        let text = args.resolve_text().unwrap();
        assert_eq!(text, "  Hello world  ");
    }

    #[test]
    fn test_resolve_text_from_file_trimmed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Hello\n").unwrap();

        let args = Args::parse_from([
            "speak-rs",
            "-f",
            temp_file.path().to_str().unwrap(),
        ]);

        let text = args.resolve_text().unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_resolve_text_multiline_file_keeps_inner_newlines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "\nFirst line\nSecond line\n\n").unwrap();

        let args = Args::parse_from([
            "speak-rs",
            "-f",
            temp_file.path().to_str().unwrap(),
        ]);

        let text = args.resolve_text().unwrap();
        assert_eq!(text, "First line\nSecond line");
    }

    #[test]
    fn test_resolve_text_file_wins_over_positional() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "From file").unwrap();

        let args = Args::parse_from([
            "speak-rs",
            "-f",
            temp_file.path().to_str().unwrap(),
            "From argument",
        ]);

        let text = args.resolve_text().unwrap();
        assert_eq!(text, "From file");
    }

    #[test]
    fn test_resolve_text_missing_is_usage_error() {
        let args = Args::parse_from(["speak-rs"]);
        let result = args.resolve_text();

        assert!(matches!(result.unwrap_err(), InputError::NoText));
    }

    #[test]
    fn test_resolve_text_unreadable_file() {
        let args = Args::parse_from(["speak-rs", "-f", "/nonexistent/path/notes.txt"]);
        let result = args.resolve_text();

        assert!(matches!(
            result.unwrap_err(),
            InputError::FileUnreadable { .. }
        ));
    }
}
