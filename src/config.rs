use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GodzinaError, Result};
use crate::lexicon::LexiconSource;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "godzina.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory with the five word-list files; builtin lists when absent.
    pub lexicon_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Default tracing filter, e.g. "info" or "godzina=debug".
    pub log_level: Option<String>,
}

impl Config {
    pub fn lexicon_source(&self) -> LexiconSource {
        match &self.lexicon_dir {
            Some(dir) => LexiconSource::Directory(dir.clone()),
            None => LexiconSource::Builtin,
        }
    }

    /// A directory given on the command line beats the configured one.
    pub fn effective_lexicon_source(&self, cli_dir: Option<&Path>) -> LexiconSource {
        match cli_dir {
            Some(dir) => LexiconSource::Directory(dir.to_path_buf()),
            None => self.lexicon_source(),
        }
    }

    /// `--format` beats the configured format, which beats text.
    pub fn effective_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }
}

pub fn parse_config(file_path: &Path, contents: &str) -> Result<Config> {
    let loaded_config = toml::from_str::<Config>(contents).map_err(|e| {
        GodzinaError::Config(format!("failed to parse {}: {}", file_path.display(), e))
    })?;

    if let Some(dir) = &loaded_config.lexicon_dir {
        if !dir.is_dir() {
            return Err(GodzinaError::Config(format!(
                "lexicon_dir specified in {} ('{}') is not a valid directory",
                file_path.display(),
                dir.display()
            )));
        }
    }
    Ok(loaded_config)
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| {
        GodzinaError::Config(format!("failed to read {}: {}", file_path.display(), e))
    })?;
    parse_config(file_path, &contents)
}

/// Loads `file_path` if given, else the default file when it exists, else
/// an empty config. An explicitly named file must exist.
pub fn resolve_config(file_path: Option<&Path>) -> Result<Config> {
    match file_path {
        Some(path) => load_config_from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config_from_file(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_lexicon() {
        let config = parse_config(Path::new("godzina.toml"), "").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lexicon_source(), LexiconSource::Builtin);
    }

    #[test]
    fn reads_format_and_log_level() {
        let config = parse_config(
            Path::new("godzina.toml"),
            "format = \"json\"\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn lexicon_dir_must_exist() {
        let err = parse_config(
            Path::new("godzina.toml"),
            "lexicon_dir = \"/nonexistent/godzina\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, GodzinaError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config(Path::new("godzina.toml"), "colour = true\n").is_err());
    }

    #[test]
    fn format_precedence() {
        let configured = Config {
            format: Some(OutputFormat::Json),
            ..Config::default()
        };
        assert_eq!(configured.effective_format(Some(OutputFormat::Text)), OutputFormat::Text);
        assert_eq!(configured.effective_format(None), OutputFormat::Json);
        assert_eq!(Config::default().effective_format(None), OutputFormat::Text);
    }

    #[test]
    fn lexicon_dir_precedence() {
        let configured = Config {
            lexicon_dir: Some(PathBuf::from("/etc/godzina")),
            ..Config::default()
        };
        assert_eq!(
            configured.effective_lexicon_source(Some(Path::new("/tmp/words"))),
            LexiconSource::Directory(PathBuf::from("/tmp/words"))
        );
        assert_eq!(
            configured.effective_lexicon_source(None),
            LexiconSource::Directory(PathBuf::from("/etc/godzina"))
        );
        assert_eq!(Config::default().effective_lexicon_source(None), LexiconSource::Builtin);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(resolve_config(Some(Path::new("/nonexistent/godzina.toml"))).is_err());
    }
}
