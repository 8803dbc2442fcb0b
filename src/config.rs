//! Where the command line tool keeps its song library.
//!
//! Resolution order: `--library` flag, `CHORDSHEET_LIBRARY`, the `library`
//! key of `chordsheet.yaml` in the working directory, then `songs.yaml`.

use crate::error::{ChordSheetError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const LIBRARY_ENV: &str = "CHORDSHEET_LIBRARY";
pub const CONFIG_FILE: &str = "chordsheet.yaml";
pub const DEFAULT_LIBRARY: &str = "songs.yaml";

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    library: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub library: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: PathBuf::from(DEFAULT_LIBRARY),
        }
    }
}

impl Config {
    /// Resolve the configuration from the flag, environment and config file.
    pub fn load(library_flag: Option<PathBuf>) -> Result<Self> {
        Self::resolve(
            library_flag,
            std::env::var_os(LIBRARY_ENV).map(PathBuf::from),
            Path::new(CONFIG_FILE),
        )
    }

    fn resolve(flag: Option<PathBuf>, env: Option<PathBuf>, config_file: &Path) -> Result<Self> {
        if let Some(library) = flag.or(env) {
            return Ok(Self { library });
        }

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(config_file)?;
        let raw: RawConfig = if source.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(&source).map_err(|e| {
                ChordSheetError::MetadataError(format!("{}: {}", config_file.display(), e))
            })?
        };

        tracing::debug!("Loaded config from {}", config_file.display());
        Ok(raw.library.map(|library| Self { library }).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing() -> PathBuf {
        PathBuf::from("definitely/not/here/chordsheet.yaml")
    }

    #[test]
    fn test_default() {
        let config = Config::resolve(None, None, &missing()).unwrap();
        assert_eq!(config.library, PathBuf::from("songs.yaml"));
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::resolve(
            Some(PathBuf::from("flag.yaml")),
            Some(PathBuf::from("env.yaml")),
            &missing(),
        )
        .unwrap();
        assert_eq!(config.library, PathBuf::from("flag.yaml"));

        let config = Config::resolve(None, Some(PathBuf::from("env.yaml")), &missing()).unwrap();
        assert_eq!(config.library, PathBuf::from("env.yaml"));
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        std::fs::write(&file, "library: /tmp/my-songs.yaml\n").unwrap();
        let config = Config::resolve(None, None, &file).unwrap();
        assert_eq!(config.library, PathBuf::from("/tmp/my-songs.yaml"));

        std::fs::write(&file, "").unwrap();
        assert_eq!(Config::resolve(None, None, &file).unwrap(), Config::default());

        std::fs::write(&file, "library: [1, 2]\n").unwrap();
        assert!(matches!(
            Config::resolve(None, None, &file),
            Err(ChordSheetError::MetadataError(_))
        ));
    }
}
