//! User configuration.
//!
//! Read from `config.toml` in the `tapcalc` config directory. A missing file
//! means defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prompt shown by the interactive session.
    pub prompt: String,
    /// Copy the final display to the clipboard when the session ends.
    pub copy_on_exit: bool,
    /// How long a copied display is served to other clients before exiting.
    pub clipboard_hold_secs: u64,
    /// Extra key labels, mapped to built-in labels.
    pub aliases: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            copy_on_exit: false,
            clipboard_hold_secs: 30,
            aliases: HashMap::new(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/tapcalc/config.toml`, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tapcalc").join("config.toml"))
    }

    /// Load from the default path, falling back to defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::parse(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), aliases = config.aliases.len(), "loaded config");
        Ok(config)
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            prompt = "calc> "
            copy_on_exit = true
            clipboard_hold_secs = 5

            [aliases]
            "mod" = "/"
            "enter" = "="
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt, "calc> ");
        assert!(config.copy_on_exit);
        assert_eq!(config.clipboard_hold(), Duration::from_secs(5));
        assert_eq!(config.aliases.get("mod").map(String::as_str), Some("/"));
        assert_eq!(config.aliases.get("enter").map(String::as_str), Some("="));
    }

    #[test]
    fn test_copied_display_is_held_by_default() {
        let config = Config::parse("copy_on_exit = true").unwrap();
        assert_eq!(config.clipboard_hold(), Duration::from_secs(30));
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(Config::parse("copy_on_exit = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("tapcalc-missing-config-test.toml");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "tapcalc-bad-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "prompt = [").unwrap();

        let result = Config::load(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(Error::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
