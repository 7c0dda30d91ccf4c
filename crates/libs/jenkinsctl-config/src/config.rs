//! Core configuration types for the jenkinsctl CLI.

use crate::prelude::*;
use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directory under the home directory holding the default configuration.
const DEFAULT_CONFIG_DIR: &str = ".config/jenkinsctl";
/// Name of the default configuration file.
const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Connection settings loaded from the JSON configuration file.
///
/// The username key is `user`. Earlier revisions of this tool accepted
/// several spellings for it; only the canonical key parses here, and
/// unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JenkinsConfig {
    /// Jenkins server URL.
    pub server: String,
    /// Account used for API calls.
    pub user: String,
    /// API token for the account.
    pub token: String,
    /// Path the configuration was loaded from.
    #[serde(skip)]
    pub source: PathBuf,
}

impl JenkinsConfig {
    /// Locate and load the configuration.
    ///
    /// With an explicit path the file is loaded as-is; otherwise the
    /// default `$HOME/.config/jenkinsctl/config.json` is used.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::from_file(&path)
    }

    /// Default configuration path under the home directory.
    pub fn default_path() -> Result<PathBuf> {
        default_path_in(env::var("HOME").ok())
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::IO(err),
        })?;
        let mut config = Self::from_json(&contents)?;
        config.source = path.to_path_buf();
        debug!("loaded configuration from {}", config.source.display());
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(value: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// All three connection fields must be non-empty before a
    /// connection attempt.
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("server", &self.server),
            ("user", &self.user),
            ("token", &self.token),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Malformed(format!(
                    "field `{field}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}

fn default_path_in(home: Option<String>) -> Result<PathBuf> {
    match home {
        Some(home) if !home.trim().is_empty() => Ok(PathBuf::from(home)
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)),
        _ => Err(Error::NoHome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn deserialize() -> Result<()> {
        let content = r#"
            {
                "server": "http://jenkins.example.com:8080",
                "user": "admin",
                "token": "110cc0ffeec0ffeec0ffeec0ffeec0ffee"
            }
        "#;
        let config = JenkinsConfig::from_json(content)?;
        assert_eq!(config.server, "http://jenkins.example.com:8080");
        assert_eq!(config.user, "admin");
        assert_eq!(config.token, "110cc0ffeec0ffeec0ffeec0ffeec0ffee");
        Ok(())
    }

    #[test]
    fn missing_field_is_malformed() {
        let content = r#"{"server": "http://x", "user": "a"}"#;
        match JenkinsConfig::from_json(content) {
            Err(Error::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn unknown_field_is_malformed() {
        // `JenkinsUser` was one of the historical spellings; it no
        // longer parses.
        let content = r#"{"server": "http://x", "JenkinsUser": "a", "token": "t"}"#;
        match JenkinsConfig::from_json(content) {
            Err(Error::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn empty_field_is_malformed() {
        let content = r#"{"server": "http://x", "user": "a", "token": ""}"#;
        match JenkinsConfig::from_json(content) {
            Err(Error::Malformed(message)) => assert!(message.contains("token")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        match JenkinsConfig::from_json("not json at all") {
            Err(Error::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = Path::new("/nonexistent/jenkinsctl/config.json");
        match JenkinsConfig::from_file(path) {
            Err(Error::NotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn from_file_records_source() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"server": "http://x", "user": "a", "token": "t"}}"#
        )?;

        let config = JenkinsConfig::from_file(file.path())?;
        assert_eq!(config.source, file.path());
        assert_eq!(config.user, "a");
        Ok(())
    }

    #[test]
    fn default_path_requires_home() {
        match default_path_in(None) {
            Err(Error::NoHome) => {}
            other => panic!("expected NoHome, got {:?}", other),
        }
        match default_path_in(Some(String::new())) {
            Err(Error::NoHome) => {}
            other => panic!("expected NoHome, got {:?}", other),
        }
    }

    #[test]
    fn default_path_joins_home() -> Result<()> {
        let path = default_path_in(Some("/home/builder".to_string()))?;
        assert_eq!(
            path,
            PathBuf::from("/home/builder/.config/jenkinsctl/config.json")
        );
        Ok(())
    }
}
