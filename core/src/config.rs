//! Harness configuration.
//!
//! The base URI comes from the `HOST` key: an optional `harness.toml` in the
//! working directory, overridden by the `HOST` environment variable.

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ApiError;

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "harness.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URI of the users API, e.g. `https://example.com/api`.
    pub host: String,
}

impl HarnessConfig {
    pub fn load() -> Result<Self, ApiError> {
        Self::from_sources(Path::new(DEFAULT_CONFIG_FILE), Environment::default())
    }

    fn from_sources(path: &Path, env: Environment) -> Result<Self, ApiError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()?;
        let config: HarnessConfig = settings.try_deserialize()?;
        tracing::debug!(host = %config.host, "loaded harness configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ::config::Map;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(map))
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn host_from_file() {
        let file = config_file("host = \"http://from-file:8080\"\n");
        let config = HarnessConfig::from_sources(file.path(), env(&[])).unwrap();
        assert_eq!(config.host, "http://from-file:8080");
    }

    #[test]
    fn environment_overrides_file() {
        let file = config_file("host = \"http://from-file:8080\"\n");
        let config = HarnessConfig::from_sources(file.path(), env(&[("HOST", "http://from-env")])).unwrap();
        assert_eq!(config.host, "http://from-env");
    }

    #[test]
    fn missing_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = HarnessConfig::from_sources(&path, env(&[("HOST", "http://from-env")])).unwrap();
        assert_eq!(config.host, "http://from-env");
    }

    #[test]
    fn missing_host_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = HarnessConfig::from_sources(&path, env(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
