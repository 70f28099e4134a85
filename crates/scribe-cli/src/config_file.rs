//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use scribe_core::config::ClientConfig;
use scribe_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";

/// Environment variable overriding the configured API base
pub const API_BASE_ENV: &str = "SCRIBE_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub api_base: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            api_base: None,
        }
    }
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("scribe").join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, String> {
    explicit.map_or_else(default_config_path, |path| Ok(path.to_path_buf()))
}

impl CliConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    fn normalize(&mut self) {
        self.api_base = normalize_text_option(self.api_base.take());
    }
}

/// Where the effective API base came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBaseSource {
    Flag,
    Environment,
    ConfigFile,
    Default,
}

impl ApiBaseSource {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Flag => "--api-base",
            Self::Environment => API_BASE_ENV,
            Self::ConfigFile => "config file",
            Self::Default => "built-in default",
        }
    }
}

/// Pick the API base: flag, then environment, then config file, then default.
pub fn resolve_client_config(
    flag: Option<String>,
    environment: Option<String>,
    config: &CliConfig,
) -> Result<(ClientConfig, ApiBaseSource), scribe_core::Error> {
    let candidates = [
        (flag, ApiBaseSource::Flag),
        (environment, ApiBaseSource::Environment),
        (config.api_base.clone(), ApiBaseSource::ConfigFile),
    ];

    for (candidate, source) in candidates {
        if let Some(api_base) = normalize_text_option(candidate) {
            return Ok((ClientConfig::new(api_base)?, source));
        }
    }
    Ok((ClientConfig::default(), ApiBaseSource::Default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribe_core::config::DEFAULT_API_BASE;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn default_config_matches_serde_default() {
        let parsed: CliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(CliConfig::default(), parsed);
        assert_eq!(CliConfig::default().version, 1);
    }

    #[test]
    fn fresh_save_writes_current_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        CliConfig {
            api_base: Some("http://notes.internal/api/notes".to_string()),
            ..CliConfig::default()
        }
        .save_to_path(&path)
        .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
    }

    #[test]
    fn config_roundtrip_normalizes_api_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = CliConfig {
            version: 1,
            api_base: Some(" http://notes.internal/api/notes ".to_string()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(
            loaded.api_base.as_deref(),
            Some("http://notes.internal/api/notes")
        );
    }

    #[test]
    fn blank_api_base_is_dropped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"version": 1, "api_base": "   "}"#).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.api_base, None);
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{").unwrap();

        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.contains("Failed to parse config"));
    }

    #[test]
    fn resolve_prefers_flag_then_env_then_file() {
        let file = CliConfig {
            version: 1,
            api_base: Some("http://file/api/notes".to_string()),
        };

        let (config, source) = resolve_client_config(
            Some("http://flag/api/notes".to_string()),
            Some("http://env/api/notes".to_string()),
            &file,
        )
        .unwrap();
        assert_eq!(config.api_base, "http://flag/api/notes");
        assert_eq!(source, ApiBaseSource::Flag);

        let (config, source) =
            resolve_client_config(None, Some("http://env/api/notes".to_string()), &file).unwrap();
        assert_eq!(config.api_base, "http://env/api/notes");
        assert_eq!(source, ApiBaseSource::Environment);

        let (config, source) = resolve_client_config(None, None, &file).unwrap();
        assert_eq!(config.api_base, "http://file/api/notes");
        assert_eq!(source, ApiBaseSource::ConfigFile);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let (config, source) =
            resolve_client_config(Some("  ".to_string()), None, &CliConfig::default()).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(source, ApiBaseSource::Default);
    }

    #[test]
    fn resolve_rejects_invalid_url() {
        assert!(resolve_client_config(Some("notes".to_string()), None, &CliConfig::default())
            .is_err());
    }
}
