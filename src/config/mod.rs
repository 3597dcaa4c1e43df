use crate::core::summarizer::GatewayConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `<YYYY-MM-DD>.md` files.
    pub log_dir: String,
    /// Git working directory to sync; falls back to `log_dir`.
    pub repo_dir: Option<String>,
    /// SQLite file for the internal activity log.
    pub database: String,
    pub model: String,
    pub api_base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub request_timeout_secs: u64,
    pub placeholder_marker: String,
    pub commit_prefix: String,
    pub git_remote: Option<String>,
    pub git_branch: Option<String>,
    pub diagnostic_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            repo_dir: None,
            database: Self::database_file().to_string_lossy().to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: 60,
            placeholder_marker: "#".to_string(),
            commit_prefix: "Daily log".to_string(),
            git_remote: None,
            git_branch: None,
            diagnostic_limit: 300,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dwlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dwlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dwlog.conf")
    }

    /// Return the default path of the activity database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dwlog.sqlite")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn log_dir_path(&self) -> PathBuf {
        expand_tilde(&self.log_dir)
    }

    pub fn repo_dir_path(&self) -> PathBuf {
        match &self.repo_dir {
            Some(dir) => expand_tilde(dir),
            None => self.log_dir_path(),
        }
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Build the gateway settings, reading the API key from the environment.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.api_base_url.trim_end_matches('/').to_string(),
            model: self.model.clone(),
            api_key: env::var(&self.api_key_env)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            api_key_env: self.api_key_env.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_is_completed_with_defaults() {
        let cfg = Config::from_yaml("log_dir: /tmp/worklog\nmodel: gemini-2.0-flash\n").unwrap();
        assert_eq!(cfg.log_dir, "/tmp/worklog");
        assert_eq!(cfg.model, "gemini-2.0-flash");
        assert_eq!(cfg.placeholder_marker, "#");
        assert_eq!(cfg.commit_prefix, "Daily log");
        assert_eq!(cfg.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn repo_dir_defaults_to_log_dir() {
        let cfg = Config {
            log_dir: "/tmp/worklog".into(),
            ..Config::default()
        };
        assert_eq!(cfg.repo_dir_path(), PathBuf::from("/tmp/worklog"));

        let cfg = Config {
            repo_dir: Some("/tmp/repo".into()),
            ..cfg
        };
        assert_eq!(cfg.repo_dir_path(), PathBuf::from("/tmp/repo"));
    }

    #[test]
    fn garbage_yaml_is_a_config_error() {
        let err = Config::from_yaml("log_dir: [unclosed").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dwlog.conf");
        let cfg = Config {
            git_remote: Some("origin".into()),
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(Config::load(Some(path.as_path())).unwrap(), cfg);
    }
}
