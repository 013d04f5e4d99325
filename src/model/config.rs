use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "SCREENING_GATEWAY_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Host filtering for the name-scan fetcher
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameScanPolicy {
    /// Allowed hosts. If empty, all hosts are allowed.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Denied hosts. Wins over the allow list.
    #[serde(default)]
    pub deny: Vec<String>,
}

impl NameScanPolicy {
    /// Check whether a URL may be fetched under this policy
    pub fn is_url_allowed(&self, url: &Url) -> bool {
        let host = match url.host_str() {
            Some(host) => host.to_lowercase(),
            None => return false,
        };

        if self.deny.iter().any(|d| host.contains(&d.to_lowercase())) {
            return false;
        }

        if self.allow.is_empty() {
            return true;
        }

        self.allow.iter().any(|a| host.contains(&a.to_lowercase()))
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub namescan: NameScanPolicy,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub namescan: NameScanPolicy,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namescan: NameScanPolicy::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    ///
    /// The screening service location is deliberately not read here: it is
    /// required, so resolving it is a startup concern (see AppState::new).
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let namescan = Self::load_config_file(&config_path)
            .map(|file| file.namescan)
            .unwrap_or_default();

        Self {
            namescan,
            port,
            host,
        }
    }

    /// Load the optional YAML file; any problem falls back to defaults
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return None;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                return None;
            }
        };

        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(file)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
