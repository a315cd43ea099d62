//! Application configuration
//!
//! Loaded from the environment by default, or from a TOML file when
//! `JOKEBOT_CONFIG` points at one:
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! joke_api_url = "https://api.chucknorris.io"
//! joke_api_timeout_secs = 10
//! ```

use std::env;
use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::jokes::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the joke API
    #[serde(default = "default_joke_api_url")]
    pub joke_api_url: String,

    /// Per-request timeout for the joke API; unset waits indefinitely
    #[serde(default)]
    pub joke_api_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_joke_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            joke_api_url: default_joke_api_url(),
            joke_api_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| ConfigError::Validation(format!("PORT is not a valid port: {}", p)))?,
            Err(_) => default_port(),
        };

        let joke_api_timeout_secs = match env::var("JOKE_API_TIMEOUT_SECS") {
            Ok(t) => Some(t.parse().map_err(|_| {
                ConfigError::Validation(format!("JOKE_API_TIMEOUT_SECS is not a number: {}", t))
            })?),
            Err(_) => None,
        };

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port,
            joke_api_url: env::var("JOKE_API_URL").unwrap_or_else(|_| default_joke_api_url()),
            joke_api_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `JOKEBOT_CONFIG` file if set, otherwise the environment
    pub fn load() -> Result<Self, ConfigError> {
        match env::var("JOKEBOT_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Self::from_env(),
        }
    }

    pub fn joke_api_timeout(&self) -> Option<Duration> {
        self.joke_api_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.joke_api_url).map_err(|e| {
            ConfigError::Validation(format!(
                "joke_api_url is not a valid URL ({}): {}",
                e, self.joke_api_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::Validation(format!(
                "joke_api_url must be an http(s) URL with a host: {}",
                self.joke_api_url
            )));
        }
        if self.joke_api_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "joke_api_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml(
            r#"
host = "0.0.0.0"
port = 8080
joke_api_url = "http://localhost:9000"
joke_api_timeout_secs = 5
"#,
        )
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.joke_api_url, "http://localhost:9000");
        assert_eq!(config.joke_api_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.joke_api_url, "https://api.chucknorris.io");
        assert_eq!(config.joke_api_timeout(), None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml(r#"joke_api_url = "ftp://jokes""#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml("joke_api_timeout_secs = 0"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml("port = \"eighty\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_joke_api_url() {
        let malformed = [
            "http://",
            "https://exa mple.com",
            "http://:99999",
            "not a url",
            "mailto:jokes@example.com",
        ];
        for url in malformed {
            let result = Config::from_toml(&format!("joke_api_url = \"{}\"", url));
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "accepted {url}"
            );
        }
    }
}
