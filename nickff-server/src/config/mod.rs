//! Configuration module for nickff-server.
//!
//! Handles loading configuration from an optional TOML file and CLI
//! arguments, validating it, and converting it into runtime config.

pub mod file;

use crate::config::file::{FileConfig, UpstreamConfig as FileUpstreamConfig};
use nickff_sdk::config::{ServerConfig, UpstreamConfig};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid upstream endpoint: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader. Without a path, only defaults and CLI
    /// overrides apply.
    pub fn new(config_path: Option<&Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.map(Path::to_path_buf),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, if one was given
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut file_config = match &self.config_path {
            Some(path) => {
                let config_content = std::fs::read_to_string(path)?;
                toml::from_str(&config_content)?
            }
            None => FileConfig::default(),
        };

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        self.build_loaded_config(file_config)
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn build_loaded_config(&self, file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        Ok(LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            upstream: convert_upstream(file_config.upstream)?,
        })
    }
}

fn convert_upstream(u: FileUpstreamConfig) -> Result<UpstreamConfig, ConfigError> {
    let endpoint = Url::parse(&u.endpoint)?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "upstream endpoint must be http or https, got {}",
            endpoint.scheme()
        )));
    }
    if u.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "upstream timeout_secs must be greater than zero".to_string(),
        ));
    }
    for (name, value) in [
        ("user_agent", &u.user_agent),
        ("voucher_type_name", &u.voucher_type_name),
        ("shop_lang", &u.shop_lang),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "upstream {name} must not be empty"
            )));
        }
    }
    if u.user_agent.chars().any(char::is_control) {
        return Err(ConfigError::ValidationError(
            "upstream user_agent must not contain control characters".to_string(),
        ));
    }

    Ok(UpstreamConfig {
        endpoint,
        user_agent: u.user_agent,
        timeout: Duration::from_secs(u.timeout_secs),
        voucher_price_point_id: u.voucher_price_point_id,
        voucher_type_name: u.voucher_type_name,
        shop_lang: u.shop_lang,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nickff-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let loaded = ConfigLoader::new(None, None).load().unwrap();
        assert_eq!(loaded.server.listen.port(), 8080);
        assert_eq!(loaded.upstream, UpstreamConfig::default());
    }

    #[test]
    fn test_listen_override_wins() {
        let path = write_config("override", "[server]\nlisten = \"127.0.0.1:3000\"\n");
        let listen: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let loaded = ConfigLoader::new(Some(path.as_path()), Some(listen)).load().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.server.listen, listen);
    }

    #[test]
    fn test_upstream_section_is_converted() {
        let path = write_config(
            "upstream",
            r#"
[upstream]
endpoint = "http://127.0.0.1:9000/initPayment.action"
timeout_secs = 3
"#,
        );
        let loaded = ConfigLoader::new(Some(path.as_path()), None).load().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            loaded.upstream.endpoint.as_str(),
            "http://127.0.0.1:9000/initPayment.action"
        );
        assert_eq!(loaded.upstream.timeout, Duration::from_secs(3));
        assert_eq!(loaded.upstream.shop_lang, "in_ID");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("nickff-does-not-exist.toml");
        let err = ConfigLoader::new(Some(path.as_path()), None).load().unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_validation() {
        let zero_timeout = FileUpstreamConfig {
            timeout_secs: 0,
            ..FileUpstreamConfig::default()
        };
        assert!(matches!(
            convert_upstream(zero_timeout),
            Err(ConfigError::ValidationError(_))
        ));

        let ftp = FileUpstreamConfig {
            endpoint: "ftp://order.codashop.com/initPayment.action".to_string(),
            ..FileUpstreamConfig::default()
        };
        assert!(matches!(
            convert_upstream(ftp),
            Err(ConfigError::ValidationError(_))
        ));

        let bad_url = FileUpstreamConfig {
            endpoint: "not a url".to_string(),
            ..FileUpstreamConfig::default()
        };
        assert!(matches!(
            convert_upstream(bad_url),
            Err(ConfigError::UrlError(_))
        ));

        let no_lang = FileUpstreamConfig {
            shop_lang: " ".to_string(),
            ..FileUpstreamConfig::default()
        };
        assert!(matches!(
            convert_upstream(no_lang),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
