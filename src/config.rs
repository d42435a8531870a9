// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ConnectorError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub feed: FeedConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// IOC type of the export to read, e.g. `ip`, `domain`, `url`, `sha256`.
    /// Used verbatim in the download URL and the expected member name.
    pub ioc_type: String,
    pub base_url: String,
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub pretty: bool,
}

fn default_verify_tls() -> bool {
    true
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THREATFOX")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ConnectorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ConnectorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            feed: FeedConfig {
                ioc_type: "ip".to_string(),
                base_url: "https://threatfox.abuse.ch/export/csv".to_string(),
                verify_tls: true,
                timeout_secs: None,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                pretty: false,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_ioc_type(&self.feed.ioc_type)?;
        Validator::validate_url(&self.feed.base_url)?;

        if self.feed.timeout_secs == Some(0) {
            return Err(ConnectorError::Config(
                "timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert!(config.feed.verify_tls);
        assert_eq!(config.feed.ioc_type, "ip");
    }

    #[test]
    fn test_empty_ioc_type_rejected() {
        let mut config = Config::default_config();
        config.feed.ioc_type = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = Config::default_config();
        config.feed.base_url = "ftp://threatfox.abuse.ch".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default_config();
        config.feed.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[feed]
ioc_type = "domain"
base_url = "https://threatfox.abuse.ch/export/csv"

[export]
output_dir = "./out"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.feed.ioc_type, "domain");
        assert!(config.feed.verify_tls);
        assert_eq!(config.feed.timeout_secs, None);
        assert!(!config.export.pretty);
    }
}
