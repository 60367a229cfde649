//! Configuration management

use crate::error::{LexstatError, LexstatResult};
use crate::types::{LexstatConfig, ServerConfig};

use std::path::{Path, PathBuf};

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8081,
            root_dir: PathBuf::from("."),
        }
    }
}

impl LexstatConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> LexstatResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LexstatError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: LexstatConfig = toml::from_str(&content).map_err(|e| LexstatError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LexstatResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| LexstatError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| LexstatError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> LexstatResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(LexstatError::Config {
                message: "Server host must not be empty".to_string(),
                source: None,
                context: crate::ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set server.host, e.g. \"127.0.0.1\""),
            });
        }

        if self.server.port == 0 {
            return Err(LexstatError::Config {
                message: "Server port must be greater than 0".to_string(),
                source: None,
                context: crate::ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set server.port to a positive value"),
            });
        }

        if self.server.root_dir.as_os_str().is_empty() {
            return Err(LexstatError::Config {
                message: "Server root_dir must not be empty".to_string(),
                source: None,
                context: crate::ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set server.root_dir to the directory files are served from"),
            });
        }

        Ok(())
    }
}
