//! Configuration loading for the KshetraPath service

use std::path::Path;

use kshetra_plan::PlannerConfig;
use serde::Deserialize;

use crate::error::Result;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,

    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Network listen settings
#[derive(Clone, Debug, Deserialize)]
pub struct ListenConfig {
    /// Bind host (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port number (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the full address string for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:5000");
        assert!((config.planner.obstacle_threshold - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_partial_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [planner]
            obstacle_threshold = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.address(), "127.0.0.1:8080");
        assert!((config.planner.obstacle_threshold - 0.5).abs() < 1e-6);
        assert_eq!(config.planner.demo_hazard_count, 6);
    }
}
