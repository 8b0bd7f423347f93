//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use vantage_chunk::ChunkCoord;

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Remote API settings.
    pub api: ApiConfig,
    /// View query settings.
    pub view: ViewConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u32,
}

/// View query configuration: where to look and how far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Chunk coordinate at the center of the view.
    pub center: ChunkCoord,
    /// Maximum Manhattan distance in chunks.
    pub distance: u32,
    /// Page size for chunk and update queries, if paging is wanted.
    pub limit: Option<u32>,
    /// Page offset for chunk and update queries.
    pub skip: Option<u32>,
    /// Only fetch voxel updates at or after this ISO-8601 instant.
    pub since: Option<String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the chunk grid overlay.
    pub show_grid: bool,
    /// Show chunk coordinate labels.
    pub show_labels: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://webapi.crowdedkingdoms.com:6443/graphql".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: ChunkCoord::default(),
            distance: 2,
            limit: None,
            skip: None,
            since: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Default config directory (`<platform config dir>/vantage`), falling
    /// back to the current directory when the platform has none.
    pub fn default_dir() -> std::path::PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("vantage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("distance: 2"));
        assert!(ron_str.contains("graphql"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.view.center = ChunkCoord::new(3, -4, 5);
        config.view.distance = 7;
        config.view.since = Some("2026-08-01T00:00:00Z".to_string());
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.ron"),
            "(view: (distance: 9))",
        )
        .unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.view.distance, 9);
        assert_eq!(config.api, ApiConfig::default());
    }
}
