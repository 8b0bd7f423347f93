//! Command-line argument parsing for the Vantage viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Vantage viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "vantage", about = "Voxel-world viewer client")]
pub struct CliArgs {
    /// GraphQL endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// View center as "x:y:z" chunk coordinates.
    #[arg(long)]
    pub center: Option<String>,

    /// View distance in chunks (Manhattan).
    #[arg(long)]
    pub distance: Option<u32>,

    /// Page size for chunk and update queries.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Only fetch voxel updates at or after this ISO-8601 instant.
    #[arg(long)]
    pub since: Option<String>,

    /// Show the chunk grid overlay.
    #[arg(long)]
    pub show_grid: Option<bool>,

    /// Show chunk coordinate labels.
    #[arg(long)]
    pub show_labels: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// An unparseable `--center` is ignored; the config value stands.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref endpoint) = args.endpoint {
            self.api.endpoint = endpoint.clone();
        }
        if let Some(ref center) = args.center {
            match center.parse() {
                Ok(coord) => self.view.center = coord,
                Err(e) => log::warn!("ignoring --center {center:?}: {e}"),
            }
        }
        if let Some(distance) = args.distance {
            self.view.distance = distance;
        }
        if let Some(limit) = args.limit {
            self.view.limit = Some(limit);
        }
        if let Some(ref since) = args.since {
            self.view.since = Some(since.clone());
        }
        if let Some(show) = args.show_grid {
            self.debug.show_grid = show;
        }
        if let Some(show) = args.show_labels {
            self.debug.show_labels = show;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_chunk::ChunkCoord;

    fn empty_args() -> CliArgs {
        CliArgs {
            endpoint: None,
            center: None,
            distance: None,
            limit: None,
            since: None,
            show_grid: None,
            show_labels: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            center: Some("4:-2:0".to_string()),
            distance: Some(6),
            log_level: Some("debug".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.view.center, ChunkCoord::new(4, -2, 0));
        assert_eq!(config.view.distance, 6);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults.
        assert_eq!(config.api, crate::ApiConfig::default());
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_bad_center_is_ignored() {
        let mut config = Config::default();
        let args = CliArgs {
            center: Some("not-a-coordinate".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.view.center, ChunkCoord::default());
    }
}
