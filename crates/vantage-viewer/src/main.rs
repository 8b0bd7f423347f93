//! Vantage — voxel-world viewer client.
//!
//! Authenticates against the remote GraphQL service, fetches the chunk
//! neighborhood around the configured center, merges pending voxel
//! updates, and maintains the debug overlay state. Rendering proper is a
//! collaborator's job; this binary reports the resolved scene over
//! tracing.
//!
//! Credentials come from `VANTAGE_EMAIL` and `VANTAGE_PASSWORD`.
//!
//! Run with: `cargo run -p vantage-viewer`

mod pass;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use vantage_api::{ApiClient, ApiError, ChunksByDistanceInput, VoxelUpdatesByDistanceInput};
use vantage_config::{CliArgs, Config, ConfigError};

use crate::pass::ViewPass;

/// Top-level viewer failure. Per-chunk decode problems never reach this;
/// they are logged and skipped inside the scene pass.
#[derive(Debug, thiserror::Error)]
enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("set VANTAGE_EMAIL and VANTAGE_PASSWORD to authenticate")]
    MissingCredentials,
    #[error("account has no map state to view")]
    NoMapState,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(Config::default_dir);
    let config = match Config::load_or_create(&config_dir) {
        Ok(mut config) => {
            config.apply_cli_overrides(&args);
            config
        }
        Err(e) => {
            eprintln!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    vantage_log::init_logging(Some(&config));

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), ViewerError> {
    let email = std::env::var("VANTAGE_EMAIL").map_err(|_| ViewerError::MissingCredentials)?;
    let password =
        std::env::var("VANTAGE_PASSWORD").map_err(|_| ViewerError::MissingCredentials)?;

    let timeout = Duration::from_secs(u64::from(config.api.timeout_seconds));
    let mut client = ApiClient::new(&config.api.endpoint, timeout)?;

    let tokens = client.login(&email, &password).await?;
    info!(game_token_id = %tokens.game_token_id, "authenticated");

    let map_states = client.user_map_states().await?;
    let map_id = map_states
        .first()
        .map(|state| state.map_id.clone())
        .ok_or(ViewerError::NoMapState)?;
    info!(%map_id, center = %config.view.center, distance = config.view.distance, "viewing");

    let mut chunks_input =
        ChunksByDistanceInput::new(&map_id, config.view.center, config.view.distance);
    chunks_input.limit = config.view.limit;
    chunks_input.skip = config.view.skip;

    let mut updates_input =
        VoxelUpdatesByDistanceInput::new(&map_id, config.view.center, config.view.distance);
    updates_input.limit = config.view.limit;
    updates_input.skip = config.view.skip;
    updates_input.since = config.view.since.clone();

    let summaries = client.chunks_by_distance(&chunks_input).await?;
    let updates = client.voxel_updates_by_distance(&updates_input).await?;

    let mut pass = ViewPass::new(config.debug.show_grid, config.debug.show_labels);
    let report = pass.run(config.view.center, config.view.distance, &summaries, updates);

    info!(
        chunks = report.resolved_chunks,
        voxels = report.solid_voxels,
        grids = report.grid_objects,
        labels = report.label_objects,
        "scene pass complete"
    );
    Ok(())
}
