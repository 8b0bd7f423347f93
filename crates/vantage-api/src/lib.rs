//! GraphQL client for the voxel-world service: auth, map states, and
//! distance-bounded chunk and voxel-update queries.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use query::{ChunksByDistanceInput, VoxelUpdatesByDistanceInput};
pub use types::{AuthTokens, ChunkSummary, ChunkVoxelUpdates, UserMapState, WireCoordinates};
