//! GraphQL query documents and input assembly.
//!
//! Inputs serialize with `skip_serializing_if` on every optional filter:
//! an absent `limit`, `skip`, or `since` must not appear in the variables
//! at all. The server distinguishes "field omitted" from "field null", so
//! this is wire compatibility, not style.

use serde::Serialize;

use vantage_chunk::ChunkCoord;

use crate::types::WireCoordinates;

/// Login mutation document.
pub const LOGIN: &str = r#"
mutation Login($input: LoginUserInput!) {
  login(loginUserInput: $input) {
    token
    gameTokenId
  }
}
"#;

/// Register mutation document.
pub const REGISTER: &str = r#"
mutation Register($input: RegisterUserInput!) {
  register(registerUserInput: $input) {
    token
    gameTokenId
  }
}
"#;

/// User map states query document.
pub const USER_MAP_STATES: &str = r#"
query UserMapStates {
  userMapStates { mapId }
}
"#;

/// Chunks-by-distance query document.
pub const CHUNKS_BY_DISTANCE: &str = r#"
query GetChunksByDistance($input: GetChunksByDistanceInput!) {
  getChunksByDistance(input: $input) {
    chunks {
      chunkId
      mapId
      coordinates { x y z }
      voxels
    }
    limit
    skip
  }
}
"#;

/// Voxel-updates-by-distance query document.
pub const VOXEL_UPDATES_BY_DISTANCE: &str = r#"
query ListVoxelUpdatesByDistance($input: ListVoxelUpdatesByDistanceInput!) {
  listVoxelUpdatesByDistance(input: $input) {
    chunks {
      coordinates { x y z }
      voxels { location { x y z } voxelType }
    }
    limit
    skip
  }
}
"#;

/// Variables for the login mutation.
#[derive(Debug, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Variables for the register mutation. The schema calls the display name
/// `gamertag`.
#[derive(Debug, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub gamertag: String,
}

/// Input for the chunks-by-distance query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunksByDistanceInput {
    /// Map identifier (arbitrary-precision integer as string).
    pub map_id: String,
    /// Query center, stringified per the wire convention.
    pub center_coordinate: WireCoordinates,
    /// Maximum Manhattan distance in chunks.
    pub max_distance: u32,
    /// Page size. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl ChunksByDistanceInput {
    /// Builds an input with no pagination filters.
    pub fn new(map_id: impl Into<String>, center: ChunkCoord, max_distance: u32) -> Self {
        Self {
            map_id: map_id.into(),
            center_coordinate: center.into(),
            max_distance,
            limit: None,
            skip: None,
        }
    }
}

/// Input for the voxel-updates-by-distance query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoxelUpdatesByDistanceInput {
    /// Map identifier (arbitrary-precision integer as string).
    pub map_id: String,
    /// Query center, stringified per the wire convention.
    pub center_coordinate: WireCoordinates,
    /// Maximum Manhattan distance in chunks.
    pub max_distance: u32,
    /// Page size. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Only updates at or after this ISO-8601 instant. Omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl VoxelUpdatesByDistanceInput {
    /// Builds an input with no pagination or time filters.
    pub fn new(map_id: impl Into<String>, center: ChunkCoord, max_distance: u32) -> Self {
        Self {
            map_id: map_id.into(),
            center_coordinate: center.into(),
            max_distance,
            limit: None,
            skip: None,
            since: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
