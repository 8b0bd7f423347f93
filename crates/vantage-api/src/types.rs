//! Wire types for the GraphQL schema.
//!
//! Identifiers and coordinates are arbitrary-precision integers on the
//! server and are serialized as strings; this module keeps them as strings
//! at the wire boundary and converts coordinates to [`ChunkCoord`] at
//! ingress, so every downstream map is keyed by the normalized integer
//! form.

use serde::{Deserialize, Serialize};

use vantage_chunk::{ChunkCoord, CoordParseError, VoxelUpdate};

use crate::error::ApiError;

/// Tokens returned by login and register.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Opaque game-session token identifier.
    pub game_token_id: String,
}

/// One map the authenticated user has state on.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMapState {
    /// Map identifier (arbitrary-precision integer as string).
    pub map_id: String,
}

/// Chunk coordinate as it appears on the wire: stringified integers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireCoordinates {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl WireCoordinates {
    /// Normalizes to the integer coordinate used as the canonical key.
    pub fn to_coord(&self) -> Result<ChunkCoord, CoordParseError> {
        ChunkCoord::from_wire(&self.x, &self.y, &self.z)
    }
}

impl From<ChunkCoord> for WireCoordinates {
    fn from(coord: ChunkCoord) -> Self {
        Self {
            x: coord.x.to_string(),
            y: coord.y.to_string(),
            z: coord.z.to_string(),
        }
    }
}

/// One chunk from a chunks-by-distance query.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSummary {
    /// Chunk identifier (arbitrary-precision integer as string).
    pub chunk_id: String,
    /// Map identifier (arbitrary-precision integer as string).
    pub map_id: String,
    /// Chunk grid position.
    pub coordinates: WireCoordinates,
    /// Base64 payload of 4096 voxel-type bytes, absent when the chunk has
    /// no materialized voxel data.
    #[serde(default)]
    pub voxels: Option<String>,
}

/// Chunk-local voxel position on the wire.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WireVoxelLocation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// One voxel update record on the wire.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVoxelUpdate {
    pub location: WireVoxelLocation,
    pub voxel_type: u32,
}

impl From<WireVoxelUpdate> for VoxelUpdate {
    fn from(wire: WireVoxelUpdate) -> Self {
        VoxelUpdate::new(wire.location.x, wire.location.y, wire.location.z, wire.voxel_type)
    }
}

/// The pending update queue for one chunk, in server order.
#[derive(Clone, Debug, Deserialize)]
pub struct ChunkVoxelUpdates {
    /// Chunk grid position.
    pub coordinates: WireCoordinates,
    /// Updates in application order.
    pub voxels: Vec<WireVoxelUpdate>,
}

impl ChunkVoxelUpdates {
    /// Converts to the normalized coordinate plus domain update records.
    ///
    /// A malformed coordinate string is an [`ApiError::Coord`]: it means
    /// the wire payload itself is bad, not that an update missed a chunk.
    pub fn into_domain(self) -> Result<(ChunkCoord, Vec<VoxelUpdate>), ApiError> {
        let coord = self.coordinates.to_coord()?;
        let updates = self.voxels.into_iter().map(VoxelUpdate::from).collect();
        Ok((coord, updates))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_coordinates_round_trip() {
        let coord = ChunkCoord::new(-4, 7, 0);
        let wire = WireCoordinates::from(coord);
        assert_eq!(wire.x, "-4");
        assert_eq!(wire.to_coord().unwrap(), coord);
    }

    #[test]
    fn test_chunk_summary_deserializes_without_voxels() {
        let json = r#"{
            "chunkId": "9000000000000000001",
            "mapId": "1",
            "coordinates": { "x": "0", "y": "0", "z": "0" }
        }"#;
        let summary: ChunkSummary = serde_json::from_str(json).unwrap();
        assert!(summary.voxels.is_none());
        assert_eq!(summary.chunk_id, "9000000000000000001");
    }

    #[test]
    fn test_updates_convert_to_domain() {
        let json = r#"{
            "coordinates": { "x": "1", "y": "2", "z": "3" },
            "voxels": [
                { "location": { "x": 0, "y": 1, "z": 2 }, "voxelType": 300 }
            ]
        }"#;
        let wire: ChunkVoxelUpdates = serde_json::from_str(json).unwrap();
        let (coord, updates) = wire.into_domain().unwrap();
        assert_eq!(coord, ChunkCoord::new(1, 2, 3));
        assert_eq!(updates, vec![VoxelUpdate::new(0, 1, 2, 300)]);
    }

    #[test]
    fn test_updates_with_bad_coordinate_fail() {
        let json = r#"{
            "coordinates": { "x": "one", "y": "2", "z": "3" },
            "voxels": []
        }"#;
        let wire: ChunkVoxelUpdates = serde_json::from_str(json).unwrap();
        let err = wire.into_domain().unwrap_err();
        assert!(matches!(err, ApiError::Coord(_)));
    }
}
