//! Chunk coordinates and coordinate-space conversion.
//!
//! Chunk coordinates arrive over the wire as stringified integers (the
//! server serializes arbitrary-precision values as strings). [`ChunkCoord`]
//! is the normalized integer form and is the canonical key for every
//! per-chunk map and cache; the string and numeric representations must
//! converge on it at ingress.
//!
//! The server authors geometry z-up while renderers consume y-up, so every
//! server-sourced position crosses [`server_to_render_space`] exactly once
//! on its way to a consumer.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::voxels::CHUNK_SIZE;

/// Error parsing a chunk coordinate from its wire or key representation.
#[derive(Debug, thiserror::Error)]
pub enum CoordParseError {
    /// A component is not a valid integer.
    #[error("invalid coordinate component {component:?}: {source}")]
    InvalidComponent {
        /// The offending component text.
        component: String,
        /// The underlying integer parse failure.
        source: std::num::ParseIntError,
    },
    /// A `"x:y:z"` key does not have exactly three components.
    #[error("expected 3 colon-separated components, got {0}")]
    WrongComponentCount(usize),
}

/// Integer position of a chunk in the 16³-voxel chunk grid.
///
/// Immutable value type. Ordered so that key sets can be iterated
/// deterministically in tests and diagnostics.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl ChunkCoord {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Parses the wire representation: three stringified integers.
    pub fn from_wire(x: &str, y: &str, z: &str) -> Result<Self, CoordParseError> {
        let parse = |component: &str| {
            component
                .trim()
                .parse::<i64>()
                .map_err(|source| CoordParseError::InvalidComponent {
                    component: component.to_string(),
                    source,
                })
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
            z: parse(z)?,
        })
    }

    /// World-space origin of this chunk in server axes (coordinate × 16).
    pub fn world_origin(&self) -> (i64, i64, i64) {
        let s = CHUNK_SIZE as i64;
        (self.x * s, self.y * s, self.z * s)
    }

    /// World-space origin of this chunk in render axes (y-up).
    pub fn render_origin(&self) -> RenderVec3 {
        let (wx, wy, wz) = self.world_origin();
        let (rx, ry, rz) = server_to_render_space(wx as f32, wy as f32, wz as f32);
        RenderVec3::new(rx, ry, rz)
    }

    /// Manhattan distance to another chunk coordinate.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

/// Canonical key form: `"x:y:z"`. Round-trips through [`FromStr`].
impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.x, self.y, self.z)
    }
}

impl FromStr for ChunkCoord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CoordParseError::WrongComponentCount(parts.len()));
        }
        Self::from_wire(parts[0], parts[1], parts[2])
    }
}

/// A position in render space (y-up), in voxel units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RenderVec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another render-space point.
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Maps a server-space (z-up) triple to render-space (y-up) axes.
///
/// A pure relabeling: `(sx, sy, sz)` becomes `(sx, sz, sy)`. Every
/// geometric quantity derived from server coordinates (chunk corners,
/// label anchors, voxel centers) must pass through this conversion, or
/// independently rendered elements drift apart.
pub fn server_to_render_space<T>(sx: T, sy: T, sz: T) -> (T, T, T) {
    (sx, sz, sy)
}

/// Enumerates every chunk coordinate within `distance` Manhattan steps of
/// `center`, the center itself included.
///
/// Pure; the result is the exact key set an update or chunk query with the
/// same center and distance can cover, used to place grid and label
/// placeholders before data arrives.
pub fn chunk_keys_within_distance(center: ChunkCoord, distance: u32) -> FxHashSet<ChunkCoord> {
    let d = i64::from(distance);
    let mut keys = FxHashSet::default();
    for dx in -d..=d {
        let rem_x = d - dx.abs();
        for dy in -rem_x..=rem_x {
            let rem_y = rem_x - dy.abs();
            for dz in -rem_y..=rem_y {
                keys.insert(ChunkCoord::new(center.x + dx, center.y + dy, center.z + dz));
            }
        }
    }
    keys
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_parse_normalizes_to_integer_key() {
        let a = ChunkCoord::from_wire("3", "-1", "12").unwrap();
        let b = ChunkCoord::new(3, -1, 12);
        assert_eq!(a, b);

        let mut set = FxHashSet::default();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_wire_parse_rejects_non_integer() {
        let err = ChunkCoord::from_wire("3", "nope", "12").unwrap_err();
        assert!(matches!(err, CoordParseError::InvalidComponent { .. }));
    }

    #[test]
    fn test_key_display_round_trips() {
        let coord = ChunkCoord::new(-7, 0, 42);
        let key = coord.to_string();
        assert_eq!(key, "-7:0:42");
        assert_eq!(key.parse::<ChunkCoord>().unwrap(), coord);
    }

    #[test]
    fn test_key_parse_rejects_wrong_arity() {
        let err = "1:2".parse::<ChunkCoord>().unwrap_err();
        assert!(matches!(err, CoordParseError::WrongComponentCount(2)));
    }

    #[test]
    fn test_world_origin_scales_by_chunk_size() {
        let coord = ChunkCoord::new(2, -1, 3);
        assert_eq!(coord.world_origin(), (32, -16, 48));
    }

    #[test]
    fn test_server_to_render_space_swaps_y_and_z() {
        assert_eq!(server_to_render_space(1, 2, 3), (1, 3, 2));
    }

    #[test]
    fn test_render_origin_applies_axis_swap() {
        let origin = ChunkCoord::new(1, 2, 3).render_origin();
        assert_eq!(origin, RenderVec3::new(16.0, 48.0, 32.0));
    }

    #[test]
    fn test_distance_zero_yields_only_center() {
        let center = ChunkCoord::new(5, -3, 9);
        let keys = chunk_keys_within_distance(center, 0);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains(&center));
    }

    #[test]
    fn test_distance_one_yields_axis_neighbors_only() {
        let keys = chunk_keys_within_distance(ChunkCoord::default(), 1);
        let expected = [
            (0, 0, 0),
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];
        assert_eq!(keys.len(), expected.len());
        for (x, y, z) in expected {
            assert!(keys.contains(&ChunkCoord::new(x, y, z)), "missing ({x}, {y}, {z})");
        }
        // Diagonals are Manhattan distance 2 and must be excluded.
        assert!(!keys.contains(&ChunkCoord::new(1, 1, 0)));
        assert!(!keys.contains(&ChunkCoord::new(1, 1, 1)));
    }

    #[test]
    fn test_distance_matches_direct_enumeration() {
        let center = ChunkCoord::new(-2, 4, 1);
        for distance in 0..=4u32 {
            let keys = chunk_keys_within_distance(center, distance);
            let d = i64::from(distance);
            let mut expected = FxHashSet::default();
            for x in (center.x - d)..=(center.x + d) {
                for y in (center.y - d)..=(center.y + d) {
                    for z in (center.z - d)..=(center.z + d) {
                        let candidate = ChunkCoord::new(x, y, z);
                        if center.manhattan_distance(&candidate) <= distance as u64 {
                            expected.insert(candidate);
                        }
                    }
                }
            }
            assert_eq!(keys, expected, "mismatch at distance {distance}");
        }
    }
}
