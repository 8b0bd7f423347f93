//! Debug overlay geometry: chunk grid boxes and coordinate labels.
//!
//! Pure geometry in render space. The grid overlay draws the 12 edges of
//! each chunk's 16³ box; the label overlay anchors a billboard at each
//! chunk's center and rescales it with camera distance so the text stays
//! readable. Both derive their positions from the same coordinate
//! conversion as voxel instances, which keeps the three overlays aligned.

use vantage_chunk::{CHUNK_SIZE, ChunkCoord, RenderVec3};

/// Number of edges in a chunk box wireframe.
pub const GRID_EDGES_PER_CHUNK: usize = 12;

/// Label scale bounds and falloff, matched to a ~40-unit reference distance.
const LABEL_SCALE_MIN: f32 = 0.35;
const LABEL_SCALE_MAX: f32 = 8.0;
const LABEL_DISTANCE_REF: f32 = 40.0;

/// The 12 edges of a chunk's bounding box in render space.
///
/// Each edge is a pair of corner points. Corners are derived from the
/// chunk's render-space origin, so the grid lands exactly around the
/// chunk's voxel instances.
pub fn chunk_box_edges(coord: ChunkCoord) -> [(RenderVec3, RenderVec3); GRID_EDGES_PER_CHUNK] {
    let min = coord.render_origin();
    let s = CHUNK_SIZE as f32;
    let corner = |dx: f32, dy: f32, dz: f32| RenderVec3::new(min.x + dx, min.y + dy, min.z + dz);

    let p000 = corner(0.0, 0.0, 0.0);
    let p001 = corner(0.0, 0.0, s);
    let p010 = corner(0.0, s, 0.0);
    let p011 = corner(0.0, s, s);
    let p100 = corner(s, 0.0, 0.0);
    let p101 = corner(s, 0.0, s);
    let p110 = corner(s, s, 0.0);
    let p111 = corner(s, s, s);

    [
        (p000, p001),
        (p000, p010),
        (p000, p100),
        (p111, p101),
        (p111, p110),
        (p111, p011),
        (p001, p011),
        (p001, p101),
        (p010, p011),
        (p010, p110),
        (p100, p101),
        (p100, p110),
    ]
}

/// Render-space anchor for a chunk's coordinate label: the chunk center.
pub fn label_anchor(coord: ChunkCoord) -> RenderVec3 {
    let min = coord.render_origin();
    let half = CHUNK_SIZE as f32 / 2.0;
    RenderVec3::new(min.x + half, min.y + half, min.z + half)
}

/// Label text for a chunk, in server-axis order.
pub fn label_text(coord: ChunkCoord) -> String {
    format!("{},{},{}", coord.x, coord.y, coord.z)
}

/// Per-frame billboard scale for a label at `distance` from the camera.
///
/// Proportional to distance so the on-screen size stays roughly constant,
/// clamped so near labels stay legible and far labels stop growing.
pub fn label_scale(distance: f32) -> f32 {
    (distance / LABEL_DISTANCE_REF).clamp(LABEL_SCALE_MIN, LABEL_SCALE_MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges_span_the_chunk() {
        let edges = chunk_box_edges(ChunkCoord::new(1, 2, 3));
        // Render origin of (1,2,3) is (16, 48, 32) after the axis swap.
        let min = RenderVec3::new(16.0, 48.0, 32.0);
        let max = RenderVec3::new(32.0, 64.0, 48.0);
        for (a, b) in edges {
            for p in [a, b] {
                assert!(p.x == min.x || p.x == max.x);
                assert!(p.y == min.y || p.y == max.y);
                assert!(p.z == min.z || p.z == max.z);
            }
        }
    }

    #[test]
    fn test_box_has_twelve_unique_edges() {
        let edges = chunk_box_edges(ChunkCoord::default());
        assert_eq!(edges.len(), GRID_EDGES_PER_CHUNK);
        for (i, (a1, b1)) in edges.iter().enumerate() {
            for (a2, b2) in edges.iter().skip(i + 1) {
                assert!(!(a1 == a2 && b1 == b2), "duplicate edge");
            }
            // Edges are axis-aligned with length 16.
            assert_eq!(a1.distance(b1), CHUNK_SIZE as f32);
        }
    }

    #[test]
    fn test_label_anchor_is_chunk_center_in_render_space() {
        let anchor = label_anchor(ChunkCoord::new(1, 2, 3));
        assert_eq!(anchor, RenderVec3::new(24.0, 56.0, 40.0));
    }

    #[test]
    fn test_label_anchor_aligns_with_grid() {
        // The label must sit at the centroid of the grid box corners.
        let coord = ChunkCoord::new(-2, 5, 0);
        let edges = chunk_box_edges(coord);
        let anchor = label_anchor(coord);
        let (mut sx, mut sy, mut sz, mut n) = (0.0f32, 0.0f32, 0.0f32, 0u32);
        for (a, b) in edges {
            for p in [a, b] {
                sx += p.x;
                sy += p.y;
                sz += p.z;
                n += 1;
            }
        }
        let n = n as f32;
        assert_eq!(RenderVec3::new(sx / n, sy / n, sz / n), anchor);
    }

    #[test]
    fn test_label_text_uses_server_axis_order() {
        assert_eq!(label_text(ChunkCoord::new(1, -2, 3)), "1,-2,3");
    }

    #[test]
    fn test_label_scale_clamps() {
        assert_eq!(label_scale(0.0), 0.35);
        assert_eq!(label_scale(40.0), 1.0);
        assert_eq!(label_scale(10_000.0), 8.0);
    }
}
