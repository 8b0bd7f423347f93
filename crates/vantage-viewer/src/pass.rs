//! One fetch-and-resolve pass over the viewer's scene state.
//!
//! Owns the overlay caches across passes so grid and label objects are
//! created once per chunk coordinate and torn down when the view moves.
//! Placeholder overlays cover the full distance-bounded key set, not just
//! chunks the server returned data for.

use tracing::debug;

use vantage_api::{ChunkSummary, ChunkVoxelUpdates};
use vantage_chunk::{ChunkCoord, RenderVec3, chunk_keys_within_distance};
use vantage_scene::{
    GRID_EDGES_PER_CHUNK, KeyedCache, chunk_box_edges, label_anchor, label_text, resolve_chunks,
};

/// Grid overlay entry: the 12 box edges for one chunk.
struct GridObject {
    edges: [(RenderVec3, RenderVec3); GRID_EDGES_PER_CHUNK],
}

/// Label overlay entry: anchor point and text for one chunk.
struct LabelObject {
    anchor: RenderVec3,
    text: String,
}

/// What a pass produced, for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Chunks that resolved to a voxel buffer.
    pub resolved_chunks: usize,
    /// Non-air voxels across all resolved chunks.
    pub solid_voxels: usize,
    /// Live grid overlay objects after reconciliation.
    pub grid_objects: usize,
    /// Live label overlay objects after reconciliation.
    pub label_objects: usize,
}

/// Scene state that persists between passes.
pub struct ViewPass {
    show_grid: bool,
    show_labels: bool,
    grids: KeyedCache<ChunkCoord, GridObject>,
    labels: KeyedCache<ChunkCoord, LabelObject>,
}

impl ViewPass {
    pub fn new(show_grid: bool, show_labels: bool) -> Self {
        Self {
            show_grid,
            show_labels,
            grids: KeyedCache::new(),
            labels: KeyedCache::new(),
        }
    }

    /// Resolves a fetched batch and reconciles the overlay caches.
    pub fn run(
        &mut self,
        center: ChunkCoord,
        distance: u32,
        summaries: &[ChunkSummary],
        updates: Vec<ChunkVoxelUpdates>,
    ) -> PassReport {
        let resolved = resolve_chunks(summaries, updates);
        let solid_voxels = resolved.iter().map(|chunk| chunk.solid_count()).sum();

        // Overlays cover every coordinate the query could have returned,
        // so empty space still shows its chunk grid.
        let desired = chunk_keys_within_distance(center, distance);
        let empty = Default::default();

        let grid_stats = self.grids.reconcile(
            if self.show_grid { &desired } else { &empty },
            |coord| GridObject {
                edges: chunk_box_edges(*coord),
            },
            |coord, _| debug!(%coord, "disposed grid"),
        );
        let label_stats = self.labels.reconcile(
            if self.show_labels { &desired } else { &empty },
            |coord| LabelObject {
                anchor: label_anchor(*coord),
                text: label_text(*coord),
            },
            |coord, _| debug!(%coord, "disposed label"),
        );
        debug!(
            grids_created = grid_stats.created,
            grids_disposed = grid_stats.disposed,
            labels_created = label_stats.created,
            labels_disposed = label_stats.disposed,
            "overlays reconciled"
        );

        PassReport {
            resolved_chunks: resolved.len(),
            solid_voxels,
            grid_objects: self.grids.len(),
            label_objects: self.labels.len(),
        }
    }

    /// Box edges for a live grid overlay entry. This is the drawing seam:
    /// a renderer pulls line segments from here.
    pub fn grid_edges(
        &self,
        coord: &ChunkCoord,
    ) -> Option<&[(RenderVec3, RenderVec3); GRID_EDGES_PER_CHUNK]> {
        self.grids.get(coord).map(|grid| &grid.edges)
    }

    /// Anchor and text for a live label overlay entry.
    pub fn label(&self, coord: &ChunkCoord) -> Option<(RenderVec3, &str)> {
        self.labels
            .get(coord)
            .map(|label| (label.anchor, label.text.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(coord: ChunkCoord) -> ChunkSummary {
        serde_json::from_value(serde_json::json!({
            "chunkId": "1",
            "mapId": "1",
            "coordinates": {
                "x": coord.x.to_string(),
                "y": coord.y.to_string(),
                "z": coord.z.to_string(),
            },
        }))
        .unwrap()
    }

    #[test]
    fn test_overlays_cover_full_key_set() {
        let mut pass = ViewPass::new(true, true);
        // Only one chunk has data, but overlays cover all 7 keys at d=1.
        let report = pass.run(ChunkCoord::default(), 1, &[summary(ChunkCoord::default())], vec![]);
        assert_eq!(report.resolved_chunks, 1);
        assert_eq!(report.grid_objects, 7);
        assert_eq!(report.label_objects, 7);
    }

    #[test]
    fn test_moving_center_tears_down_stale_overlays() {
        let mut pass = ViewPass::new(true, true);
        pass.run(ChunkCoord::default(), 1, &[], vec![]);
        let report = pass.run(ChunkCoord::new(10, 0, 0), 0, &[], vec![]);
        assert_eq!(report.grid_objects, 1);
        assert_eq!(report.label_objects, 1);
    }

    #[test]
    fn test_overlay_entries_expose_their_geometry() {
        let mut pass = ViewPass::new(true, true);
        let coord = ChunkCoord::new(2, -1, 0);
        pass.run(coord, 0, &[], vec![]);

        let edges = pass.grid_edges(&coord).unwrap();
        assert_eq!(*edges, chunk_box_edges(coord));

        let (anchor, text) = pass.label(&coord).unwrap();
        assert_eq!(anchor, label_anchor(coord));
        assert_eq!(text, label_text(coord));

        // Chunks outside the desired set have no overlay entries.
        assert!(pass.grid_edges(&ChunkCoord::default()).is_none());
        assert!(pass.label(&ChunkCoord::default()).is_none());
    }

    #[test]
    fn test_disabled_overlays_stay_empty() {
        let mut pass = ViewPass::new(false, false);
        let report = pass.run(ChunkCoord::default(), 2, &[], vec![]);
        assert_eq!(report.grid_objects, 0);
        assert_eq!(report.label_objects, 0);
    }
}
