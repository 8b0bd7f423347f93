//! Resolves a fetched chunk batch into render-ready voxel buffers.
//!
//! One pass per query round-trip: decode each chunk's payload, merge the
//! chunk's pending voxel updates on top, and emit the 4096-byte buffer
//! with its render-space origin. A chunk whose payload fails to decode is
//! dropped from the pass with a warning; its siblings still resolve.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use vantage_api::{ChunkSummary, ChunkVoxelUpdates};
use vantage_chunk::{
    CHUNK_SIZE, CHUNK_VOLUME, ChunkCoord, RenderVec3, VoxelUpdate, apply_updates, decode_voxels,
    server_to_render_space, voxel_index,
};

/// A chunk ready for per-voxel instancing by a renderer.
#[derive(Clone, Debug)]
pub struct ResolvedChunk {
    /// Normalized chunk coordinate (server axes).
    pub coord: ChunkCoord,
    /// Chunk origin in render space (y-up), in voxel units.
    pub origin: RenderVec3,
    /// Voxel-type byte per cell, indexed `x + y*16 + z*256`.
    pub voxels: Vec<u8>,
}

impl ResolvedChunk {
    /// Iterates over the non-air voxels as render-space instances.
    ///
    /// Positions are voxel centers: render origin plus local offset plus
    /// half a voxel, with the local offset passed through the same axis
    /// swap as the origin so instances line up with grid and labels.
    pub fn voxel_instances(&self) -> impl Iterator<Item = VoxelInstance> + '_ {
        (0..CHUNK_SIZE).flat_map(move |z| {
            (0..CHUNK_SIZE).flat_map(move |y| {
                (0..CHUNK_SIZE).filter_map(move |x| {
                    let voxel_type = self.voxels[voxel_index(x, y, z)];
                    if voxel_type == 0 {
                        return None;
                    }
                    let (lx, ly, lz) =
                        server_to_render_space(x as f32, y as f32, z as f32);
                    Some(VoxelInstance {
                        position: RenderVec3::new(
                            self.origin.x + lx + 0.5,
                            self.origin.y + ly + 0.5,
                            self.origin.z + lz + 0.5,
                        ),
                        voxel_type,
                    })
                })
            })
        })
    }

    /// Number of non-air voxels.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v != 0).count()
    }
}

/// One renderable voxel: a render-space center and an opaque type byte.
///
/// The type byte is never interpreted here; material lookup belongs to
/// the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelInstance {
    pub position: RenderVec3,
    pub voxel_type: u8,
}

/// Resolves a batch of chunk summaries against their pending updates.
///
/// A summary with no voxel payload resolves to a zeroed buffer, so it
/// contributes no instances but still occupies its coordinate (grids and
/// labels render for it). Updates for coordinates with no summary in the
/// batch are ignored; update records out of local range are skipped by
/// [`apply_updates`].
pub fn resolve_chunks(
    summaries: &[ChunkSummary],
    updates: Vec<ChunkVoxelUpdates>,
) -> Vec<ResolvedChunk> {
    let mut pending: FxHashMap<ChunkCoord, Vec<VoxelUpdate>> = FxHashMap::default();
    for chunk_updates in updates {
        match chunk_updates.into_domain() {
            Ok((coord, list)) => pending.entry(coord).or_default().extend(list),
            Err(e) => warn!(error = %e, "skipping updates with malformed coordinate"),
        }
    }

    let mut resolved = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let coord = match summary.coordinates.to_coord() {
            Ok(coord) => coord,
            Err(e) => {
                warn!(chunk_id = %summary.chunk_id, error = %e, "skipping chunk with malformed coordinate");
                continue;
            }
        };

        let mut voxels = match &summary.voxels {
            Some(payload) => match decode_voxels(payload) {
                Ok(bytes) if bytes.len() == CHUNK_VOLUME => bytes,
                Ok(bytes) => {
                    warn!(
                        %coord,
                        len = bytes.len(),
                        "skipping chunk with unexpected payload length"
                    );
                    continue;
                }
                Err(e) => {
                    warn!(%coord, error = %e, "skipping chunk with undecodable payload");
                    continue;
                }
            },
            None => vec![0u8; CHUNK_VOLUME],
        };

        if let Some(list) = pending.get(&coord) {
            let applied = apply_updates(&mut voxels, list);
            debug!(%coord, applied, queued = list.len(), "merged voxel updates");
        }

        resolved.push(ResolvedChunk {
            coord,
            origin: coord.render_origin(),
            voxels,
        });
    }
    resolved
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
