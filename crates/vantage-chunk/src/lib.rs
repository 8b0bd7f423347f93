//! Chunk coordinates, voxel payload decoding, and incremental update merging.

pub mod coords;
pub mod voxels;

pub use coords::{
    ChunkCoord, CoordParseError, RenderVec3, chunk_keys_within_distance, server_to_render_space,
};
pub use voxels::{
    CHUNK_SIZE, CHUNK_VOLUME, DecodeError, VoxelUpdate, apply_updates, decode_voxels, voxel_index,
};
