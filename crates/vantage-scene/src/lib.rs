//! Renderer-facing scene state: batch resolution of fetched chunks into
//! voxel buffers, keyed overlay caches, and debug overlay geometry.
//!
//! Nothing in this crate touches a rendering API. It produces positions,
//! byte buffers, and key sets; a rendering collaborator turns those into
//! meshes, materials, and labels.

pub mod overlay;
pub mod reconcile;
pub mod resolve;

pub use overlay::{GRID_EDGES_PER_CHUNK, chunk_box_edges, label_anchor, label_scale, label_text};
pub use reconcile::KeyedCache;
pub use resolve::{ResolvedChunk, VoxelInstance, resolve_chunks};
