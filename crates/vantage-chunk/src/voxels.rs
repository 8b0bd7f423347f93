//! Voxel payload decoding and incremental update merging.
//!
//! A chunk's voxel data travels as a base64 string covering exactly
//! 16×16×16 = 4096 bytes, one opaque voxel-type byte per cell, indexed
//! `x + y*16 + z*256` with x varying fastest. Byte 0 is empty/air.
//!
//! Voxel update queries are distance-bounded rather than chunk-bounded, so
//! an update record can legitimately land outside a given chunk's local
//! range. Out-of-range updates are skipped silently; they are expected
//! traffic, not malformed input.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Side length of a chunk in voxels.
pub const CHUNK_SIZE: usize = 16;

/// Total number of voxels in a chunk (16³).
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Error decoding a chunk voxel payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid standard base64.
    #[error("malformed base64 voxel payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// One incremental voxel change in chunk-local coordinates.
///
/// The local position is only meaningful in `[0, 16)` per axis; values
/// outside that range mark an update that belongs to a different chunk.
/// `voxel_type` is truncated to a byte on application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelUpdate {
    pub lx: i32,
    pub ly: i32,
    pub lz: i32,
    pub voxel_type: u32,
}

impl VoxelUpdate {
    pub const fn new(lx: i32, ly: i32, lz: i32, voxel_type: u32) -> Self {
        Self {
            lx,
            ly,
            lz,
            voxel_type,
        }
    }

    /// Whether all three local components fall inside this chunk.
    pub fn in_range(&self) -> bool {
        let bound = CHUNK_SIZE as i32;
        (0..bound).contains(&self.lx)
            && (0..bound).contains(&self.ly)
            && (0..bound).contains(&self.lz)
    }
}

/// Converts chunk-local `(x, y, z)` to the flat buffer index (x fastest).
pub fn voxel_index(x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
    x + y * CHUNK_SIZE + z * CHUNK_SIZE * CHUNK_SIZE
}

/// Decodes a base64 voxel payload into raw bytes.
///
/// Well-formed chunk payloads decode to exactly [`CHUNK_VOLUME`] bytes, but
/// this function deliberately does not enforce the length: it passes any
/// decoded size through unchanged and leaves mismatch policy to the caller.
pub fn decode_voxels(payload: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(BASE64.decode(payload)?)
}

/// Applies updates to a voxel buffer in input order, returning the number
/// actually applied.
///
/// Out-of-range updates are skipped without touching the buffer. In-range
/// updates overwrite the target byte with `voxel_type & 0xFF`, so a later
/// update at the same position wins and reapplying an update is a no-op.
///
/// [`decode_voxels`] can hand back buffers shorter than [`CHUNK_VOLUME`];
/// writes that land past the end of such a buffer are dropped and not
/// counted, never a panic.
pub fn apply_updates(bytes: &mut [u8], updates: &[VoxelUpdate]) -> usize {
    let mut applied = 0;
    for update in updates {
        if !update.in_range() {
            continue;
        }
        let idx = voxel_index(
            update.lx as usize,
            update.ly as usize,
            update.lz as usize,
        );
        let Some(slot) = bytes.get_mut(idx) else {
            continue;
        };
        *slot = (update.voxel_type & 0xFF) as u8;
        applied += 1;
    }
    applied
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
