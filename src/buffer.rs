//! Buffer allocation and sizing helpers
//!
//! Buffers are plain zero-initialized byte regions, owned by the caller and
//! typically reused across frames. Storage is backed by `u32` words so the
//! byte slice is always 4-byte aligned and the typed slice casts in
//! [`view`](crate::LayoutType::view) cannot fail on alignment.

use tracing::debug;

use crate::layout::LayoutType;

/// A caller-owned byte buffer with word-aligned storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    words: Vec<u32>,
    byte_len: usize,
}

impl Buffer {
    /// Allocate `byte_len` zeroed bytes.
    pub fn zeroed(byte_len: usize) -> Self {
        Self {
            words: vec![0u32; byte_len.div_ceil(4)],
            byte_len,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.byte_len
    }

    pub fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.words)[..self.byte_len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.words)[..self.byte_len]
    }
}

/// Allocate a zero-filled buffer holding `count` values of `ty`.
pub fn allocate(ty: &LayoutType, count: usize) -> Buffer {
    let byte_len = ty.byte_size() * count;
    debug!(
        "allocating buffer: {} x {} bytes = {} bytes",
        count,
        ty.byte_size(),
        byte_len
    );
    Buffer::zeroed(byte_len)
}

/// Number of whole values of `ty` in `buffer`.
///
/// No remainder check is performed: the caller is responsible for handing
/// in a buffer whose length is an exact multiple of `ty.byte_size()`.
pub fn count(ty: &LayoutType, buffer: &Buffer) -> usize {
    buffer.len() / ty.byte_size()
}
