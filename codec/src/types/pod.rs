//! Reinterpret caller-defined fixed-layout structs as bytes and back.
//!
//! No byte reordering takes place: the bytes are the host memory image of the value. The length
//! of the input is checked against the size the type declares through [Layout] before anything
//! is copied.

use crate::{layout, util::exactly, Error, Layout};
use bytemuck::Pod;
use bytes::BytesMut;

/// Copies the host representation of `value` into a new buffer.
pub fn to_bytes<T: Pod>(value: &T) -> BytesMut {
    BytesMut::from(bytemuck::bytes_of(value))
}

/// Reads a `T` from its host representation.
///
/// Fails with [Error::LengthMismatch] if `bytes` is not exactly the declared size of `T`, or if
/// the declared size disagrees with the size of `T` in memory.
pub fn from_bytes<T: Pod + Layout>(bytes: &[u8]) -> Result<T, Error> {
    exactly(layout::size_of::<T>()?, bytes.len())?;
    bytemuck::try_pod_read_unaligned(bytes).map_err(|_| Error::LengthMismatch {
        expected: std::mem::size_of::<T>(),
        found: bytes.len(),
    })
}
