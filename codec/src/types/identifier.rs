//! Codec implementation for [Uuid].
//!
//! An identifier is 16 bytes: a 4-byte, a 2-byte and a 2-byte field followed by an 8-byte tail.
//! The three leading fields follow the resolved byte order. The tail is opaque and always copied
//! in its canonical order. With [ByteOrder::Big] the bytes match the RFC 9562 representation
//! ([Uuid::as_bytes]); with [ByteOrder::Little] they match the mixed-endian layout used by
//! Microsoft GUIDs ([Uuid::to_bytes_le]).

use crate::{ByteOrder, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use uuid::Uuid;

impl Write for Uuid {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
        match order {
            ByteOrder::Big => buf.put_slice(self.as_bytes()),
            ByteOrder::Little => buf.put_slice(&self.to_bytes_le()),
        }
    }
}

impl Read for Uuid {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        let bytes = <[u8; 16]>::read(buf, order)?;
        Ok(match order {
            ByteOrder::Big => Uuid::from_bytes(bytes),
            ByteOrder::Little => Uuid::from_bytes_le(bytes),
        })
    }
}

impl FixedSize for Uuid {
    const SIZE: usize = 16;
}
