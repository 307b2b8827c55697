//! Codec utility functions

use crate::Error;
use bytes::Buf;

/// Checks if the buffer has at least `len` bytes remaining. Returns an [Error::EndOfBuffer] if not.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    let rem = buf.remaining();
    if rem < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Checks that `found` bytes are exactly the `expected` size of a value.
#[inline]
pub fn exactly(expected: usize, found: usize) -> Result<(), Error> {
    if found != expected {
        return Err(Error::LengthMismatch { expected, found });
    }
    Ok(())
}
