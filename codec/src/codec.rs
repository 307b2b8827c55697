//! Core codec traits and implementations

use crate::{util::exactly, ByteOrder, Endianness, Error};
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types with a known, fixed encoded length.
///
/// Composite types declare their size as the sum of their fields, for example
/// `const SIZE: usize = u32::SIZE + u16::SIZE;`.
///
/// A type that also implements [Layout](crate::Layout) must declare the same size its manifest
/// resolves to: `layout::size_of::<T>() == Ok(T::SIZE)`. [Decode::decode] checks the input
/// length against `SIZE` alone.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer in the given byte order.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder);
}

/// Trait for types that can be read/decoded from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer in the given byte order, consuming the necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough bytes).
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error>;
}

/// Trait for types that can be encoded to an owned buffer of exactly [FixedSize::SIZE] bytes.
pub trait Encode: Write + FixedSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self, endianness: Endianness) -> BytesMut {
        let mut buffer = BytesMut::with_capacity(Self::SIZE);
        self.write(&mut buffer, endianness.resolve());
        assert_eq!(buffer.len(), Self::SIZE, "write() did not write expected bytes");
        buffer
    }

    /// Encodes a value to a fixed-size byte array.
    ///
    /// The caller MUST ensure `N` is equal to `Self::SIZE`.
    /// Panics if the `write` implementation does not write exactly `N` bytes.
    ///
    /// (Provided method).
    fn encode_fixed<const N: usize>(&self, endianness: Endianness) -> [u8; N] {
        // Ideally this is a compile-time check, but we can't do that in the current Rust version
        // without adding a new generic parameter to the trait.
        assert_eq!(
            N,
            Self::SIZE,
            "Can't encode {} bytes into {} bytes",
            Self::SIZE,
            N
        );

        let mut array = [0u8; N];
        let mut buf = &mut array[..];
        self.write(&mut buf, endianness.resolve());
        assert_eq!(buf.len(), 0);
        array
    }
}

// Automatically implement `Encode` for types that implement `Write` and `FixedSize`.
impl<T: Write + FixedSize> Encode for T {}

/// Trait for types that can be decoded from a buffer holding exactly one value.
pub trait Decode: Read + FixedSize {
    /// Decodes a value from a buffer in the requested byte order.
    ///
    /// Fails with [Error::LengthMismatch] unless the buffer holds exactly [FixedSize::SIZE]
    /// bytes. The check happens before anything is read.
    ///
    /// (Provided method).
    fn decode(mut buf: impl Buf, endianness: Endianness) -> Result<Self, Error> {
        exactly(Self::SIZE, buf.remaining())?;
        let result = Self::read(&mut buf, endianness.resolve())?;

        // A `Read` that consumes less than `SIZE` is a bug in that implementation.
        assert_eq!(buf.remaining(), 0, "read() did not consume expected bytes");
        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read` and `FixedSize`.
impl<T: Read + FixedSize> Decode for T {}
