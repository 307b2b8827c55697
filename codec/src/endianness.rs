//! Byte order selection.
//!
//! Callers request an [Endianness], which may be left [Endianness::Unspecified] to mean "whatever
//! the host uses". Before any bytes are touched the request is resolved into a [ByteOrder], which
//! only has the two concrete variants. [crate::Read] and [crate::Write] implementations only ever
//! see the resolved form.

/// Requested order of bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Endianness {
    /// Use the byte order of the host.
    #[default]
    Unspecified = 0,

    /// The least significant byte is stored at the smallest address.
    Little = 1,

    /// The most significant byte is stored at the smallest address.
    Big = 2,
}

impl Endianness {
    /// Resolves the request into a concrete [ByteOrder].
    ///
    /// [Endianness::Unspecified] becomes [ByteOrder::NATIVE]; the other variants are returned
    /// unchanged.
    #[inline]
    pub const fn resolve(self) -> ByteOrder {
        match self {
            Self::Unspecified => ByteOrder::NATIVE,
            Self::Little => ByteOrder::Little,
            Self::Big => ByteOrder::Big,
        }
    }

    /// Returns whether values must be byte-swapped relative to host memory to honor the request.
    #[inline]
    pub const fn should_reverse(self) -> bool {
        !matches!(
            (self.resolve(), ByteOrder::NATIVE),
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big)
        )
    }
}

/// A resolved byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;
}

impl From<ByteOrder> for Endianness {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Self::Little,
            ByteOrder::Big => Self::Big,
        }
    }
}
