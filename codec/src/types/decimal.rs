//! Codec implementation for [Decimal].
//!
//! A decimal is a 96-bit mantissa with a sign and a power-of-ten scale. It is exchanged as three
//! independently ordered fields, always in this sequence:
//!
//! | bytes  | field  | contents                                         |
//! |--------|--------|--------------------------------------------------|
//! | 0..4   | flags  | scale in bits 16..24, sign in bit 31 (as `i32`)   |
//! | 4..8   | hi     | most significant 32 bits of the mantissa (`u32`)  |
//! | 8..16  | lo64   | `(mid << 32) \| lo` (`u64`)                        |

use crate::{ByteOrder, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use rust_decimal::Decimal;

/// Bit of the flags holding the sign.
const SIGN_MASK: u32 = 0x8000_0000;

/// Bits of the flags holding the scale.
const SCALE_MASK: u32 = 0x00FF_0000;

/// Shift of the scale within the flags.
const SCALE_SHIFT: u32 = 16;

/// Largest scale a decimal may carry.
const MAX_SCALE: u32 = 28;

/// The three fields a [Decimal] is exchanged as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalLayout {
    pub flags: i32,
    pub hi: u32,
    pub lo64: u64,
}

impl DecimalLayout {
    /// Returns whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.flags as u32 & SIGN_MASK != 0
    }

    /// Returns the power-of-ten scale.
    pub fn scale(&self) -> u32 {
        (self.flags as u32 & SCALE_MASK) >> SCALE_SHIFT
    }
}

impl From<Decimal> for DecimalLayout {
    fn from(value: Decimal) -> Self {
        // Serialized as flags, lo, mid, hi; each little-endian.
        let raw = value.serialize();
        let word = |i: usize| u32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]);
        let (flags, lo, mid, hi) = (word(0), word(4), word(8), word(12));
        Self {
            flags: flags as i32,
            hi,
            lo64: (u64::from(mid) << 32) | u64::from(lo),
        }
    }
}

impl TryFrom<DecimalLayout> for Decimal {
    type Error = Error;

    fn try_from(layout: DecimalLayout) -> Result<Self, Error> {
        let flags = layout.flags as u32;
        if flags & !(SIGN_MASK | SCALE_MASK) != 0 || layout.scale() > MAX_SCALE {
            return Err(Error::InvalidDecimal(flags));
        }

        let lo = layout.lo64 as u32;
        let mid = (layout.lo64 >> 32) as u32;
        let mut raw = [0u8; 16];
        raw[0..4].copy_from_slice(&flags.to_le_bytes());
        raw[4..8].copy_from_slice(&lo.to_le_bytes());
        raw[8..12].copy_from_slice(&mid.to_le_bytes());
        raw[12..16].copy_from_slice(&layout.hi.to_le_bytes());
        Ok(Decimal::deserialize(raw))
    }
}

impl Write for DecimalLayout {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
        self.flags.write(buf, order);
        self.hi.write(buf, order);
        self.lo64.write(buf, order);
    }
}

impl Read for DecimalLayout {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        let flags = i32::read(buf, order)?;
        let hi = u32::read(buf, order)?;
        let lo64 = u64::read(buf, order)?;
        Ok(Self { flags, hi, lo64 })
    }
}

impl FixedSize for DecimalLayout {
    const SIZE: usize = i32::SIZE + u32::SIZE + u64::SIZE;
}

impl Write for Decimal {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
        DecimalLayout::from(*self).write(buf, order);
    }
}

impl Read for Decimal {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        DecimalLayout::read(buf, order)?.try_into()
    }
}

impl FixedSize for Decimal {
    const SIZE: usize = DecimalLayout::SIZE;
}
