//! Codec implementations for Rust primitive types.
//!
//! Every multi-byte scalar is written in the [ByteOrder] handed to [Write::write] and read back
//! in the [ByteOrder] handed to [Read::read]; the big-endian and little-endian accessors of
//! [Buf] and [BufMut] are the two strategies. Single-byte values have nothing to reorder.
//!
//! A few types deserve a note:
//! * `bool` is one byte. `0` is `false` and any other byte value is `true`.
//! * `usize` and `isize` are written at the platform pointer width, so their encoding is not
//!   portable between 32-bit and 64-bit hosts.
//! * [Char16] is a single UTF-16 code unit and is encoded exactly like a `u16`.
//! * `[u8; N]` is opaque and copied verbatim regardless of byte order.

use crate::{util::at_least, ByteOrder, Error, FixedSize, Kind, Layout, Read, Write};
use bytes::{Buf, BufMut};
use half::f16;

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $get_be:ident, $get_le:ident, $put_be:ident, $put_le:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
                match order {
                    ByteOrder::Big => buf.$put_be(*self),
                    ByteOrder::Little => buf.$put_le(*self),
                }
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(match order {
                    ByteOrder::Big => buf.$get_be(),
                    ByteOrder::Little => buf.$get_le(),
                })
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u16, get_u16, get_u16_le, put_u16, put_u16_le);
impl_numeric!(u32, get_u32, get_u32_le, put_u32, put_u32_le);
impl_numeric!(u64, get_u64, get_u64_le, put_u64, put_u64_le);
impl_numeric!(u128, get_u128, get_u128_le, put_u128, put_u128_le);
impl_numeric!(i16, get_i16, get_i16_le, put_i16, put_i16_le);
impl_numeric!(i32, get_i32, get_i32_le, put_i32, put_i32_le);
impl_numeric!(i64, get_i64, get_i64_le, put_i64, put_i64_le);
impl_numeric!(i128, get_i128, get_i128_le, put_i128, put_i128_le);
impl_numeric!(f32, get_f32, get_f32_le, put_f32, put_f32_le);
impl_numeric!(f64, get_f64, get_f64_le, put_f64, put_f64_le);

// Single-byte types ignore the byte order
macro_rules! impl_byte {
    ($type:ty, $get:ident, $put:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, _: ByteOrder) {
                buf.$put(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf, _: ByteOrder) -> Result<Self, Error> {
                at_least(buf, 1)?;
                Ok(buf.$get())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = 1;
        }
    };
}

impl_byte!(u8, get_u8, put_u8);
impl_byte!(i8, get_i8, put_i8);

// Pointer-sized integers implementation
macro_rules! impl_pointer_sized {
    ($type:ty) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
                match order {
                    ByteOrder::Big => buf.put_slice(&self.to_be_bytes()),
                    ByteOrder::Little => buf.put_slice(&self.to_le_bytes()),
                }
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                let mut dst = [0; std::mem::size_of::<$type>()];
                buf.copy_to_slice(&mut dst);
                Ok(match order {
                    ByteOrder::Big => <$type>::from_be_bytes(dst),
                    ByteOrder::Little => <$type>::from_le_bytes(dst),
                })
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_pointer_sized!(usize);
impl_pointer_sized!(isize);

// Half-precision float implementation
impl Write for f16 {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
        self.to_bits().write(buf, order);
    }
}

impl Read for f16 {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        Ok(f16::from_bits(u16::read(buf, order)?))
    }
}

impl FixedSize for f16 {
    const SIZE: usize = 2;
}

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: ByteOrder) {
        buf.put_u8(u8::from(*self));
    }
}

impl Read for bool {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        Ok(u8::read(buf, order)? != 0)
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

/// A single UTF-16 code unit.
///
/// Characters are exchanged as 16-bit code units. Scalar values outside the Basic Multilingual
/// Plane need two code units and are rejected by [TryFrom<char>].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Char16(pub u16);

impl Char16 {
    /// Returns the character this code unit stands for, or `None` for a lone surrogate.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl TryFrom<char> for Char16 {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Error> {
        u16::try_from(u32::from(c))
            .map(Self)
            .map_err(|_| Error::InvalidChar(u32::from(c)))
    }
}

impl From<Char16> for u16 {
    fn from(c: Char16) -> Self {
        c.0
    }
}

impl Write for Char16 {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
        self.0.write(buf, order);
    }
}

impl Read for Char16 {
    #[inline]
    fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        Ok(Self(u16::read(buf, order)?))
    }
}

impl FixedSize for Char16 {
    const SIZE: usize = 2;
}

impl Layout for Char16 {
    const PRIMITIVE: Option<Kind> = Some(Kind::Char);
}

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, _: ByteOrder) {
        buf.put(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read(buf: &mut impl Buf, _: ByteOrder) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout, Decode, Encode, Endianness};
    use bytes::Bytes;
    use paste::paste;

    const ORDERS: [Endianness; 3] = [Endianness::Little, Endianness::Big, Endianness::Unspecified];

    macro_rules! impl_num_test {
        ($type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    assert_eq!(<$type>::SIZE, expected_len);
                    assert_eq!(layout::size_of::<$type>(), Ok(expected_len));

                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        for endianness in ORDERS {
                            let encoded = value.encode(endianness);
                            assert_eq!(encoded.len(), expected_len);
                            let decoded = <$type>::decode(encoded, endianness).unwrap();
                            assert_eq!(*value, decoded);

                            let fixed: [u8; $size] = value.encode_fixed(endianness);
                            let decoded =
                                <$type>::decode(Bytes::copy_from_slice(&fixed), endianness)
                                    .unwrap();
                            assert_eq!(*value, decoded);
                        }

                        // The two orders are mirror images of each other.
                        let mut little = value.encode(Endianness::Little).to_vec();
                        little.reverse();
                        assert_eq!(little, value.encode(Endianness::Big).to_vec());
                        assert_eq!(
                            value.encode(Endianness::Unspecified),
                            value.encode(ByteOrder::NATIVE.into())
                        );

                        // Both shorter and longer inputs are rejected.
                        let short = vec![0u8; expected_len - 1];
                        assert_eq!(
                            <$type>::decode(&short[..], Endianness::Big),
                            Err(Error::LengthMismatch { expected: expected_len, found: expected_len - 1 })
                        );
                        let long = vec![0u8; expected_len + 1];
                        assert_eq!(
                            <$type>::decode(&long[..], Endianness::Little),
                            Err(Error::LengthMismatch { expected: expected_len, found: expected_len + 1 })
                        );
                    }
                }
            }
        };
    }
    impl_num_test!(u8, 1);
    impl_num_test!(u16, 2);
    impl_num_test!(u32, 4);
    impl_num_test!(u64, 8);
    impl_num_test!(u128, 16);
    impl_num_test!(usize, std::mem::size_of::<usize>());
    impl_num_test!(i8, 1);
    impl_num_test!(i16, 2);
    impl_num_test!(i32, 4);
    impl_num_test!(i64, 8);
    impl_num_test!(i128, 16);
    impl_num_test!(isize, std::mem::size_of::<isize>());
    impl_num_test!(f32, 4);
    impl_num_test!(f64, 8);

    #[test]
    fn test_f16() {
        let values = [
            f16::ZERO,
            f16::ONE,
            f16::NEG_ONE,
            f16::MAX,
            f16::MIN,
            f16::INFINITY,
            f16::from_f32(0.5),
        ];
        for value in values {
            for endianness in ORDERS {
                let encoded = value.encode(endianness);
                assert_eq!(encoded.len(), 2);
                assert_eq!(f16::decode(encoded, endianness).unwrap(), value);
            }
        }
        assert_eq!(f16::ONE.encode(Endianness::Big), &[0x3C, 0x00][..]);
        assert_eq!(f16::ONE.encode(Endianness::Little), &[0x00, 0x3C][..]);
        assert!(f16::decode(&[0x7E, 0x00][..], Endianness::Big)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_nan_bits() {
        let nan = f64::from_bits(0x7FF8_0000_0000_0001);
        for endianness in ORDERS {
            let decoded = f64::decode(nan.encode(endianness), endianness).unwrap();
            assert_eq!(decoded.to_bits(), nan.to_bits());
        }
    }

    #[test]
    fn test_endianness() {
        assert_eq!(0x0102u16.encode(Endianness::Big), &[0x01, 0x02][..]);
        assert_eq!(0x0102u16.encode(Endianness::Little), &[0x02, 0x01][..]);
        assert_eq!(
            0x01020304u32.encode(Endianness::Big),
            &[0x01, 0x02, 0x03, 0x04][..]
        );
        assert_eq!(
            0x01020304u32.encode(Endianness::Little),
            &[0x04, 0x03, 0x02, 0x01][..]
        );
        assert_eq!(
            1.0f32.encode(Endianness::Big),
            &[0x3F, 0x80, 0x00, 0x00][..]
        );
        assert_eq!(
            1.0f32.encode(Endianness::Little),
            &[0x00, 0x00, 0x80, 0x3F][..]
        );
        assert_eq!(
            0x01020304u32.encode(Endianness::Unspecified),
            &0x01020304u32.to_ne_bytes()[..]
        );
    }

    #[test]
    fn test_single_byte_ignores_order() {
        assert_eq!((-2i8).encode(Endianness::Big), &[0xFE][..]);
        assert_eq!((-2i8).encode(Endianness::Little), &[0xFE][..]);
        assert_eq!(u8::decode(&[0xAB][..], Endianness::Big), Ok(0xAB));
        assert_eq!(u8::decode(&[0xAB][..], Endianness::Little), Ok(0xAB));
    }

    #[test]
    fn test_bool() {
        for value in [true, false] {
            for endianness in ORDERS {
                let encoded = value.encode(endianness);
                assert_eq!(encoded.len(), 1);
                assert_eq!(bool::decode(encoded, endianness), Ok(value));
            }
        }
        assert_eq!(true.encode(Endianness::Big), &[0x01][..]);
        assert_eq!(false.encode(Endianness::Big), &[0x00][..]);

        // Any non-zero byte is true.
        assert_eq!(bool::decode(&[0x02][..], Endianness::Big), Ok(true));
        assert_eq!(bool::decode(&[0xFF][..], Endianness::Little), Ok(true));
        assert_eq!(
            bool::decode(&[0x01, 0x00][..], Endianness::Big),
            Err(Error::LengthMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_char16() {
        let a = Char16::try_from('A').unwrap();
        assert_eq!(a.encode(Endianness::Big), &[0x00, 0x41][..]);
        assert_eq!(a.encode(Endianness::Little), &[0x41, 0x00][..]);
        assert_eq!(Char16::decode(&[0x41, 0x00][..], Endianness::Little), Ok(a));

        let euro = Char16::try_from('€').unwrap();
        assert_eq!(u16::from(euro), 0x20AC);
        for endianness in ORDERS {
            let decoded = Char16::decode(euro.encode(endianness), endianness).unwrap();
            assert_eq!(decoded.to_char(), Some('€'));
            assert_eq!(
                euro.encode(endianness),
                0x20ACu16.encode(endianness),
                "chars encode like u16"
            );
        }

        assert_eq!(Char16::try_from('😀'), Err(Error::InvalidChar(0x1F600)));
        assert_eq!(Char16(0xD800).to_char(), None);
        assert_eq!(layout::size_of::<Char16>(), Ok(2));
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        assert_eq!(values.encode(Endianness::Big), &[1, 2, 3][..]);
        assert_eq!(values.encode(Endianness::Little), &[1, 2, 3][..]);
        let decoded = <[u8; 3]>::decode(&[1, 2, 3][..], Endianness::Little).unwrap();
        assert_eq!(values, decoded);
        assert_eq!([0u8; 0].encode(Endianness::Big), &[][..]);
    }

    #[test]
    fn test_conformity() {
        // 16-bit integers
        assert_eq!(0xABCDu16.encode(Endianness::Big), &[0xAB, 0xCD][..]);
        assert_eq!(0xABCDu16.encode(Endianness::Little), &[0xCD, 0xAB][..]);
        assert_eq!((-1i16).encode(Endianness::Little), &[0xFF, 0xFF][..]);
        assert_eq!(0x1234i16.encode(Endianness::Little), &[0x34, 0x12][..]);

        // 32-bit integers
        assert_eq!(
            0xABCDEF01u32.encode(Endianness::Little),
            &[0x01, 0xEF, 0xCD, 0xAB][..]
        );
        assert_eq!(
            i32::MIN.encode(Endianness::Big),
            &[0x80, 0x00, 0x00, 0x00][..]
        );
        assert_eq!(
            i32::MIN.encode(Endianness::Little),
            &[0x00, 0x00, 0x00, 0x80][..]
        );

        // 64-bit integers
        assert_eq!(
            0x0123456789ABCDEFu64.encode(Endianness::Big),
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF][..]
        );
        assert_eq!(
            0x0123456789ABCDEFu64.encode(Endianness::Little),
            &[0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01][..]
        );

        // 128-bit integers
        let u128_val = 0x000102030405060708090A0B0C0D0E0Fu128;
        let big: Vec<u8> = (0u8..16).collect();
        let little: Vec<u8> = (0u8..16).rev().collect();
        assert_eq!(u128_val.encode(Endianness::Big), &big[..]);
        assert_eq!(u128_val.encode(Endianness::Little), &little[..]);
        assert_eq!((-1i128).encode(Endianness::Little), &[0xFF; 16][..]);

        // 64-bit floats
        assert_eq!(
            (-1.0f64).encode(Endianness::Big),
            &[0xBF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]
        );
        assert_eq!(
            (-1.0f64).encode(Endianness::Little),
            &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xBF][..]
        );
    }
}
