//! Enumerations stored as their underlying integer.
//!
//! [codec_enum!](crate::codec_enum) defines a fieldless enum with an explicit integer
//! representation and wires it into the codec: it is encoded as its integer, sized through
//! [Shape::Enum](crate::Shape::Enum), and converted from integers and names with
//! [Error::UndefinedEnumValue] for anything that is not a declared variant.
//!
//! ```
//! use endian_codec::{codec_enum, Decode, Encode, Endianness, Enumeration};
//!
//! codec_enum! {
//!     /// Compression applied to a payload.
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Compression: u16 {
//!         None = 0,
//!         Lz4 = 1,
//!         Zstd = 3,
//!     }
//! }
//!
//! let encoded = Compression::Zstd.encode(Endianness::Big);
//! assert_eq!(encoded, &[0x00, 0x03][..]);
//! assert_eq!(Compression::decode(encoded, Endianness::Big).unwrap(), Compression::Zstd);
//! assert_eq!(Compression::from_name("Lz4").unwrap(), Compression::Lz4);
//! assert!(Compression::from_repr(2).is_err());
//! ```

use crate::Error;
use std::fmt::Display;

/// A fieldless enum backed by an integer.
pub trait Enumeration: Sized + Copy + 'static {
    /// Name of the enum, used in errors.
    const NAME: &'static str;

    /// The underlying integer type.
    type Repr: Copy + Display;

    /// Every variant with its name, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Returns the integer value of the variant.
    fn to_repr(self) -> Self::Repr;

    /// Returns the variant with the given integer value.
    fn from_repr(repr: Self::Repr) -> Result<Self, Error>;

    /// Returns the name of the variant.
    fn name(self) -> &'static str;

    /// Returns the variant with the given name.
    fn from_name(name: &str) -> Result<Self, Error> {
        Self::VARIANTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| Error::UndefinedEnumValue {
                ty: Self::NAME,
                value: name.to_string(),
            })
    }
}

/// Defines a fieldless enum with an integer representation and implements [Enumeration],
/// `TryFrom<int>`, `FromStr`, `Display`, [FixedSize](crate::FixedSize), [Read](crate::Read),
/// [Write](crate::Write) and [Layout](crate::Layout) for it.
#[macro_export]
macro_rules! codec_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::Enumeration for $name {
            const NAME: &'static str = stringify!($name);

            type Repr = $repr;

            const VARIANTS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), Self::$variant)),+];

            #[inline]
            fn to_repr(self) -> $repr {
                self as $repr
            }

            fn from_repr(repr: $repr) -> Result<Self, $crate::Error> {
                $(
                    if repr == Self::$variant as $repr {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::Error::UndefinedEnumValue {
                    ty: Self::NAME,
                    value: repr.to_string(),
                })
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::Error;

            fn try_from(repr: $repr) -> Result<Self, $crate::Error> {
                <Self as $crate::Enumeration>::from_repr(repr)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, $crate::Error> {
                <Self as $crate::Enumeration>::from_name(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Enumeration::name(*self))
            }
        }

        impl $crate::FixedSize for $name {
            const SIZE: usize = <$repr as $crate::FixedSize>::SIZE;
        }

        impl $crate::Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl $crate::bytes::BufMut, order: $crate::ByteOrder) {
                $crate::Write::write(&$crate::Enumeration::to_repr(*self), buf, order);
            }
        }

        impl $crate::Read for $name {
            #[inline]
            fn read(
                buf: &mut impl $crate::bytes::Buf,
                order: $crate::ByteOrder,
            ) -> Result<Self, $crate::Error> {
                let repr = <$repr as $crate::Read>::read(buf, order)?;
                <Self as $crate::Enumeration>::from_repr(repr)
            }
        }

        impl $crate::Layout for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::Enum($crate::TypeDescriptor::of::<$repr>())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout, Decode, Encode, Endianness, FixedSize};

    crate::codec_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Level: i32 {
            Low = -1,
            Mid = 0,
            High = 0x0102_0304,
        }
    }

    crate::codec_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Flag: u8 {
            Off = 0,
            On = 1,
        }
    }

    crate::codec_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Slot: usize {
            First = 0,
            Last = 1,
        }
    }

    crate::codec_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Delta: isize {
            Back = -1,
            Forward = 1,
        }
    }

    #[test]
    fn test_repr() {
        assert_eq!(Level::High.to_repr(), 0x0102_0304);
        assert_eq!(Level::from_repr(-1), Ok(Level::Low));
        assert_eq!(Level::try_from(0i32), Ok(Level::Mid));
        assert_eq!(
            Level::from_repr(7),
            Err(Error::UndefinedEnumValue {
                ty: "Level",
                value: "7".to_string()
            })
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(Level::High.name(), "High");
        assert_eq!(Level::High.to_string(), "High");
        assert_eq!("Mid".parse::<Level>(), Ok(Level::Mid));
        assert!(matches!(
            "Extreme".parse::<Level>(),
            Err(Error::UndefinedEnumValue { value, .. }) if value == "Extreme"
        ));
        assert_eq!(Level::VARIANTS.len(), 3);
    }

    #[test]
    fn test_codec() {
        assert_eq!(Level::SIZE, 4);
        assert_eq!(Flag::SIZE, 1);
        assert_eq!(
            Level::High.encode(Endianness::Big),
            &[0x01, 0x02, 0x03, 0x04][..]
        );
        assert_eq!(
            Level::High.encode(Endianness::Little),
            &[0x04, 0x03, 0x02, 0x01][..]
        );
        for endianness in [Endianness::Little, Endianness::Big, Endianness::Unspecified] {
            for level in [Level::Low, Level::Mid, Level::High] {
                assert_eq!(Level::decode(level.encode(endianness), endianness), Ok(level));
            }
        }
        assert_eq!(Flag::decode(&[1u8][..], Endianness::Big), Ok(Flag::On));
        assert!(matches!(
            Flag::decode(&[2u8][..], Endianness::Big),
            Err(Error::UndefinedEnumValue { ty: "Flag", .. })
        ));
    }

    #[test]
    fn test_layout() {
        assert_eq!(layout::size_of::<Level>(), Ok(4));
        assert_eq!(layout::size_of::<Flag>(), Ok(1));

        // Pointer-sized enums resolve to the platform width, matching what they encode to.
        let width = std::mem::size_of::<usize>();
        assert_eq!(layout::size_of::<Slot>(), Ok(width));
        assert_eq!(layout::size_of::<Slot>(), Ok(Slot::SIZE));
        assert_eq!(Slot::Last.encode(Endianness::Big).len(), width);
        assert_eq!(layout::size_of::<Delta>(), Ok(width));
        assert_eq!(
            Delta::decode(Delta::Back.encode(Endianness::Little), Endianness::Little),
            Ok(Delta::Back)
        );
    }
}
