//! Encode fixed-width values to and from bytes in an explicit byte order.
//!
//! # Overview
//!
//! A low-level binary codec that:
//! - Converts scalars to exactly-sized byte buffers and back
//! - Lets the caller choose the byte order of every call, defaulting to the host's
//! - Computes the byte width of fixed-layout types, including composite ones
//!
//! # Supported Types
//!
//! Natively supports:
//! - Integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `i8`, `i16`, `i32`, `i64`, `i128`,
//!   `isize`
//! - Floats: [half::f16], `f32`, `f64`
//! - [rust_decimal::Decimal], as a sign/scale word, the high mantissa word and the low 64
//!   mantissa bits
//! - [uuid::Uuid], with the leading three fields in the requested order
//! - `bool` and [Char16] (a UTF-16 code unit)
//! - Opaque byte arrays `[u8; N]`
//! - Integer-backed enums declared with [codec_enum!]
//!
//! User-defined types can be encoded and decoded by implementing [Read], [Write] and
//! [FixedSize]. To take part in size resolution a type implements [Layout].
//!
//! # Byte Order
//!
//! Every entry point takes an [Endianness]. [Endianness::Unspecified] resolves to the host's byte
//! order before any bytes are read or written, so encoding with it is identical to encoding with
//! the host's order named explicitly.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use endian_codec::{
//!     layout::{self, Field},
//!     ByteOrder, Decode, Encode, Endianness, Error, FixedSize, Layout, Read, Shape, Write,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Record {
//!     id: u32,
//!     kind: u16,
//!     offset: u64,
//! }
//!
//! impl Write for Record {
//!     fn write(&self, buf: &mut impl BufMut, order: ByteOrder) {
//!         self.id.write(buf, order);
//!         self.kind.write(buf, order);
//!         self.offset.write(buf, order);
//!     }
//! }
//!
//! impl Read for Record {
//!     fn read(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
//!         let id = u32::read(buf, order)?;
//!         let kind = u16::read(buf, order)?;
//!         let offset = u64::read(buf, order)?;
//!         Ok(Self { id, kind, offset })
//!     }
//! }
//!
//! impl FixedSize for Record {
//!     const SIZE: usize = u32::SIZE + u16::SIZE + u64::SIZE;
//! }
//!
//! impl Layout for Record {
//!     fn shape() -> Shape {
//!         Shape::composite([
//!             Field::new::<u32>("id"),
//!             Field::new::<u16>("kind"),
//!             Field::new::<u64>("offset"),
//!         ])
//!     }
//! }
//!
//! let record = Record { id: 1, kind: 2, offset: 3 };
//! let encoded = record.encode(Endianness::Big);
//! assert_eq!(encoded.len(), 14);
//! assert_eq!(layout::size_of::<Record>().unwrap(), 14);
//! assert_eq!(Record::decode(encoded, Endianness::Big).unwrap(), record);
//! ```

pub mod codec;
pub mod endianness;
pub mod enums;
pub mod error;
pub mod layout;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{Decode, Encode, FixedSize, Read, Write};
pub use endianness::{ByteOrder, Endianness};
pub use enums::Enumeration;
pub use error::Error;
pub use layout::{Field, Kind, Layout, Shape, TypeDescriptor};
pub use types::{
    decimal::DecimalLayout,
    pod,
    primitives::{self, Char16},
    text::{self, TextEncoding},
};

// Used by `codec_enum!`.
#[doc(hidden)]
pub use bytes;
