//! String conversion at the edge of the codec.
//!
//! Strings are variable length and are not [crate::FixedSize]; they are converted with free
//! functions instead of the codec traits. When no encoding is named, [TextEncoding::Utf8] is
//! used on every platform.

use crate::{ByteOrder, Char16, Endianness, Error, Read, Write};
use bytes::{Buf, Bytes, BytesMut};

/// Text encodings understood by [encode_str] and [decode_str].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-16 code units in the requested byte order.
    Utf16(Endianness),
    /// ISO-8859-1: one byte per character, covering U+0000..=U+00FF.
    Latin1,
}

impl TextEncoding {
    fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16(_) => "utf-16",
            Self::Latin1 => "latin-1",
        }
    }
}

/// Encodes `value` in the given encoding. `None` encodes to an empty buffer.
///
/// Characters that [TextEncoding::Latin1] cannot represent are replaced with `?`.
pub fn encode_str(value: Option<&str>, encoding: TextEncoding) -> Bytes {
    let Some(value) = value else {
        return Bytes::new();
    };
    match encoding {
        TextEncoding::Utf8 => Bytes::copy_from_slice(value.as_bytes()),
        TextEncoding::Utf16(endianness) => {
            let order = endianness.resolve();
            let mut buf = BytesMut::with_capacity(value.len() * 2);
            for unit in value.encode_utf16() {
                Char16(unit).write(&mut buf, order);
            }
            buf.freeze()
        }
        TextEncoding::Latin1 => value
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect(),
    }
}

/// Decodes `bytes` in the given encoding.
///
/// Fails with [Error::InvalidText] if the bytes are not valid in that encoding.
pub fn decode_str(bytes: &[u8], encoding: TextEncoding) -> Result<String, Error> {
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidText(encoding.name())),
        TextEncoding::Utf16(endianness) => {
            let units = utf16_units(bytes, endianness.resolve())
                .ok_or(Error::InvalidText(encoding.name()))?;
            String::from_utf16(&units).map_err(|_| Error::InvalidText(encoding.name()))
        }
        TextEncoding::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
    }
}

/// Decodes the platform's native string representation, stopping at the first NUL terminator.
///
/// On Windows the native representation is UTF-16 in host byte order; elsewhere it is UTF-8.
pub fn decode_native(bytes: &[u8]) -> Result<String, Error> {
    if cfg!(windows) {
        let units = utf16_units(bytes, ByteOrder::NATIVE)
            .ok_or(Error::InvalidText("utf-16"))?;
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        String::from_utf16(&units[..end]).map_err(|_| Error::InvalidText("utf-16"))
    } else {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        decode_str(&bytes[..end], TextEncoding::Utf8)
    }
}

/// Splits `bytes` into UTF-16 code units. Returns `None` for an odd number of bytes.
fn utf16_units(mut bytes: &[u8], order: ByteOrder) -> Option<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let mut units = Vec::with_capacity(bytes.len() / 2);
    while bytes.has_remaining() {
        units.push(Char16::read(&mut bytes, order).ok()?.into());
    }
    Some(units)
}
