#![no_main]

use arbitrary::Arbitrary;
use endian_codec::{Char16, Decode, Encode, Endianness};
use half::f16;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use std::fmt::Debug;
use uuid::Uuid;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Order {
    Unspecified,
    Little,
    Big,
}

impl From<Order> for Endianness {
    fn from(order: Order) -> Self {
        match order {
            Order::Unspecified => Endianness::Unspecified,
            Order::Little => Endianness::Little,
            Order::Big => Endianness::Big,
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    F16(u16),
    F32(u32),
    F64(u64),
    Bool(bool),
    Char(u16),
    Decimal(u32, u32, u32, bool, u8),
    Uuid(u128),
    Raw(&'a [u8]),
}

fn roundtrip<T: Encode + Decode + PartialEq + Debug>(value: T, endianness: Endianness) {
    let encoded = value.encode(endianness);
    assert_eq!(encoded.len(), T::SIZE);
    let decoded = T::decode(encoded, endianness).expect("failed to decode encoded value");
    assert_eq!(value, decoded);
}

fn roundtrip_bits<T: Encode + Decode>(value: T, endianness: Endianness) {
    let encoded = value.encode(endianness);
    let decoded = T::decode(encoded.clone(), endianness).expect("failed to decode encoded value");
    assert_eq!(decoded.encode(endianness), encoded);
}

fn decode_any<T: Decode>(bytes: &[u8], endianness: Endianness) {
    let result = T::decode(bytes, endianness);
    if bytes.len() != T::SIZE {
        assert!(result.is_err());
    }
}

fn fuzz(input: (FuzzInput, Order)) {
    let (input, order) = input;
    let endianness = Endianness::from(order);
    match input {
        FuzzInput::U8(v) => roundtrip(v, endianness),
        FuzzInput::U16(v) => roundtrip(v, endianness),
        FuzzInput::U32(v) => roundtrip(v, endianness),
        FuzzInput::U64(v) => roundtrip(v, endianness),
        FuzzInput::U128(v) => roundtrip(v, endianness),
        FuzzInput::Usize(v) => roundtrip(v, endianness),
        FuzzInput::I8(v) => roundtrip(v, endianness),
        FuzzInput::I16(v) => roundtrip(v, endianness),
        FuzzInput::I32(v) => roundtrip(v, endianness),
        FuzzInput::I64(v) => roundtrip(v, endianness),
        FuzzInput::I128(v) => roundtrip(v, endianness),
        FuzzInput::Isize(v) => roundtrip(v, endianness),
        FuzzInput::F16(bits) => roundtrip_bits(f16::from_bits(bits), endianness),
        FuzzInput::F32(bits) => roundtrip_bits(f32::from_bits(bits), endianness),
        FuzzInput::F64(bits) => roundtrip_bits(f64::from_bits(bits), endianness),
        FuzzInput::Bool(v) => roundtrip(v, endianness),
        FuzzInput::Char(unit) => roundtrip(Char16(unit), endianness),
        FuzzInput::Decimal(lo, mid, hi, negative, scale) => {
            let value = Decimal::from_parts(lo, mid, hi, negative, u32::from(scale % 29));
            roundtrip_bits(value, endianness);
        }
        FuzzInput::Uuid(v) => roundtrip(Uuid::from_u128(v), endianness),
        FuzzInput::Raw(bytes) => {
            decode_any::<u32>(bytes, endianness);
            decode_any::<f64>(bytes, endianness);
            decode_any::<bool>(bytes, endianness);
            decode_any::<Decimal>(bytes, endianness);
            decode_any::<Uuid>(bytes, endianness);
        }
    }
}

fuzz_target!(|input: (FuzzInput, Order)| {
    fuzz(input);
});
