//! Codec implementations for the supported value types.

pub mod decimal;
pub mod identifier;
pub mod pod;
pub mod primitives;
pub mod text;
