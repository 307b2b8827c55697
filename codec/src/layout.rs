//! Resolve the in-memory byte width of fixed-layout types.
//!
//! Every type that participates declares a static manifest through [Layout]. Types in the fixed
//! primitive table ([Kind]) are answered directly. Everything else is resolved recursively from
//! its [Shape] and memoized in a process-wide cache keyed by [TypeId]:
//!
//! - [Shape::Enum] resolves to the size of its underlying integer, which may be pointer-sized.
//! - [Shape::Pointer] resolves to the platform pointer width.
//! - [Shape::Array] resolves to the element size times the length.
//! - [Shape::Composite] resolves to the sum of its field sizes (no padding).
//! - [Shape::Opaque] cannot be sized and fails with [Error::UnsupportedType].
//!
//! The cache is append-only. Concurrent first-time resolution of the same type may compute the
//! size more than once, but the first inserted value is kept and every caller observes it.

use crate::Error;
use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt,
    sync::{OnceLock, RwLock},
};
use tracing::{debug, trace};

/// Deepest nesting of composite manifests that will be followed before giving up.
const MAX_DEPTH: usize = 64;

/// Primitive kinds with a well-known size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    U128,
    I128,
    F16,
    F32,
    F64,
    Decimal,
    Char,
    Bool,
}

impl Kind {
    /// Size of the kind in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 | Self::Bool => 1,
            Self::U16 | Self::I16 | Self::F16 | Self::Char => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
            Self::U128 | Self::I128 | Self::Decimal => 16,
        }
    }

    /// Returns whether the kind may back an enumeration.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::U8
                | Self::I8
                | Self::U16
                | Self::I16
                | Self::U32
                | Self::I32
                | Self::U64
                | Self::I64
                | Self::U128
                | Self::I128
        )
    }
}

/// Structure of a type that is not in the primitive table.
#[derive(Clone, Debug)]
pub enum Shape {
    /// A primitive whose size cannot be determined.
    Opaque,
    /// An enumeration stored as the given integer type.
    Enum(TypeDescriptor),
    /// A pointer-sized integer.
    Pointer,
    /// `len` consecutive values of the element type.
    Array(TypeDescriptor, usize),
    /// An aggregate of fields, laid out back to back.
    Composite(Vec<Field>),
}

impl Shape {
    /// Builds a [Shape::Composite] from its fields.
    pub fn composite(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Composite(fields.into_iter().collect())
    }
}

/// A named field of a composite type.
#[derive(Clone, Debug)]
pub struct Field {
    name: &'static str,
    ty: TypeDescriptor,
}

impl Field {
    /// Declares a field named `name` of type `T`.
    pub fn new<T: Layout>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeDescriptor::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }
}

/// Static size manifest of a type.
///
/// Primitives in the fixed table set [Layout::PRIMITIVE]. Other types describe themselves with
/// [Layout::shape]; the default is [Shape::Opaque].
pub trait Layout: 'static {
    /// The entry of the primitive table this type corresponds to, if any.
    const PRIMITIVE: Option<Kind> = None;

    /// Describes the structure of the type.
    fn shape() -> Shape {
        Shape::Opaque
    }
}

/// Identity and manifest of a type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    primitive: Option<Kind>,
    shape: fn() -> Shape,
}

impl TypeDescriptor {
    /// Returns the descriptor of `T`.
    pub fn of<T: Layout>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            primitive: T::PRIMITIVE,
            shape: T::shape,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the table entry of the type, if it is a known primitive.
    pub fn primitive(&self) -> Option<Kind> {
        self.primitive
    }

    /// Builds the manifest of the type.
    pub fn shape(&self) -> Shape {
        (self.shape)()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

fn cache() -> &'static RwLock<HashMap<TypeId, usize>> {
    static CACHE: OnceLock<RwLock<HashMap<TypeId, usize>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the size of `T` in bytes.
pub fn size_of<T: Layout>() -> Result<usize, Error> {
    resolve(&TypeDescriptor::of::<T>())
}

/// Returns the size of the described type in bytes.
///
/// Fails with [Error::UnsupportedType] if the type, or any type it is built from, is
/// [Shape::Opaque], if an enumeration is not backed by an integer, or if the manifest nests
/// deeper than the resolver follows (which includes cyclic manifests).
pub fn resolve(ty: &TypeDescriptor) -> Result<usize, Error> {
    resolve_at(ty, 0)
}

/// Returns the cached size of the described type, if it has been resolved before.
///
/// Types in the primitive table are never cached.
pub fn cached(ty: &TypeDescriptor) -> Option<usize> {
    // A poisoned lock still holds a consistent map: entries are only ever inserted whole.
    let map = cache().read().unwrap_or_else(|e| e.into_inner());
    map.get(&ty.id).copied()
}

fn resolve_at(ty: &TypeDescriptor, depth: usize) -> Result<usize, Error> {
    if let Some(kind) = ty.primitive {
        return Ok(kind.size());
    }
    if let Some(size) = cached(ty) {
        return Ok(size);
    }
    if depth >= MAX_DEPTH {
        debug!(ty = ty.name, depth, "type manifest nests too deep");
        return Err(Error::UnsupportedType(ty.name));
    }

    let size = match ty.shape() {
        Shape::Opaque => {
            debug!(ty = ty.name, "type has no known size");
            return Err(Error::UnsupportedType(ty.name));
        }
        Shape::Enum(repr) => match repr.primitive {
            Some(kind) if kind.is_integer() => kind.size(),
            None if matches!(repr.shape(), Shape::Pointer) => resolve_at(&repr, depth + 1)?,
            _ => {
                debug!(ty = ty.name, repr = repr.name, "enum is not backed by an integer");
                return Err(Error::UnsupportedType(ty.name));
            }
        },
        Shape::Pointer => std::mem::size_of::<usize>(),
        Shape::Array(elem, len) => resolve_at(&elem, depth + 1)? * len,
        Shape::Composite(fields) => {
            let mut total = 0;
            for field in &fields {
                total += resolve_at(&field.ty, depth + 1)?;
            }
            total
        }
    };

    let mut map = cache().write().unwrap_or_else(|e| e.into_inner());
    let size = *map.entry(ty.id).or_insert_with(|| {
        trace!(ty = ty.name, size, "cached type size");
        size
    });
    Ok(size)
}

macro_rules! impl_primitive_layout {
    ($type:ty, $kind:ident) => {
        impl Layout for $type {
            const PRIMITIVE: Option<Kind> = Some(Kind::$kind);
        }
    };
}

impl_primitive_layout!(u8, U8);
impl_primitive_layout!(i8, I8);
impl_primitive_layout!(u16, U16);
impl_primitive_layout!(i16, I16);
impl_primitive_layout!(u32, U32);
impl_primitive_layout!(i32, I32);
impl_primitive_layout!(u64, U64);
impl_primitive_layout!(i64, I64);
impl_primitive_layout!(u128, U128);
impl_primitive_layout!(i128, I128);
impl_primitive_layout!(half::f16, F16);
impl_primitive_layout!(f32, F32);
impl_primitive_layout!(f64, F64);
impl_primitive_layout!(rust_decimal::Decimal, Decimal);
impl_primitive_layout!(bool, Bool);

impl Layout for usize {
    fn shape() -> Shape {
        Shape::Pointer
    }
}

impl Layout for isize {
    fn shape() -> Shape {
        Shape::Pointer
    }
}

// A Rust `char` is a 4-byte scalar value with no single 16-bit form; see `Char16`.
impl Layout for char {}

impl<T: Layout, const N: usize> Layout for [T; N] {
    fn shape() -> Shape {
        Shape::Array(TypeDescriptor::of::<T>(), N)
    }
}

impl Layout for uuid::Uuid {
    fn shape() -> Shape {
        Shape::composite([
            Field::new::<u32>("a"),
            Field::new::<u16>("b"),
            Field::new::<u16>("c"),
            Field::new::<[u8; 8]>("d"),
        ])
    }
}
