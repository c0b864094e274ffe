//! Core traits tying Rust types to OData property paths.

mod tuple;

use crate::expr::{Collection, Field};
use crate::path::{FieldCursor, FieldPath};

/// A typed placeholder that knows where it sits in an entity graph.
///
/// Implemented by [`Field`], [`Collection`] and every `<Entity>Fields` struct
/// generated by `#[derive(ODataEntity)]`.
pub trait PathAccessor: Sized {
    fn from_cursor(cursor: FieldCursor) -> Self;

    fn cursor(&self) -> &FieldCursor;

    fn path(&self) -> &FieldPath {
        self.cursor().path()
    }

    /// Bound variable this accessor stands for when it is the argument of an
    /// `any`/`all` predicate.
    fn lambda_variable(&self) -> Option<&str> {
        self.cursor().lambda_variable()
    }
}

/// Maps the declared Rust type of a property to the accessor its getter
/// returns.
///
/// - primitives map to [`Field<Self>`] and get the comparison operators;
/// - `Vec<T>` maps to [`Collection<T>`] and gets `any`/`all`;
/// - `Option<T>` and `Box<T>` map to whatever `T` maps to;
/// - derived entities map to their generated `<Entity>Fields`.
pub trait ODataProperty {
    type Accessor: PathAccessor;
}

/// A schema-shaped type that can be queried.
pub trait Entity: ODataProperty {
    /// Root placeholder handed to selector and filter callbacks.
    type Fields: PathAccessor + IntoFieldPaths;

    /// Rust name of the entity type.
    const ENTITY_NAME: &'static str;

    /// Wire names of every property, in declaration order.
    const PROPERTY_NAMES: &'static [&'static str];

    /// A root placeholder with its own lambda scope.
    fn fields() -> Self::Fields {
        Self::Fields::from_cursor(FieldCursor::root())
    }
}

macro_rules! impl_primitive_property {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ODataProperty for $t {
                type Accessor = Field<$t>;
            }
        )+
    };
}

impl_primitive_property!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    compact_str::CompactString,
);

#[cfg(feature = "uuid")]
impl_primitive_property!(uuid::Uuid);

#[cfg(feature = "chrono")]
impl_primitive_property!(chrono::NaiveDate);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> ODataProperty for chrono::DateTime<Tz> {
    type Accessor = Field<chrono::DateTime<Tz>>;
}

impl<T: ODataProperty> ODataProperty for Option<T> {
    type Accessor = T::Accessor;
}

impl<T: ODataProperty> ODataProperty for Box<T> {
    type Accessor = T::Accessor;
}

impl<T: ODataProperty> ODataProperty for Vec<T> {
    type Accessor = Collection<T>;
}

/// Anything a selector callback may return: one accessor, a tuple, an array
/// or a `Vec` of them, or raw [`FieldPath`]s.
pub trait IntoFieldPaths {
    fn push_field_paths(self, out: &mut Vec<FieldPath>);

    fn into_field_paths(self) -> Vec<FieldPath>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.push_field_paths(&mut out);
        out
    }
}

impl IntoFieldPaths for FieldPath {
    fn push_field_paths(self, out: &mut Vec<FieldPath>) {
        out.push(self);
    }
}

impl<A: IntoFieldPaths, const N: usize> IntoFieldPaths for [A; N] {
    fn push_field_paths(self, out: &mut Vec<FieldPath>) {
        for item in self {
            item.push_field_paths(out);
        }
    }
}

impl<A: IntoFieldPaths> IntoFieldPaths for Vec<A> {
    fn push_field_paths(self, out: &mut Vec<FieldPath>) {
        for item in self {
            item.push_field_paths(out);
        }
    }
}
