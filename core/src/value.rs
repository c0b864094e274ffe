//! Literal values and the compile-time compatibility between property types
//! and the values they may be compared with.

use compact_str::CompactString;

/// A literal operand in a filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept apart from `Float` so it renders with `f32`'s shortest form.
    Single(f32),
    String(CompactString),
    #[cfg(feature = "uuid")]
    Guid(uuid::Uuid),
    #[cfg(feature = "chrono")]
    DateTimeOffset(chrono::DateTime<chrono::FixedOffset>),
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
}

impl Literal {
    pub const fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

/// The `null` literal.
///
/// `eq(Null)` and `eq(None)` render identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Null;

/// Values that may stand on the right-hand side of a comparison against a
/// property of type `T`.
///
/// ```ignore
/// person.age().ge(30);            // i32 against i32
/// person.first_name().eq("john"); // &str against String
/// person.first_name().eq(Null);   // anything against null
/// person.age().eq(1.5);           // compile error: f64 is not Compatible<i32>
/// ```
pub trait Compatible<T: ?Sized> {
    fn into_literal(self) -> Literal;
}

impl<T: ?Sized> Compatible<T> for Null {
    fn into_literal(self) -> Literal {
        Literal::Null
    }
}

impl<T: ?Sized, V: Compatible<T>> Compatible<T> for Option<V> {
    fn into_literal(self) -> Literal {
        match self {
            Some(value) => value.into_literal(),
            None => Literal::Null,
        }
    }
}

macro_rules! impl_compatible {
    ($variant:ident => $($t:ty),+ $(,)?) => {
        $(
            impl Compatible<$t> for $t {
                fn into_literal(self) -> Literal {
                    Literal::$variant(self.into())
                }
            }
        )+
    };
}

impl_compatible!(Bool => bool);
impl_compatible!(Int => i8, i16, i32, i64);
impl_compatible!(UInt => u8, u16, u32, u64);
impl_compatible!(Single => f32);
impl_compatible!(Float => f64);
impl_compatible!(String => String, CompactString);

impl Compatible<String> for &str {
    fn into_literal(self) -> Literal {
        Literal::String(self.into())
    }
}

impl Compatible<String> for &String {
    fn into_literal(self) -> Literal {
        Literal::String(self.as_str().into())
    }
}

impl Compatible<String> for char {
    fn into_literal(self) -> Literal {
        let mut buf = [0u8; 4];
        Literal::String(CompactString::from(&*self.encode_utf8(&mut buf)))
    }
}

impl Compatible<CompactString> for &str {
    fn into_literal(self) -> Literal {
        Literal::String(self.into())
    }
}

#[cfg(feature = "uuid")]
impl_compatible!(Guid => uuid::Uuid);

#[cfg(feature = "chrono")]
impl_compatible!(Date => chrono::NaiveDate);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Compatible<chrono::DateTime<Tz>> for chrono::DateTime<Tz> {
    fn into_literal(self) -> Literal {
        Literal::DateTimeOffset(self.fixed_offset())
    }
}
