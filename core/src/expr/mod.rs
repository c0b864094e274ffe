//! Filter expression tree.
//!
//! Leaves are built from typed accessors ([`Field`], [`Collection`]) and
//! composed with the combinators in [`logical`]:
//!
//! ```ignore
//! // firstName eq 'john' and (age ge 30 or lastName ne 'Jones')
//! p.first_name().eq("john")
//!     .and(p.age().ge(30).or(p.last_name().ne("Jones")))
//!
//! // children/any(x0: x0/age eq 4)
//! p.children().any(|c| c.age().eq(4))
//! ```
//!
//! Every node is an immutable value; combinators consume their operands and
//! return new nodes.

use core::fmt;
use core::marker::PhantomData;

use compact_str::CompactString;

use crate::path::{FieldCursor, FieldPath};
use crate::traits::{IntoFieldPaths, PathAccessor};
use crate::value::Literal;

mod cmp;
mod lambda;
pub mod logical;
mod string;

pub use lambda::Collection;
pub use logical::{Operators, and, and_all, not, or, or_all};

/// Comparison operators, named by their OData tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Ne => "ne",
            CompareOp::Gt => "gt",
            CompareOp::Ge => "ge",
            CompareOp::Lt => "lt",
            CompareOp::Le => "le",
        }
    }
}

/// Canonical string functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringFunction {
    Contains,
    StartsWith,
    EndsWith,
}

impl StringFunction {
    pub const fn as_str(self) -> &'static str {
        match self {
            StringFunction::Contains => "contains",
            StringFunction::StartsWith => "startsWith",
            StringFunction::EndsWith => "endsWith",
        }
    }
}

/// Collection quantifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LambdaKind {
    Any,
    All,
}

impl LambdaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            LambdaKind::Any => "any",
            LambdaKind::All => "all",
        }
    }
}

/// A boolean filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `{path} {op} {value}`
    Compare {
        op: CompareOp,
        path: FieldPath,
        value: Literal,
    },
    /// `{func}({path},{value})`
    Function {
        func: StringFunction,
        path: FieldPath,
        value: Literal,
    },
    /// `{path} in ({values})`
    In { path: FieldPath, values: Vec<Literal> },
    Not(Box<Expr>),
    /// At least two terms, none of them an `And`.
    And(Vec<Expr>),
    /// At least two terms, none of them an `Or`.
    Or(Vec<Expr>),
    /// `{path}/{kind}({variable}: {body})`, or `{path}/any()` without a body.
    Lambda {
        kind: LambdaKind,
        path: FieldPath,
        variable: CompactString,
        body: Option<Box<Expr>>,
    },
}

/// Terminal accessor for a primitive property of type `T`.
///
/// Carries the comparison operators (`eq`, `ne`, `gt`, `ge`, `lt`, `le`,
/// `in_array`) and, for `T = String`, the string functions.
pub struct Field<T: ?Sized> {
    cursor: FieldCursor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ?Sized> Field<T> {
    fn leaf_path(&self) -> FieldPath {
        self.cursor.path().clone()
    }
}

impl<T: ?Sized> PathAccessor for Field<T> {
    fn from_cursor(cursor: FieldCursor) -> Self {
        Self {
            cursor,
            _marker: PhantomData,
        }
    }

    fn cursor(&self) -> &FieldCursor {
        &self.cursor
    }
}

impl<T: ?Sized> IntoFieldPaths for Field<T> {
    fn push_field_paths(self, out: &mut Vec<FieldPath>) {
        out.push(self.cursor.into_path());
    }
}

impl<T: ?Sized> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self::from_cursor(self.cursor.clone())
    }
}

impl<T: ?Sized> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(self.cursor.path()).finish()
    }
}
