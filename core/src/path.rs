//! Field paths and the cursors that accumulate them.
//!
//! A [`FieldPath`] is the materialized navigation path (`mother/firstName`).
//! A [`FieldCursor`] is what typed accessors carry while a selector or filter
//! callback runs: the path walked so far plus the [`LambdaScope`] that names
//! bound variables for `any`/`all`.

use core::cell::Cell;
use core::fmt;
use std::rc::Rc;

use compact_str::{CompactString, format_compact};
use smallvec::SmallVec;

/// Ordered navigation path through an entity graph.
///
/// The last segment is the leaf property or collection. Inside a lambda body
/// the first segment is the bound variable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[CompactString; 4]>,
}

impl FieldPath {
    /// Creates an empty path. Only cursors rooted at an entity start empty.
    pub const fn empty() -> Self {
        Self {
            segments: SmallVec::new_const(),
        }
    }

    /// Creates a path from its segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<CompactString>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Writes the path with `/` separators.
    pub(crate) fn write_to(&self, out: &mut String) {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(segment);
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Allocates bound-variable names for collection lambdas.
///
/// Clones share one counter, so every accessor derived from the same root
/// draws from the same sequence (`x0`, `x1`, ...). Nested quantifiers built
/// inside one `filter` call therefore never collide.
#[derive(Clone, Debug, Default)]
pub struct LambdaScope {
    next: Rc<Cell<u32>>,
}

impl LambdaScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused variable name in this scope.
    pub fn fresh_variable(&self) -> CompactString {
        let n = self.next.get();
        self.next.set(n + 1);
        format_compact!("x{n}")
    }
}

/// Position of a typed accessor inside an entity graph.
#[derive(Clone, Debug)]
pub struct FieldCursor {
    path: FieldPath,
    scope: LambdaScope,
    variable: Option<CompactString>,
}

impl FieldCursor {
    /// Cursor at the root of an entity, owning a fresh lambda scope.
    pub fn root() -> Self {
        Self::with_scope(LambdaScope::new())
    }

    /// Cursor at the root of an entity, sharing `scope`.
    pub fn with_scope(scope: LambdaScope) -> Self {
        Self {
            path: FieldPath::empty(),
            scope,
            variable: None,
        }
    }

    /// Cursor standing for the current element of a lambda. Paths read
    /// through it start with `variable`.
    pub(crate) fn lambda(scope: LambdaScope, variable: CompactString) -> Self {
        Self {
            path: FieldPath::from_segments([variable.clone()]),
            scope,
            variable: Some(variable),
        }
    }

    /// Steps into the property `name`.
    #[must_use]
    pub fn child(&self, name: &'static str) -> Self {
        Self {
            path: self.path.child(CompactString::const_new(name)),
            scope: self.scope.clone(),
            variable: self.variable.clone(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn scope(&self) -> &LambdaScope {
        &self.scope
    }

    /// Name of the lambda variable this cursor is rooted at, if any.
    pub fn lambda_variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn into_path(self) -> FieldPath {
        self.path
    }
}
