//! Collection quantifiers (`any`, `all`).

use core::fmt;
use core::marker::PhantomData;

use crate::path::{FieldCursor, FieldPath};
use crate::traits::{IntoFieldPaths, ODataProperty, PathAccessor};

use super::{Expr, LambdaKind};

/// Accessor for a collection-valued property (`Vec<T>`).
///
/// The predicate callback receives `T`'s accessor rooted at a fresh bound
/// variable, so navigation and nested quantifiers work inside the body:
///
/// ```ignore
/// // children/any(x0: x0/pets/all(x1: x1 ne 'cat'))
/// p.children().any(|c| c.pets().all(|pet| pet.ne("cat")))
/// ```
pub struct Collection<T: ?Sized> {
    cursor: FieldCursor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ODataProperty + ?Sized> Collection<T> {
    fn lambda<F>(&self, kind: LambdaKind, predicate: F) -> Expr
    where
        F: FnOnce(T::Accessor) -> Expr,
    {
        let scope = self.cursor.scope().clone();
        let variable = scope.fresh_variable();
        let element = T::Accessor::from_cursor(FieldCursor::lambda(scope, variable.clone()));
        let body = predicate(element);
        Expr::Lambda {
            kind,
            path: self.cursor.path().clone(),
            variable,
            body: Some(Box::new(body)),
        }
    }

    /// `{path}/any({v}: {predicate})`
    pub fn any<F>(&self, predicate: F) -> Expr
    where
        F: FnOnce(T::Accessor) -> Expr,
    {
        self.lambda(LambdaKind::Any, predicate)
    }

    /// `{path}/all({v}: {predicate})`
    pub fn all<F>(&self, predicate: F) -> Expr
    where
        F: FnOnce(T::Accessor) -> Expr,
    {
        self.lambda(LambdaKind::All, predicate)
    }

    /// `{path}/any()`, true when the collection has at least one element.
    pub fn not_empty(&self) -> Expr {
        Expr::Lambda {
            kind: LambdaKind::Any,
            path: self.cursor.path().clone(),
            variable: Default::default(),
            body: None,
        }
    }
}

impl<T: ?Sized> PathAccessor for Collection<T> {
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

impl<T: ?Sized> IntoFieldPaths for Collection<T> {
    fn push_field_paths(self, out: &mut Vec<FieldPath>) {
        out.push(self.cursor.into_path());
    }
}

impl<T: ?Sized> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self::from_cursor(self.cursor.clone())
    }
}

impl<T: ?Sized> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Collection").field(self.cursor.path()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{CompareOp, Field};
    use crate::value::Literal;

    use super::*;

    fn tags() -> Collection<String> {
        Collection::from_cursor(FieldCursor::root().child("tags"))
    }

    #[test]
    fn primitive_elements_bind_the_bare_variable() {
        let mut seen = None;
        let expr = tags().any(|tag: Field<String>| {
            seen = tag.lambda_variable().map(str::to_owned);
            tag.eq("red")
        });
        assert_eq!(seen.as_deref(), Some("x0"));
        assert_eq!(
            expr,
            Expr::Lambda {
                kind: LambdaKind::Any,
                path: FieldPath::from_segments(["tags"]),
                variable: "x0".into(),
                body: Some(Box::new(Expr::Compare {
                    op: CompareOp::Eq,
                    path: FieldPath::from_segments(["x0"]),
                    value: Literal::String("red".into()),
                })),
            }
        );
    }

    #[test]
    fn sibling_lambdas_on_one_root_get_distinct_variables() {
        let root = FieldCursor::root();
        let a: Collection<String> = Collection::from_cursor(root.child("a"));
        let b: Collection<String> = Collection::from_cursor(root.child("b"));
        let Expr::Lambda { variable: first, .. } = a.all(|x| x.ne("")) else {
            panic!("expected Lambda");
        };
        let Expr::Lambda { variable: second, .. } = b.all(|x| x.ne("")) else {
            panic!("expected Lambda");
        };
        assert_ne!(first, second);
    }

    #[test]
    fn not_empty_has_no_body() {
        let Expr::Lambda { body, kind, .. } = tags().not_empty() else {
            panic!("expected Lambda");
        };
        assert_eq!(kind, LambdaKind::Any);
        assert!(body.is_none());
    }
}
