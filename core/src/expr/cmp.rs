//! Comparison and membership predicates.
//!
//! Values must be [`Compatible`] with the property type, so comparing an
//! integer property with a string fails to compile. Nothing is evaluated
//! here; the server does that.

use crate::value::{Compatible, Null};

use super::{CompareOp, Expr, Field};

impl<T: ?Sized> Field<T> {
    fn compare<V: Compatible<T>>(&self, op: CompareOp, value: V) -> Expr {
        Expr::Compare {
            op,
            path: self.leaf_path(),
            value: value.into_literal(),
        }
    }

    /// `{path} eq {value}`. `None` and [`Null`] render `null`.
    pub fn eq<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Eq, value)
    }

    /// `{path} ne {value}`. `None` and [`Null`] render `null`.
    pub fn ne<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Ne, value)
    }

    /// `{path} gt {value}`
    pub fn gt<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Gt, value)
    }

    /// `{path} ge {value}`
    pub fn ge<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Ge, value)
    }

    /// `{path} lt {value}`
    pub fn lt<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Lt, value)
    }

    /// `{path} le {value}`
    pub fn le<V: Compatible<T>>(&self, value: V) -> Expr {
        self.compare(CompareOp::Le, value)
    }

    /// `{path} eq null`
    pub fn is_null(&self) -> Expr {
        self.compare(CompareOp::Eq, Null)
    }

    /// `{path} ne null`
    pub fn is_not_null(&self) -> Expr {
        self.compare(CompareOp::Ne, Null)
    }

    /// `{path} in ({values})`.
    ///
    /// An empty list is accepted here and rejected when the query is
    /// rendered, see [`ODataError::EmptyMembership`](crate::error::ODataError).
    pub fn in_array<I, V>(&self, values: I) -> Expr
    where
        I: IntoIterator<Item = V>,
        V: Compatible<T>,
    {
        Expr::In {
            path: self.leaf_path(),
            values: values.into_iter().map(Compatible::into_literal).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::path::{FieldCursor, FieldPath};
    use crate::traits::PathAccessor;
    use crate::value::{Literal, Null};

    use super::*;

    fn field<T>(name: &'static str) -> Field<T> {
        Field::from_cursor(FieldCursor::root().child(name))
    }

    #[test]
    fn comparison_captures_operator_path_and_value() {
        let expr = field::<i32>("age").ge(30);
        assert_eq!(
            expr,
            Expr::Compare {
                op: CompareOp::Ge,
                path: FieldPath::from_segments(["age"]),
                value: Literal::Int(30),
            }
        );
    }

    #[test]
    fn null_and_none_build_identical_nodes() {
        let name = field::<String>("firstName");
        assert_eq!(name.eq(Null), name.eq(None::<&str>));
        assert_eq!(name.eq(Null), name.is_null());
    }

    #[test]
    fn leaves_do_not_consume_the_field() {
        let age = field::<i32>("age");
        let low = age.gt(1);
        let high = age.lt(9);
        assert_ne!(low, high);
    }

    #[test]
    fn in_array_keeps_value_order() {
        let expr = field::<String>("lastName").in_array(["Jones", "Smith", "Ng"]);
        let Expr::In { values, .. } = expr else {
            panic!("expected In");
        };
        assert_eq!(
            values,
            vec![
                Literal::String("Jones".into()),
                Literal::String("Smith".into()),
                Literal::String("Ng".into()),
            ]
        );
    }
}
