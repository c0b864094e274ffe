//! Logical operators (AND, OR, NOT).
//!
//! This module provides both function-based and operator-based logical operations:
//!
//! ```ignore
//! // Method style
//! condition1.and(condition2)
//! condition1.or(condition2)
//!
//! // Function style
//! and(condition1, condition2)
//! or_all([condition1, condition2, condition3])
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                 // Not
//! ```
//!
//! `And` and `Or` nodes stay flat: combining with a node of the same kind
//! extends its term list instead of nesting.

use core::ops::{BitAnd, BitOr, Not};

use super::Expr;

// =============================================================================
// Construction
// =============================================================================

fn push_flat_and(terms: &mut Vec<Expr>, expr: Expr) {
    match expr {
        Expr::And(inner) => terms.extend(inner),
        other => terms.push(other),
    }
}

fn push_flat_or(terms: &mut Vec<Expr>, expr: Expr) {
    match expr {
        Expr::Or(inner) => terms.extend(inner),
        other => terms.push(other),
    }
}

impl Expr {
    /// Logical AND. Extends `self` when it is already an `And`.
    #[must_use]
    pub fn and(self, other: Expr) -> Expr {
        let mut terms = match self {
            Expr::And(terms) => terms,
            first => vec![first],
        };
        push_flat_and(&mut terms, other);
        Expr::And(terms)
    }

    /// Logical OR. Extends `self` when it is already an `Or`.
    #[must_use]
    pub fn or(self, other: Expr) -> Expr {
        let mut terms = match self {
            Expr::Or(terms) => terms,
            first => vec![first],
        };
        push_flat_or(&mut terms, other);
        Expr::Or(terms)
    }
}

// =============================================================================
// NOT
// =============================================================================

/// Logical NOT. Always wraps, whatever the operand is.
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

// =============================================================================
// AND / OR
// =============================================================================

/// Logical AND of two expressions.
pub fn and(left: Expr, right: Expr) -> Expr {
    left.and(right)
}

/// Logical OR of two expressions.
pub fn or(left: Expr, right: Expr) -> Expr {
    left.or(right)
}

/// Logical AND of any number of conditions.
///
/// Returns `None` for an empty input and the condition itself for a single
/// one, so the result never holds fewer than two terms.
pub fn and_all<I>(conditions: I) -> Option<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    conditions.into_iter().reduce(Expr::and)
}

/// Logical OR of any number of conditions. See [`and_all`].
pub fn or_all<I>(conditions: I) -> Option<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    conditions.into_iter().reduce(Expr::or)
}

// =============================================================================
// Filter helpers
// =============================================================================

/// The `{and, or, not}` helper set handed to `filter` callbacks as their
/// second argument.
///
/// ```ignore
/// query.filter(|p, ops| ops.and(p.first_name().eq("jac"), p.age().ne(50)))
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Operators;

impl Operators {
    pub fn and(&self, left: Expr, right: Expr) -> Expr {
        and(left, right)
    }

    pub fn or(&self, left: Expr, right: Expr) -> Expr {
        or(left, right)
    }

    pub fn not(&self, expr: Expr) -> Expr {
        not(expr)
    }

    pub fn and_all<I: IntoIterator<Item = Expr>>(&self, conditions: I) -> Option<Expr> {
        and_all(conditions)
    }

    pub fn or_all<I: IntoIterator<Item = Expr>>(&self, conditions: I) -> Option<Expr> {
        or_all(conditions)
    }
}

// =============================================================================
// Operator Trait Implementations
// =============================================================================

/// Implements `!expr` (OData `not`).
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        not(self)
    }
}

/// Implements `expr1 & expr2` (OData `and`).
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Self::Output {
        self.and(rhs)
    }
}

/// Implements `expr1 | expr2` (OData `or`).
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Self::Output {
        self.or(rhs)
    }
}
