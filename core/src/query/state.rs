//! Immutable record of the options describing one list request.

use std::sync::Arc;

use crate::expr::Expr;
use crate::path::FieldPath;

/// Sort direction for `$orderby` terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

/// One `$orderby` entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderTerm {
    pub path: FieldPath,
    pub direction: OrderBy,
}

/// Query options. Every `with_*` method returns a new state and leaves the
/// receiver untouched; the filter tree is shared between states through
/// `Arc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    select: Vec<FieldPath>,
    order_by: Vec<OrderTerm>,
    skip: Option<u32>,
    top: Option<u32>,
    expand: Vec<FieldPath>,
    filter: Option<Arc<Expr>>,
    count: bool,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no option is set, in which case the rendered URL is the bare
    /// base locator.
    pub fn is_empty(&self) -> bool {
        self.select.is_empty()
            && self.order_by.is_empty()
            && self.skip.is_none()
            && self.top.is_none()
            && self.expand.is_empty()
            && self.filter.is_none()
            && !self.count
    }

    pub fn select(&self) -> &[FieldPath] {
        &self.select
    }

    pub fn order_by(&self) -> &[OrderTerm] {
        &self.order_by
    }

    pub fn skip(&self) -> Option<u32> {
        self.skip
    }

    pub fn top(&self) -> Option<u32> {
        self.top
    }

    pub fn expand(&self) -> &[FieldPath] {
        &self.expand
    }

    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_deref()
    }

    pub fn count(&self) -> bool {
        self.count
    }

    /// Replaces the select set with exactly `paths`. Empty paths (the entity
    /// root itself) are dropped.
    #[must_use]
    pub fn with_select(&self, paths: Vec<FieldPath>) -> Self {
        Self {
            select: non_empty(paths).collect(),
            ..self.clone()
        }
    }

    /// Appends one order term per non-empty path, all with `direction`.
    #[must_use]
    pub fn with_order_by(&self, paths: Vec<FieldPath>, direction: OrderBy) -> Self {
        let mut order_by = self.order_by.clone();
        order_by.extend(non_empty(paths).map(|path| OrderTerm { path, direction }));
        Self {
            order_by,
            ..self.clone()
        }
    }

    /// Replaces skip. `0` clears it.
    #[must_use]
    pub fn with_skip(&self, n: u32) -> Self {
        Self {
            skip: (n > 0).then_some(n),
            ..self.clone()
        }
    }

    /// Replaces top. `0` is kept and rendered.
    #[must_use]
    pub fn with_top(&self, n: u32) -> Self {
        Self {
            top: Some(n),
            ..self.clone()
        }
    }

    /// Appends non-empty paths not already present, keeping first-seen order.
    #[must_use]
    pub fn with_expand(&self, paths: Vec<FieldPath>) -> Self {
        let mut expand = self.expand.clone();
        for path in non_empty(paths) {
            if !expand.contains(&path) {
                expand.push(path);
            }
        }
        Self {
            expand,
            ..self.clone()
        }
    }

    /// Replaces the filter.
    #[must_use]
    pub fn with_filter(&self, filter: Expr) -> Self {
        Self {
            filter: Some(Arc::new(filter)),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_count(&self, count: bool) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }
}

fn non_empty(paths: Vec<FieldPath>) -> impl Iterator<Item = FieldPath> {
    paths.into_iter().filter(|path| !path.is_empty())
}
