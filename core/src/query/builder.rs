//! Fluent, immutable query builder.

use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::expr::{Expr, Operators};
use crate::provider::{ODataV4, QueryProvider};
use crate::traits::{Entity, IntoFieldPaths};

use super::state::{OrderBy, QueryState};

/// A typed list query against entity `T`.
///
/// Every method borrows `self` and returns a new query, so one query can be
/// branched into several:
///
/// ```ignore
/// let users = ODataQuery::<Person>::for_v4("/odata/users");
/// let adults = users.filter(|p, _| p.age().ge(18));
/// let names = users.select(|p| (p.first_name(), p.last_name()));
///
/// assert_eq!(names.build_query()?, "/odata/users?$select=firstName%2ClastName");
/// ```
pub struct ODataQuery<T, P = ODataV4> {
    provider: Arc<P>,
    state: QueryState,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> ODataQuery<T, ODataV4> {
    /// Creates an empty query rendered with OData v4 conventions.
    pub fn for_v4(base: impl Into<String>) -> Self {
        Self::with_provider(ODataV4::new(base))
    }
}

impl<T: Entity, P: QueryProvider> ODataQuery<T, P> {
    /// Creates an empty query rendered by `provider`.
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            state: QueryState::new(),
            _marker: PhantomData,
        }
    }

    fn derive(&self, state: QueryState) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            state,
            _marker: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Renders the query URL.
    pub fn build_query(&self) -> Result<String> {
        self.provider.build_query(&self.state)
    }

    /// Replaces the selected fields.
    ///
    /// ```ignore
    /// query.select(|p| (p.first_name(), p.last_name()))
    /// ```
    #[must_use]
    pub fn select<F, S>(&self, selector: F) -> Self
    where
        F: FnOnce(T::Fields) -> S,
        S: IntoFieldPaths,
    {
        let paths = selector(T::fields()).into_field_paths();
        self.derive(self.state.with_select(paths))
    }

    /// Appends ascending order terms.
    #[must_use]
    pub fn order_by<F, S>(&self, selector: F) -> Self
    where
        F: FnOnce(T::Fields) -> S,
        S: IntoFieldPaths,
    {
        let paths = selector(T::fields()).into_field_paths();
        self.derive(self.state.with_order_by(paths, OrderBy::Asc))
    }

    /// Appends descending order terms.
    #[must_use]
    pub fn order_by_descending<F, S>(&self, selector: F) -> Self
    where
        F: FnOnce(T::Fields) -> S,
        S: IntoFieldPaths,
    {
        let paths = selector(T::fields()).into_field_paths();
        self.derive(self.state.with_order_by(paths, OrderBy::Desc))
    }

    /// Replaces `$skip`. `0` removes it.
    #[must_use]
    pub fn skip(&self, n: u32) -> Self {
        self.derive(self.state.with_skip(n))
    }

    /// Replaces `$top`. `0` is kept.
    #[must_use]
    pub fn top(&self, n: u32) -> Self {
        self.derive(self.state.with_top(n))
    }

    /// Adds navigation properties to `$expand`. Already expanded paths are
    /// ignored.
    #[must_use]
    pub fn expand<F, S>(&self, selector: F) -> Self
    where
        F: FnOnce(T::Fields) -> S,
        S: IntoFieldPaths,
    {
        let paths = selector(T::fields()).into_field_paths();
        self.derive(self.state.with_expand(paths))
    }

    /// Replaces the filter with the expression built by `predicate`.
    ///
    /// The callback gets a root placeholder with a fresh lambda scope and the
    /// [`Operators`] helper set.
    ///
    /// ```ignore
    /// query.filter(|p, ops| ops.not(p.mother().first_name().eq("Jane")))
    /// ```
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnOnce(T::Fields, Operators) -> Expr,
    {
        let expr = predicate(T::fields(), Operators);
        self.derive(self.state.with_filter(expr))
    }

    /// Replaces the filter with a prebuilt expression.
    #[must_use]
    pub fn filter_expr(&self, expr: Expr) -> Self {
        self.derive(self.state.with_filter(expr))
    }

    /// Requests `$count=true`.
    #[must_use]
    pub fn count(&self, enabled: bool) -> Self {
        self.derive(self.state.with_count(enabled))
    }
}

impl<T, P> Clone for ODataQuery<T, P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            state: self.state.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, P: fmt::Debug> fmt::Debug for ODataQuery<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ODataQuery")
            .field("provider", &self.provider)
            .field("state", &self.state)
            .finish()
    }
}
