//! # odata-query
//!
//! A type-safe OData v4 query builder for Rust.
//!
//! ## Quick Start
//!
//! ```rust
//! use odata_query::prelude::*;
//!
//! #[derive(ODataEntity)]
//! #[odata(rename_all = "camelCase")]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     age: i32,
//!     children: Vec<Child>,
//!     mother: Option<Box<Person>>,
//! }
//!
//! #[derive(ODataEntity)]
//! #[odata(rename_all = "camelCase")]
//! struct Child {
//!     first_name: String,
//!     age: i32,
//! }
//!
//! # fn main() -> odata_query::Result<()> {
//! let users = ODataQuery::<Person>::for_v4("/odata/users");
//!
//! let query = users
//!     .filter(|p, _| p.first_name().eq("john").and(p.age().ge(30)))
//!     .order_by_descending(|p| p.age())
//!     .top(10);
//!
//! assert_eq!(
//!     query.build_query()?,
//!     "/odata/users?$filter=firstName%20eq%20'john'%20and%20age%20ge%2030\
//!      &$orderby=age%20desc&$top=10"
//! );
//!
//! let parents = users.filter(|p, _| p.children().any(|c| c.age().lt(5)));
//! assert_eq!(
//!     parents.build_query()?,
//!     "/odata/users?$filter=children%2Fany(x0%3A%20x0%2Fage%20lt%205)"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Default | Effect                                            |
//! |-----------|---------|---------------------------------------------------|
//! | `derive`  | ✅      | `#[derive(ODataEntity)]`                          |
//! | `tracing` |         | `tracing` events for rendered queries and errors  |
//! | `uuid`    |         | `uuid::Uuid` properties and Guid literals         |
//! | `chrono`  |         | `DateTime` / `NaiveDate` properties and literals  |

#![cfg_attr(docsrs, feature(doc_cfg))]

// Lets generated `::odata_query::...` paths resolve inside this crate too.
extern crate self as odata_query;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for rendering
pub use odata_query_core::error::Result;

/// Typed query builder
pub use odata_query_core::query::ODataQuery;

/// Derive macro for entity field paths
#[cfg(feature = "derive")]
pub use odata_query_macros::ODataEntity;

/// Error types
pub mod error {
    pub use odata_query_core::error::ODataError;
}

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// Core types and traits.
///
/// # Module Structure
///
/// - **Paths**: `FieldPath`, `FieldCursor`, `LambdaScope`
/// - **Traits**: `Entity`, `ODataProperty`, `PathAccessor`, `IntoFieldPaths`
/// - **Expressions**: `Expr`, `Field`, `Collection`, `Operators`, and the
///   `and`/`or`/`not` functions in [`core::expr`]
/// - **Rendering**: `QueryState`, `QueryProvider`, `ODataV4`
pub mod core {
    pub use odata_query_core::{
        Collection, Compatible, Expr, Field, FieldCursor, FieldPath, LambdaScope, Literal, Null,
        ODataQuery, ODataV4, Operators, OrderBy, OrderTerm, QueryProvider, QueryState,
    };

    pub use odata_query_core::traits::*;

    /// Expression tree and combinators.
    ///
    /// ```rust,ignore
    /// use odata_query::core::expr::{and, not, or_all};
    /// ```
    pub use odata_query_core::expr;
}

// =============================================================================
// Prelude
// =============================================================================

/// Import this for schema declarations and query building.
pub mod prelude {
    #[cfg(feature = "derive")]
    pub use odata_query_macros::ODataEntity;

    pub use crate::core::expr::{and, and_all, not, or, or_all};
    pub use crate::core::{
        Collection, Entity, Expr, Field, IntoFieldPaths, Null, ODataProperty, ODataQuery,
        ODataV4, Operators, PathAccessor, QueryProvider,
    };
    pub use crate::error::ODataError;
}
