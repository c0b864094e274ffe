//! Expression model and serializer for typed OData v4 queries.
//!
//! - [`path`]: field paths and the cursors that capture them;
//! - [`expr`]: predicates, the `and`/`or`/`not` algebra and `any`/`all`;
//! - [`query`]: the immutable query state and fluent builder;
//! - [`provider`]: rendering a query into a request URL.

pub mod error;
pub mod expr;
pub mod path;
pub mod provider;
pub mod query;
mod render;
pub mod traits;
mod tracing;
pub mod value;

// Re-export key types and traits
pub use error::{ODataError, Result};
pub use expr::{Collection, Expr, Field, Operators};
pub use path::{FieldCursor, FieldPath, LambdaScope};
pub use provider::{ODataV4, QueryProvider};
pub use query::{ODataQuery, OrderBy, OrderTerm, QueryState};
pub use traits::*;
pub use value::{Compatible, Literal, Null};
