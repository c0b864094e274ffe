//! Query state and the fluent builder over it.

mod builder;
mod state;

pub use builder::ODataQuery;
pub use state::{OrderBy, OrderTerm, QueryState};
