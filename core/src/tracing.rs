//! Tracing utilities for query rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! Without the feature the macros expand to nothing.

/// Emit a debug-level tracing event with the rendered URL and parameter count.
///
/// ```ignore
/// odata_trace_query!(&url, params.len());
/// ```
#[macro_export]
macro_rules! odata_trace_query {
    ($url:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %$url, params = $param_count, "odata.query");
    };
}

/// Emit a warn-level tracing event when rendering fails.
///
/// ```ignore
/// odata_trace_error!(&err);
/// ```
#[macro_export]
macro_rules! odata_trace_error {
    ($err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %$err, "odata.render");
    };
}
