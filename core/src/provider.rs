//! Serializers turning a [`QueryState`] into a request URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::Result;
use crate::query::{OrderBy, QueryState};
use crate::render::write_expr;
use crate::{odata_trace_error, odata_trace_query};

/// Characters escaped in parameter values: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, matching ECMAScript `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Renders query options against a base resource locator.
pub trait QueryProvider {
    fn build_query(&self, state: &QueryState) -> Result<String>;
}

/// OData v4 query-string conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ODataV4 {
    base: String,
}

impl ODataV4 {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn params(state: &QueryState) -> Result<Vec<(&'static str, String)>> {
        let mut params = Vec::new();

        if let Some(filter) = state.filter() {
            let mut value = String::new();
            write_expr(filter, &mut value)?;
            params.push(("$filter", value));
        }

        if !state.order_by().is_empty() {
            let mut value = String::new();
            for (i, term) in state.order_by().iter().enumerate() {
                if i > 0 {
                    value.push(',');
                }
                term.path.write_to(&mut value);
                if term.direction == OrderBy::Desc {
                    value.push_str(" desc");
                }
            }
            params.push(("$orderby", value));
        }

        if !state.select().is_empty() {
            params.push(("$select", join_paths(state.select())));
        }

        if let Some(skip) = state.skip() {
            params.push(("$skip", skip.to_string()));
        }

        if let Some(top) = state.top() {
            params.push(("$top", top.to_string()));
        }

        if !state.expand().is_empty() {
            params.push(("$expand", join_paths(state.expand())));
        }

        if state.count() {
            params.push(("$count", "true".to_owned()));
        }

        Ok(params)
    }
}

fn join_paths(paths: &[crate::path::FieldPath]) -> String {
    let mut value = String::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            value.push(',');
        }
        path.write_to(&mut value);
    }
    value
}

impl QueryProvider for ODataV4 {
    fn build_query(&self, state: &QueryState) -> Result<String> {
        if state.is_empty() {
            return Ok(self.base.clone());
        }

        let params = Self::params(state).inspect_err(|_err| {
            odata_trace_error!(_err);
        })?;

        let mut url = String::with_capacity(self.base.len() + 64);
        url.push_str(&self.base);
        url.push('?');
        for (i, (name, value)) in params.iter().enumerate() {
            if i > 0 {
                url.push('&');
            }
            url.push_str(name);
            url.push('=');
            url.extend(utf8_percent_encode(value, COMPONENT));
        }

        odata_trace_query!(&url, params.len());
        Ok(url)
    }
}
