//! Centralized path definitions for generated code.
//!
//! Generated code names everything through the `odata_query::core` facade
//! module, so users only depend on the `odata-query` crate.

use proc_macro2::TokenStream;
use quote::quote;

pub mod core {
    use super::*;

    pub fn entity() -> TokenStream {
        quote!(::odata_query::core::Entity)
    }

    pub fn odata_property() -> TokenStream {
        quote!(::odata_query::core::ODataProperty)
    }

    pub fn path_accessor() -> TokenStream {
        quote!(::odata_query::core::PathAccessor)
    }

    pub fn into_field_paths() -> TokenStream {
        quote!(::odata_query::core::IntoFieldPaths)
    }

    pub fn field_cursor() -> TokenStream {
        quote!(::odata_query::core::FieldCursor)
    }

    pub fn field_path() -> TokenStream {
        quote!(::odata_query::core::FieldPath)
    }
}

pub mod std {
    use super::*;

    pub fn vec() -> TokenStream {
        quote!(::std::vec::Vec)
    }
}
