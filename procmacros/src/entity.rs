//! `#[derive(ODataEntity)]` code generation.
//!
//! For a struct `Person` this emits a `PersonFields` placeholder with one
//! getter per property, plus the `Entity`, `ODataProperty`, `PathAccessor`
//! and `IntoFieldPaths` impls that make it usable in selectors and filters.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, LitStr, Result};

use crate::attributes::{ContainerAttributes, FieldAttributes, is_identifier};
use crate::paths::{core as odata, std as rstd};

struct Property {
    getter: syn::Ident,
    wire_name: LitStr,
    ty: syn::Type,
}

pub(crate) fn generate_entity(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "ODataEntity cannot be derived for generic structs",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    struct_name,
                    "ODataEntity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_name,
                "ODataEntity can only be derived for structs",
            ));
        }
    };

    let container = ContainerAttributes::parse(&input.attrs)?;

    let mut properties = Vec::with_capacity(named.len());
    for field in named {
        let attrs = FieldAttributes::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let wire_name = match attrs.rename {
            Some(lit) => lit,
            None => {
                let name = container.rename_all.apply(&ident.unraw().to_string());
                if !is_identifier(&name) {
                    return Err(Error::new_spanned(
                        ident,
                        format!("`{name}` is not a valid OData property name"),
                    ));
                }
                LitStr::new(&name, ident.span())
            }
        };
        properties.push(Property {
            getter: ident.clone(),
            wire_name,
            ty: field.ty.clone(),
        });
    }

    let vis = &input.vis;
    let fields_name = format_ident!("{}Fields", struct_name);
    let entity_name = LitStr::new(&struct_name.to_string(), struct_name.span());

    let entity = odata::entity();
    let odata_property = odata::odata_property();
    let path_accessor = odata::path_accessor();
    let into_field_paths = odata::into_field_paths();
    let field_cursor = odata::field_cursor();
    let field_path = odata::field_path();
    let vec = rstd::vec();

    let getters = properties.iter().map(|p| {
        let Property {
            getter,
            wire_name,
            ty,
        } = p;
        let doc = format!("Path to `{}`.", wire_name.value());
        quote! {
            #[doc = #doc]
            #vis fn #getter(&self) -> <#ty as #odata_property>::Accessor {
                <<#ty as #odata_property>::Accessor as #path_accessor>::from_cursor(
                    self.cursor.child(#wire_name),
                )
            }
        }
    });
    let wire_names = properties.iter().map(|p| &p.wire_name);

    let fields_doc = format!("Typed field paths of [`{struct_name}`].");

    Ok(quote! {
        #[doc = #fields_doc]
        #[derive(Clone, Debug)]
        #vis struct #fields_name {
            cursor: #field_cursor,
        }

        impl #fields_name {
            #(#getters)*
        }

        impl #path_accessor for #fields_name {
            fn from_cursor(cursor: #field_cursor) -> Self {
                Self { cursor }
            }

            fn cursor(&self) -> &#field_cursor {
                &self.cursor
            }
        }

        impl #into_field_paths for #fields_name {
            fn push_field_paths(self, out: &mut #vec<#field_path>) {
                out.push(self.cursor.into_path());
            }
        }

        impl #odata_property for #struct_name {
            type Accessor = #fields_name;
        }

        impl #entity for #struct_name {
            type Fields = #fields_name;
            const ENTITY_NAME: &'static str = #entity_name;
            const PROPERTY_NAMES: &'static [&'static str] = &[#(#wire_names),*];
        }
    })
}
