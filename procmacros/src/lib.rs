#![recursion_limit = "128"]

extern crate proc_macro;

mod attributes;
mod entity;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives typed field paths for an OData entity.
///
/// Generates a `<Name>Fields` placeholder whose getters return:
/// - `Field<T>` for primitive properties (comparisons, string functions);
/// - `Collection<T>` for `Vec<T>` properties (`any`, `all`);
/// - the nested entity's `Fields` for navigation properties.
///
/// # Attributes
///
/// - `#[odata(rename_all = "camelCase")]` on the struct: casing for every
///   property (`camelCase`, `PascalCase`, `snake_case`, `SCREAMING_SNAKE_CASE`);
/// - `#[odata(rename = "Name")]` on a field: explicit wire name;
/// - `#[odata(skip)]` on a field: no getter is generated.
///
/// # Example
///
/// ```ignore
/// #[derive(ODataEntity)]
/// #[odata(rename_all = "camelCase")]
/// struct Person {
///     first_name: String,
///     age: i32,
///     children: Vec<Child>,
///     mother: Option<Box<Person>>,
/// }
///
/// let query = ODataQuery::<Person>::for_v4("/odata/users")
///     .filter(|p, _| p.mother().first_name().eq("Jane"));
/// ```
#[proc_macro_derive(ODataEntity, attributes(odata))]
pub fn derive_odata_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match entity::generate_entity(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
