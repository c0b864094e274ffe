mod common;

use common::{Child, Person, Toy};
use odata_query::prelude::*;

#[derive(ODataEntity)]
#[odata(rename_all = "PascalCase")]
struct Order {
    order_id: u64,
    r#type: String,
    #[odata(rename = "customerRef")]
    customer: String,
}

#[derive(ODataEntity)]
#[odata(rename_all = "SCREAMING_SNAKE_CASE")]
struct Legacy {
    row_id: i64,
}

#[test]
fn test_rename_all_camel_case() {
    assert_eq!(
        Person::PROPERTY_NAMES,
        &[
            "firstName",
            "lastName",
            "age",
            "email",
            "children",
            "pets",
            "mother",
            "father"
        ]
    );
    assert_eq!(Child::ENTITY_NAME, "Child");
}

#[test]
fn test_rename_and_skip() {
    assert_eq!(Toy::PROPERTY_NAMES, &["Name", "price", "rating"]);
    assert_eq!(Toy::fields().name().path().to_string(), "Name");
}

#[test]
fn test_raw_identifiers_and_explicit_renames() {
    assert_eq!(Order::PROPERTY_NAMES, &["OrderId", "Type", "customerRef"]);

    let o = Order::fields();
    assert_eq!(o.order_id().path().to_string(), "OrderId");
    assert_eq!(o.r#type().path().to_string(), "Type");
    assert_eq!(o.customer().path().to_string(), "customerRef");
}

#[test]
fn test_screaming_snake_case() -> odata_query::Result<()> {
    let query = ODataQuery::<Legacy>::for_v4("/legacy").order_by_descending(|l| l.row_id());
    assert_eq!(query.build_query()?, "/legacy?$orderby=ROW_ID%20desc");
    Ok(())
}

#[test]
fn test_navigation_getter_returns_nested_fields() {
    let p = Person::fields();
    assert_eq!(p.mother().mother().age().path().to_string(), "mother/mother/age");
    assert_eq!(p.children().path().to_string(), "children");
}
