#![allow(dead_code)]

use odata_query::prelude::*;

pub const ENDPOINT: &str = "/odata/users";

#[derive(ODataEntity)]
#[odata(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: Option<String>,
    pub children: Vec<Child>,
    pub pets: Vec<String>,
    pub mother: Option<Box<Person>>,
    pub father: Option<Box<Person>>,
}

#[derive(ODataEntity)]
#[odata(rename_all = "camelCase")]
pub struct Child {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub toys: Vec<Toy>,
}

#[derive(ODataEntity)]
pub struct Toy {
    #[odata(rename = "Name")]
    pub name: String,
    pub price: f64,
    pub rating: f32,
    #[odata(skip)]
    pub internal_code: u64,
}

pub fn users() -> ODataQuery<Person> {
    ODataQuery::for_v4(ENDPOINT)
}

/// Expected URL for a single `$filter` parameter, encoded the way
/// `encodeURIComponent` would.
pub fn filtered(raw: &str) -> String {
    format!("{ENDPOINT}?$filter={}", encode(raw))
}

pub fn encode(raw: &str) -> String {
    raw.replace('%', "%25")
        .replace(' ', "%20")
        .replace(',', "%2C")
        .replace('/', "%2F")
        .replace(':', "%3A")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace('#', "%23")
        .replace('?', "%3F")
}
