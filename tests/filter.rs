mod common;

use common::{ENDPOINT, Person, encode, filtered, users};
use odata_query::Result;
use odata_query::error::ODataError;
use odata_query::prelude::*;

#[test]
fn test_simple_filter() -> Result<()> {
    let query = users().filter(|p, _| p.first_name().eq("john"));
    assert_eq!(query.build_query()?, filtered("firstName eq 'john'"));
    assert_eq!(
        query.build_query()?,
        "/odata/users?$filter=firstName%20eq%20'john'"
    );
    Ok(())
}

#[test]
fn test_compound_filter() -> Result<()> {
    let query = users().filter(|p, _| p.first_name().eq("john").and(p.age().ge(30)));
    assert_eq!(
        query.build_query()?,
        "/odata/users?$filter=firstName%20eq%20'john'%20and%20age%20ge%2030"
    );
    Ok(())
}

#[test]
fn test_or_inside_and_is_grouped() -> Result<()> {
    let query = users().filter(|p, _| {
        p.first_name()
            .eq("john")
            .and(p.age().ge(30).or(p.last_name().ne("Jones")))
    });
    assert_eq!(
        query.build_query()?,
        filtered("firstName eq 'john' and (age ge 30 or lastName ne 'Jones')")
    );
    Ok(())
}

#[test]
fn test_and_inside_or_is_grouped() -> Result<()> {
    let query = users().filter(|p, _| {
        p.first_name()
            .eq("john")
            .and(p.age().ge(30))
            .or(p.last_name().ne("Jones").and(p.email().eq(".com")))
    });
    assert_eq!(
        query.build_query()?,
        filtered("(firstName eq 'john' and age ge 30) or (lastName ne 'Jones' and email eq '.com')")
    );
    Ok(())
}

#[test]
fn test_string_functions() -> Result<()> {
    let contains = users().filter(|p, _| p.first_name().contains("jac"));
    assert_eq!(contains.build_query()?, filtered("contains(firstName,'jac')"));

    let starts = users().filter(|p, _| p.first_name().starts_with("jac"));
    assert_eq!(starts.build_query()?, filtered("startsWith(firstName,'jac')"));

    let ends = users().filter(|p, _| p.first_name().ends_with("jac"));
    assert_eq!(ends.build_query()?, filtered("endsWith(firstName,'jac')"));
    Ok(())
}

#[test]
fn test_comparison_operators() -> Result<()> {
    let query = users().filter(|p, ops| ops.and(p.first_name().eq("jac"), p.age().ne(50)));
    assert_eq!(query.build_query()?, filtered("firstName eq 'jac' and age ne 50"));

    let query = users().filter(|p, ops| ops.and(p.first_name().gt("jac"), p.age().ge(50)));
    assert_eq!(query.build_query()?, filtered("firstName gt 'jac' and age ge 50"));

    let query = users().filter(|p, ops| ops.and(p.first_name().lt("jac"), p.age().le(50)));
    assert_eq!(query.build_query()?, filtered("firstName lt 'jac' and age le 50"));
    Ok(())
}

#[test]
fn test_null_comparisons() -> Result<()> {
    let null = users().filter(|p, _| p.first_name().eq(Null));
    let none = users().filter(|p, _| p.first_name().eq(None::<&str>));
    assert_eq!(null.build_query()?, filtered("firstName eq null"));
    assert_eq!(none.build_query()?, null.build_query()?);

    let present = users().filter(|p, _| p.email().is_not_null());
    assert_eq!(present.build_query()?, filtered("email ne null"));
    Ok(())
}

#[test]
fn test_not() -> Result<()> {
    let query = users().filter(|p, ops| ops.not(p.first_name().eq("John")));
    assert_eq!(query.build_query()?, filtered("not firstName eq 'John'"));

    let either = users().filter(|p, _| !(p.age().lt(18) | p.age().gt(65)));
    assert_eq!(either.build_query()?, filtered("not age lt 18 or age gt 65"));

    let both = users().filter(|p, ops| ops.not(p.age().gt(1).and(p.age().lt(9))));
    assert_eq!(
        both.build_query()?,
        "/odata/users?$filter=not%20age%20gt%201%20and%20age%20lt%209"
    );
    Ok(())
}

#[test]
fn test_navigation_properties() -> Result<()> {
    let query = users().filter(|p, ops| ops.not(p.mother().first_name().eq("Jane")));
    assert_eq!(query.build_query()?, filtered("not mother/firstName eq 'Jane'"));

    let deep = users().filter(|p, _| p.mother().father().last_name().eq("Ng"));
    assert_eq!(deep.build_query()?, filtered("mother/father/lastName eq 'Ng'"));
    Ok(())
}

#[test]
fn test_in_array() -> Result<()> {
    let query = users().filter(|p, _| p.last_name().in_array(["Jones", "Smith", "Ng"]));
    assert_eq!(
        query.build_query()?,
        filtered("lastName in ('Jones','Smith','Ng')")
    );

    let ages = users().filter(|p, _| p.age().in_array(vec![1, 2, 3]));
    assert_eq!(ages.build_query()?, filtered("age in (1,2,3)"));
    Ok(())
}

#[test]
fn test_empty_in_array_fails_to_render() {
    let query = users().filter(|p, _| p.last_name().in_array(Vec::<&str>::new()));
    let err = query.build_query().unwrap_err();
    assert!(matches!(err, ODataError::EmptyMembership { ref path } if path.to_string() == "lastName"));
}

#[test]
fn test_non_finite_numbers_fail_to_render() {
    let query = users().filter(|p, _| {
        p.children()
            .any(|c| c.toys().any(|t| t.price().lt(f64::INFINITY)))
    });
    assert!(matches!(
        query.build_query(),
        Err(ODataError::NonFiniteNumber { .. })
    ));
}

#[test]
fn test_single_precision_keeps_written_value() -> Result<()> {
    let query = users().filter(|p, _| {
        p.children()
            .any(|c| c.toys().any(|t| t.rating().eq(0.1f32)))
    });
    assert_eq!(
        query.build_query()?,
        filtered("children/any(x0: x0/toys/any(x1: x1/rating eq 0.1))")
    );

    let query = users().filter(|p, _| {
        p.children()
            .all(|c| c.toys().all(|t| t.rating().ge(4.7f32).and(t.price().lt(19.99))))
    });
    assert_eq!(
        query.build_query()?,
        filtered("children/all(x0: x0/toys/all(x1: x1/rating ge 4.7 and x1/price lt 19.99))")
    );
    Ok(())
}

#[test]
fn test_filter_with_other_options() -> Result<()> {
    let query = users()
        .order_by(|p| p.age())
        .filter(|p, _| p.last_name().in_array(["Jones", "Smith", "Ng"]))
        .select(|p| (p.first_name(), p.last_name()));
    assert_eq!(
        query.build_query()?,
        format!(
            "{ENDPOINT}?$filter={}&$orderby=age&$select={}",
            encode("lastName in ('Jones','Smith','Ng')"),
            encode("firstName,lastName")
        )
    );
    Ok(())
}

#[test]
fn test_second_filter_replaces_first() -> Result<()> {
    let query = users()
        .filter(|p, _| p.age().gt(1))
        .filter(|p, _| p.age().lt(9));
    assert_eq!(query.build_query()?, filtered("age lt 9"));
    Ok(())
}

#[test]
fn test_quotes_are_doubled() -> Result<()> {
    let query = users().filter(|p, _| p.last_name().eq("O'Brien"));
    assert_eq!(query.build_query()?, filtered("lastName eq 'O''Brien'"));
    Ok(())
}

#[test]
fn test_reserved_characters_are_encoded() -> Result<()> {
    let query = users().filter(|p, _| p.email().eq("a&b=c+d#?"));
    assert_eq!(
        query.build_query()?,
        "/odata/users?$filter=email%20eq%20'a%26b%3Dc%2Bd%23%3F'"
    );
    Ok(())
}

#[test]
fn test_free_combinators() -> Result<()> {
    let conditions = ["Jones", "Smith"].map(|name| {
        let p = Person::fields();
        p.last_name().eq(name)
    });
    let Some(either) = or_all(conditions) else {
        panic!("two conditions must combine");
    };
    let query = users().filter_expr(either);
    assert_eq!(
        query.build_query()?,
        filtered("lastName eq 'Jones' or lastName eq 'Smith'")
    );

    assert!(and_all(Vec::new()).is_none());
    Ok(())
}

#[test]
fn test_bit_operators_match_methods() -> Result<()> {
    let methods = users().filter(|p, _| p.age().gt(1).and(p.age().lt(9)).or(p.age().eq(20)));
    let operators = users().filter(|p, _| (p.age().gt(1) & p.age().lt(9)) | p.age().eq(20));
    assert_eq!(methods.build_query()?, operators.build_query()?);
    Ok(())
}
