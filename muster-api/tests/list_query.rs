use muster_api::api::query::{ListQuery, SortOrder};

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_default_params() {
    let params = ListQuery::default().params();
    assert_eq!(param(&params, "page"), Some("1"));
    assert_eq!(param(&params, "limit"), Some("10"));
    assert_eq!(param(&params, "search"), None);
    assert_eq!(param(&params, "sortBy"), None);
    assert_eq!(param(&params, "sortOrder"), None);
}

#[test]
fn test_sort_travels_uppercase() {
    let params = ListQuery::new()
        .sort("institute_name", SortOrder::Desc)
        .params();
    assert_eq!(param(&params, "sortBy"), Some("institute_name"));
    assert_eq!(param(&params, "sortOrder"), Some("DESC"));

    let params = ListQuery::new().sort("email", SortOrder::Asc).params();
    assert_eq!(param(&params, "sortOrder"), Some("ASC"));
}

#[test]
fn test_empty_search_is_omitted() {
    let params = ListQuery::new().search("").params();
    assert_eq!(param(&params, "search"), None);

    let params = ListQuery::new().search("mumbai").params();
    assert_eq!(param(&params, "search"), Some("mumbai"));
}

#[test]
fn test_filters_are_appended() {
    let params = ListQuery::new().filter("instituteId", "7").params();
    assert_eq!(param(&params, "instituteId"), Some("7"));
}

#[test]
fn test_set_filter_replaces_and_removes() {
    let mut query = ListQuery::new().filter("instituteId", "7");

    query.set_filter("instituteId", Some("9".to_string()));
    assert_eq!(param(&query.params(), "instituteId"), Some("9"));
    assert_eq!(
        query.params().iter().filter(|(k, _)| k == "instituteId").count(),
        1
    );

    query.set_filter("instituteId", None);
    assert_eq!(param(&query.params(), "instituteId"), None);
}

#[test]
fn test_clear_sort_restores_default_order() {
    let mut query = ListQuery::new().sort("email", SortOrder::Desc);
    query.clear_sort();
    assert_eq!(param(&query.params(), "sortBy"), None);
    assert_eq!(param(&query.params(), "sortOrder"), None);
}

#[test]
fn test_sort_order_toggles() {
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    assert_eq!(SortOrder::from_ascending(true), SortOrder::Asc);
    assert_eq!(SortOrder::from_ascending(false), SortOrder::Desc);
}
