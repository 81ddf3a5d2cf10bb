use catalog_lens::ProductFilter;

fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_default_filter_sends_nothing() {
    let filter = ProductFilter::default();
    assert!(filter.to_query().is_empty());
}

#[test]
fn test_set_fields_are_serialized() {
    let filter = ProductFilter {
        query: Some("phone".to_string()),
        min_price: Some(100.0),
        max_price: Some(2500.5),
        min_rating: Some(4.0),
        min_reviews: Some(50),
        ordering: Some("-rating".to_string()),
        page: Some(2),
        page_size: Some(300),
        ..Default::default()
    };
    let params = filter.to_query();

    assert_eq!(param(&params, "query"), Some("phone"));
    assert_eq!(param(&params, "min_price"), Some("100"));
    assert_eq!(param(&params, "max_price"), Some("2500.5"));
    assert_eq!(param(&params, "min_rating"), Some("4"));
    assert_eq!(param(&params, "min_reviews"), Some("50"));
    assert_eq!(param(&params, "ordering"), Some("-rating"));
    assert_eq!(param(&params, "page"), Some("2"));
    assert_eq!(param(&params, "page_size"), Some("300"));
    assert_eq!(param(&params, "min_sale_price"), None);
    assert_eq!(param(&params, "max_sale_price"), None);
}

#[test]
fn test_empty_strings_are_treated_as_unset() {
    let filter = ProductFilter {
        query: Some(String::new()),
        ordering: Some(String::new()),
        ..Default::default()
    };
    assert!(filter.to_query().is_empty());
}

#[test]
fn test_whole_floats_serialize_without_trailing_zeroes() {
    let filter = ProductFilter {
        min_sale_price: Some(100.0),
        max_sale_price: Some(99.9),
        ..Default::default()
    };
    let params = filter.to_query();
    assert_eq!(param(&params, "min_sale_price"), Some("100"));
    assert_eq!(param(&params, "max_sale_price"), Some("99.9"));
}
