//! Unit tests for the API response decoding.

use opengtin_cli::api::{parse_product, parse_search};

// ---------------------------------------------------------------------------
// Product endpoint
// ---------------------------------------------------------------------------

#[test]
fn found_status_yields_product() {
    let raw = r#"{"status": 1, "product": {"product_name": "Nutella", "brands": "Ferrero"}}"#;
    let (status, product) = parse_product(raw).unwrap();
    assert_eq!(status, 0);
    let product = product.unwrap();
    assert_eq!(product.product_name.as_deref(), Some("Nutella"));
    assert_eq!(product.brands.as_deref(), Some("Ferrero"));
}

#[test]
fn not_found_status_is_passed_through_without_product() {
    let raw = r#"{"status": 0, "status_verbose": "product not found"}"#;
    let (status, product) = parse_product(raw).unwrap();
    assert_eq!(status, 0);
    assert!(product.is_none());

    let raw = r#"{"status": 5, "product": {"product_name": "ignored"}}"#;
    let (status, product) = parse_product(raw).unwrap();
    assert_eq!(status, 5);
    assert!(product.is_none());
}

#[test]
fn missing_status_defaults_to_zero() {
    let (status, product) = parse_product("{}").unwrap();
    assert_eq!(status, 0);
    assert!(product.is_none());
}

#[test]
fn found_without_product_member_yields_empty_record() {
    let (status, product) = parse_product(r#"{"status": 1}"#).unwrap();
    assert_eq!(status, 0);
    let product = product.unwrap();
    assert!(product.product_name.is_none());
    assert!(product.brands.is_none());

    // An explicit null product member behaves the same way.
    let (_, product) = parse_product(r#"{"status": 1, "product": null}"#).unwrap();
    assert!(product.unwrap().product_name.is_none());
}

#[test]
fn unknown_fields_are_ignored() {
    let raw = r#"{"status": 1, "code": "123", "product": {"product_name": "X", "nutriments": {"fat": 1}}}"#;
    let (_, product) = parse_product(raw).unwrap();
    assert_eq!(product.unwrap().product_name.as_deref(), Some("X"));
}

#[test]
fn packaging_tags_accepts_string_and_array() {
    let raw = r#"{"status": 1, "product": {"packaging_tags": "en:glass-jar"}}"#;
    let (_, product) = parse_product(raw).unwrap();
    assert!(product.unwrap().packaging_tags.unwrap().is_string());

    let raw = r#"{"status": 1, "product": {"packaging_tags": ["en:glass-jar", "en:lid"]}}"#;
    let (_, product) = parse_product(raw).unwrap();
    assert!(product.unwrap().packaging_tags.unwrap().is_array());
}

#[test]
fn malformed_body_is_a_clean_error() {
    let err = parse_product("<html>service unavailable</html>").unwrap_err();
    assert!(format!("{err:#}").starts_with("Malformed API response"));
}

// ---------------------------------------------------------------------------
// Search endpoint
// ---------------------------------------------------------------------------

#[test]
fn search_page_decodes_products_and_count() {
    let raw = r#"{"count": 42, "page": 2, "page_size": 20,
                  "products": [{"code": "123", "product_name": "A"}, {"code": "456"}]}"#;
    let results = parse_search(raw).unwrap();
    assert_eq!(results.count, 42);
    assert_eq!(results.page, 2);
    assert_eq!(results.products.len(), 2);
    assert_eq!(results.products[0].product_name.as_deref(), Some("A"));
    assert!(results.products[1].product_name.is_none());
}

#[test]
fn search_envelope_defaults_when_fields_absent() {
    let results = parse_search("{}").unwrap();
    assert!(results.products.is_empty());
    assert_eq!(results.count, 0);
}

#[test]
fn malformed_search_body_is_a_clean_error() {
    let err = parse_search("not json").unwrap_err();
    assert!(format!("{err:#}").starts_with("Malformed API response"));
}
