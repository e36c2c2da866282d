use frontdesk_model::{FieldPath, FieldSource};
use proptest::prelude::*;
use serde_json::json;

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn splits_on_dots() {
    let path = FieldPath::new("customers.address.city");
    assert_eq!(path.segments(), ["customers", "address", "city"]);
    assert_eq!(path.as_str(), "customers.address.city");
    assert_eq!(path.to_string(), "customers.address.city");
}

#[test]
fn empty_path_is_degenerate() {
    assert!(FieldPath::new("").is_degenerate());
    assert!(FieldPath::new("a..b").is_degenerate());
    assert!(FieldPath::new(".a").is_degenerate());
    assert!(!FieldPath::new("a.b").is_degenerate());
}

#[test]
fn from_str_and_string_agree() {
    assert_eq!(FieldPath::from("a.b"), FieldPath::from("a.b".to_string()));
}

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn resolves_top_level_key() {
    let v = json!({"name": "Ann"});
    assert_eq!(FieldPath::new("name").resolve(&v), Some(&json!("Ann")));
}

#[test]
fn resolves_nested_key() {
    let v = json!({"customers": {"name": "Bob"}});
    assert_eq!(FieldPath::new("customers.name").resolve(&v), Some(&json!("Bob")));
}

#[test]
fn resolves_array_index() {
    let v = json!({"items": [{"sku": "A"}, {"sku": "B"}]});
    assert_eq!(FieldPath::new("items.1.sku").resolve(&v), Some(&json!("B")));
}

#[test]
fn missing_segments_resolve_to_none() {
    let v = json!({"customers": {"name": "Bob"}});
    assert_eq!(FieldPath::new("customers.phone").resolve(&v), None);
    assert_eq!(FieldPath::new("vendors.name").resolve(&v), None);
}

#[test]
fn descending_into_scalar_is_none() {
    let v = json!({"age": 30});
    assert_eq!(FieldPath::new("age.years").resolve(&v), None);
}

#[test]
fn bad_array_index_is_none() {
    let v = json!({"items": [1, 2]});
    assert_eq!(FieldPath::new("items.9").resolve(&v), None);
    assert_eq!(FieldPath::new("items.first").resolve(&v), None);
}

#[test]
fn explicit_null_is_returned_as_null() {
    let v = json!({"discharged": null});
    assert_eq!(FieldPath::new("discharged").resolve(&v), Some(&json!(null)));
}

#[test]
fn value_is_a_field_source() {
    let v = json!({"a": {"b": true}});
    assert_eq!(v.field(&FieldPath::new("a.b")), Some(&json!(true)));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let path = FieldPath::new("customers.name");
    assert_eq!(serde_json::to_string(&path).unwrap(), "\"customers.name\"");
    let parsed: FieldPath = serde_json::from_str("\"customers.name\"").unwrap();
    assert_eq!(parsed, path);
}

proptest! {
    /// Resolution never panics, whatever the path text.
    #[test]
    fn resolve_is_total(raw in "[a-z0-9.]{0,16}") {
        let v = json!({"a": {"b": [1, {"c": "x"}]}, "0": "zero"});
        let _ = FieldPath::new(raw).resolve(&v);
    }
}
