//! # Empty-Value Pruning
//!
//! Recursive removal of empty values from a JSON tree before rendering.
//! The batch runner records every document, including fully valid ones
//! (as empty error lists), and every registry entry; pruning strips the
//! empty leftovers so the rendered report only mentions things that went
//! wrong.
//!
//! ## Invariant
//!
//! Emptiness is decided by value-kind dispatch, never by truthiness.
//! Numbers are preserved through an explicit branch — `0` and `0.0` are
//! meaningful values, not empty ones — and booleans (including `false`)
//! always survive. The function is pure, total, and idempotent.

use serde_json::{Map, Value};

/// Recursively remove empty values from a JSON tree.
///
/// From objects, drops any key whose value is `null`, an empty string,
/// or a container that reduces to empty after pruning. From arrays,
/// drops elements that are `null`, whitespace-blank strings, or
/// containers that reduce to empty. Scalars pass through unchanged.
pub fn prune(value: Value) -> Value {
    match value {
        Value::Object(entries) => {
            let mut kept = Map::new();
            for (key, entry) in entries {
                match entry {
                    Value::Null => {}
                    Value::String(s) if s.is_empty() => {}
                    // Numbers are kept unconditionally, zero included.
                    Value::Number(n) => {
                        kept.insert(key, Value::Number(n));
                    }
                    other => {
                        let pruned = prune(other);
                        if !is_empty_container(&pruned) {
                            kept.insert(key, pruned);
                        }
                    }
                }
            }
            Value::Object(kept)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(prune)
                .filter(|item| !is_blank_element(item))
                .collect(),
        ),
        scalar => scalar,
    }
}

/// True for `{}` and `[]`.
fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(entries) => entries.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Array-element filter: blank strings are dropped from sequences even
/// when they contain only whitespace, unlike object values where only
/// the exact empty string is removed.
fn is_blank_element(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        other => is_empty_container(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn removes_null_and_empty_string_from_objects() {
        let pruned = prune(json!({"a": null, "b": "", "c": "kept"}));
        assert_eq!(pruned, json!({"c": "kept"}));
    }

    #[test]
    fn removes_containers_that_reduce_to_empty() {
        let pruned = prune(json!({
            "empty_map": {},
            "empty_list": [],
            "nested": {"inner": {"deep": null}},
            "kept": {"inner": "x"}
        }));
        assert_eq!(pruned, json!({"kept": {"inner": "x"}}));
    }

    #[test]
    fn preserves_numeric_leaves_including_zero() {
        let pruned = prune(json!({"zero": 0, "zero_float": 0.0, "neg": -1}));
        assert_eq!(pruned, json!({"zero": 0, "zero_float": 0.0, "neg": -1}));
    }

    #[test]
    fn preserves_zero_nested_in_otherwise_empty_container() {
        let pruned = prune(json!({"outer": {"zero": 0, "gone": null}}));
        assert_eq!(pruned, json!({"outer": {"zero": 0}}));
    }

    #[test]
    fn preserves_false() {
        let pruned = prune(json!({"flag": false, "other": true}));
        assert_eq!(pruned, json!({"flag": false, "other": true}));
    }

    #[test]
    fn filters_blank_strings_and_nulls_from_arrays() {
        let pruned = prune(json!(["keep", "", "  ", null, 0, false]));
        assert_eq!(pruned, json!(["keep", 0, false]));
    }

    #[test]
    fn whitespace_string_survives_as_object_value() {
        // Object values are only dropped for the exact empty string.
        let pruned = prune(json!({"ws": " "}));
        assert_eq!(pruned, json!({"ws": " "}));
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(prune(json!(42)), json!(42));
        assert_eq!(prune(json!("text")), json!("text"));
        assert_eq!(prune(Value::Null), Value::Null);
    }

    #[test]
    fn empty_error_lists_disappear_from_result_maps() {
        // The shape the batch runner produces: documents with no errors
        // hold empty lists and must vanish entirely.
        let pruned = prune(json!({
            "json_errors": {
                "doc1": [],
                "doc2": ["schema does not exist"]
            }
        }));
        assert_eq!(
            pruned,
            json!({"json_errors": {"doc2": ["schema does not exist"]}})
        );
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[ -~]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                proptest::collection::btree_map("[a-z]{1,5}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prune_is_idempotent(value in arb_json()) {
            let once = prune(value);
            let twice = prune(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prune_never_introduces_nulls_in_containers(value in arb_json()) {
            fn has_contained_null(v: &Value) -> bool {
                match v {
                    Value::Object(m) => m.values().any(|v| v.is_null() || has_contained_null(v)),
                    Value::Array(a) => a.iter().any(|v| v.is_null() || has_contained_null(v)),
                    _ => false,
                }
            }
            prop_assert!(!has_contained_null(&prune(value)));
        }
    }
}
