//! Merge semantics tests
//!
//! Covers the contract of `merge_documents` over in-memory documents:
//! idempotence, reserved-key exclusion, insertion, override, wholesale
//! replacement, and no-op behavior. On-disk behavior is covered by
//! roundtrip.rs.

use toml::value::Table;
use toml::{toml, Value};
use toml_overlay::{merge_documents, SCHEMA_KEY};

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_merge_is_idempotent() {
    let base = toml! {
        scan_timeout = 30

        [character]
        success_symbol = ">"
        error_symbol = "x"
    };
    let overlay = toml! {
        scan_timeout = 50

        [character]
        success_symbol = "❯"

        [rust]
        symbol = "🦀"
    };

    let first = merge_documents(&base, &overlay);
    let second = merge_documents(&first.merged, &overlay);

    assert_eq!(second.merged, first.merged);
    assert!(
        second.changes.is_empty(),
        "second merge must record no changes"
    );
}

// =============================================================================
// Reserved key
// =============================================================================

#[test]
fn test_schema_key_never_reaches_output() {
    let base = Table::new();
    let overlay: Table = toml::from_str(
        r#"
        "$schema" = "https://starship.rs/config-schema.json"

        [aws]
        symbol = "a"
        "#,
    )
    .unwrap();

    let outcome = merge_documents(&base, &overlay);

    assert!(!outcome.merged.contains_key(SCHEMA_KEY));
    assert!(outcome.merged.contains_key("aws"));
    // skipped entirely: not even reported
    assert_eq!(outcome.changes.len(), 1);
}

#[test]
fn test_schema_key_in_base_is_left_alone() {
    // Only the overlay's reserved key is special; an existing base key
    // named "$schema" is just a section the overlay never mentioned.
    let base: Table = toml::from_str(r#""$schema" = "base-schema""#).unwrap();
    let overlay = Table::new();

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(
        outcome.merged[SCHEMA_KEY],
        Value::String("base-schema".to_string())
    );
}

// =============================================================================
// Insertion and override
// =============================================================================

#[test]
fn test_new_section_inserted_into_empty_base() {
    let base = Table::new();
    let overlay = toml! {
        [a]
        x = 1
    };

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(outcome.merged, overlay);
}

#[test]
fn test_key_override_preserves_unmentioned_keys() {
    let base = toml! {
        [a]
        x = 1
        y = 2
    };
    let overlay = toml! {
        [a]
        x = 9
    };

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(outcome.merged["a"]["x"], Value::Integer(9));
    assert_eq!(outcome.merged["a"]["y"], Value::Integer(2));
}

#[test]
fn test_overlay_wins_not_commutative() {
    let base = toml! {
        [a]
        x = 1
    };
    let overlay = toml! {
        [a]
        x = 2
    };

    let forward = merge_documents(&base, &overlay);
    let reverse = merge_documents(&overlay, &base);

    assert_eq!(forward.merged["a"]["x"], Value::Integer(2));
    assert_eq!(reverse.merged["a"]["x"], Value::Integer(1));
}

// =============================================================================
// Non-table section bodies
// =============================================================================

#[test]
fn test_array_section_replaced_wholesale() {
    let base = toml! {
        a = [1, 2, 3]
    };
    let overlay = toml! {
        a = [9]
    };

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(
        outcome.merged["a"],
        Value::Array(vec![Value::Integer(9)])
    );
}

#[test]
fn test_table_replaces_scalar_section() {
    let base = toml! {
        a = 1
    };
    let overlay = toml! {
        [a]
        x = 1
    };

    let outcome = merge_documents(&base, &overlay);

    assert!(outcome.merged["a"].is_table());
    assert_eq!(outcome.merged["a"]["x"], Value::Integer(1));
}

// =============================================================================
// No-op and disjoint sections
// =============================================================================

#[test]
fn test_equal_values_record_no_change() {
    let base = toml! {
        [a]
        x = 1
    };
    let overlay = base.clone();

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(outcome.merged, base);
    assert!(outcome.changes.is_empty());
}

#[test]
fn test_disjoint_base_sections_untouched() {
    let base = toml! {
        [keep_me]
        flag = true
        [keep_me.deep]
        nested = [1, 2, 3]
    };
    let overlay = toml! {
        [other]
        x = 1
    };

    let outcome = merge_documents(&base, &overlay);

    assert_eq!(outcome.merged["keep_me"], base["keep_me"]);
}

#[test]
fn test_section_order_preserved() {
    let base = toml! {
        [zebra]
        x = 1
        [apple]
        y = 2
    };
    let overlay = toml! {
        [mango]
        z = 3
    };

    let outcome = merge_documents(&base, &overlay);

    let order: Vec<&str> = outcome.merged.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["zebra", "apple", "mango"]);
}
