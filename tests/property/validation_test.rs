//! Property-based tests for input validation.
//!
//! These tests verify the alias pattern over its whole domain and the
//! normalizer's scheme rule for arbitrary schemeless hosts.

use linkshort::services::validation::{normalize_url, suggest_alias, validate_alias};
use proptest::prelude::*;

/// Strategy for aliases inside the accepted pattern.
fn arb_valid_alias() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{5,30}"
}

/// Strategy for schemeless host names that still parse as URLs.
fn arb_schemeless_host() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(host, tld, path)| format!("{}{}{}", host, tld, path.unwrap_or_default()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // *For any* string matching [A-Za-z0-9_]{5,30}, validation SHALL succeed.
    #[test]
    fn alias_inside_pattern_is_accepted(alias in arb_valid_alias()) {
        prop_assert!(validate_alias(&alias).is_ok());
    }

    // *For any* otherwise-valid alias that is too short, validation SHALL fail.
    #[test]
    fn alias_below_min_length_is_rejected(alias in "[A-Za-z0-9_]{1,4}") {
        prop_assert!(validate_alias(&alias).is_err());
    }

    // *For any* otherwise-valid alias that is too long, validation SHALL fail.
    #[test]
    fn alias_above_max_length_is_rejected(alias in "[A-Za-z0-9_]{31,40}") {
        prop_assert!(validate_alias(&alias).is_err());
    }

    // *For any* alias containing a character outside the charset, validation
    // SHALL fail regardless of length.
    #[test]
    fn alias_with_foreign_char_is_rejected(
        prefix in "[A-Za-z0-9_]{2,10}",
        bad in "[^A-Za-z0-9_]",
        suffix in "[A-Za-z0-9_]{2,10}",
    ) {
        let alias = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(validate_alias(&alias).is_err(), "accepted: {:?}", alias);
    }

    // *For any* schemeless input, the normalizer SHALL prepend https:// and
    // produce a parseable absolute URL.
    #[test]
    fn schemeless_input_gets_https(input in arb_schemeless_host()) {
        let normalized = normalize_url(&input).expect("host should normalize");
        prop_assert!(normalized.starts_with("https://"));
        prop_assert!(url::Url::parse(&normalized).is_ok());
    }

    // Normalizing an already-normalized URL SHALL be a no-op.
    #[test]
    fn normalization_is_idempotent(input in arb_schemeless_host()) {
        let once = normalize_url(&input).unwrap();
        let twice = normalize_url(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}

/// Suggested aliases always pass the validator.
#[test]
fn suggested_aliases_always_validate() {
    for _ in 0..100 {
        let alias = suggest_alias();
        assert!(validate_alias(&alias).is_ok(), "bad suggestion: {}", alias);
    }
}
