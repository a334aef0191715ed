//! Integration tests for the `set_the_flash` matcher.

use flash_matchers::prelude::*;
use serde_json::json;

// =============================================================================
// Matching
// =============================================================================

#[test]
fn bare_matcher_requires_nonempty_flash() {
    let empty = MockController::builder().build();
    assert!(!set_the_flash().matches(&empty).unwrap());

    let set = MockController::builder().flash("notice", "Welcome").build();
    assert!(set_the_flash().matches(&set).unwrap());
}

#[test]
fn literal_expectation_compares_messages_exactly() {
    let controller = MockController::builder().flash("notice", "Welcome").build();

    assert!(set_the_flash().to("Welcome").matches(&controller).unwrap());
    assert!(!set_the_flash().to("Goodbye").matches(&controller).unwrap());
    assert!(!set_the_flash().to("welcome").matches(&controller).unwrap());
}

#[test]
fn literal_expectation_scans_all_entries() {
    let controller = MockController::builder()
        .flash("notice", "Saved")
        .flash("alert", "Disk almost full")
        .build();

    assert!(set_the_flash().to("Disk almost full").matches(&controller).unwrap());
}

#[test]
fn pattern_expectation_matches_any_message() {
    let controller = MockController::builder()
        .flash("notice", "User created successfully")
        .build();

    let mut matcher = set_the_flash().to_pattern("(?i)created").unwrap();
    assert!(matcher.matches(&controller).unwrap());

    let mut matcher = set_the_flash().to_pattern("deleted").unwrap();
    assert!(!matcher.matches(&controller).unwrap());
}

#[test]
fn precompiled_regex_expectation() {
    let controller = MockController::builder()
        .flash("notice", "Order 42 placed")
        .build();

    let regex = regex::Regex::new(r"Order \d+").unwrap();
    assert!(set_the_flash().to(regex).matches(&controller).unwrap());
}

#[test]
fn empty_flash_fails_even_with_matching_expectation() {
    let controller = MockController::builder().build();
    assert!(!set_the_flash().to("Welcome").matches(&controller).unwrap());
}

// =============================================================================
// flash.now semantics
// =============================================================================

#[test]
fn now_subtracts_live_keys_from_prior_snapshot() {
    let controller = MockController::builder()
        .flash_snapshot("notice", "A")
        .flash_snapshot("alert", "B")
        .flash("alert", "B")
        .build();

    assert!(set_the_flash().to("A").now().matches(&controller).unwrap());
    assert!(!set_the_flash().to("B").now().matches(&controller).unwrap());
}

#[test]
fn now_without_expectation_requires_leftover_snapshot() {
    let leftover = MockController::builder()
        .flash_snapshot("notice", "A")
        .build();
    assert!(set_the_flash().now().matches(&leftover).unwrap());

    let fully_persisted = MockController::builder()
        .flash_snapshot("notice", "A")
        .flash("notice", "A")
        .build();
    assert!(!set_the_flash().now().matches(&fully_persisted).unwrap());
}

#[test]
fn now_with_absent_snapshot_is_empty() {
    let controller = MockController::builder().flash("notice", "A").build();
    assert!(!set_the_flash().now().matches(&controller).unwrap());
}

// =============================================================================
// Descriptions and failure messages
// =============================================================================

#[test]
fn description_without_expected_value() {
    assert_eq!(set_the_flash().description(), "set the flash");
}

#[test]
fn description_with_literal_value() {
    assert_eq!(
        set_the_flash().to("X").description(),
        "set the flash to \"X\""
    );
}

#[test]
fn failure_message_when_no_flash_was_set() {
    let controller = MockController::builder().build();
    let mut matcher = set_the_flash().to("Welcome");
    assert!(!matcher.matches(&controller).unwrap());

    assert_eq!(
        matcher.failure_message(),
        "Expected the flash to be set to \"Welcome\", but no flash was set"
    );
}

#[test]
fn failure_message_dumps_observed_mapping() {
    let controller = MockController::builder().flash("notice", "Welcome").build();
    let mut matcher = set_the_flash().to("Goodbye");
    assert!(!matcher.matches(&controller).unwrap());

    assert_eq!(
        matcher.failure_message(),
        "Expected the flash to be set to \"Goodbye\", but was {\"notice\": \"Welcome\"}"
    );
}

#[test]
fn negative_failure_message_uses_did_not_expect() {
    let controller = MockController::builder().flash("notice", "Welcome").build();
    let mut matcher = set_the_flash();
    assert!(matcher.matches(&controller).unwrap());

    assert_eq!(
        matcher.negative_failure_message(),
        "Did not expect the flash to be set, but was {\"notice\": \"Welcome\"}"
    );
}

#[test]
fn messages_carry_now_suffix() {
    let controller = MockController::builder().build();
    let mut matcher = set_the_flash().to("A").now();
    assert!(!matcher.matches(&controller).unwrap());

    assert_eq!(
        matcher.failure_message(),
        "Expected the flash.now to be set to \"A\", but no flash was set"
    );
}

#[test]
fn pattern_expectation_renders_as_slashed_source() {
    let matcher = set_the_flash().to_pattern("(?i)logged in").unwrap().now();
    assert_eq!(
        matcher.description(),
        "set the flash to /(?i)logged in/"
    );
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
fn missing_flash_support_is_an_error_not_a_non_match() {
    let controller = MockController::builder().without_flash().build();
    let err = set_the_flash().matches(&controller).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn missing_session_support_is_an_error() {
    let controller = MockController::builder()
        .flash("notice", "Welcome")
        .without_session()
        .build();
    let err = set_the_flash().matches(&controller).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn malformed_snapshot_is_a_snapshot_error() {
    let controller = MockController::builder()
        .flash("notice", "Welcome")
        .session_value(FLASH_SESSION_KEY, json!("bogus"))
        .build();

    let err = set_the_flash().matches(&controller).unwrap_err();
    assert!(matches!(err, FlashError::Snapshot(_)));
}

#[test]
fn invalid_pattern_is_a_regex_error() {
    let err = set_the_flash().to_pattern("[unclosed").unwrap_err();
    assert!(matches!(err, FlashError::Regex(_)));
}
