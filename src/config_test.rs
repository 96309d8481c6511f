#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_timings() {
    let config = UiConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.flash_delay_ms, 5000);
    assert_eq!(config.flash_removal_ms, 400);
    assert_eq!(config.ripple_ms, 600);
    assert_eq!(config.lockout_ms, 10_000);
    assert_eq!(config.fade_delay_ms, 10);
    assert_eq!(config.fade_duration_ms, 300);
    assert_eq!(config.reveal_threshold, 0.1);
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config = UiConfig::from_json(r#"{ "lockout_ms": 2500 }"#).expect("valid config");
    assert_eq!(config.lockout_ms, 2500);
    assert_eq!(config.flash_delay_ms, 5000);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn unknown_field_is_rejected() {
    let err = UiConfig::from_json(r#"{ "lockout": 1 }"#).expect_err("unknown field");
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn threshold_is_clamped_into_unit_range() {
    let high = UiConfig::from_json(r#"{ "reveal_threshold": 3.5 }"#).expect("valid config");
    assert_eq!(high.reveal_threshold, 1.0);
    let low = UiConfig::from_json(r#"{ "reveal_threshold": -1 }"#).expect("valid config");
    assert_eq!(low.reveal_threshold, 0.0);
}

#[test]
fn blank_storage_key_falls_back() {
    let config = UiConfig::from_json(r#"{ "storage_key": "  " }"#).expect("valid config");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn non_positive_ripple_scale_falls_back() {
    let config = UiConfig::from_json(r#"{ "ripple_scale": 0 }"#).expect("valid config");
    assert_eq!(config.ripple_scale, 4.0);
}

#[test]
fn or_default_handles_missing_blank_and_malformed() {
    assert_eq!(UiConfig::from_json_or_default(None), UiConfig::default());
    assert_eq!(UiConfig::from_json_or_default(Some("   ")), UiConfig::default());
    assert_eq!(UiConfig::from_json_or_default(Some("{ not json")), UiConfig::default());
}

#[test]
fn or_default_uses_valid_input() {
    let config = UiConfig::from_json_or_default(Some(r#"{ "storage_key": "site-theme" }"#));
    assert_eq!(config.storage_key, "site-theme");
}
