//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = TaskdockConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn zero_intervals_are_allowed() {
    let mut config = TaskdockConfig::default();
    config.taskbar.guard_interval_ms = 0;
    config.taskbar.sample_freshness_ms = 0;
    config.taskbar.resync_interval_secs = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_guard_interval_too_large() {
    let mut config = TaskdockConfig::default();
    config.taskbar.guard_interval_ms = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("taskbar.guard_interval_ms"));
}

#[test]
fn catches_zero_button_size() {
    let mut config = TaskdockConfig::default();
    config.taskbar.button_height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("taskbar.button_height"));
}

#[test]
fn catches_empty_identity_prefix() {
    let mut config = TaskdockConfig::default();
    config.taskbar.identity_prefix = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("taskbar.identity_prefix"));
}

#[test]
fn catches_identity_prefix_with_spaces() {
    let mut config = TaskdockConfig::default();
    config.taskbar.identity_prefix = "Task Dock".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("whitespace"));
}

#[test]
fn catches_identity_prefix_too_long() {
    let mut config = TaskdockConfig::default();
    config.taskbar.identity_prefix = "x".repeat(100);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("taskbar.identity_prefix"));
}

#[test]
fn catches_zero_items_per_row() {
    let mut config = TaskdockConfig::default();
    config.popup.items_per_row = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("popup.items_per_row"));
}

#[test]
fn catches_narrow_popup() {
    let mut config = TaskdockConfig::default();
    config.popup.width = 20;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("popup.width"));
}

#[test]
fn catches_max_height_below_chrome() {
    let mut config = TaskdockConfig::default();
    config.popup.max_height = 60;
    config.popup.header_height = 50;
    config.popup.padding = 20;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("leaves no room"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TaskdockConfig::default();
    config.popup.items_per_row = 0;
    config.taskbar.button_width = 0;
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, taskdock_common::ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("popup.items_per_row"));
    assert!(msg.contains("taskbar.button_width"));
    assert!(msg.contains("; "));
}

#[test]
fn huge_header_and_padding_do_not_overflow() {
    let mut config = TaskdockConfig::default();
    config.popup.header_height = u32::MAX;
    config.popup.padding = 16;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("popup.header_height"));
    assert!(err.contains("leaves no room for content"));
}
