//! Tests for the configuration module.
//!
//! These tests verify configuration struct behavior and the endpoint
//! method without requiring unsafe environment variable manipulation.

use proptest::prelude::*;

use crate::config::{Config, DEFAULT_API_BASE};

/// Strategy for generating plausible API keys.
fn api_key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{16,48}"
}

/// Strategy for generating API paths with and without leading slashes.
fn path_strategy() -> impl Strategy<Value = String> {
    "/?[a-z][a-z0-9/-]{0,40}"
}

#[test]
fn config_struct_holds_values_correctly() {
    let config = Config {
        api_key: "sk-test-key".to_string(),
        api_base: "https://api.video-jungle.com".to_string(),
    };

    assert_eq!(config.api_key, "sk-test-key");
    assert_eq!(config.api_base, "https://api.video-jungle.com");
}

#[test]
fn config_new_accepts_any_string_like() {
    let config = Config::new("key", String::from("http://localhost:9999"));
    assert_eq!(config.api_key, "key");
    assert_eq!(config.api_base, "http://localhost:9999");
}

#[test]
fn endpoint_joins_base_and_path() {
    let config = Config::new("key", "https://api.video-jungle.com");
    assert_eq!(
        config.endpoint("video-file"),
        "https://api.video-jungle.com/video-file"
    );
}

#[test]
fn endpoint_normalizes_slashes() {
    let config = Config::new("key", "https://api.video-jungle.com/");
    assert_eq!(
        config.endpoint("/projects/p1"),
        "https://api.video-jungle.com/projects/p1"
    );
}

#[test]
fn default_api_base_is_production() {
    assert_eq!(DEFAULT_API_BASE, "https://api.video-jungle.com");
}

proptest! {
    /// For any base/path pair, `endpoint` produces exactly one slash at the
    /// join point.
    #[test]
    fn endpoint_has_single_join_slash(key in api_key_strategy(), path in path_strategy()) {
        let config = Config::new(key, "https://api.video-jungle.com");
        let url = config.endpoint(&path);
        prop_assert!(url.starts_with("https://api.video-jungle.com/"));
        prop_assert!(!url.contains("com//"));
    }
}
