//! Unit tests for the unified error hierarchy.

use crate::error::{ConfigError, Error};

#[test]
fn test_api_error_includes_endpoint_and_status() {
    let err = Error::api("https://api.video-jungle.com/video-file", 500, "Internal error");
    let msg = err.to_string();
    assert!(msg.contains("video-jungle.com"), "Should contain endpoint");
    assert!(msg.contains("500"), "Should contain status code");
    assert!(msg.contains("Internal error"), "Should contain message");
}

#[test]
fn test_config_error_includes_var_name() {
    let err = ConfigError::missing_env_var("VJ_API_KEY");
    let msg = err.to_string();
    assert!(msg.contains("VJ_API_KEY"), "Should contain variable name");
}

#[test]
fn test_error_from_config_error() {
    let config_err = ConfigError::missing_env_var("TEST_VAR");
    let err: Error = config_err.into();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_unsupported_scheme_display() {
    let err = Error::unsupported_scheme("http");
    let msg = err.to_string();
    assert!(msg.contains("Unsupported URI scheme"));
    assert!(msg.contains("http"));
}

#[test]
fn test_not_found_display() {
    let err = Error::not_found("video abc123");
    assert!(err.to_string().contains("abc123"));
}

#[test]
fn test_unknown_prompt_display() {
    let err = Error::unknown_prompt("no-such-prompt");
    let msg = err.to_string();
    assert!(msg.contains("Unknown prompt"));
    assert!(msg.contains("no-such-prompt"));
}

#[test]
fn test_unknown_tool_display() {
    let err = Error::unknown_tool("no-such-tool");
    let msg = err.to_string();
    assert!(msg.contains("Unknown tool"));
    assert!(msg.contains("no-such-tool"));
}

#[test]
fn test_missing_arguments_display() {
    let err = Error::MissingArguments;
    assert!(err.to_string().contains("Missing arguments"));
}

#[test]
fn test_missing_field_display() {
    let err = Error::missing_field("query");
    assert!(err.to_string().contains("query"));
}

#[test]
fn test_caller_fault_classification() {
    assert!(Error::unknown_tool("x").is_caller_fault());
    assert!(Error::MissingArguments.is_caller_fault());
    assert!(Error::missing_field("name").is_caller_fault());
    assert!(Error::unsupported_scheme("http").is_caller_fault());
    assert!(Error::unknown_prompt("x").is_caller_fault());
    assert!(!Error::api("endpoint", 502, "bad gateway").is_caller_fault());
    assert!(!Error::not_found("video").is_caller_fault());
}

#[test]
fn test_invalid_value_display() {
    let err = ConfigError::invalid_value("VJ_API_URL", "not a URL");
    let msg = err.to_string();
    assert!(msg.contains("VJ_API_URL"));
    assert!(msg.contains("not a URL"));
}
