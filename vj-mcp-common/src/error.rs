//! Error types for the common library.
//!
//! This module provides a unified error hierarchy using `thiserror` for
//! consistent error handling across the Video Jungle MCP server.
//!
//! # Error Categories
//!
//! - `ConfigError`: Missing or invalid configuration
//! - `Error::Api`: Video Jungle API errors (includes endpoint and status)
//! - `Error::UnsupportedScheme` / `Error::NotFound`: resource catalog failures
//! - `Error::UnknownPrompt` / `Error::UnknownTool`: catalog lookups by name
//! - `Error::MissingArguments` / `Error::MissingField`: tool-call validation

use thiserror::Error;

/// Unified error type for the common library.
///
/// This enum provides a single error type that can represent all error
/// conditions in the MCP adapter, enabling consistent error handling and
/// reporting. Every error is surfaced synchronously as a failed response for
/// the single request that produced it; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (missing env vars, invalid values)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API errors with endpoint and HTTP status context
    ///
    /// Includes the API endpoint that failed, HTTP status code, and error
    /// message for debugging and user feedback.
    #[error("API error for {endpoint} (HTTP {status_code}): {message}")]
    Api {
        /// The API endpoint that was called
        endpoint: String,
        /// HTTP status code returned by the API
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// A resource URI used a scheme other than the registered one
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// A resource or entity could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// A prompt was requested by a name the catalog does not carry
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// A tool was invoked by a name the catalog does not carry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool was invoked with no arguments at all
    #[error("Missing arguments")]
    MissingArguments,

    /// A tool argument failed validation against the declared schema
    #[error("Missing or invalid field: {0}")]
    MissingField(String),
}

impl Error {
    /// Create a new API error with endpoint, status code, and message.
    ///
    /// # Example
    ///
    /// ```
    /// use vj_mcp_common::error::Error;
    ///
    /// let err = Error::api("https://api.video-jungle.com/video-file", 500, "Internal error");
    /// assert!(err.to_string().contains("video-jungle.com"));
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn api(endpoint: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a new unsupported-scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Error::UnsupportedScheme(scheme.into())
    }

    /// Create a new not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }

    /// Create a new unknown-prompt error.
    pub fn unknown_prompt(name: impl Into<String>) -> Self {
        Error::UnknownPrompt(name.into())
    }

    /// Create a new unknown-tool error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Error::UnknownTool(name.into())
    }

    /// Create a new missing-field error.
    ///
    /// # Example
    ///
    /// ```
    /// use vj_mcp_common::error::Error;
    ///
    /// let err = Error::missing_field("query");
    /// assert!(err.to_string().contains("query"));
    /// ```
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Whether this error comes from caller input rather than the server side.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedScheme(_)
                | Error::UnknownPrompt(_)
                | Error::UnknownTool(_)
                | Error::MissingArguments
                | Error::MissingField(_)
        )
    }
}

/// Configuration errors.
///
/// These errors occur when loading or validating configuration from
/// environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new missing environment variable error.
    pub fn missing_env_var(name: impl Into<String>) -> Self {
        ConfigError::MissingEnvVar(name.into())
    }

    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}

/// Result type alias using the unified Error type.
pub type Result<T> = std::result::Result<T, Error>;
