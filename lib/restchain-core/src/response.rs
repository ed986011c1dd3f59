//! HTTP response seen by processors.
//!
//! [`Response`] is the immutable input of every processor: status, content type,
//! body text, headers, and an optional transport-level failure.
//!
//! # Example
//!
//! ```
//! use restchain_core::Response;
//!
//! let response = Response::new(404)
//!     .with_content_type("application/json")
//!     .with_body("{}");
//! assert!(response.is_not_found());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

/// Shared transport-level failure attached to a [`Response`].
pub type ErrorCause = Arc<dyn std::error::Error + Send + Sync>;

/// HTTP response with status, content type, body, and headers.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: u16,
    content_type: String,
    body: String,
    headers: HashMap<String, String>,
    error_message: String,
    error_cause: Option<ErrorCause>,
}

impl Response {
    /// Creates an empty response with the given status code.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Set the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace all headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Attach a transport-level failure message.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Attach a transport-level failure cause.
    #[must_use]
    pub fn with_error_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.error_cause = Some(Arc::new(cause));
        self
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Content type, empty when the server sent none.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Transport-level failure message, empty if the exchange completed.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Transport-level failure cause.
    #[must_use]
    pub fn error_cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error_cause.as_deref()
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 3xx.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Status is 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// The transport reported a failure instead of a complete exchange.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        self.error_cause.is_some() || !self.error_message.is_empty()
    }
}
