//! Error types for restchain.

use derive_more::{Display, Error, From};

use crate::{RestException, RestHttpError};

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for restchain operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// No node of a processor structure can process the response.
    ///
    /// The chain was built incorrectly; this must be fixed by reconfiguring
    /// the processors, not by retrying.
    #[display("there is no processor that can process this response (status {status})")]
    #[from(skip)]
    NoProcessor {
        /// HTTP status code of the unhandled response.
        status: u16,
    },

    /// A node was asked to process a response it cannot process.
    #[display("contract violation: {_0}")]
    #[from(skip)]
    ContractViolation(#[error(not(source))] String),

    /// The processor tree was not fully assembled before resolution.
    #[display("configuration error: {_0}")]
    #[from(skip)]
    Configuration(#[error(not(source))] String),

    /// The strict content deserializer could not decode the body.
    #[display("Error deserializing '{body}' into type {type_name}.")]
    #[from(skip)]
    Serialization {
        /// Raw response body.
        body: String,
        /// Name of the target type.
        type_name: &'static str,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Business error raised by an exception processor.
    #[display("REST error: {_0}")]
    #[from]
    Rest(RestException),

    /// Custom business exception built by a user-supplied provider.
    #[display("business error: {_0}")]
    #[from(skip)]
    Business(#[error(not(source))] Box<dyn std::error::Error + Send + Sync>),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a contract violation error.
    #[must_use]
    pub fn contract_violation(message: impl Into<String>) -> Self {
        Self::ContractViolation(message.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a strict deserialization error for the target type `T`.
    #[must_use]
    pub fn serialization<T: ?Sized>(body: impl Into<String>) -> Self {
        Self::Serialization {
            body: body.into(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap a custom business exception.
    #[must_use]
    pub fn business(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Business(Box::new(error))
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if no processor matched the response.
    #[must_use]
    pub const fn is_no_processor(&self) -> bool {
        matches!(self, Self::NoProcessor { .. })
    }

    /// Returns `true` if this is a strict deserialization failure.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// The REST error carried by a raised [`RestException`], if any.
    #[must_use]
    pub const fn rest_error(&self) -> Option<&RestHttpError> {
        match self {
            Self::Rest(exception) => Some(exception.http_error()),
            _ => None,
        }
    }

    /// Downcast a custom business exception.
    #[must_use]
    pub fn business_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Business(error) => error.downcast_ref(),
            _ => None,
        }
    }
}
