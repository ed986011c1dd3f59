//! REST error entities.
//!
//! - [`RestHttpError`] is the error document a server puts in the body.
//! - [`RestBusinessError`] is what application code works with.
//! - [`RestException`] carries a [`RestHttpError`] as a Rust error.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Error Type
// ============================================================================

/// Category of a business error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ErrorType {
    /// The client sent invalid data.
    #[display("ValidationError")]
    ValidationError,
    /// The called service failed.
    #[display("InternalError")]
    InternalError,
}

impl ErrorType {
    /// HTTP status code for this category.
    #[must_use]
    pub const fn to_http_status(self) -> u16 {
        match self {
            Self::ValidationError => 400,
            Self::InternalError => 500,
        }
    }

    /// Category for an HTTP status code.
    ///
    /// Any 4xx is a validation error; everything else is internal.
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        if status >= 400 && status < 500 {
            Self::ValidationError
        } else {
            Self::InternalError
        }
    }
}

// ============================================================================
// Wire error
// ============================================================================

/// Error document returned in the body of a failed REST call.
///
/// Encoded as `{"StatusCode": 400, "Message": "...", "Details": "..."}`.
/// Every member is required, `Message` and `Details` may be `null`. Unknown
/// fields are rejected so that arbitrary JSON is not mistaken for an error
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RestHttpError {
    /// HTTP status code.
    pub status_code: u16,
    /// Short message.
    #[serde(deserialize_with = "required_nullable")]
    pub message: Option<String>,
    /// Details.
    #[serde(deserialize_with = "required_nullable")]
    pub details: Option<String>,
}

/// Decode a member that must be present but may be `null`.
///
/// A plain `Option` member defaults to `None` when missing.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

impl RestHttpError {
    /// Creates an error document.
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status_code,
            message: Some(message.into()),
            details: Some(details.into()),
        }
    }

    /// Convert into a business error; missing texts become empty.
    #[must_use]
    pub fn to_business_error(&self) -> RestBusinessError {
        RestBusinessError {
            error_type: ErrorType::from_http_status(self.status_code),
            message: self.message.clone().unwrap_or_default(),
            details: self.details.clone().unwrap_or_default(),
        }
    }

    /// Wrap into a [`RestException`].
    #[must_use]
    pub fn to_exception(&self) -> RestException {
        RestException(self.clone())
    }
}

// ============================================================================
// Business error
// ============================================================================

/// Business-level view of a REST error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestBusinessError {
    /// Category.
    pub error_type: ErrorType,
    /// Short message.
    pub message: String,
    /// Details.
    pub details: String,
}

impl RestBusinessError {
    /// Creates a business error.
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Creates a business error whose details repeat the message.
    #[must_use]
    pub fn with_message(error_type: ErrorType, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error_type,
            details: message.clone(),
            message,
        }
    }

    /// Creates a business error describing `error`.
    ///
    /// The message is the error's `Display`, the details its `Debug`.
    #[must_use]
    pub fn from_error(error_type: ErrorType, error: &dyn std::error::Error) -> Self {
        Self {
            error_type,
            message: error.to_string(),
            details: format!("{error:?}"),
        }
    }

    /// Convert into the wire error document.
    #[must_use]
    pub fn to_http_error(&self) -> RestHttpError {
        RestHttpError {
            status_code: self.error_type.to_http_status(),
            message: Some(self.message.clone()),
            details: Some(self.details.clone()),
        }
    }
}

impl std::fmt::Display for RestBusinessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ ErrorType: {}, Message: \"{}\", Details: \"{}\" }}",
            self.error_type, self.message, self.details
        )
    }
}

// ============================================================================
// Exception
// ============================================================================

/// Error raised when a REST call ends with a business error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestException(RestHttpError);

impl RestException {
    /// The error document.
    #[must_use]
    pub const fn http_error(&self) -> &RestHttpError {
        &self.0
    }

    /// The error as a business error.
    #[must_use]
    pub fn business_error(&self) -> RestBusinessError {
        self.0.to_business_error()
    }

    /// Consume into the error document.
    #[must_use]
    pub fn into_http_error(self) -> RestHttpError {
        self.0
    }
}

impl std::fmt::Display for RestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.message.as_deref().unwrap_or_default())
    }
}

impl std::error::Error for RestException {}

impl From<RestHttpError> for RestException {
    fn from(error: RestHttpError) -> Self {
        Self(error)
    }
}

impl From<RestBusinessError> for RestException {
    fn from(error: RestBusinessError) -> Self {
        Self(error.to_http_error())
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn error_type_status_mapping() {
        check!(ErrorType::ValidationError.to_http_status() == 400);
        check!(ErrorType::InternalError.to_http_status() == 500);

        check!(ErrorType::from_http_status(400) == ErrorType::ValidationError);
        check!(ErrorType::from_http_status(500) == ErrorType::InternalError);
        check!(ErrorType::from_http_status(404) == ErrorType::ValidationError);
        check!(ErrorType::from_http_status(499) == ErrorType::ValidationError);
        check!(ErrorType::from_http_status(999) == ErrorType::InternalError);
        check!(ErrorType::from_http_status(0) == ErrorType::InternalError);
        check!(ErrorType::from_http_status(302) == ErrorType::InternalError);
    }

    #[test]
    fn error_type_round_trips() {
        for error_type in [ErrorType::ValidationError, ErrorType::InternalError] {
            check!(ErrorType::from_http_status(error_type.to_http_status()) == error_type);
        }
    }

    #[test]
    fn http_error_wire_shape() {
        let json = r#"{"StatusCode":400,"Message":"Message","Details":"Details"}"#;
        let_assert!(Ok(error) = serde_json::from_str::<RestHttpError>(json));
        check!(error == RestHttpError::new(400, "Message", "Details"));

        let_assert!(Ok(encoded) = serde_json::to_string(&error));
        check!(encoded == json);
    }

    #[test]
    fn http_error_rejects_unknown_fields() {
        let json = r#"{"StatusCode":400,"Message":"m","Details":"d","Extra":1}"#;
        check!(serde_json::from_str::<RestHttpError>(json).is_err());
        check!(serde_json::from_str::<RestHttpError>("\"GenericError\"").is_err());
    }

    #[test]
    fn http_error_members_are_required_but_nullable() {
        let_assert!(Err(err) = serde_json::from_str::<RestHttpError>(r#"{"StatusCode":503}"#));
        check!(err.to_string().contains("missing field `Message`"));
        check!(
            serde_json::from_str::<RestHttpError>(r#"{"StatusCode":503,"Message":"down"}"#).is_err()
        );

        let_assert!(
            Ok(error) = serde_json::from_str::<RestHttpError>(
                r#"{"StatusCode":503,"Message":null,"Details":null}"#
            )
        );
        check!(error.message.is_none());
        check!(error.details.is_none());
    }

    #[test]
    fn business_error_constructors() {
        let error = RestBusinessError::with_message(ErrorType::InternalError, "boom");
        check!(error.details == "boom");

        let io = std::io::Error::other("disk full");
        let error = RestBusinessError::from_error(ErrorType::InternalError, &io);
        check!(error.message == "disk full");
        check!(error.details.contains("disk full"));
    }

    #[test]
    fn business_and_http_error_conversion() {
        let error = RestBusinessError::new(ErrorType::ValidationError, "bad", "field x");
        let http = error.to_http_error();
        check!(http.status_code == 400);
        check!(http.to_business_error() == error);

        let sparse = RestHttpError {
            status_code: 503,
            message: None,
            details: None,
        };
        let business = sparse.to_business_error();
        check!(business.error_type == ErrorType::InternalError);
        check!(business.message.is_empty());
        check!(business.details.is_empty());
    }

    #[test]
    fn exception_display_is_message() {
        let exception = RestHttpError::new(500, "server exploded", "stack").to_exception();
        insta::assert_snapshot!(exception.to_string(), @"server exploded");
        check!(exception.business_error().error_type == ErrorType::InternalError);
        check!(exception.into_http_error().details.as_deref() == Some("stack"));
    }

    #[test]
    fn business_error_display() {
        let error = RestBusinessError::new(ErrorType::ValidationError, "bad", "field x");
        insta::assert_snapshot!(
            error.to_string(),
            @r#"{ ErrorType: ValidationError, Message: "bad", Details: "field x" }"#
        );
    }
}
