//! Conversion strategies injected into error-handling nodes.
//!
//! Both traits are implemented for closures, so a plain function works
//! wherever a provider is expected:
//!
//! ```
//! use restchain_core::{ErrorConverterProvider, Response};
//!
//! let provider = |wire: Option<u32>, response: &Response| {
//!     wire.unwrap_or(u32::from(response.status()))
//! };
//! assert_eq!(provider.provide_error(None, &Response::new(503)), 503);
//! ```

use crate::{RestBusinessError, RestException, RestHttpError, Response};

/// Builds a business error from the decoded wire error, if any.
pub trait ErrorConverterProvider<E, W>: Send + Sync {
    /// Build the business error.
    ///
    /// `wire` is `None` when the error body could not be decoded.
    fn provide_error(&self, wire: Option<W>, response: &Response) -> E;
}

impl<E, W, F> ErrorConverterProvider<E, W> for F
where
    F: Fn(Option<W>, &Response) -> E + Send + Sync,
{
    fn provide_error(&self, wire: Option<W>, response: &Response) -> E {
        self(wire, response)
    }
}

/// Builds the error raised for a business error.
pub trait ExceptionProvider<E, X>: Send + Sync {
    /// Build the raised error.
    fn provide_exception(&self, error: E) -> X;
}

impl<E, X, F> ExceptionProvider<E, X> for F
where
    F: Fn(E) -> X + Send + Sync,
{
    fn provide_exception(&self, error: E) -> X {
        self(error)
    }
}

// ============================================================================
// REST providers
// ============================================================================

/// Converts a [`RestHttpError`] into a [`RestBusinessError`].
///
/// When the body was not an error document, an error is synthesized from the
/// response: its status, its transport error message, and its raw body as
/// details.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestErrorConverterProvider;

impl ErrorConverterProvider<RestBusinessError, RestHttpError> for RestErrorConverterProvider {
    fn provide_error(&self, wire: Option<RestHttpError>, response: &Response) -> RestBusinessError {
        let wire = wire.unwrap_or_else(|| RestHttpError {
            status_code: response.status(),
            message: Some(response.error_message().to_string()),
            details: Some(response.body().to_string()),
        });
        wire.to_business_error()
    }
}

/// Raises a [`RestBusinessError`] as a [`RestException`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RestErrorExceptionProvider;

impl ExceptionProvider<RestBusinessError, RestException> for RestErrorExceptionProvider {
    fn provide_exception(&self, error: RestBusinessError) -> RestException {
        error.to_http_error().to_exception()
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::ErrorType;

    #[test]
    fn rest_converter_uses_decoded_error() {
        let wire = RestHttpError::new(400, "Message", "Details");
        let error = RestErrorConverterProvider.provide_error(Some(wire), &Response::new(500));

        check!(error == RestBusinessError::new(ErrorType::ValidationError, "Message", "Details"));
    }

    #[test]
    fn rest_converter_synthesizes_from_response() {
        let response = Response::new(500).with_body("GenericError");
        let error = RestErrorConverterProvider.provide_error(None, &response);

        check!(error.error_type == ErrorType::InternalError);
        check!(error.message.is_empty());
        check!(error.details == "GenericError");
    }

    #[test]
    fn rest_converter_keeps_transport_message() {
        let response = Response::new(0).with_error_message("request timeout");
        let error = RestErrorConverterProvider.provide_error(None, &response);

        check!(error.error_type == ErrorType::InternalError);
        check!(error.message == "request timeout");
    }

    #[test]
    fn rest_exception_provider_carries_http_error() {
        let error = RestBusinessError::new(ErrorType::InternalError, "boom", "trace");
        let exception = RestErrorExceptionProvider.provide_exception(error);

        check!(exception.http_error().status_code == 500);
        check!(exception.to_string() == "boom");
    }

    #[test]
    fn closures_are_providers() {
        let raise = |error: RestBusinessError| error.message.len();
        check!(raise.provide_exception(RestBusinessError::with_message(ErrorType::InternalError, "four")) == 4);
    }
}
