//! Transport collaborator.
//!
//! A [`Transport`] sends a [`Request`] to a host and hands back the [`Response`]
//! that the processor pipeline will interpret. Implement it directly to plug a
//! different HTTP stack or to script responses in tests.

use std::future::Future;
use std::sync::Arc;

use url::Url;

use crate::{Request, Response, Result};

/// Executes requests against a host.
pub trait Transport: Send + Sync {
    /// Execute a request and return the response.
    ///
    /// Failures that still describe the exchange (timeouts, body read errors)
    /// should come back as a [`Response`] carrying an error message or cause so
    /// the processors can decide what they mean.
    ///
    /// # Errors
    ///
    /// Returns an error if no exchange could take place:
    /// - Connection errors
    /// - TLS errors
    /// - Invalid request configuration
    fn execute(&self, host: &Url, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(&self, host: &Url, request: Request) -> impl Future<Output = Result<Response>> + Send {
        T::execute(self, host, request)
    }
}

impl<T: Transport> Transport for &T {
    fn execute(&self, host: &Url, request: Request) -> impl Future<Output = Result<Response>> + Send {
        T::execute(self, host, request)
    }
}
