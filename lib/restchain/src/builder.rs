//! Per-request builder.
//!
//! A builder collects the user's processors and request options, then
//! `get_result` runs the whole exchange:
//!
//! 1. serialize the body with the success serializer,
//! 2. execute the transport,
//! 3. assemble the [`Pipeline`] (exception terminal, completion, error
//!    serializer),
//! 4. resolve the response.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;

use crate::{
    Body, Certificate, JsonSerializer, Method, Pipeline, ProcessorNode, ProcessorStructure,
    Request, Response, RestClient, RestTerminal, Result, Serializer, TerminalFactory, Transport,
};

/// Deferred body serialization, run with the request's success serializer.
pub(crate) type BodyWriter<S> = Box<dyn FnOnce(&S) -> Result<String> + Send>;

/// Builder for a single request, created by [`RestClient`].
///
/// The serializers are private copies of the client's, so
/// [`with_settings`](Self::with_settings) only affects this request.
#[must_use = "a request builder does nothing until `get_result` is awaited"]
pub struct RestClientBuilder<'a, T, Tr, S = JsonSerializer, F = RestTerminal> {
    client: &'a RestClient<Tr, S, F>,
    method: Method,
    path: String,
    body: Option<BodyWriter<S>>,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    certificates: Vec<Certificate>,
    proxy: Option<Url>,
    serializer: S,
    error_serializer: S,
    structure: ProcessorStructure<T, S>,
}

impl<T, Tr, S, F> std::fmt::Debug for RestClientBuilder<'_, T, Tr, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClientBuilder")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("has_body", &self.body.is_some())
            .field("headers", &self.headers)
            .field("query", &self.query)
            .field("structure", &self.structure)
            .finish_non_exhaustive()
    }
}

impl<'a, T, Tr, S, F> RestClientBuilder<'a, T, Tr, S, F>
where
    Tr: Transport,
    S: Serializer,
    F: TerminalFactory<S>,
{
    pub(crate) fn new(
        client: &'a RestClient<Tr, S, F>,
        method: Method,
        path: &str,
        body: Option<BodyWriter<S>>,
        serializer: S,
        error_serializer: S,
    ) -> Self {
        Self {
            client,
            method,
            path: path.to_string(),
            body,
            headers: Vec::new(),
            query: Vec::new(),
            certificates: Vec::new(),
            proxy: None,
            serializer,
            error_serializer,
            structure: ProcessorStructure::new(),
        }
    }

    /// Append a processor to the request's structure.
    pub fn with_processor(mut self, node: impl ProcessorNode<T, S> + 'static) -> Self {
        self.structure.push(node);
        self
    }

    /// Replace the request's structure.
    pub fn with_structure(mut self, structure: ProcessorStructure<T, S>) -> Self {
        self.structure = structure;
        self
    }

    /// Apply settings to this request's success serializer.
    ///
    /// Also used for the request body.
    pub fn with_settings(mut self, settings: S::Settings) -> Self {
        self.serializer.apply_settings(settings);
        self
    }

    /// Apply settings to this request's error serializer.
    pub fn with_error_settings(mut self, settings: S::Settings) -> Self {
        self.error_serializer.apply_settings(settings);
        self
    }

    /// Trust an additional certificate.
    pub fn with_certificate(mut self, certificate: Certificate) -> Self {
        self.certificates.push(certificate);
        self
    }

    /// Trust additional certificates.
    pub fn with_certificates(mut self, certificates: impl IntoIterator<Item = Certificate>) -> Self {
        self.certificates.extend(certificates);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Route the request through an `http://` proxy.
    ///
    /// [`HyperTransport`](crate::HyperTransport) opens an HTTP `CONNECT`
    /// tunnel on it.
    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// The success serializer used by this request.
    #[must_use]
    pub const fn serializer(&self) -> &S {
        &self.serializer
    }

    /// The error serializer used by this request.
    #[must_use]
    pub const fn error_serializer(&self) -> &S {
        &self.error_serializer
    }

    /// The processors added so far.
    #[must_use]
    pub const fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }

    /// Execute the request and resolve its response.
    ///
    /// # Errors
    ///
    /// Returns transport errors, body serialization errors, and whatever the
    /// assembled pipeline raises.
    pub async fn get_result(self) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        self.execute(None).await
    }

    /// Same as [`get_result`](Self::get_result) with a request timeout.
    ///
    /// # Errors
    ///
    /// See [`get_result`](Self::get_result).
    pub async fn get_result_with_timeout(self, timeout: Duration) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        self.execute(Some(timeout)).await
    }

    /// Resolve an already received response with this builder's processors.
    ///
    /// # Errors
    ///
    /// Returns whatever the assembled pipeline raises.
    pub fn result_from_response(self, response: &Response) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        let pipeline = Pipeline::assemble(
            self.structure,
            self.client.terminal().terminal::<T>(),
            &self.error_serializer,
        );
        pipeline.run(response, &self.serializer)
    }

    async fn execute(mut self, timeout: Option<Duration>) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        let span = tracing::debug_span!("request", method = %self.method, path = %self.path);
        async move {
            let request = self.build_request(timeout)?;
            let response = self
                .client
                .transport()
                .execute(self.client.host(), request)
                .await?;
            tracing::debug!(
                status = response.status(),
                error = response.error_message(),
                "response received"
            );
            self.result_from_response(&response)
        }
        .instrument(span)
        .await
    }

    fn build_request(&mut self, timeout: Option<Duration>) -> Result<Request> {
        let mut builder = Request::builder(self.method, self.path.as_str())
            .headers(std::mem::take(&mut self.headers))
            .certificates(std::mem::take(&mut self.certificates));
        for (name, value) in std::mem::take(&mut self.query) {
            builder = builder.query(name, value);
        }
        if let Some(write) = self.body.take() {
            let content = write(&self.serializer)?;
            builder = builder.body(Body::new(self.serializer.format(), content));
        }
        if let Some(proxy) = self.proxy.take() {
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build())
    }
}
