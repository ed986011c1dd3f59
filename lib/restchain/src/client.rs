//! REST client facade.

use serde::Serialize;
use url::Url;

use crate::{
    HyperTransport, JsonSerializer, JsonSettings, Method, RestClientBuilder, RestTerminal, Result,
    Serializer, TerminalFactory, Transport, UnitAsSuccessProcessor, builder::BodyWriter,
};

/// REST client bound to one host.
///
/// Each call creates a [`RestClientBuilder`] with fresh copies of the success
/// and error serializers, so per-request settings never leak into the client.
///
/// # Example
///
/// ```no_run
/// use restchain::prelude::*;
///
/// # async fn run() -> restchain::Result<()> {
/// let client = RestClient::new("https://api.example.com/")?;
///
/// let user: Option<User> = client
///     .get("users/42")
///     .with_processor(OptionAsNotFoundProcessor::new())
///     .get_result()
///     .await?;
/// # Ok(())
/// # }
/// # #[derive(serde::Deserialize)] struct User {}
/// ```
#[derive(Debug, Clone)]
pub struct RestClient<Tr, S = JsonSerializer, F = RestTerminal> {
    transport: Tr,
    host: Url,
    serializer: S,
    error_serializer: S,
    terminal: F,
}

impl RestClient<HyperTransport> {
    /// JSON client over a default [`HyperTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid URL or the transport cannot be
    /// built.
    pub fn new(host: &str) -> Result<Self> {
        let host = Url::parse(host)?;
        Ok(Self::json(HyperTransport::new()?, host))
    }
}

impl<Tr: Transport> RestClient<Tr> {
    /// JSON client with a lenient success serializer and an error serializer
    /// rejecting unknown members.
    #[must_use]
    pub const fn json(transport: Tr, host: Url) -> Self {
        Self {
            transport,
            host,
            serializer: JsonSerializer::new(),
            error_serializer: JsonSerializer::with_settings(
                JsonSettings::new().reject_unknown_fields(),
            ),
            terminal: RestTerminal,
        }
    }
}

impl<Tr, S, F> RestClient<Tr, S, F>
where
    Tr: Transport,
    S: Serializer,
    F: TerminalFactory<S>,
{
    /// Client with explicit serializers and exception terminal.
    #[must_use]
    pub const fn with_serializers(
        transport: Tr,
        host: Url,
        serializer: S,
        error_serializer: S,
        terminal: F,
    ) -> Self {
        Self {
            transport,
            host,
            serializer,
            error_serializer,
            terminal,
        }
    }

    /// Host every request path is resolved against.
    #[must_use]
    pub const fn host(&self) -> &Url {
        &self.host
    }

    /// The transport.
    #[must_use]
    pub const fn transport(&self) -> &Tr {
        &self.transport
    }

    /// Serializer for requests and successful responses.
    #[must_use]
    pub const fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Serializer for error responses.
    #[must_use]
    pub const fn error_serializer(&self) -> &S {
        &self.error_serializer
    }

    pub(crate) const fn terminal(&self) -> &F {
        &self.terminal
    }

    fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<BodyWriter<S>>,
    ) -> RestClientBuilder<'_, T, Tr, S, F> {
        RestClientBuilder::new(
            self,
            method,
            path,
            body,
            self.serializer.clone(),
            self.error_serializer.clone(),
        )
    }

    fn writer<D>(data: D) -> BodyWriter<S>
    where
        D: Serialize + Send + 'static,
    {
        Box::new(move |serializer: &S| serializer.serialize(&data))
    }

    /// Start a GET request.
    pub fn get<T>(&self, path: &str) -> RestClientBuilder<'_, T, Tr, S, F> {
        self.request(Method::Get, path, None)
    }

    /// Start a POST request sending `data`.
    pub fn post<T, D>(&self, path: &str, data: D) -> RestClientBuilder<'_, T, Tr, S, F>
    where
        D: Serialize + Send + 'static,
    {
        self.request(Method::Post, path, Some(Self::writer(data)))
    }

    /// Start a PUT request sending `data`.
    pub fn put<T, D>(&self, path: &str, data: D) -> RestClientBuilder<'_, T, Tr, S, F>
    where
        D: Serialize + Send + 'static,
    {
        self.request(Method::Put, path, Some(Self::writer(data)))
    }

    /// Start a DELETE request without body.
    pub fn delete<T>(&self, path: &str) -> RestClientBuilder<'_, T, Tr, S, F> {
        self.request(Method::Delete, path, None)
    }

    /// Start a DELETE request sending `data`.
    pub fn delete_with<T, D>(&self, path: &str, data: D) -> RestClientBuilder<'_, T, Tr, S, F>
    where
        D: Serialize + Send + 'static,
    {
        self.request(Method::Delete, path, Some(Self::writer(data)))
    }

    /// POST `data`, expecting any successful response.
    ///
    /// # Errors
    ///
    /// Returns the transport error or the raised business error.
    pub async fn post_unit<D>(&self, path: &str, data: D) -> Result<()>
    where
        D: Serialize + Send + 'static,
    {
        self.post(path, data)
            .with_processor(UnitAsSuccessProcessor)
            .get_result()
            .await
    }

    /// PUT `data`, expecting any successful response.
    ///
    /// # Errors
    ///
    /// Returns the transport error or the raised business error.
    pub async fn put_unit<D>(&self, path: &str, data: D) -> Result<()>
    where
        D: Serialize + Send + 'static,
    {
        self.put(path, data)
            .with_processor(UnitAsSuccessProcessor)
            .get_result()
            .await
    }

    /// DELETE, expecting any successful response.
    ///
    /// # Errors
    ///
    /// Returns the transport error or the raised business error.
    pub async fn delete_unit(&self, path: &str) -> Result<()> {
        self.delete(path)
            .with_processor(UnitAsSuccessProcessor)
            .get_result()
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[tokio::test]
    async fn new_parses_host() {
        let_assert!(Ok(client) = RestClient::new("https://api.example.com/v1/"));
        check!(client.host().as_str() == "https://api.example.com/v1/");
        check!(client.serializer().format() == crate::Format::Json);
        check!(client.serializer().settings().unknown_fields == crate::UnknownFields::Allow);
        check!(client.error_serializer().settings().unknown_fields == crate::UnknownFields::Reject);
    }

    #[test]
    fn new_rejects_invalid_host() {
        let_assert!(Err(err) = RestClient::new("not a url"));
        check!(err.to_string().starts_with("invalid URL"));
    }
}
