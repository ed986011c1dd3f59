//! Transport implementation using hyper-util.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{
        Client,
        connect::{Connect, HttpConnector},
    },
    rt::TokioExecutor,
};
use url::Url;

use crate::{
    Error, Request, Response, Result, Transport,
    config::TransportConfig,
    connector::{https_connector, tunnel_connector},
};

type HyperClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Transport using hyper-util with connection pooling and rustls.
///
/// Timeouts and body read failures are reported as a [`Response`] carrying
/// an error message, so processors decide what they mean. Connection and TLS
/// failures are errors.
///
/// Requests with extra certificates or a proxy run on a one-off client. A
/// proxy must be an `http://` URL; every request through it uses an HTTP
/// `CONNECT` tunnel.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use restchain::{HyperTransport, TransportConfig};
///
/// let transport = HyperTransport::with_config(
///     TransportConfig::builder()
///         .timeout(Duration::from_secs(5))
///         .build()?,
/// )?;
/// # Ok::<(), restchain::Error>(())
/// ```
#[derive(Clone)]
pub struct HyperTransport {
    client: HyperClient,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS connector cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS connector cannot be built.
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let client = Self::build_client(&config, https_connector(&config, &[])?);
        Ok(Self { client, config })
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn build_client<C>(config: &TransportConfig, connector: C) -> Client<C, Full<Bytes>>
    where
        C: Connect + Clone + Send + Sync + 'static,
    {
        Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool.idle_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .retry_canceled_requests(config.retry_canceled_requests)
            .build(connector)
    }

    /// Target of a tunneled request.
    ///
    /// The tunnel opens on port 443 when the URI has none, so plain HTTP
    /// targets get their port spelled out.
    fn tunnel_uri(url: &Url) -> Result<http::Uri> {
        if url.scheme() != "http" || url.port().is_some() {
            return http::Uri::try_from(url.as_str())
                .map_err(|err| Error::invalid_request(err.to_string()));
        }

        let host = url
            .host_str()
            .ok_or_else(|| Error::invalid_request(format!("{url} has no host")))?;
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        };
        http::Uri::builder()
            .scheme("http")
            .authority(format!("{host}:80"))
            .path_and_query(path_and_query)
            .build()
            .map_err(|err| Error::invalid_request(err.to_string()))
    }

    /// Build a hyper request, adding the configured headers the request lacks.
    fn build_hyper_request(
        config: &TransportConfig,
        url: &Url,
        request: &Request,
    ) -> Result<http::Request<Full<Bytes>>> {
        let mut builder = http::Request::builder()
            .method(http::Method::from(request.method()))
            .uri(url.as_str());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        for (name, value) in config.implicit_headers() {
            let present = request
                .headers()
                .keys()
                .any(|existing| existing.eq_ignore_ascii_case(name));
            if !present {
                builder = builder.header(name, value);
            }
        }

        let body = request.body().map_or_else(Full::default, |body| {
            Full::new(Bytes::from(body.content().to_string()))
        });
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Classify a client error from its whole source chain.
    ///
    /// TLS handshake failures surface as connect errors, so the chain is
    /// inspected before falling back to [`Error::Connection`].
    fn map_hyper_error(err: &hyper_util::client::legacy::Error) -> Error {
        let message = std::iter::successors(
            Some(err as &(dyn std::error::Error + 'static)),
            |current| current.source(),
        )
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");

        let lowercase = message.to_lowercase();
        if ["tls", "ssl", "certificate", "handshake"]
            .iter()
            .any(|keyword| lowercase.contains(keyword))
        {
            Error::tls(message)
        } else {
            Error::connection(message)
        }
    }
}

impl Transport for HyperTransport {
    async fn execute(&self, host: &Url, request: Request) -> Result<Response> {
        let url = request.url(host)?;
        let timeout = request.timeout().unwrap_or(self.config.timeout);
        let mut hyper_request = Self::build_hyper_request(&self.config, &url, &request)?;

        tracing::debug!(method = %request.method(), %url, "sending request");
        let exchange = match request.proxy() {
            Some(proxy) => {
                *hyper_request.uri_mut() = Self::tunnel_uri(&url)?;
                let connector = tunnel_connector(&self.config, request.certificates(), proxy)?;
                Self::build_client(&self.config, connector).request(hyper_request)
            }
            None if request.certificates().is_empty() => self.client.request(hyper_request),
            None => {
                let connector = https_connector(&self.config, request.certificates())?;
                Self::build_client(&self.config, connector).request(hyper_request)
            }
        };
        let response = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result.map_err(|err| Self::map_hyper_error(&err))?,
            Err(elapsed) => {
                tracing::warn!(%url, ?timeout, "request timed out");
                return Ok(Response::new(0)
                    .with_error_message(Error::Timeout.to_string())
                    .with_error_cause(elapsed));
            }
        };

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let content_type = headers
            .get(http::header::CONTENT_TYPE.as_str())
            .cloned()
            .unwrap_or_default();
        let partial = Response::new(status)
            .with_content_type(content_type)
            .with_headers(headers);

        match response.into_body().collect().await {
            Ok(body) => {
                let body = String::from_utf8_lossy(&body.to_bytes()).into_owned();
                tracing::debug!(status, %url, "received response");
                Ok(partial.with_body(body))
            }
            Err(err) => {
                tracing::warn!(status, %url, error = %err, "failed to read response body");
                Ok(partial.with_error_message(err.to_string()).with_error_cause(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::{Body, Format, Method};

    fn host() -> Url {
        let_assert!(Ok(host) = Url::parse("http://localhost:8080/api/"));
        host
    }

    #[test]
    fn build_hyper_request_copies_parts() {
        let request = Request::builder(Method::Post, "users")
            .header("X-Trace", "1")
            .body(Body::new(Format::Json, r#"{"name":"test"}"#))
            .build();
        let_assert!(Ok(url) = request.url(&host()));

        let config = TransportConfig::default();

        let_assert!(
            Ok(hyper_request) = HyperTransport::build_hyper_request(&config, &url, &request)
        );
        check!(hyper_request.method() == http::Method::POST);
        check!(hyper_request.uri() == "http://localhost:8080/api/users");
        check!(hyper_request.headers()["X-Trace"] == "1");
        check!(hyper_request.headers()["Content-Type"] == "application/json");
        check!(hyper_request.headers().contains_key("User-Agent"));
    }

    #[test]
    fn request_headers_win_over_defaults() {
        let request = Request::builder(Method::Get, "users")
            .header("user-agent", "billing/1")
            .build();
        let_assert!(Ok(url) = request.url(&host()));
        let_assert!(
            Ok(config) = TransportConfig::builder()
                .default_header("Accept", "application/json")
                .build()
        );

        let_assert!(
            Ok(hyper_request) = HyperTransport::build_hyper_request(&config, &url, &request)
        );
        let agents: Vec<_> = hyper_request.headers().get_all("User-Agent").iter().collect();
        check!(agents == ["billing/1"]);
        check!(hyper_request.headers()["Accept"] == "application/json");
    }

    #[test]
    fn extract_headers_skips_non_utf8() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-ok", http::HeaderValue::from_static("yes"));
        let_assert!(Ok(binary) = http::HeaderValue::from_bytes(&[0xff, 0xfe]));
        headers.insert("x-binary", binary);

        let extracted = HyperTransport::extract_headers(&headers);
        check!(extracted.get("x-ok").map(String::as_str) == Some("yes"));
        check!(!extracted.contains_key("x-binary"));
    }

    #[test]
    fn tunnel_uri_spells_out_plain_http_port() {
        let_assert!(Ok(url) = Url::parse("http://localhost/api/users?page=2"));
        let_assert!(Ok(uri) = HyperTransport::tunnel_uri(&url));
        check!(uri == "http://localhost:80/api/users?page=2");

        let_assert!(Ok(url) = Url::parse("https://api.example.com/users"));
        let_assert!(Ok(uri) = HyperTransport::tunnel_uri(&url));
        check!(uri.port_u16().is_none());

        let_assert!(Ok(uri) = HyperTransport::tunnel_uri(&host()));
        check!(uri.port_u16() == Some(8080));
    }

    #[tokio::test]
    async fn unreachable_proxy_is_a_connection_error() {
        let_assert!(Ok(transport) = HyperTransport::new());
        let_assert!(Ok(proxy) = Url::parse("http://127.0.0.1:1"));
        let request = Request::builder(Method::Get, "users").proxy(proxy).build();

        let_assert!(Err(err) = transport.execute(&host(), request).await);
        check!(err.is_connection());
    }

    #[tokio::test]
    async fn proxy_must_be_plain_http() {
        let_assert!(Ok(transport) = HyperTransport::new());
        let_assert!(Ok(proxy) = Url::parse("https://proxy.local:3128"));
        let request = Request::builder(Method::Get, "users").proxy(proxy).build();

        let_assert!(Err(Error::InvalidRequest(message)) = transport.execute(&host(), request).await);
        check!(message.contains("proxy.local"));
    }
}
