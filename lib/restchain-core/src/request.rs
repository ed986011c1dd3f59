//! REST request description handed to a [`Transport`](crate::Transport).
//!
//! Paths are relative to the client's host; [`Request::url`] resolves them.
//!
//! # Example
//!
//! ```
//! use restchain_core::{Method, Request};
//!
//! let host = url::Url::parse("https://api.example.com/v1/").unwrap();
//! let request = Request::builder(Method::Get, "users")
//!     .header("Accept", "application/json")
//!     .query("page", "1")
//!     .build();
//!
//! let url = request.url(&host).unwrap();
//! assert_eq!(url.as_str(), "https://api.example.com/v1/users?page=1");
//! ```

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use url::Url;

use crate::{Format, Method, Result};

/// Serialized request body with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    format: Format,
    content: String,
}

impl Body {
    /// Creates a body.
    #[must_use]
    pub fn new(format: Format, content: impl Into<String>) -> Self {
        Self {
            format,
            content: content.into(),
        }
    }

    /// Body format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// DER-encoded certificate trusted in addition to the default roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate(Bytes);

impl Certificate {
    /// Wrap DER bytes.
    #[must_use]
    pub fn from_der(der: impl Into<Bytes>) -> Self {
        Self(der.into())
    }

    /// DER bytes.
    #[must_use]
    pub fn der(&self) -> &[u8] {
        &self.0
    }
}

/// A REST request with method, path, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<Body>,
    certificates: Vec<Certificate>,
    proxy: Option<Url>,
    timeout: Option<Duration>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, path)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the host.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Extra trusted certificates.
    #[must_use]
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Proxy to route the request through.
    #[must_use]
    pub const fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve the absolute URL against `host`, appending query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined to the host.
    pub fn url(&self, host: &Url) -> Result<Url> {
        let mut url = host.join(&self.path)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request: Request {
                method,
                path: path.into(),
                query: Vec::new(),
                headers: HashMap::new(),
                body: None,
                certificates: Vec::new(),
                proxy: None,
                timeout: None,
            },
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.request.headers.extend(headers);
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((name.into(), value.into()));
        self
    }

    /// Sets the body and the matching `Content-Type` header.
    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.request
            .headers
            .insert("Content-Type".to_string(), body.format().content_type().to_string());
        self.request.body = Some(body);
        self
    }

    /// Trusts additional certificates.
    #[must_use]
    pub fn certificates(mut self, certificates: impl IntoIterator<Item = Certificate>) -> Self {
        self.request.certificates.extend(certificates);
        self
    }

    /// Routes the request through a proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.request.proxy = Some(proxy);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        self.request
    }
}
