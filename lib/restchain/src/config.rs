//! Settings for [`HyperTransport`](crate::HyperTransport).

use std::time::Duration;

use crate::{Error, Result};

/// Request timeout used when neither the request nor the configuration sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Idle connections kept per host.
    pub max_idle_per_host: usize,
    /// How long an idle connection is kept. `None` keeps it forever.
    pub idle_timeout: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: Some(Duration::from_secs(90)),
        }
    }
}

/// Transport configuration.
///
/// A request's own timeout (see
/// [`get_result_with_timeout`](crate::RestClientBuilder::get_result_with_timeout))
/// wins over [`timeout`](Self::timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Default request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Connection pool.
    pub pool: PoolConfig,
    /// Retry requests canceled before they reached the server.
    pub retry_canceled_requests: bool,
    /// `User-Agent` sent unless the request sets one.
    pub user_agent: Option<String>,
    /// Headers sent unless the request sets them.
    pub default_headers: Vec<(String, String)>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            pool: PoolConfig::default(),
            retry_canceled_requests: true,
            user_agent: Some(concat!("restchain/", env!("CARGO_PKG_VERSION")).to_string()),
            default_headers: Vec::new(),
        }
    }
}

impl TransportConfig {
    /// Start from the defaults.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// Headers added to a request that does not already carry them.
    pub(crate) fn implicit_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.user_agent
            .as_deref()
            .map(|agent| ("User-Agent", agent))
            .into_iter()
            .chain(
                self.default_headers
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            )
    }
}

/// Builder for [`TransportConfig`].
///
/// Unset fields keep their default. [`build`](Self::build) rejects zero
/// timeouts.
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool: Option<PoolConfig>,
    retry_canceled_requests: Option<bool>,
    user_agent: Option<Option<String>>,
    default_headers: Vec<(String, String)>,
}

impl TransportConfigBuilder {
    /// Default request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// TCP connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Connection pool settings.
    #[must_use]
    pub fn pool(mut self, pool: PoolConfig) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Retry requests canceled before they reached the server.
    #[must_use]
    pub const fn retry_canceled_requests(mut self, retry: bool) -> Self {
        self.retry_canceled_requests = Some(retry);
        self
    }

    /// `User-Agent` header, `None` to send none.
    #[must_use]
    pub fn user_agent(mut self, user_agent: Option<impl Into<String>>) -> Self {
        self.user_agent = Some(user_agent.map(Into::into));
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if a timeout is zero.
    pub fn build(self) -> Result<TransportConfig> {
        let defaults = TransportConfig::default();
        let config = TransportConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool: self.pool.unwrap_or(defaults.pool),
            retry_canceled_requests: self
                .retry_canceled_requests
                .unwrap_or(defaults.retry_canceled_requests),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            default_headers: self.default_headers,
        };

        if config.timeout.is_zero() {
            return Err(Error::configuration("request timeout must not be zero"));
        }
        if config.connect_timeout.is_zero() {
            return Err(Error::configuration("connect timeout must not be zero"));
        }
        Ok(config)
    }
}
