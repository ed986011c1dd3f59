//! # Chapter 0: Getting Started
//!
//! A [`RestClient`](crate::RestClient) is bound to one host. Paths are joined
//! to it, so keep the trailing slash on hosts with a base path.
//!
//! ```ignore
//! use restchain::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Repo {
//!     name: String,
//!     stars: u32,
//! }
//!
//! let client = RestClient::new("https://api.example.com/v1/")?;
//! let repo: Repo = client.get("repos/restchain").get_result().await?;
//! ```
//!
//! Without any processor, a request reads:
//!
//! - a 2xx response as the body decoded into the result type,
//! - any other response as a raised [`RestException`](crate::RestException).
//!
//! ## Sending data
//!
//! `post`, `put` and `delete_with` take any `Serialize` value. The body is
//! written by the request's serializer when the request is sent:
//!
//! ```ignore
//! let created: Repo = client
//!     .post("repos", NewRepo { name: "restchain" })
//!     .with_header("X-Request-Id", "42")
//!     .get_result()
//!     .await?;
//! ```
//!
//! ## Transport
//!
//! [`RestClient::new`](crate::RestClient::new) uses a default
//! [`HyperTransport`](crate::HyperTransport). Tune it with a
//! [`TransportConfig`](crate::TransportConfig):
//!
//! ```ignore
//! let transport = HyperTransport::with_config(
//!     TransportConfig::builder()
//!         .timeout(Duration::from_secs(5))
//!         .build()?,
//! )?;
//! let client = RestClient::json(transport, Url::parse("https://api.example.com/")?);
//! ```
//!
//! Next: [Chapter 1: Processors](super::chapter_1)
