//! Declarative REST client with composable response processors.
//!
//! Each request carries a small tree of processors deciding how its response
//! is read: a success value, `None` on 404, a business error on the left of
//! an [`Either`], or a raised [`RestException`].
//!
//! # Example
//!
//! ```no_run
//! use restchain::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn run() -> restchain::Result<()> {
//! let client = RestClient::new("https://api.example.com/")?;
//!
//! // 2xx decodes the body, any other status raises a `RestException`
//! let user: User = client.get("users/42").get_result().await?;
//!
//! // 404 is `None`
//! let maybe: Option<User> = client
//!     .get("users/43")
//!     .with_processor(OptionAsNotFoundProcessor::new())
//!     .get_result()
//!     .await?;
//!
//! // error documents become values
//! let outcome: Either<RestBusinessError, User> = client
//!     .post("users", serde_json::json!({ "name": "Ada" }))
//!     .with_processor(EitherRestErrorProcessor::rest())
//!     .get_result()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod builder;
mod client;
mod config;
mod connector;
pub mod prelude;
mod transport;

pub use builder::RestClientBuilder;
pub use client::RestClient;
pub use config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, PoolConfig, TransportConfig, TransportConfigBuilder,
};
pub use transport::HyperTransport;

// Re-export core types
pub use restchain_core::{
    Body, BoolAsNotFoundProcessor, Certificate, ContentDeserializationProcessor, Either,
    EitherProcessor, EitherRestErrorProcessor, Error, ErrorCause, ErrorConverterProcessor,
    ErrorConverterProvider, ErrorProcessor, ErrorProcessorNode, ErrorType, ExceptionProcessor,
    ExceptionProvider, Format, IdentityProcessor, JsonSerializer, JsonSettings, Method, NodeKind,
    NodeRole, NullHandling, OptionAsNotFoundProcessor, Pipeline, ProcessorNode,
    ProcessorStructure, ProcessorTree, RecursiveNode, Request, RequestBuilder, Response,
    RestBusinessError, RestErrorConverterProvider, RestErrorExceptionProvider, RestException,
    RestExceptionProcessor, RestHttpError, RestTerminal, Result, Serializer, SerializerTree,
    SuccessProcessor, TerminalFactory, Transport, TryContentDeserializationProcessor,
    UnitAsSuccessProcessor, UnknownFields, VoidProcessor, nodes, walk,
};

// Re-export http types for status codes and headers
pub use restchain_core::{StatusCode, header};

pub use url;
