//! Core types for restchain, a declarative response-processing pipeline for
//! REST clients.
//!
//! A response is interpreted by a tree of small rules:
//! - [`ProcessorNode`] - a rule, simple or recursive
//! - [`ProcessorStructure`] - ordered alternatives, first match wins
//! - [`nodes`] - the standard rules (success, error, option, either, ...)
//! - [`walk`] - default-chain completion and error-serializer propagation
//! - [`Pipeline`] - the assembled tree
//!
//! Collaborators:
//! - [`Transport`] with [`Request`] and [`Response`]
//! - [`Serializer`] with [`JsonSerializer`]
//! - [`ErrorConverterProvider`] and [`ExceptionProvider`]
//!
//! # Example
//!
//! ```
//! use restchain_core::prelude::*;
//!
//! let pipeline = Pipeline::assemble(
//!     ProcessorStructure::<Option<u32>>::new().with(OptionAsNotFoundProcessor::new()),
//!     TerminalFactory::<JsonSerializer>::terminal(&RestTerminal),
//!     &JsonSerializer::new(),
//! );
//!
//! let json = JsonSerializer::new();
//! assert_eq!(pipeline.run(&Response::new(404), &json).unwrap(), None);
//! assert_eq!(pipeline.run(&Response::new(200).with_body("7"), &json).unwrap(), Some(7));
//! assert!(pipeline.run(&Response::new(500), &json).unwrap_err().rest_error().is_some());
//! ```

mod either;
mod error;
mod method;
pub mod nodes;
mod pipeline;
pub mod prelude;
mod processor;
mod provider;
mod request;
mod response;
mod rest_error;
mod serializer;
mod transport;
pub mod walk;

pub use either::Either;
pub use error::{Error, Result};
pub use method::Method;
pub use nodes::{
    BoolAsNotFoundProcessor, ContentDeserializationProcessor, EitherProcessor,
    EitherRestErrorProcessor, ErrorConverterProcessor, ErrorProcessor, ExceptionProcessor,
    IdentityProcessor, OptionAsNotFoundProcessor, RestExceptionProcessor, SuccessProcessor,
    TryContentDeserializationProcessor, UnitAsSuccessProcessor, VoidProcessor,
};
pub use pipeline::{Pipeline, RestTerminal, TerminalFactory};
pub use processor::{
    ErrorProcessorNode, NodeKind, NodeRole, ProcessorNode, ProcessorStructure, ProcessorTree,
    RecursiveNode, SerializerTree,
};
pub use provider::{
    ErrorConverterProvider, ExceptionProvider, RestErrorConverterProvider,
    RestErrorExceptionProvider,
};
pub use request::{Body, Certificate, Request, RequestBuilder};
pub use response::{ErrorCause, Response};
pub use rest_error::{ErrorType, RestBusinessError, RestException, RestHttpError};
pub use serializer::{Format, JsonSerializer, JsonSettings, NullHandling, Serializer, UnknownFields};
pub use transport::Transport;

// Re-export http types for status codes and headers
pub use http::{StatusCode, header};
