//! Prelude module for convenient imports.
//!
//! ```ignore
//! use restchain::prelude::*;
//! ```

pub use crate::{
    BoolAsNotFoundProcessor, ContentDeserializationProcessor, Either, EitherProcessor,
    EitherRestErrorProcessor, Error, ErrorConverterProcessor, ErrorProcessor, ErrorType,
    ExceptionProcessor, HyperTransport, IdentityProcessor, JsonSerializer, JsonSettings, Method,
    OptionAsNotFoundProcessor, ProcessorNode, ProcessorStructure, RecursiveNode, Response,
    RestBusinessError, RestClient, RestClientBuilder, RestException, RestExceptionProcessor,
    RestHttpError, Result, Serializer, StatusCode, SuccessProcessor, Transport, TransportConfig,
    TryContentDeserializationProcessor, UnitAsSuccessProcessor, VoidProcessor,
};
pub use serde::{Deserialize, Serialize};
