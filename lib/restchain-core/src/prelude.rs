//! Prelude module for convenient imports.
//!
//! ```ignore
//! use restchain_core::prelude::*;
//! ```

pub use crate::{
    BoolAsNotFoundProcessor, ContentDeserializationProcessor, Either, EitherProcessor,
    EitherRestErrorProcessor, Error, ErrorConverterProcessor, ErrorProcessor, ErrorProcessorNode,
    ErrorType, ExceptionProcessor, IdentityProcessor, JsonSerializer, JsonSettings, Method,
    OptionAsNotFoundProcessor, Pipeline, ProcessorNode, ProcessorStructure, RecursiveNode,
    Request, Response, RestBusinessError, RestException, RestExceptionProcessor, RestHttpError,
    RestTerminal, Result, Serializer, SuccessProcessor, TerminalFactory, Transport,
    TryContentDeserializationProcessor, UnitAsSuccessProcessor, VoidProcessor,
};
