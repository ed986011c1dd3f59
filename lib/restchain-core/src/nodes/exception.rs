use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::ErrorConverterProcessor;
use crate::{
    Error, ErrorConverterProvider, ExceptionProvider, JsonSerializer, NodeKind, ProcessorNode,
    ProcessorStructure, RecursiveNode, Response, RestBusinessError, RestErrorConverterProvider,
    RestErrorExceptionProvider, RestException, Result, Serializer,
};

/// Raises the business error `E` produced by its child as an error `X`.
///
/// Typed as a `T` processor so it can sit in any structure, but it never
/// produces a value: processing always fails. Its subtree is sealed: it gets
/// the error serializer but is left untouched when the default chain is
/// completed, so `E` needs no `Deserialize` impl.
pub struct ExceptionProcessor<T, E, X, S = JsonSerializer> {
    structure: ProcessorStructure<E, S>,
    provider: Box<dyn ExceptionProvider<E, X>>,
    output: PhantomData<fn() -> T>,
}

/// Exception processor raising [`RestException`]s.
pub type RestExceptionProcessor<T, S = JsonSerializer> =
    ExceptionProcessor<T, RestBusinessError, RestException, S>;

impl<T, E, X, S> ExceptionProcessor<T, E, X, S> {
    /// Exception processor with an empty child structure.
    #[must_use]
    pub fn new(provider: impl ExceptionProvider<E, X> + 'static) -> Self {
        Self {
            structure: ProcessorStructure::new(),
            provider: Box::new(provider),
            output: PhantomData,
        }
    }
}

impl<T, E, X, S> ExceptionProcessor<T, E, X, S>
where
    E: 'static,
    S: Serializer,
{
    /// Append a converter from the wire error `W`, with an error processor
    /// decoding `W` best effort.
    #[must_use]
    pub fn with_defaults<W>(self, converter: impl ErrorConverterProvider<E, W> + 'static) -> Self
    where
        W: DeserializeOwned + 'static,
    {
        self.with_processor(ErrorConverterProcessor::<E, W, S>::new(converter).with_defaults())
    }
}

impl<T, S: Serializer> ExceptionProcessor<T, RestBusinessError, RestException, S> {
    /// Raise [`RestException`]s for error documents, synthesizing the document
    /// from the response when the body is not one.
    #[must_use]
    pub fn rest() -> Self {
        Self::new(RestErrorExceptionProvider).with_defaults(RestErrorConverterProvider)
    }
}

impl<T, E, X, S> RecursiveNode<E, S> for ExceptionProcessor<T, E, X, S> {
    fn structure(&self) -> &ProcessorStructure<E, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<E, S> {
        &mut self.structure
    }
}

impl<T, E, X, S> ProcessorNode<T, S> for ExceptionProcessor<T, E, X, S>
where
    E: 'static,
    X: Into<Error>,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        self.structure.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<T> {
        let error = self.structure.process(response, serializer)?;
        tracing::debug!(status = response.status(), "raising business error");
        Err(self.provider.provide_exception(error).into())
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Sealed(&mut self.structure)
    }
}
