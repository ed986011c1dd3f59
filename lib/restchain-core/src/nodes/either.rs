use serde::de::DeserializeOwned;

use super::ErrorConverterProcessor;
use crate::{
    Either, ErrorConverterProvider, ErrorProcessorNode, JsonSerializer, NodeKind, ProcessorNode,
    ProcessorStructure, RecursiveNode, Response, RestBusinessError, RestErrorConverterProvider,
    Result, Serializer, walk,
};

/// Splits responses into a success value (`Right`) and a business error
/// (`Left`).
///
/// The right structure is the node's child and takes part in tree walks like
/// any other child. The left structure is private: it only receives the
/// error serializer and is never completed with a success terminal.
pub struct EitherProcessor<L, R, S = JsonSerializer> {
    structure: ProcessorStructure<R, S>,
    left: ProcessorStructure<L, S>,
}

/// Either processor whose left side is a [`RestBusinessError`].
pub type EitherRestErrorProcessor<R, S = JsonSerializer> = EitherProcessor<RestBusinessError, R, S>;

impl<L, R, S> EitherProcessor<L, R, S> {
    /// Either processor with empty structures on both sides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: ProcessorStructure::new(),
            left: ProcessorStructure::new(),
        }
    }

    /// The left structure.
    #[must_use]
    pub const fn left(&self) -> &ProcessorStructure<L, S> {
        &self.left
    }

    /// Append a node to the left structure.
    #[must_use]
    pub fn with_left_processor(mut self, node: impl ProcessorNode<L, S> + 'static) -> Self {
        self.left.push(node);
        self
    }
}

impl<L, R, S> EitherProcessor<L, R, S>
where
    L: 'static,
    S: Serializer,
{
    /// Append a converter from the wire error `W` to the left structure, with
    /// an error processor decoding `W` best effort.
    #[must_use]
    pub fn with_defaults<W>(self, converter: impl ErrorConverterProvider<L, W> + 'static) -> Self
    where
        W: DeserializeOwned + 'static,
    {
        self.with_left_processor(ErrorConverterProcessor::<L, W, S>::new(converter).with_defaults())
    }
}

impl<R, S: Serializer> EitherProcessor<RestBusinessError, R, S> {
    /// Business errors decoded from error documents, or synthesized from the
    /// response when the body is not one.
    #[must_use]
    pub fn rest() -> Self {
        Self::new().with_defaults(RestErrorConverterProvider)
    }
}

impl<L, R, S> Default for EitherProcessor<L, R, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, S> RecursiveNode<R, S> for EitherProcessor<L, R, S> {
    fn structure(&self) -> &ProcessorStructure<R, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<R, S> {
        &mut self.structure
    }
}

impl<L, R, S: Serializer> ErrorProcessorNode<S> for EitherProcessor<L, R, S> {
    fn set_error_serializer(&mut self, serializer: S) {
        walk::set_error_serializer(&mut self.left, &serializer);
    }
}

impl<L, R, S> ProcessorNode<Either<L, R>, S> for EitherProcessor<L, R, S>
where
    L: 'static,
    R: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        self.structure.can_process(response) || self.left.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<Either<L, R>> {
        if self.structure.can_process(response) {
            return self.structure.process(response, serializer).map(Either::Right);
        }
        self.left.process(response, serializer).map(Either::Left)
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }

    fn as_error_processor(&mut self) -> Option<&mut dyn ErrorProcessorNode<S>> {
        Some(self)
    }
}
