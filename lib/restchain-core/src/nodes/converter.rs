use serde::de::DeserializeOwned;

use super::ErrorProcessor;
use crate::{
    ErrorConverterProvider, JsonSerializer, NodeKind, ProcessorNode, ProcessorStructure,
    RecursiveNode, Response, Result, Serializer,
};

/// Turns the optionally decoded wire error `W` into a business error `E`.
pub struct ErrorConverterProcessor<E, W, S = JsonSerializer> {
    structure: ProcessorStructure<Option<W>, S>,
    provider: Box<dyn ErrorConverterProvider<E, W>>,
}

impl<E, W, S> ErrorConverterProcessor<E, W, S> {
    /// Converter with an empty child structure.
    #[must_use]
    pub fn new(provider: impl ErrorConverterProvider<E, W> + 'static) -> Self {
        Self {
            structure: ProcessorStructure::new(),
            provider: Box::new(provider),
        }
    }
}

impl<E, W, S> ErrorConverterProcessor<E, W, S>
where
    W: DeserializeOwned + 'static,
    S: Serializer,
{
    /// Append an error processor decoding the body as `W`, best effort.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        self.with_processor(ErrorProcessor::<Option<W>, S>::new().with_defaults())
    }
}

impl<E, W, S> RecursiveNode<Option<W>, S> for ErrorConverterProcessor<E, W, S> {
    fn structure(&self) -> &ProcessorStructure<Option<W>, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<Option<W>, S> {
        &mut self.structure
    }
}

impl<E, W, S> ProcessorNode<E, S> for ErrorConverterProcessor<E, W, S>
where
    W: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        self.structure.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<E> {
        let wire = self.structure.process(response, serializer)?;
        Ok(self.provider.provide_error(wire, response))
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }
}
