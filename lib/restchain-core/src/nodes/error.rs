use serde::de::DeserializeOwned;

use super::TryContentDeserializationProcessor;
use crate::{
    Error, ErrorProcessorNode, JsonSerializer, NodeKind, ProcessorNode, ProcessorStructure,
    RecursiveNode, Response, Result, Serializer,
};

/// Processes unsuccessful responses with its child structure, decoding with
/// the error serializer.
///
/// The error serializer is installed by the error-serializer tree walk; using
/// the node before that is a configuration error.
pub struct ErrorProcessor<T, S = JsonSerializer> {
    structure: ProcessorStructure<T, S>,
    error_serializer: Option<S>,
}

impl<T, S> ErrorProcessor<T, S> {
    /// Error processor with an empty child structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: ProcessorStructure::new(),
            error_serializer: None,
        }
    }

    /// The installed error serializer.
    #[must_use]
    pub const fn error_serializer(&self) -> Option<&S> {
        self.error_serializer.as_ref()
    }
}

impl<W, S> ErrorProcessor<Option<W>, S>
where
    W: DeserializeOwned + 'static,
    S: Serializer,
{
    /// Append best-effort decoding of the error body as `W`.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        self.with_processor(TryContentDeserializationProcessor::new())
    }
}

impl<T, S> Default for ErrorProcessor<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> RecursiveNode<T, S> for ErrorProcessor<T, S> {
    fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<T, S> {
        &mut self.structure
    }
}

impl<T, S> ErrorProcessorNode<S> for ErrorProcessor<T, S> {
    fn set_error_serializer(&mut self, serializer: S) {
        self.error_serializer = Some(serializer);
    }
}

impl<T, S> ProcessorNode<T, S> for ErrorProcessor<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        !response.is_success() && self.structure.can_process(response)
    }

    fn process(&self, response: &Response, _serializer: &S) -> Result<T> {
        let error_serializer = self.error_serializer.as_ref().ok_or_else(|| {
            Error::configuration("error serializer was not installed on the error processor")
        })?;
        self.structure.process(response, error_serializer)
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }

    fn as_error_processor(&mut self) -> Option<&mut dyn ErrorProcessorNode<S>> {
        Some(self)
    }
}
