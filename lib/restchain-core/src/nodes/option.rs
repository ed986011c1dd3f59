use serde::de::DeserializeOwned;

use crate::{
    JsonSerializer, NodeKind, ProcessorNode, ProcessorStructure, RecursiveNode, Response, Result,
    Serializer,
};

/// Maps 404 to `None` and wraps anything its child processes in `Some`.
pub struct OptionAsNotFoundProcessor<T, S = JsonSerializer> {
    structure: ProcessorStructure<T, S>,
}

impl<T, S> OptionAsNotFoundProcessor<T, S> {
    /// Option processor with an empty child structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: ProcessorStructure::new(),
        }
    }
}

impl<T, S> Default for OptionAsNotFoundProcessor<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> RecursiveNode<T, S> for OptionAsNotFoundProcessor<T, S> {
    fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<T, S> {
        &mut self.structure
    }
}

impl<T, S> ProcessorNode<Option<T>, S> for OptionAsNotFoundProcessor<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        response.is_not_found() || self.structure.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<Option<T>> {
        if response.is_not_found() {
            return Ok(None);
        }
        self.structure.process(response, serializer).map(Some)
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }
}
