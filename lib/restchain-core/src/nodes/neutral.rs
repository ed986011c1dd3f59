use serde::de::DeserializeOwned;

use crate::{
    Error, JsonSerializer, NodeKind, ProcessorNode, ProcessorStructure, RecursiveNode, Response,
    Result, Serializer,
};

/// Forwards to its child structure unchanged.
pub struct IdentityProcessor<T, S = JsonSerializer> {
    structure: ProcessorStructure<T, S>,
}

impl<T, S> IdentityProcessor<T, S> {
    /// Identity processor with an empty child structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: ProcessorStructure::new(),
        }
    }
}

impl<T, S> Default for IdentityProcessor<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> RecursiveNode<T, S> for IdentityProcessor<T, S> {
    fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<T, S> {
        &mut self.structure
    }
}

impl<T, S> ProcessorNode<T, S> for IdentityProcessor<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        self.structure.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<T> {
        self.structure.process(response, serializer)
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }
}

/// Never processes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidProcessor;

impl<T, S> ProcessorNode<T, S> for VoidProcessor {
    fn can_process(&self, _response: &Response) -> bool {
        false
    }

    fn process(&self, response: &Response, _serializer: &S) -> Result<T> {
        Err(Error::contract_violation(format!(
            "VoidProcessor cannot process a response (status {})",
            response.status()
        )))
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Simple
    }
}
