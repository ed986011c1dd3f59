use serde::de::DeserializeOwned;

use super::ContentDeserializationProcessor;
use crate::{
    JsonSerializer, NodeKind, NodeRole, ProcessorNode, ProcessorStructure, RecursiveNode,
    Response, Result, Serializer,
};

/// Processes successful (2xx) responses with its child structure.
///
/// With [`with_defaults`](Self::with_defaults), and nothing else in its child
/// structure, this is the canonical success terminal appended to every leaf
/// structure: decode the body as `T`, strictly.
pub struct SuccessProcessor<T, S = JsonSerializer> {
    structure: ProcessorStructure<T, S>,
}

impl<T, S> SuccessProcessor<T, S> {
    /// Success processor with an empty child structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: ProcessorStructure::new(),
        }
    }
}

impl<T, S> SuccessProcessor<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    /// Append strict content deserialization to the child structure.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        self.with_processor(ContentDeserializationProcessor::new())
    }
}

impl<T, S> Default for SuccessProcessor<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> RecursiveNode<T, S> for SuccessProcessor<T, S> {
    fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }

    fn structure_mut(&mut self) -> &mut ProcessorStructure<T, S> {
        &mut self.structure
    }
}

impl<T, S> ProcessorNode<T, S> for SuccessProcessor<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        response.is_success() && self.structure.can_process(response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<T> {
        self.structure.process(response, serializer)
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Recursive(&mut self.structure)
    }

    fn role(&self) -> NodeRole {
        match self.structure.nodes() {
            [leaf] if leaf.role() == NodeRole::StrictContent => NodeRole::SuccessTerminal,
            _ => NodeRole::Plain,
        }
    }
}
