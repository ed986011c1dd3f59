//! Fully assembled processor tree.
//!
//! Assembly order matters:
//!
//! 1. the exception terminal is appended to the user structure,
//! 2. every leaf structure is completed with the success terminal,
//! 3. the error serializer is handed to every error processor.
//!
//! Completing before propagating lets the error processors added in step 2
//! receive the serializer too.

use serde::de::DeserializeOwned;

use crate::{
    ProcessorNode, ProcessorStructure, RestExceptionProcessor, Response, Result, Serializer, walk,
};

// ============================================================================
// Terminal
// ============================================================================

/// Builds the exception terminal appended to every request's structure.
pub trait TerminalFactory<S>: Send + Sync {
    /// Terminal for a structure producing `T`.
    fn terminal<T>(&self) -> Box<dyn ProcessorNode<T, S>>
    where
        T: DeserializeOwned + 'static;
}

/// Raises [`RestException`](crate::RestException)s for unhandled error
/// responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestTerminal;

impl<S: Serializer> TerminalFactory<S> for RestTerminal {
    fn terminal<T>(&self) -> Box<dyn ProcessorNode<T, S>>
    where
        T: DeserializeOwned + 'static,
    {
        Box::new(RestExceptionProcessor::<T, S>::rest())
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// A frozen processor tree ready to resolve responses.
pub struct Pipeline<T, S> {
    structure: ProcessorStructure<T, S>,
}

impl<T, S> Pipeline<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    /// Append `terminal`, complete the tree, and propagate the error serializer.
    #[must_use]
    pub fn assemble(
        mut structure: ProcessorStructure<T, S>,
        terminal: Box<dyn ProcessorNode<T, S>>,
        error_serializer: &S,
    ) -> Self {
        structure.push_boxed(terminal);
        Self::new(structure, error_serializer)
    }

    /// Complete the tree and propagate the error serializer, without any
    /// exception terminal.
    #[must_use]
    pub fn new(mut structure: ProcessorStructure<T, S>, error_serializer: &S) -> Self {
        walk::add_neutral_processor_at_ends(&mut structure);
        walk::set_error_serializer(&mut structure, error_serializer);
        tracing::debug!(
            result = std::any::type_name::<T>(),
            nodes = structure.len(),
            "pipeline assembled"
        );
        Self { structure }
    }

    /// Resolve a response.
    ///
    /// # Errors
    ///
    /// Returns an error if no node can process the response, if decoding
    /// fails, or if a business error is raised.
    pub fn run(&self, response: &Response, serializer: &S) -> Result<T> {
        self.structure.process(response, serializer)
    }

    /// The assembled structure.
    #[must_use]
    pub const fn structure(&self) -> &ProcessorStructure<T, S> {
        &self.structure
    }
}

impl<T, S> std::fmt::Debug for Pipeline<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("structure", &self.structure)
            .finish()
    }
}
