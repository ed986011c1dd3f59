//! Processor nodes and structures.
//!
//! A [`ProcessorNode`] is one rule that may interpret a [`Response`]. Nodes are
//! either *simple* (self-contained) or *recursive* (they own a child
//! [`ProcessorStructure`], possibly of another result type, and delegate to it).
//!
//! A [`ProcessorStructure`] is an ordered list of alternative nodes: the first
//! node whose [`can_process`](ProcessorNode::can_process) holds processes the
//! response.
//!
//! # Example
//!
//! ```
//! use restchain_core::prelude::*;
//!
//! let structure: ProcessorStructure<Option<u32>> = ProcessorStructure::new()
//!     .with(OptionAsNotFoundProcessor::new().with_processor(SuccessProcessor::new().with_defaults()));
//!
//! let json = JsonSerializer::new();
//! assert_eq!(structure.process(&Response::new(404), &json).unwrap(), None);
//! assert_eq!(structure.process(&Response::new(200).with_body("10"), &json).unwrap(), Some(10));
//! ```

use std::fmt;

use crate::{Error, JsonSerializer, Response, Result};

// ============================================================================
// Node
// ============================================================================

/// Whether a node is simple or owns a child structure.
pub enum NodeKind<'a, S> {
    /// Self-contained node.
    Simple,
    /// Node delegating to a child structure.
    Recursive(&'a mut dyn ProcessorTree<S>),
    /// Node delegating to a child structure that default-chain completion
    /// never touches. Only the error serializer is handed down.
    Sealed(&'a mut dyn SerializerTree<S>),
}

impl<S> fmt::Debug for NodeKind<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("Simple"),
            Self::Recursive(tree) => f.debug_tuple("Recursive").field(&tree.node_names()).finish(),
            Self::Sealed(tree) => f.debug_tuple("Sealed").field(&tree.node_names()).finish(),
        }
    }
}

/// Position a node takes in the default chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeRole {
    /// Ordinary node.
    #[default]
    Plain,
    /// Canonical success terminal; a structure ending with it is complete.
    SuccessTerminal,
    /// Strict body deserialization, the only child of the success terminal.
    StrictContent,
}

/// A rule that may interpret a response as a `T`.
pub trait ProcessorNode<T, S = JsonSerializer>: Send + Sync {
    /// Whether this node applies to the response.
    ///
    /// Must be pure and agree with [`process`](Self::process).
    fn can_process(&self, response: &Response) -> bool;

    /// Interpret the response.
    ///
    /// Callers only invoke this after [`can_process`](Self::can_process)
    /// returned `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails, if the node raises a business
    /// error, or if the node was called although it cannot process.
    fn process(&self, response: &Response, serializer: &S) -> Result<T>;

    /// Simple, or recursive or sealed with access to the child structure.
    fn kind(&mut self) -> NodeKind<'_, S>;

    /// Role in the default chain.
    fn role(&self) -> NodeRole {
        NodeRole::Plain
    }

    /// Access to the error serializer slot, if this node decodes error bodies.
    fn as_error_processor(&mut self) -> Option<&mut dyn ErrorProcessorNode<S>> {
        None
    }

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A node that decodes bodies with the dedicated error serializer.
pub trait ErrorProcessorNode<S> {
    /// Install the error serializer.
    fn set_error_serializer(&mut self, serializer: S);
}

/// A node owning one child structure of result type `R`.
pub trait RecursiveNode<R, S>: Sized {
    /// The child structure.
    fn structure(&self) -> &ProcessorStructure<R, S>;

    /// Mutable access to the child structure.
    fn structure_mut(&mut self) -> &mut ProcessorStructure<R, S>;

    /// Append a node to the child structure.
    #[must_use]
    fn with_processor(mut self, node: impl ProcessorNode<R, S> + 'static) -> Self {
        self.structure_mut().push(node);
        self
    }

    /// Replace the child structure.
    #[must_use]
    fn with_structure(mut self, structure: ProcessorStructure<R, S>) -> Self {
        *self.structure_mut() = structure;
        self
    }
}

/// Type-erased view of any [`ProcessorStructure`], for error serializer
/// propagation.
pub trait SerializerTree<S> {
    /// Hand the error serializer to every error processor of this tree.
    fn set_error_serializer(&mut self, serializer: &S);

    /// Number of direct nodes.
    fn len(&self) -> usize;

    /// Whether there are no direct nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the direct nodes, in order.
    fn node_names(&self) -> Vec<&'static str>;
}

/// Type-erased view of a [`ProcessorStructure`] whose results can be
/// decoded, so completion can append the success terminal.
pub trait ProcessorTree<S>: SerializerTree<S> {
    /// Append the success terminal to every leaf structure of this tree.
    fn add_neutral_processor_at_ends(&mut self);
}

// ============================================================================
// Structure
// ============================================================================

/// Ordered list of alternative nodes producing a `T`.
pub struct ProcessorStructure<T, S = JsonSerializer> {
    nodes: Vec<Box<dyn ProcessorNode<T, S>>>,
}

impl<T, S> ProcessorStructure<T, S> {
    /// Creates an empty structure.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node.
    pub fn push(&mut self, node: impl ProcessorNode<T, S> + 'static) {
        self.nodes.push(Box::new(node));
    }

    /// Append an already boxed node.
    pub fn push_boxed(&mut self, node: Box<dyn ProcessorNode<T, S>>) {
        self.nodes.push(node);
    }

    /// Append a node, builder style.
    #[must_use]
    pub fn with(mut self, node: impl ProcessorNode<T, S> + 'static) -> Self {
        self.push(node);
        self
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[Box<dyn ProcessorNode<T, S>>] {
        &self.nodes
    }

    /// Mutable nodes in order, for tree walks.
    pub fn nodes_mut(&mut self) -> &mut [Box<dyn ProcessorNode<T, S>>] {
        &mut self.nodes
    }

    /// Last node.
    #[must_use]
    pub fn last(&self) -> Option<&dyn ProcessorNode<T, S>> {
        self.nodes.last().map(AsRef::as_ref)
    }

    /// Whether the structure already ends with the canonical success terminal.
    ///
    /// A trailing success processor with any other child structure does not
    /// count.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.last()
            .is_some_and(|node| node.role() == NodeRole::SuccessTerminal)
    }

    /// Whether any node can process the response.
    #[must_use]
    pub fn can_process(&self, response: &Response) -> bool {
        self.nodes.iter().any(|node| node.can_process(response))
    }

    /// Process the response with the first node that can.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessor`] if no node can process the response, or
    /// the error of the selected node.
    pub fn process(&self, response: &Response, serializer: &S) -> Result<T> {
        let Some(node) = self.nodes.iter().find(|node| node.can_process(response)) else {
            tracing::debug!(
                status = response.status(),
                nodes = self.nodes.len(),
                "no processor can process response"
            );
            return Err(Error::NoProcessor {
                status: response.status(),
            });
        };
        tracing::trace!(node = node.name(), status = response.status(), "processing response");
        node.process(response, serializer)
    }
}

impl<T, S> Default for ProcessorStructure<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for ProcessorStructure<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes.iter().map(|node| node.name()))
            .finish()
    }
}

impl<T, S> FromIterator<Box<dyn ProcessorNode<T, S>>> for ProcessorStructure<T, S> {
    fn from_iter<I: IntoIterator<Item = Box<dyn ProcessorNode<T, S>>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
