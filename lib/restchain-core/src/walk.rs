//! Tree walks over nested processor structures.
//!
//! Both walks visit the nodes of a structure in order. Completion descends
//! through [`NodeKind::Recursive`] only; error serializer propagation also
//! descends through [`NodeKind::Sealed`].

use serde::de::DeserializeOwned;

use crate::{
    NodeKind, ProcessorStructure, ProcessorTree, Serializer, SerializerTree, SuccessProcessor,
};

/// Append the canonical success terminal to every leaf structure.
///
/// A structure already ending with the canonical success terminal is left as
/// is, and so is that terminal. Sealed subtrees, such as the one of an
/// exception processor, are never touched. Running the walk twice changes
/// nothing.
///
/// ```text
/// (P1 -> P2)        becomes (P1 -> P2 -> DEF)
/// (R1 * P1) -> P2   becomes (R1 * (P1 -> DEF)) -> P2 -> DEF
/// ```
pub fn add_neutral_processor_at_ends<T, S>(structure: &mut ProcessorStructure<T, S>)
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    let terminated = structure.is_terminated();
    let last = structure.len().saturating_sub(1);

    for (index, node) in structure.nodes_mut().iter_mut().enumerate() {
        if terminated && index == last {
            continue;
        }
        if let NodeKind::Recursive(child) = node.kind() {
            child.add_neutral_processor_at_ends();
        }
    }

    if !terminated {
        structure.push(SuccessProcessor::<T, S>::new().with_defaults());
    }
}

/// Hand a clone of `serializer` to every error processor of the tree.
pub fn set_error_serializer<T, S>(structure: &mut ProcessorStructure<T, S>, serializer: &S)
where
    S: Serializer,
{
    for node in structure.nodes_mut() {
        let name = node.name();
        if let Some(error_processor) = node.as_error_processor() {
            tracing::trace!(node = name, "installing error serializer");
            error_processor.set_error_serializer(serializer.clone());
        }
        match node.kind() {
            NodeKind::Recursive(child) => child.set_error_serializer(serializer),
            NodeKind::Sealed(child) => child.set_error_serializer(serializer),
            NodeKind::Simple => {}
        }
    }
}

impl<T, S> ProcessorTree<S> for ProcessorStructure<T, S>
where
    T: DeserializeOwned + 'static,
    S: Serializer,
{
    fn add_neutral_processor_at_ends(&mut self) {
        add_neutral_processor_at_ends(self);
    }
}

impl<T, S: Serializer> SerializerTree<S> for ProcessorStructure<T, S> {
    fn set_error_serializer(&mut self, serializer: &S) {
        set_error_serializer(self, serializer);
    }

    fn len(&self) -> usize {
        ProcessorStructure::len(self)
    }

    fn node_names(&self) -> Vec<&'static str> {
        self.nodes().iter().map(|node| node.name()).collect()
    }
}
