use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{Error, NodeKind, NodeRole, ProcessorNode, Response, Result, Serializer};

/// Decodes the body as `T`, yielding `None` when it does not match.
pub struct TryContentDeserializationProcessor<T>(PhantomData<fn() -> T>);

impl<T> TryContentDeserializationProcessor<T> {
    /// Creates the processor.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TryContentDeserializationProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> ProcessorNode<Option<T>, S> for TryContentDeserializationProcessor<T>
where
    T: DeserializeOwned,
    S: Serializer,
{
    fn can_process(&self, _response: &Response) -> bool {
        true
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<Option<T>> {
        Ok(serializer.try_deserialize(response.body()))
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Simple
    }
}

/// Decodes the body as `T`, failing when it does not match.
pub struct ContentDeserializationProcessor<T> {
    inner: TryContentDeserializationProcessor<T>,
}

impl<T> ContentDeserializationProcessor<T> {
    /// Creates the processor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: TryContentDeserializationProcessor::new(),
        }
    }
}

impl<T> Default for ContentDeserializationProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> ProcessorNode<T, S> for ContentDeserializationProcessor<T>
where
    T: DeserializeOwned,
    S: Serializer,
{
    fn can_process(&self, response: &Response) -> bool {
        ProcessorNode::<Option<T>, S>::can_process(&self.inner, response)
    }

    fn process(&self, response: &Response, serializer: &S) -> Result<T> {
        self.inner
            .process(response, serializer)?
            .ok_or_else(|| Error::serialization::<T>(response.body()))
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Simple
    }

    fn role(&self) -> NodeRole {
        NodeRole::StrictContent
    }
}
