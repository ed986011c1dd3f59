//! Standard node library.
//!
//! | Node | Applies when | Produces |
//! |---|---|---|
//! | [`SuccessProcessor`] | 2xx and the child applies | child result |
//! | [`ErrorProcessor`] | not 2xx and the child applies | child result, decoded with the error serializer |
//! | [`OptionAsNotFoundProcessor`] | 404 or the child applies | `None` on 404, else `Some(child)` |
//! | [`UnitAsSuccessProcessor`] | 2xx | `()` |
//! | [`BoolAsNotFoundProcessor`] | 404 or 2xx | `false` on 404 |
//! | [`TryContentDeserializationProcessor`] | always | `Option<T>` |
//! | [`ContentDeserializationProcessor`] | always | `T` or a deserialization error |
//! | [`ErrorConverterProcessor`] | the child applies | business error built by a provider |
//! | [`ExceptionProcessor`] | the child applies | always an error built by a provider |
//! | [`EitherProcessor`] | right or left applies | [`Either`](crate::Either) |
//! | [`IdentityProcessor`] | the child applies | child result |
//! | [`VoidProcessor`] | never | contract violation |

mod content;
mod converter;
mod either;
mod error;
mod exception;
mod neutral;
mod option;
mod status;
mod success;

pub use content::{ContentDeserializationProcessor, TryContentDeserializationProcessor};
pub use converter::ErrorConverterProcessor;
pub use either::{EitherProcessor, EitherRestErrorProcessor};
pub use error::ErrorProcessor;
pub use exception::{ExceptionProcessor, RestExceptionProcessor};
pub use neutral::{IdentityProcessor, VoidProcessor};
pub use option::OptionAsNotFoundProcessor;
pub use status::{BoolAsNotFoundProcessor, UnitAsSuccessProcessor};
pub use success::SuccessProcessor;
