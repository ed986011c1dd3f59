//! # Chapter 1: Processors
//!
//! Processors are tried in the order they were added; the first one that
//! accepts the response produces the result. Anything they leave is handled
//! by the defaults.
//!
//! ## Not found
//!
//! ```ignore
//! let repo: Option<Repo> = client
//!     .get("repos/unknown")
//!     .with_processor(OptionAsNotFoundProcessor::new())
//!     .get_result()
//!     .await?;
//! ```
//!
//! [`BoolAsNotFoundProcessor`](crate::BoolAsNotFoundProcessor) answers
//! `false` on 404 and `true` on any success.
//!
//! ## No content
//!
//! ```ignore
//! client.delete_unit("repos/old").await?;
//!
//! // same as
//! client
//!     .delete::<()>("repos/old")
//!     .with_processor(UnitAsSuccessProcessor)
//!     .get_result()
//!     .await?;
//! ```
//!
//! ## Business errors as values
//!
//! An [`Either`](crate::Either) keeps business errors on the left:
//!
//! ```ignore
//! let outcome: Either<RestBusinessError, Repo> = client
//!     .post("repos", NewRepo { name: "" })
//!     .with_processor(EitherRestErrorProcessor::rest())
//!     .get_result()
//!     .await?;
//!
//! match outcome {
//!     Either::Left(error) => println!("rejected: {}", error.message),
//!     Either::Right(repo) => println!("created {}", repo.name),
//! }
//! ```
//!
//! Processors nest. Here a 404 is `Right(None)`:
//!
//! ```ignore
//! let outcome: Either<RestBusinessError, Option<Repo>> = client
//!     .get("repos/unknown")
//!     .with_processor(
//!         EitherRestErrorProcessor::rest().with_processor(OptionAsNotFoundProcessor::new()),
//!     )
//!     .get_result()
//!     .await?;
//! ```
//!
//! ## Writing a processor
//!
//! Implement [`ProcessorNode`](crate::ProcessorNode):
//!
//! ```ignore
//! struct RetryAfter;
//!
//! impl ProcessorNode<Option<u64>> for RetryAfter {
//!     fn can_process(&self, response: &Response) -> bool {
//!         response.status() == 429
//!     }
//!
//!     fn process(&self, response: &Response, _: &JsonSerializer) -> Result<Option<u64>> {
//!         Ok(response.header("retry-after").and_then(|value| value.parse().ok()))
//!     }
//!
//!     fn kind(&mut self) -> NodeKind<'_, JsonSerializer> {
//!         NodeKind::Simple
//!     }
//! }
//! ```
//!
//! Next: [Chapter 2: Errors & Serializers](super::chapter_2)
