//! # Chapter 2: Errors & Serializers
//!
//! ## Raised errors
//!
//! Unhandled error responses become [`Error::Rest`](crate::Error::Rest):
//!
//! ```ignore
//! match client.get::<Repo>("repos/private").get_result().await {
//!     Ok(repo) => println!("{repo:?}"),
//!     Err(err) => {
//!         if let Some(http_error) = err.rest_error() {
//!             println!("{} {:?}", http_error.status_code, http_error.message);
//!         }
//!     }
//! }
//! ```
//!
//! A timeout is a response with status 0 and an error message, so it goes
//! through the same processors and usually ends up raised the same way.
//!
//! ## Serializer settings
//!
//! Each request gets its own copies of the client's serializers. Settings
//! only affect the request they are applied to:
//!
//! ```ignore
//! let repo: Repo = client
//!     .get("repos/restchain")
//!     .with_settings(JsonSettings::new().strict())
//!     .with_error_settings(JsonSettings::new())
//!     .get_result()
//!     .await?;
//! ```
//!
//! Error documents are always decoded with the error serializer. By default it
//! rejects members the error type does not declare, while the success
//! serializer skips them.
//!
//! ## Custom exceptions
//!
//! The exception terminal comes from the client's
//! [`TerminalFactory`](crate::TerminalFactory). Provide your own to raise
//! domain errors:
//!
//! ```ignore
//! struct ApiTerminal;
//!
//! impl TerminalFactory<JsonSerializer> for ApiTerminal {
//!     fn terminal<T>(&self) -> Box<dyn ProcessorNode<T, JsonSerializer>>
//!     where
//!         T: DeserializeOwned + 'static,
//!     {
//!         Box::new(
//!             ExceptionProcessor::<T, RestBusinessError, Error>::new(|error| {
//!                 Error::business(ApiError::from(error))
//!             })
//!             .with_defaults(RestErrorConverterProvider),
//!         )
//!     }
//! }
//!
//! let client = RestClient::with_serializers(
//!     transport,
//!     host,
//!     JsonSerializer::new(),
//!     JsonSerializer::new(),
//!     ApiTerminal,
//! );
//! ```
