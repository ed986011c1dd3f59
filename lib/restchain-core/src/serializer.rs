//! Body serialization collaborator.
//!
//! Every client owns two [`Serializer`]s: one for success bodies and one for
//! error bodies. [`JsonSerializer`] is the bundled implementation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

// ============================================================================
// Format
// ============================================================================

/// Wire format produced and consumed by a serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Format {
    /// JSON (`application/json`).
    #[display("json")]
    Json,
    /// XML (`application/xml`).
    #[display("xml")]
    Xml,
    /// Form fields (`application/x-www-form-urlencoded`).
    #[display("dictionary")]
    Dictionary,
}

impl Format {
    /// Get the MIME type string.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Dictionary => "application/x-www-form-urlencoded",
        }
    }
}

// ============================================================================
// Serializer
// ============================================================================

/// Encodes request bodies and decodes response bodies.
pub trait Serializer: Clone + Send + Sync + 'static {
    /// Tunables of this serializer.
    type Settings: Clone + Send + Sync;

    /// Wire format.
    fn format(&self) -> Format;

    /// Current settings.
    fn settings(&self) -> &Self::Settings;

    /// Replace the settings.
    fn apply_settings(&mut self, settings: Self::Settings);

    /// Encode a value into a body string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded.
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    /// Decode a body string, failing on any mismatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not match `T`.
    fn deserialize<T: DeserializeOwned>(&self, body: &str) -> Result<T>;

    /// Decode a body string, returning `None` on any mismatch.
    fn try_deserialize<T: DeserializeOwned>(&self, body: &str) -> Option<T> {
        match self.deserialize(body) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!(
                    target_type = std::any::type_name::<T>(),
                    error = %err,
                    "body does not match target type"
                );
                None
            }
        }
    }
}

// ============================================================================
// JSON
// ============================================================================

/// How `null` values in a document are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullHandling {
    /// `null` is accepted wherever the target type accepts it.
    #[default]
    Allow,
    /// Any `null` in the document is an error.
    Reject,
}

/// How object members the target type does not declare are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Unknown members are skipped.
    #[default]
    Allow,
    /// Any unknown member is an error.
    Reject,
}

/// Settings of a [`JsonSerializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonSettings {
    /// Null handling when decoding.
    pub nulls: NullHandling,
    /// Unknown member handling when decoding.
    pub unknown_fields: UnknownFields,
    /// Indent encoded bodies.
    pub pretty: bool,
}

impl JsonSettings {
    /// Default settings: nulls and unknown members allowed, compact output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nulls: NullHandling::Allow,
            unknown_fields: UnknownFields::Allow,
            pretty: false,
        }
    }

    /// Reject documents containing `null`.
    #[must_use]
    pub const fn reject_nulls(mut self) -> Self {
        self.nulls = NullHandling::Reject;
        self
    }

    /// Reject documents with members the target type does not declare.
    #[must_use]
    pub const fn reject_unknown_fields(mut self) -> Self {
        self.unknown_fields = UnknownFields::Reject;
        self
    }

    /// Reject both `null` and unknown members.
    #[must_use]
    pub const fn strict(self) -> Self {
        self.reject_nulls().reject_unknown_fields()
    }

    /// Indent encoded bodies.
    #[must_use]
    pub const fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

/// JSON serializer backed by `serde_json`, with path-aware decode errors.
///
/// # Example
///
/// ```
/// use restchain_core::{JsonSerializer, Serializer};
///
/// let json = JsonSerializer::new();
/// let value: Vec<u32> = json.deserialize("[1, 2, 3]").unwrap();
/// assert_eq!(value, vec![1, 2, 3]);
/// assert_eq!(json.try_deserialize::<u32>("\"nope\""), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    settings: JsonSettings,
}

impl JsonSerializer {
    /// JSON serializer with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            settings: JsonSettings::new(),
        }
    }

    /// JSON serializer with the given settings.
    #[must_use]
    pub const fn with_settings(settings: JsonSettings) -> Self {
        Self { settings }
    }

    /// Decode with path-aware errors, tracking members `T` skips.
    fn decode<'de, D, T>(&self, deserializer: D) -> Result<T>
    where
        D: serde::Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let mut unknown = None;
        let mut track = |path: serde_ignored::Path<'_>| {
            unknown.get_or_insert_with(|| path.to_string());
        };
        let value = serde_path_to_error::deserialize(serde_ignored::Deserializer::new(
            deserializer,
            &mut track,
        ))
        .map_err(|err| {
            Error::json_deserialization(err.path().to_string(), err.inner().to_string())
        })?;

        match unknown {
            Some(path) if self.settings.unknown_fields == UnknownFields::Reject => {
                Err(Error::json_deserialization(path, "unknown field"))
            }
            Some(path) => {
                tracing::trace!(%path, "skipping unknown field");
                Ok(value)
            }
            None => Ok(value),
        }
    }
}

impl Serializer for JsonSerializer {
    type Settings = JsonSettings;

    fn format(&self) -> Format {
        Format::Json
    }

    fn settings(&self) -> &JsonSettings {
        &self.settings
    }

    fn apply_settings(&mut self, settings: JsonSettings) {
        self.settings = settings;
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let body = if self.settings.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(body)
    }

    fn deserialize<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        if self.settings.nulls == NullHandling::Allow {
            let mut deserializer = serde_json::Deserializer::from_str(body);
            let value = self.decode(&mut deserializer)?;
            deserializer
                .end()
                .map_err(|err| Error::json_deserialization(".", err.to_string()))?;
            return Ok(value);
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|err| Error::json_deserialization(".", err.to_string()))?;
        if let Some(path) = first_null(&value, "") {
            return Err(Error::json_deserialization(path, "null value is not allowed"));
        }
        self.decode(value)
    }
}

/// Path of the first `null` in document order, using `serde_path_to_error` notation.
fn first_null(value: &Value, path: &str) -> Option<String> {
    match value {
        Value::Null => Some(if path.is_empty() {
            ".".to_string()
        } else {
            path.to_string()
        }),
        Value::Array(items) => items.iter().enumerate().find_map(|(index, item)| {
            first_null(item, &format!("{path}[{index}]"))
        }),
        Value::Object(fields) => fields.iter().find_map(|(name, field)| {
            let child = if path.is_empty() {
                name.clone()
            } else {
                format!("{path}.{name}")
            };
            first_null(field, &child)
        }),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Address {
        city: String,
        zip: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct User {
        name: String,
        address: Address,
    }

    #[test]
    fn format_content_type() {
        check!(Format::Json.content_type() == "application/json");
        check!(Format::Xml.content_type() == "application/xml");
        check!(Format::Dictionary.content_type() == "application/x-www-form-urlencoded");
        check!(Format::Json.to_string() == "json");
    }

    #[test]
    fn json_roundtrip_compact_and_pretty() {
        let user = User {
            name: "Alice".to_string(),
            address: Address {
                city: "Montevideo".to_string(),
                zip: None,
            },
        };

        let compact = JsonSerializer::new();
        let_assert!(Ok(body) = compact.serialize(&user));
        check!(body == r#"{"name":"Alice","address":{"city":"Montevideo","zip":null}}"#);

        let pretty = JsonSerializer::with_settings(JsonSettings::new().pretty());
        let_assert!(Ok(body) = pretty.serialize(&user));
        check!(body.contains('\n'));
        let_assert!(Ok(decoded) = pretty.deserialize::<User>(&body));
        check!(decoded == user);
    }

    #[test]
    fn json_error_has_path() {
        let json = JsonSerializer::new();
        let_assert!(
            Err(Error::JsonDeserialization { path, .. }) =
                json.deserialize::<User>(r#"{"name":"Alice","address":{"zip":"11000"}}"#)
        );
        check!(path == "address");
    }

    #[test]
    fn json_reject_nulls() {
        let body = r#"{"name":"Alice","address":{"city":"Paris","zip":null}}"#;

        let lenient = JsonSerializer::new();
        let_assert!(Ok(user) = lenient.deserialize::<User>(body));
        check!(user.address.zip.is_none());

        let strict = JsonSerializer::with_settings(JsonSettings::new().reject_nulls());
        let_assert!(Err(Error::JsonDeserialization { path, message }) = strict.deserialize::<User>(body));
        check!(path == "address.zip");
        check!(message == "null value is not allowed");
        check!(strict.try_deserialize::<User>(body).is_none());
    }

    #[test]
    fn json_reject_nulls_in_arrays() {
        let strict = JsonSerializer::with_settings(JsonSettings::new().reject_nulls());
        let_assert!(
            Err(Error::JsonDeserialization { path, .. }) =
                strict.deserialize::<Vec<Option<u32>>>("[1, null]")
        );
        check!(path == "[1]");
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Point {
        x: i32,
    }

    #[test]
    fn json_reject_unknown_fields() {
        let body = r#"{"x":1,"extra":2}"#;

        let lenient = JsonSerializer::new();
        let_assert!(Ok(point) = lenient.deserialize::<Point>(body));
        check!(point == Point { x: 1 });

        let strict = JsonSerializer::with_settings(JsonSettings::new().reject_unknown_fields());
        let_assert!(Err(Error::JsonDeserialization { path, message }) = strict.deserialize::<Point>(body));
        check!(path == "extra");
        check!(message == "unknown field");
        check!(strict.try_deserialize::<Point>(body).is_none());
        check!(strict.try_deserialize::<Point>(r#"{"x":1}"#) == Some(Point { x: 1 }));
    }

    #[test]
    fn json_reject_nested_unknown_fields() {
        let body = r#"{"name":"Alice","address":{"city":"Lyon","zip":null,"floor":3}}"#;

        let strict = JsonSerializer::with_settings(JsonSettings::new().reject_unknown_fields());
        let_assert!(Err(Error::JsonDeserialization { path, .. }) = strict.deserialize::<User>(body));
        check!(path == "address.floor");

        let stricter = JsonSerializer::with_settings(JsonSettings::new().strict());
        let_assert!(Err(Error::JsonDeserialization { message, .. }) = stricter.deserialize::<User>(body));
        check!(message == "null value is not allowed");
    }

    #[test]
    fn json_rejects_trailing_characters() {
        let json = JsonSerializer::new();
        check!(json.try_deserialize::<i32>("10 20").is_none());
    }

    #[test]
    fn json_try_deserialize() {
        let json = JsonSerializer::new();
        check!(json.try_deserialize::<i32>("10") == Some(10));
        check!(json.try_deserialize::<i32>("GenericError").is_none());
        check!(json.try_deserialize::<i32>("").is_none());
    }

    #[test]
    fn apply_settings_replaces_settings() {
        let mut json = JsonSerializer::new();
        check!(json.settings().nulls == NullHandling::Allow);
        json.apply_settings(JsonSettings::new().reject_nulls());
        check!(json.settings().nulls == NullHandling::Reject);
        check!(json.settings().unknown_fields == UnknownFields::Allow);
        check!(JsonSettings::new().strict().unknown_fields == UnknownFields::Reject);
        check!(json.format() == Format::Json);
    }
}
