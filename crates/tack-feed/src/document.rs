//! Document parsing and record extraction.
//!
//! A [`Document`] wraps a parsed JSON object. Record extraction via
//! [`Document::records`] decodes each array element independently so a single
//! malformed record cannot poison the rest of the payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::warning::Warning;

/// The result of extracting records from a document field.
///
/// Holds the records that decoded cleanly, in input order, together with the
/// warnings produced along the way.
#[derive(Debug, Clone)]
pub struct Extracted<T> {
    /// Records that decoded successfully, in input order.
    pub records: Vec<T>,
    /// Non-fatal problems encountered during extraction.
    pub warnings: Vec<Warning>,
}

impl<T> Extracted<T> {
    fn empty_with(warning: Warning) -> Self {
        Self {
            records: Vec::new(),
            warnings: vec![warning],
        }
    }

    /// Returns `true` if extraction produced any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A parsed JSON API document.
///
/// Parsing only fails when the input is not JSON at all or when the root is
/// not an object; everything below the root is handled tolerantly by
/// [`Document::records`].
#[derive(Debug, Clone)]
pub struct Document {
    root: serde_json::Map<String, Value>,
}

impl Document {
    /// Parse a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not valid JSON, or
    /// [`Error::NotAnObject`] if the root value is not a JSON object.
    pub fn parse(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::NotAnObject(json_type_name(&other))),
        }
    }

    /// Returns `true` if the document contains the named field.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.root.contains_key(field)
    }

    /// Extract the named field as a sequence of records.
    ///
    /// Decoding is tolerant: a missing field or a field that is not an array
    /// yields an empty sequence plus a warning, and each array element that
    /// fails to decode is skipped with a warning while the rest are kept.
    /// Surviving records preserve their input order.
    #[must_use]
    pub fn records<T: DeserializeOwned>(&self, field: &str) -> Extracted<T> {
        let Some(value) = self.root.get(field) else {
            return Extracted::empty_with(Warning::MissingField {
                field: field.to_string(),
            });
        };

        let Value::Array(elements) = value else {
            return Extracted::empty_with(Warning::NotAnArray {
                field: field.to_string(),
                found: json_type_name(value),
            });
        };

        let mut records = Vec::with_capacity(elements.len());
        let mut warnings = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            match T::deserialize(element) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let warning = Warning::MalformedRecord {
                        field: field.to_string(),
                        index,
                        error: e.to_string(),
                    };
                    tracing::warn!(field, index, "{}", warning.description());
                    warnings.push(warning);
                }
            }
        }

        Extracted { records, warnings }
    }
}

/// Name of a JSON value's type, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
