//! Warning types for non-fatal problems during document extraction.
//!
//! When extracting records from an API document, it is usually better to
//! keep the records that decode cleanly than to reject the whole payload
//! because one element is malformed. The [`Warning`] type represents these
//! non-fatal problems so callers can report them and continue.
//!
//! # Examples
//!
//! ```
//! use tack_feed::warning::Warning;
//!
//! let warning = Warning::MalformedRecord {
//!     field: "tickets".to_string(),
//!     index: 3,
//!     error: "missing field `title`".to_string(),
//! };
//! assert_eq!(warning.field(), "tickets");
//! assert!(warning.description().contains("index 3"));
//! ```

/// A non-fatal problem encountered while extracting records from a document.
///
/// Each variant names the document field it concerns; malformed records also
/// carry the 0-based index of the offending element for debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The named field was absent from the document.
    ///
    /// Extraction yields an empty sequence and processing continues.
    MissingField {
        /// The field that was expected.
        field: String,
    },

    /// The named field was present but was not a JSON array.
    ///
    /// Extraction yields an empty sequence and processing continues.
    NotAnArray {
        /// The field with the unexpected shape.
        field: String,
        /// The JSON type that was actually found.
        found: &'static str,
    },

    /// An element of the named array field could not be decoded.
    ///
    /// The element is skipped; the remaining elements are still extracted.
    MalformedRecord {
        /// The array field containing the element.
        field: String,
        /// The 0-based index of the element within the array.
        index: usize,
        /// A description of the decode error.
        error: String,
    },
}

impl Warning {
    /// Returns the document field this warning concerns.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::NotAnArray { field, .. }
            | Self::MalformedRecord { field, .. } => field,
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MissingField { field } => {
                format!("field '{field}' is missing from the document")
            }
            Self::NotAnArray { field, found } => {
                format!("field '{field}' is not an array (found {found})")
            }
            Self::MalformedRecord {
                field,
                index,
                error,
            } => {
                format!("skipped malformed record in '{field}' at index {index}: {error}")
            }
        }
    }
}
