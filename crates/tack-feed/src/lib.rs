//! Tolerant decoding of JSON API documents.
//!
//! This library decodes documents of the shape `{ "field": [record, ...] }`
//! where individual records may be malformed. Instead of failing the whole
//! document, extraction skips bad records and reports each problem as a
//! [`Warning`], so callers can log and continue with whatever survived.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod warning;

pub use document::{Document, Extracted};
pub use error::{Error, Result};
pub use warning::Warning;
