//! Typed errors for the docintel library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the exact failure mode and surface a precise message.

use thiserror::Error;

/// Failure modes of the raw-JSON schema import surface.
///
/// Import text is user-supplied and arbitrary; the three shape failures are
/// kept distinct so the shell can tell the user what to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaImportError {
    /// The text is not well-formed JSON; carries the parser diagnostic
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// No accepted envelope contained a `properties` object
    #[error("schema has no \"properties\" object")]
    MissingProperties,

    /// A `properties` object exists but holds zero entries
    #[error("schema defines no fields")]
    EmptySchema,
}

/// Validation failures surfaced to the user before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Every authored field was blank; there is nothing to request.
    ///
    /// `build` reports this structurally (an empty `valid_fields`); the
    /// caller converts it into this error when blocking submission.
    #[error("add at least one field with both a name and a description")]
    NoValidFields,
}
