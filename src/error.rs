//! Error types for DCAT export operations.
//!
//! This module provides the [`DcatError`] type for all mapping, parsing and
//! serialization operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all DCAT export operations.
///
/// Data-quality problems in records never surface here; they degrade to a
/// sparser graph. Only collaborator failures and serialization problems do.
#[derive(Error, Debug)]
pub enum DcatError {
    /// The organization lookup collaborator has no record for this identifier.
    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    /// A record could not be decoded into its typed form.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Error while parsing or building RDF terms.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`DcatError`].
pub type Result<T> = std::result::Result<T, DcatError>;
