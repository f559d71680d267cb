// Rust guideline compliant 2026-08-12

//! Error types for the covmerge core library.

use thiserror::Error;

/// Result type alias for covmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for covmerge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing or writing error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute.
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Report structure does not match the Cobertura layout.
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// A required attribute is absent from an element.
    #[error("Element <{element}> is missing attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute holds a value that does not parse as a number.
    #[error("Element <{element}> attribute '{attribute}' has invalid number '{value}'")]
    InvalidNumber {
        element: String,
        attribute: String,
        value: String,
    },

    /// Fewer than two reports were supplied to a merge.
    #[error("At least two reports are required to merge, got {0}")]
    InsufficientInput(usize),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
