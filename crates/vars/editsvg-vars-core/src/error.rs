//! Error types for the variables core.
//!
//! Nothing in this core is fatal: extraction recovers from malformed markup
//! by yielding no declarations, and missing attributes fall back to defaults.
//! These variants exist for the internal fallible paths and the one fallible
//! public surface (metadata serialization).

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VarsError {
    /// Document text is not well-formed markup.
    #[error("malformed markup: {0}")]
    Markup(#[from] quick_xml::Error),

    /// A declaration element carries a malformed attribute list.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Metadata could not be serialized for the persistence store.
    #[error("metadata serialization: {0}")]
    Metadata(#[from] serde_json::Error),
}
