//! Boundary validation of API payloads.
//!
//! Everything the presentation layer indexes into without checking is
//! checked here first, so a malformed record fails the fetch instead of the
//! render.

use super::{Envelope, Property};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("property {id} has no images")]
    NoImages { id: i64 },

    #[error("property {id} has no host")]
    MissingHost { id: i64 },
}

/// Which view a payload is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Search result rendered as a card
    Card,
    /// Single record rendered on the detail page
    Detail,
}

/// Check the invariants a view relies on
pub fn validate(property: &Property, kind: PayloadKind) -> Result<(), SchemaError> {
    if property.property_images.is_empty() {
        return Err(SchemaError::NoImages { id: property.id });
    }
    if kind == PayloadKind::Detail && property.host.is_none() {
        return Err(SchemaError::MissingHost { id: property.id });
    }
    Ok(())
}

/// Parse and validate a `{ data: Property[] }` body
pub fn parse_list(body: &[u8]) -> Result<Vec<Property>, SchemaError> {
    let envelope: Envelope<Vec<Property>> = serde_json::from_slice(body)?;
    for property in &envelope.data {
        validate(property, PayloadKind::Card)?;
    }
    Ok(envelope.data)
}

/// Parse and validate a `{ data: Property }` body
pub fn parse_detail(body: &[u8]) -> Result<Property, SchemaError> {
    let envelope: Envelope<Property> = serde_json::from_slice(body)?;
    validate(&envelope.data, PayloadKind::Detail)?;
    Ok(envelope.data)
}
