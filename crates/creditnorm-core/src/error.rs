//! Error taxonomy for report normalisation.
//!
//! Every failure is deterministic, so nothing here is retried. Errors surface
//! synchronously to whoever called the normaliser.

use thiserror::Error;

use crate::types::{CanonicalField, PayloadFormat, Vendor};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Vendor identifier is unknown or not on the allow-list.
    #[error("Vendor not supported: {0}")]
    Config(String),

    /// Payload is neither JSON, XML nor parseable CSV.
    #[error("Unsupported data format")]
    UnsupportedFormat,

    /// An adapter was handed a payload variant it cannot read.
    #[error("{vendor} expects a {expected} payload, got {found}")]
    ShapeMismatch {
        vendor: Vendor,
        expected: PayloadFormat,
        found: PayloadFormat,
    },

    /// One or more required fields were absent or blank after adaptation.
    ///
    /// A score the vendor sent in an unusable form (a JSON string or a
    /// fractional number for CreditScore360) counts as absent and is listed
    /// here too.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<CanonicalField>),
}

impl NormalizeError {
    pub fn unsupported_vendor(id: &str) -> Self {
        NormalizeError::Config(id.to_string())
    }

    /// Fields named by a [`NormalizeError::MissingFields`]; empty otherwise.
    pub fn missing_fields(&self) -> &[CanonicalField] {
        match self {
            NormalizeError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(CanonicalField::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
