//! creditnorm-core — vendor credit report normalisation core library.
//!
//! This crate holds everything the vendor adapters and the orchestrating
//! normaliser share: the canonical types, the payload shapes, format
//! detection, null-safe lookups, validation and configuration.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► detector ──► ParsedPayload ──► adapter ──► RecordDraft ──► validator ──► CanonicalRecord
//! ```
//!
//! Adapters live in `creditnorm-vendors`; the orchestration lives in the
//! `creditnorm` crate.

pub mod config;
pub mod detector;
pub mod error;
pub mod lookup;
pub mod payload;
pub mod types;
pub mod validator;

pub use error::{NormalizeError, Result};
pub use payload::{ParsedPayload, Row, RowSequence};
pub use types::{CanonicalField, CanonicalRecord, PayloadFormat, RecordDraft, Vendor};
