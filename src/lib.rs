//! creditnorm — vendor credit report normaliser.
//!
//! Takes a credit report payload from one of several third-party vendors
//! (JSON, XML or CSV, each with its own field layout) and produces one
//! canonical eight-field record, or a descriptive error. This crate exposes
//! the orchestration layer and re-exports the core types so integration tests
//! and the CLI can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! ReportNormalizer ──► detector ──► AdapterRegistry ──► validator
//!   (allow-list)      (core)        (vendors)          (core)
//! ```
//!
//! Everything is synchronous and stateless across calls. Fetching payloads
//! and persisting records belong to the caller.
//!
//! # Example
//!
//! ```
//! use creditnorm::ReportNormalizer;
//!
//! let csv = "business_name,tax_id,owner_name,owner_ssn,business_score,personal_score,report_date\n\
//!            Joe's Pizza LLC,12-3456789,Joseph Smith,123-45-6789,720,680,2025-01-15\n";
//! let record = ReportNormalizer::new(csv, "enterprisecreditdata")?.get_report()?;
//! assert_eq!(record.business_credit_score(), 720);
//! # Ok::<(), creditnorm::NormalizeError>(())
//! ```

pub mod normalizer;

pub use creditnorm_core::config::Config;
pub use creditnorm_core::{
    CanonicalField, CanonicalRecord, NormalizeError, ParsedPayload, PayloadFormat, RecordDraft,
    Result, Vendor,
};
pub use creditnorm_vendors::{AdapterRegistry, VendorAdapter};
pub use normalizer::{normalize, ReportNormalizer};
