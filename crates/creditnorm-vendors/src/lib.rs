//! creditnorm-vendors — per-vendor payload adapters for creditnorm.
//!
//! Each adapter reads one vendor's field layout out of a detected
//! [`ParsedPayload`] and produces a [`RecordDraft`] for validation. Adapters
//! are selected by vendor, never by payload shape; an adapter handed the
//! wrong shape reports [`NormalizeError::ShapeMismatch`].

pub mod bizcreditplus;
pub mod coerce;
pub mod creditscore360;
pub mod enterprisecreditdata;

use std::collections::HashMap;

use creditnorm_core::{NormalizeError, ParsedPayload, PayloadFormat, RecordDraft, Result, Vendor};

pub use bizcreditplus::BizCreditPlusAdapter;
pub use creditscore360::CreditScore360Adapter;
pub use enterprisecreditdata::EnterpriseCreditDataAdapter;

/// Trait implemented by each vendor adapter.
pub trait VendorAdapter: Send + Sync {
    /// Vendor whose layout this adapter reads.
    fn vendor(&self) -> Vendor;

    /// Payload shape the adapter accepts.
    fn expected_format(&self) -> PayloadFormat;

    /// Extract a draft record. Absent or blank values stay `None`.
    fn adapt(&self, payload: &ParsedPayload<'_>) -> Result<RecordDraft>;

    /// The mismatch error for a payload this adapter cannot read.
    fn shape_mismatch(&self, payload: &ParsedPayload<'_>) -> NormalizeError {
        NormalizeError::ShapeMismatch {
            vendor: self.vendor(),
            expected: self.expected_format(),
            found: payload.format(),
        }
    }
}

// ---------------------------------------------------------------------------
// AdapterRegistry
// ---------------------------------------------------------------------------

/// Registry of vendor adapters, keyed by vendor.
pub struct AdapterRegistry {
    adapters: HashMap<Vendor, Box<dyn VendorAdapter>>,
}

impl AdapterRegistry {
    /// A registry holding the built-in adapter for every [`Vendor`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CreditScore360Adapter));
        registry.register(Box::new(BizCreditPlusAdapter));
        registry.register(Box::new(EnterpriseCreditDataAdapter));
        registry
    }

    /// A registry with no adapters.
    pub fn empty() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Register `adapter`, replacing any adapter for the same vendor.
    pub fn register(&mut self, adapter: Box<dyn VendorAdapter>) {
        self.adapters.insert(adapter.vendor(), adapter);
    }

    pub fn get(&self, vendor: Vendor) -> Option<&dyn VendorAdapter> {
        self.adapters.get(&vendor).map(|a| a.as_ref())
    }

    /// Run the adapter registered for `vendor` over `payload`.
    pub fn adapt(&self, vendor: Vendor, payload: &ParsedPayload<'_>) -> Result<RecordDraft> {
        let adapter = self
            .get(vendor)
            .ok_or_else(|| NormalizeError::unsupported_vendor(vendor.id()))?;
        tracing::debug!(
            vendor = %vendor,
            expected = %adapter.expected_format(),
            found = %payload.format(),
            "adapting payload"
        );
        adapter.adapt(payload)
    }

    /// Registered vendors, sorted.
    pub fn vendors(&self) -> Vec<Vendor> {
        let mut vendors: Vec<Vendor> = self.adapters.keys().copied().collect();
        vendors.sort();
        vendors
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
