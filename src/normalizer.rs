//! Normalizer — turns one vendor payload into a [`CanonicalRecord`].
//!
//! The vendor is checked against the allow-list when the normaliser is
//! built; detection, adaptation and validation run on every
//! [`ReportNormalizer::get_report`] call.

use creditnorm_core::config::Config;
use creditnorm_core::{detector, validator};
use creditnorm_core::{CanonicalRecord, NormalizeError, Result, Vendor};
use creditnorm_vendors::AdapterRegistry;

/// Normaliser for a single raw payload from a known vendor.
pub struct ReportNormalizer {
    raw: String,
    vendor: Vendor,
    registry: AdapterRegistry,
}

impl std::fmt::Debug for ReportNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The payload holds personal data; only its size is shown.
        f.debug_struct("ReportNormalizer")
            .field("vendor", &self.vendor)
            .field("payload_bytes", &self.raw.len())
            .finish_non_exhaustive()
    }
}

impl ReportNormalizer {
    /// Build a normaliser accepting every built-in vendor.
    ///
    /// Fails with [`NormalizeError::Config`] when `vendor_id` is unknown.
    pub fn new(raw_data: impl Into<String>, vendor_id: &str) -> Result<Self> {
        Self::with_allow_list(raw_data, vendor_id, &Vendor::ALL)
    }

    /// Build a normaliser that only accepts vendors in `allowed`.
    pub fn with_allow_list(
        raw_data: impl Into<String>,
        vendor_id: &str,
        allowed: &[Vendor],
    ) -> Result<Self> {
        let vendor = Vendor::from_id(vendor_id)
            .filter(|v| allowed.contains(v))
            .ok_or_else(|| {
                tracing::debug!(vendor_id, "vendor rejected by allow-list");
                NormalizeError::unsupported_vendor(vendor_id)
            })?;

        Ok(Self {
            raw: raw_data.into(),
            vendor,
            registry: AdapterRegistry::new(),
        })
    }

    /// Build a normaliser using the allow-list from `config`.
    pub fn with_config(
        raw_data: impl Into<String>,
        vendor_id: &str,
        config: &Config,
    ) -> Result<Self> {
        let allowed = config.allowed_vendors()?;
        Self::with_allow_list(raw_data, vendor_id, &allowed)
    }

    /// Swap in a different adapter registry.
    pub fn with_registry(mut self, registry: AdapterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Detect, adapt and validate the payload.
    ///
    /// The payload is never mutated, so repeated calls return the same
    /// result.
    pub fn get_report(&self) -> Result<CanonicalRecord> {
        let span = tracing::debug_span!("get_report", vendor = %self.vendor);
        let _enter = span.enter();

        let payload = detector::detect(&self.raw)?;
        let draft = self.registry.adapt(self.vendor, &payload)?;
        let record = validator::validate(draft)?;

        tracing::debug!(format = %payload.format(), "report normalised");
        Ok(record)
    }
}

/// One-shot normalisation of `raw_data` for `vendor_id`.
pub fn normalize(raw_data: &str, vendor_id: &str) -> Result<CanonicalRecord> {
    ReportNormalizer::new(raw_data, vendor_id)?.get_report()
}
