//! Validator — the only way a [`RecordDraft`] becomes a [`CanonicalRecord`].
//!
//! A field is missing when it is absent or, rendered as text, blank. Numeric
//! zero is a value, not a gap.

use crate::error::{NormalizeError, Result};
use crate::types::{CanonicalField, CanonicalRecord, RecordDraft};

/// Fields of `draft` that are absent or blank, in declaration order.
pub fn missing_fields(draft: &RecordDraft) -> Vec<CanonicalField> {
    CanonicalField::ALL
        .into_iter()
        .filter(|field| {
            draft
                .text_of(*field)
                .map_or(true, |text| text.trim().is_empty())
        })
        .collect()
}

/// Check `draft` for completeness and promote it to a [`CanonicalRecord`].
///
/// Fails with [`NormalizeError::MissingFields`] naming every offending field.
pub fn validate(draft: RecordDraft) -> Result<CanonicalRecord> {
    let missing = missing_fields(&draft);
    if !missing.is_empty() {
        tracing::debug!(
            vendor = %draft.data_source,
            missing = ?missing.iter().map(CanonicalField::name).collect::<Vec<_>>(),
            "record incomplete"
        );
        return Err(NormalizeError::MissingFields(missing));
    }

    match draft {
        RecordDraft {
            business_name: Some(business_name),
            tax_id: Some(tax_id),
            owner_name: Some(owner_name),
            owner_ssn: Some(owner_ssn),
            business_credit_score: Some(business_credit_score),
            personal_credit_score: Some(personal_credit_score),
            report_date: Some(report_date),
            data_source,
        } => Ok(CanonicalRecord::new(
            business_name,
            tax_id,
            owner_name,
            owner_ssn,
            business_credit_score,
            personal_credit_score,
            report_date,
            data_source,
        )),
        // Every absent field was reported above.
        draft => Err(NormalizeError::MissingFields(missing_fields(&draft))),
    }
}
