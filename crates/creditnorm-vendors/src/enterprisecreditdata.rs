use creditnorm_core::{CanonicalField, ParsedPayload, PayloadFormat, RecordDraft, Result, Vendor};

use crate::coerce::{score_or_none, text_or_none};
use crate::VendorAdapter;

/// Adapter for EnterpriseCreditData CSV exports.
///
/// One report per file: only the first data row is read, by column name.
pub struct EnterpriseCreditDataAdapter;

impl VendorAdapter for EnterpriseCreditDataAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::EnterpriseCreditData
    }

    fn expected_format(&self) -> PayloadFormat {
        PayloadFormat::Csv
    }

    fn adapt(&self, payload: &ParsedPayload<'_>) -> Result<RecordDraft> {
        let ParsedPayload::Rows(rows) = payload else {
            return Err(self.shape_mismatch(payload));
        };

        let Some(row) = rows.first() else {
            tracing::debug!(vendor = %self.vendor(), "csv payload has no data rows");
            return Ok(RecordDraft::empty(self.vendor()));
        };

        if rows.len() > 1 {
            tracing::debug!(rows = rows.len(), "reading first row only");
        }

        Ok(RecordDraft {
            business_name: text_or_none(row.get("business_name")),
            tax_id: text_or_none(row.get("tax_id")),
            owner_name: text_or_none(row.get("owner_name")),
            owner_ssn: text_or_none(row.get("owner_ssn")),
            business_credit_score: score_or_none(
                CanonicalField::BusinessCreditScore,
                row.get("business_score"),
            ),
            personal_credit_score: score_or_none(
                CanonicalField::PersonalCreditScore,
                row.get("personal_score"),
            ),
            report_date: text_or_none(row.get("report_date")),
            data_source: self.vendor(),
        })
    }
}
