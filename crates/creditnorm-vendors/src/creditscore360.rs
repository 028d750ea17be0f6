use creditnorm_core::lookup::lookup;
use creditnorm_core::{CanonicalField, ParsedPayload, PayloadFormat, RecordDraft, Result, Vendor};

use crate::coerce::{json_score, json_text};
use crate::VendorAdapter;

/// Adapter for CreditScore360 JSON reports.
///
/// Fields live under two nested objects, `business_info` (with an `owner`
/// sub-object) and `credit_data`. Scores arrive as JSON numbers.
pub struct CreditScore360Adapter;

impl VendorAdapter for CreditScore360Adapter {
    fn vendor(&self) -> Vendor {
        Vendor::CreditScore360
    }

    fn expected_format(&self) -> PayloadFormat {
        PayloadFormat::Json
    }

    fn adapt(&self, payload: &ParsedPayload<'_>) -> Result<RecordDraft> {
        let ParsedPayload::Tree(tree) = payload else {
            return Err(self.shape_mismatch(payload));
        };

        let text = |path: &[&str]| json_text(lookup(tree, path));

        Ok(RecordDraft {
            business_name: text(&["business_info", "business_name"]),
            tax_id: text(&["business_info", "tax_id"]),
            owner_name: text(&["business_info", "owner", "name"]),
            owner_ssn: text(&["business_info", "owner", "ssn"]),
            business_credit_score: json_score(
                CanonicalField::BusinessCreditScore,
                lookup(tree, &["credit_data", "business_score"]),
            ),
            personal_credit_score: json_score(
                CanonicalField::PersonalCreditScore,
                lookup(tree, &["credit_data", "personal_score"]),
            ),
            report_date: text(&["credit_data", "report_date"]),
            data_source: self.vendor(),
        })
    }
}
