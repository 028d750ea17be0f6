use creditnorm_core::lookup::select_text;
use creditnorm_core::{CanonicalField, ParsedPayload, PayloadFormat, RecordDraft, Result, Vendor};

use crate::coerce::{score_or_none, text_or_none};
use crate::VendorAdapter;

/// Adapter for BizCreditPlus XML reports.
///
/// Values are element text under `business_info` and `credit_data`, wherever
/// those sections sit in the document. Every value is text, so scores go
/// through a leading-integer read.
pub struct BizCreditPlusAdapter;

impl VendorAdapter for BizCreditPlusAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::BizCreditPlus
    }

    fn expected_format(&self) -> PayloadFormat {
        PayloadFormat::Xml
    }

    fn adapt(&self, payload: &ParsedPayload<'_>) -> Result<RecordDraft> {
        let ParsedPayload::Xml(doc) = payload else {
            return Err(self.shape_mismatch(payload));
        };

        let business = |path: &[&str]| select_text(doc, "business_info", path);
        let credit = |name: &str| select_text(doc, "credit_data", &[name]);

        Ok(RecordDraft {
            business_name: text_or_none(business(&["business_name"]).as_deref()),
            tax_id: text_or_none(business(&["tax_id"]).as_deref()),
            owner_name: text_or_none(business(&["owner", "name"]).as_deref()),
            owner_ssn: text_or_none(business(&["owner", "ssn"]).as_deref()),
            business_credit_score: score_or_none(
                CanonicalField::BusinessCreditScore,
                credit("business_score").as_deref(),
            ),
            personal_credit_score: score_or_none(
                CanonicalField::PersonalCreditScore,
                credit("personal_score").as_deref(),
            ),
            report_date: text_or_none(credit("report_date").as_deref()),
            data_source: self.vendor(),
        })
    }
}
