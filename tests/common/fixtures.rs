//! Static payload corpora used across harnesses.
//!
//! The complete reports live under `tests/fixtures/` so the CLI harness can
//! point the binary at real files; the incomplete ones are inline.

use creditnorm::Vendor;

/// Complete CreditScore360 report (pretty-printed JSON).
pub const JSON_REPORT: &str = include_str!("../fixtures/credit_report.json");

/// Complete BizCreditPlus report (XML with prolog).
pub const XML_REPORT: &str = include_str!("../fixtures/credit_report.xml");

/// Complete EnterpriseCreditData report (CSV, one data row).
pub const CSV_REPORT: &str = include_str!("../fixtures/credit_report.csv");

/// The canonical single-line JSON report.
pub const JSON_REPORT_COMPACT: &str = r#"{"business_info":{"business_name":"Joe's Pizza LLC","tax_id":"12-3456789","owner":{"name":"Joseph Smith","ssn":"123-45-6789"}},"credit_data":{"business_score":720,"personal_score":680,"report_date":"2025-01-15"}}"#;

/// JSON with only the business name present.
pub const JSON_INCOMPLETE: &str = r#"{"business_info": {"business_name": "Joe's Pizza LLC"}}"#;

/// XML with the business name present and every credit element empty.
pub const XML_INCOMPLETE: &str = "<report><business_info><business_name>Joe's Pizza LLC</business_name></business_info><credit_data><business_score></business_score><personal_score></personal_score><report_date></report_date></credit_data></report>";

/// CSV with the business name present and every other cell blank. The last
/// cell is a single space.
pub const CSV_INCOMPLETE: &str = "business_name,tax_id,owner_name,owner_ssn,business_score,personal_score,report_date\nJoe's Pizza LLC,,,,,, \n";

/// Payloads no detector accepts.
pub const UNSUPPORTED_PAYLOADS: &[&str] = &["", "   \n\t  ", "\r\n\r\n", "\n"];

/// CSV export whose data row stops after the business name.
pub const CSV_SHORT_ROW: &str = "business_name,tax_id,owner_name,owner_ssn,business_score,personal_score,report_date\nJoe's Pizza LLC\n";

/// The complete XML report behind a DOCTYPE declaration.
pub const XML_REPORT_WITH_DOCTYPE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE report>\n<report><business_info><business_name>Joe's Pizza LLC</business_name><tax_id>12-3456789</tax_id><owner><name>Joseph Smith</name><ssn>123-45-6789</ssn></owner></business_info><credit_data><business_score>720</business_score><personal_score>680</personal_score><report_date>2025-01-15</report_date></credit_data></report>";

/// The complete report for `vendor`, in that vendor's wire format.
pub fn complete_report(vendor: Vendor) -> &'static str {
    match vendor {
        Vendor::CreditScore360 => JSON_REPORT,
        Vendor::BizCreditPlus => XML_REPORT,
        Vendor::EnterpriseCreditData => CSV_REPORT,
    }
}

/// The business-name-only report for `vendor`.
pub fn incomplete_report(vendor: Vendor) -> &'static str {
    match vendor {
        Vendor::CreditScore360 => JSON_INCOMPLETE,
        Vendor::BizCreditPlus => XML_INCOMPLETE,
        Vendor::EnterpriseCreditData => CSV_INCOMPLETE,
    }
}

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
