//! Test builders — render one logical report in any vendor's wire format.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use creditnorm::{CanonicalField, Vendor};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Source value of one field: present with text, or left out of the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Value(String),
    Absent,
}

/// Fluent builder for vendor payloads.
///
/// Starts from the Joe's Pizza report; individual fields can be replaced,
/// blanked or dropped, then the report is rendered as JSON, XML or CSV.
///
/// # Example
///
/// ```rust
/// let csv = ReportBuilder::complete()
///     .blank(CanonicalField::TaxId)
///     .render(Vendor::EnterpriseCreditData);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    fields: Vec<(CanonicalField, Source)>,
}

impl ReportBuilder {
    pub fn complete() -> Self {
        Self::new()
            .set(CanonicalField::BusinessName, "Joe's Pizza LLC")
            .set(CanonicalField::TaxId, "12-3456789")
            .set(CanonicalField::OwnerName, "Joseph Smith")
            .set(CanonicalField::OwnerSsn, "123-45-6789")
            .set(CanonicalField::BusinessCreditScore, "720")
            .set(CanonicalField::PersonalCreditScore, "680")
            .set(CanonicalField::ReportDate, "2025-01-15")
    }

    /// A report with every field absent.
    pub fn new() -> Self {
        Self {
            fields: CanonicalField::ALL[..7]
                .iter()
                .map(|f| (*f, Source::Absent))
                .collect(),
        }
    }

    pub fn set(mut self, field: CanonicalField, value: impl Into<String>) -> Self {
        self.slot(field).1 = Source::Value(value.into());
        self
    }

    pub fn blank(self, field: CanonicalField) -> Self {
        self.set(field, "")
    }

    pub fn without(mut self, field: CanonicalField) -> Self {
        self.slot(field).1 = Source::Absent;
        self
    }

    pub fn render(&self, vendor: Vendor) -> String {
        match vendor {
            Vendor::CreditScore360 => self.to_json(),
            Vendor::BizCreditPlus => self.to_xml(),
            Vendor::EnterpriseCreditData => self.to_csv(),
        }
    }

    /// CreditScore360 layout. Scores that read as integers are emitted as
    /// JSON numbers, anything else as a string.
    pub fn to_json(&self) -> String {
        let mut business = Map::new();
        let mut owner = Map::new();
        let mut credit = Map::new();

        for (field, source) in &self.fields {
            let Source::Value(text) = source else { continue };
            let value = if field.is_numeric() {
                text.parse::<i64>().map(Value::from).unwrap_or_else(|_| json!(text))
            } else {
                json!(text)
            };
            match field {
                CanonicalField::BusinessName => business.insert("business_name".into(), value),
                CanonicalField::TaxId => business.insert("tax_id".into(), value),
                CanonicalField::OwnerName => owner.insert("name".into(), value),
                CanonicalField::OwnerSsn => owner.insert("ssn".into(), value),
                CanonicalField::BusinessCreditScore => {
                    credit.insert("business_score".into(), value)
                }
                CanonicalField::PersonalCreditScore => {
                    credit.insert("personal_score".into(), value)
                }
                CanonicalField::ReportDate => credit.insert("report_date".into(), value),
                CanonicalField::DataSource => None,
            };
        }

        if !owner.is_empty() {
            business.insert("owner".into(), Value::Object(owner));
        }
        json!({"business_info": business, "credit_data": credit}).to_string()
    }

    /// BizCreditPlus layout.
    pub fn to_xml(&self) -> String {
        let el = |field: CanonicalField, tag: &str| match self.get(field) {
            Source::Value(text) => format!("<{tag}>{}</{tag}>", escape_xml(text)),
            Source::Absent => String::new(),
        };

        format!(
            "<report><business_info>{}{}<owner>{}{}</owner></business_info>\
             <credit_data>{}{}{}</credit_data></report>",
            el(CanonicalField::BusinessName, "business_name"),
            el(CanonicalField::TaxId, "tax_id"),
            el(CanonicalField::OwnerName, "name"),
            el(CanonicalField::OwnerSsn, "ssn"),
            el(CanonicalField::BusinessCreditScore, "business_score"),
            el(CanonicalField::PersonalCreditScore, "personal_score"),
            el(CanonicalField::ReportDate, "report_date"),
        )
    }

    /// EnterpriseCreditData layout. Absent fields drop their column.
    pub fn to_csv(&self) -> String {
        let (headers, values): (Vec<&str>, Vec<&str>) = self
            .fields
            .iter()
            .filter_map(|(field, source)| match source {
                Source::Value(text) => Some((csv_column(*field), text.as_str())),
                Source::Absent => None,
            })
            .unzip();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&headers).unwrap();
        writer.write_record(&values).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    fn get(&self, field: CanonicalField) -> &Source {
        &self.fields.iter().find(|(f, _)| *f == field).unwrap().1
    }

    fn slot(&mut self, field: CanonicalField) -> &mut (CanonicalField, Source) {
        self.fields
            .iter_mut()
            .find(|(f, _)| *f == field)
            .unwrap_or_else(|| panic!("{field} is not a payload field"))
    }
}

fn csv_column(field: CanonicalField) -> &'static str {
    match field {
        CanonicalField::BusinessCreditScore => "business_score",
        CanonicalField::PersonalCreditScore => "personal_score",
        other => other.name(),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
