//! Core types for creditnorm-core.
//!
//! This module defines the fundamental data structures shared by the detector,
//! the vendor adapters and the validator: the [`Vendor`] discriminant, the
//! [`CanonicalField`] declaration order, the adapter-facing [`RecordDraft`] and
//! the fully-populated [`CanonicalRecord`].

use serde::Serialize;

use crate::error::NormalizeError;

// ---------------------------------------------------------------------------
// Vendor
// ---------------------------------------------------------------------------

/// Third-party credit data provider that produced a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vendor {
    CreditScore360,
    BizCreditPlus,
    EnterpriseCreditData,
}

static VENDOR_IDS: phf::Map<&'static str, Vendor> = phf::phf_map! {
    "creditscore360" => Vendor::CreditScore360,
    "bizcreditplus" => Vendor::BizCreditPlus,
    "enterprisecreditdata" => Vendor::EnterpriseCreditData,
};

impl Vendor {
    /// Every vendor with a built-in adapter, in registration order.
    pub const ALL: [Vendor; 3] = [
        Vendor::CreditScore360,
        Vendor::BizCreditPlus,
        Vendor::EnterpriseCreditData,
    ];

    /// Wire identifier, also written to `data_source` on every record.
    pub fn id(&self) -> &'static str {
        match self {
            Vendor::CreditScore360 => "creditscore360",
            Vendor::BizCreditPlus => "bizcreditplus",
            Vendor::EnterpriseCreditData => "enterprisecreditdata",
        }
    }

    /// Look up a vendor by its exact wire identifier.
    pub fn from_id(id: &str) -> Option<Vendor> {
        VENDOR_IDS.get(id).copied()
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Vendor {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::from_id(s).ok_or_else(|| NormalizeError::unsupported_vendor(s))
    }
}

impl Serialize for Vendor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// PayloadFormat
// ---------------------------------------------------------------------------

/// Wire format a payload was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFormat {
    Json,
    Xml,
    Csv,
}

impl std::fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadFormat::Json => write!(f, "json"),
            PayloadFormat::Xml => write!(f, "xml"),
            PayloadFormat::Csv => write!(f, "csv"),
        }
    }
}

// ---------------------------------------------------------------------------
// CanonicalField
// ---------------------------------------------------------------------------

/// The eight required fields of a canonical record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    BusinessName,
    TaxId,
    OwnerName,
    OwnerSsn,
    BusinessCreditScore,
    PersonalCreditScore,
    ReportDate,
    DataSource,
}

impl CanonicalField {
    /// Declaration order. Missing-field errors list fields in this order.
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::BusinessName,
        CanonicalField::TaxId,
        CanonicalField::OwnerName,
        CanonicalField::OwnerSsn,
        CanonicalField::BusinessCreditScore,
        CanonicalField::PersonalCreditScore,
        CanonicalField::ReportDate,
        CanonicalField::DataSource,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::BusinessName => "business_name",
            CanonicalField::TaxId => "tax_id",
            CanonicalField::OwnerName => "owner_name",
            CanonicalField::OwnerSsn => "owner_ssn",
            CanonicalField::BusinessCreditScore => "business_credit_score",
            CanonicalField::PersonalCreditScore => "personal_credit_score",
            CanonicalField::ReportDate => "report_date",
            CanonicalField::DataSource => "data_source",
        }
    }

    /// `true` for the two integer score fields.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CanonicalField::BusinessCreditScore | CanonicalField::PersonalCreditScore
        )
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RecordDraft
// ---------------------------------------------------------------------------

/// Adapter output before validation.
///
/// Any field may still be absent. `data_source` is the vendor itself and so is
/// always present. Only [`crate::validator::validate`] turns a draft into a
/// [`CanonicalRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub business_name: Option<String>,
    pub tax_id: Option<String>,
    pub owner_name: Option<String>,
    pub owner_ssn: Option<String>,
    pub business_credit_score: Option<i64>,
    pub personal_credit_score: Option<i64>,
    pub report_date: Option<String>,
    pub data_source: Vendor,
}

impl RecordDraft {
    /// An empty draft for `vendor`: every payload-sourced field absent.
    pub fn empty(vendor: Vendor) -> Self {
        Self {
            business_name: None,
            tax_id: None,
            owner_name: None,
            owner_ssn: None,
            business_credit_score: None,
            personal_credit_score: None,
            report_date: None,
            data_source: vendor,
        }
    }

    /// The field rendered as text, or `None` when absent.
    ///
    /// Scores render through their decimal form, so `Some(0)` is `"0"`.
    pub fn text_of(&self, field: CanonicalField) -> Option<String> {
        match field {
            CanonicalField::BusinessName => self.business_name.clone(),
            CanonicalField::TaxId => self.tax_id.clone(),
            CanonicalField::OwnerName => self.owner_name.clone(),
            CanonicalField::OwnerSsn => self.owner_ssn.clone(),
            CanonicalField::BusinessCreditScore => {
                self.business_credit_score.map(|s| s.to_string())
            }
            CanonicalField::PersonalCreditScore => {
                self.personal_credit_score.map(|s| s.to_string())
            }
            CanonicalField::ReportDate => self.report_date.clone(),
            CanonicalField::DataSource => Some(self.data_source.id().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// CanonicalRecord
// ---------------------------------------------------------------------------

/// A fully-populated, normalised credit report.
///
/// Fields are private so a record can only come out of validation; every
/// value is guaranteed present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    business_name: String,
    tax_id: String,
    owner_name: String,
    owner_ssn: String,
    business_credit_score: i64,
    personal_credit_score: i64,
    report_date: String,
    data_source: Vendor,
}

impl CanonicalRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        business_name: String,
        tax_id: String,
        owner_name: String,
        owner_ssn: String,
        business_credit_score: i64,
        personal_credit_score: i64,
        report_date: String,
        data_source: Vendor,
    ) -> Self {
        Self {
            business_name,
            tax_id,
            owner_name,
            owner_ssn,
            business_credit_score,
            personal_credit_score,
            report_date,
            data_source,
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn owner_ssn(&self) -> &str {
        &self.owner_ssn
    }

    pub fn business_credit_score(&self) -> i64 {
        self.business_credit_score
    }

    pub fn personal_credit_score(&self) -> i64 {
        self.personal_credit_score
    }

    pub fn report_date(&self) -> &str {
        &self.report_date
    }

    /// Vendor the record was normalised for. Never read from the payload.
    pub fn data_source(&self) -> Vendor {
        self.data_source
    }

    /// `report_date` as a calendar date, when it is ISO `YYYY-MM-DD`.
    pub fn report_day(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(self.report_date.trim(), "%Y-%m-%d").ok()
    }

    /// The record as a JSON object keyed by canonical field name.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "business_name": self.business_name,
            "tax_id": self.tax_id,
            "owner_name": self.owner_name,
            "owner_ssn": self.owner_ssn,
            "business_credit_score": self.business_credit_score,
            "personal_credit_score": self.personal_credit_score,
            "report_date": self.report_date,
            "data_source": self.data_source.id(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
