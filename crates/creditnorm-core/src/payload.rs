//! Parsed payload shapes produced by the detector.
//!
//! A payload is exactly one of three variants and never a mix. Adapters match
//! on the variant they expect and report a shape mismatch for anything else.

use crate::types::PayloadFormat;

/// A raw payload after successful format detection.
///
/// The XML variant borrows from the raw text, so a `ParsedPayload` never
/// outlives the string it was detected from.
#[derive(Debug)]
pub enum ParsedPayload<'input> {
    /// Generic key-value tree from JSON.
    Tree(serde_json::Value),
    /// Queryable document tree from XML.
    Xml(roxmltree::Document<'input>),
    /// Header-keyed rows from CSV.
    Rows(RowSequence),
}

impl ParsedPayload<'_> {
    pub fn format(&self) -> PayloadFormat {
        match self {
            ParsedPayload::Tree(_) => PayloadFormat::Json,
            ParsedPayload::Xml(_) => PayloadFormat::Xml,
            ParsedPayload::Rows(_) => PayloadFormat::Csv,
        }
    }
}

// ---------------------------------------------------------------------------
// RowSequence
// ---------------------------------------------------------------------------

/// Ordered CSV rows keyed by the header line.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSequence {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl RowSequence {
    pub fn new(headers: Vec<String>, rows: Vec<csv::StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<Row<'_>> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|record| Row {
            headers: &self.headers,
            record,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|record| Row {
            headers: &self.headers,
            record,
        })
    }
}

/// One CSV row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    record: &'a csv::StringRecord,
}

impl<'a> Row<'a> {
    /// Value under `column`. With duplicate headers the first column wins.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|h| h == column)?;
        self.record.get(index)
    }
}
