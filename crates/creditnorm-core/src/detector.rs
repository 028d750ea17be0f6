//! Detector — parses raw payload text into a [`ParsedPayload`].
//!
//! Parsing is attempted in order: JSON → XML → CSV. The first structurally
//! valid parse wins. JSON is the strictest format and CSV the most permissive,
//! so reordering changes which format wins on ambiguous input (a single bare
//! word is a valid one-column CSV document with no rows).
//!
//! CSV rows may be shorter or longer than the header. Cells past the end of a
//! short row read as absent, so a trimmed export surfaces as missing fields.

use crate::error::{NormalizeError, Result};
use crate::payload::{ParsedPayload, RowSequence};

/// Root element name some XML toolchains emit in place of a failed parse.
const XML_PARSER_ERROR_TAG: &str = "parsererror";

/// Detect the format of `raw` and parse it.
///
/// Fails with [`NormalizeError::UnsupportedFormat`] when no format matches,
/// including when the payload is empty or whitespace-only.
pub fn detect(raw: &str) -> Result<ParsedPayload<'_>> {
    if let Some(tree) = parse_json(raw) {
        tracing::debug!(format = "json", bytes = raw.len(), "payload detected");
        return Ok(ParsedPayload::Tree(tree));
    }

    if let Some(doc) = parse_xml(raw) {
        tracing::debug!(format = "xml", bytes = raw.len(), "payload detected");
        return Ok(ParsedPayload::Xml(doc));
    }

    match parse_csv(raw) {
        Some(rows) => {
            tracing::debug!(
                format = "csv",
                bytes = raw.len(),
                rows = rows.len(),
                "payload detected"
            );
            Ok(ParsedPayload::Rows(rows))
        }
        None => {
            tracing::debug!(bytes = raw.len(), "no format matched payload");
            Err(NormalizeError::UnsupportedFormat)
        }
    }
}

// ---------------------------------------------------------------------------
// Format attempts
// ---------------------------------------------------------------------------

fn parse_json(raw: &str) -> Option<serde_json::Value> {
    serde_json::from_str(raw)
        .map_err(|e| tracing::trace!(category = ?e.classify(), "not json"))
        .ok()
}

/// A document counts as XML only with a real root element and no errors.
/// A DOCTYPE declaration is allowed.
fn parse_xml(raw: &str) -> Option<roxmltree::Document<'_>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(raw, options)
        .map_err(|e| tracing::trace!(error = %e, "not xml"))
        .ok()?;

    if doc.root_element().tag_name().name() == XML_PARSER_ERROR_TAG {
        tracing::trace!("not xml: parser error sentinel root");
        return None;
    }

    Some(doc)
}

/// First line is the header row. Record width is not checked against it.
fn parse_csv(raw: &str) -> Option<RowSequence> {
    if raw.trim().is_empty() {
        tracing::trace!("not csv: empty payload");
        return None;
    }

    read_rows(raw)
        .map_err(|e| tracing::trace!(error = %e, "not csv"))
        .ok()
}

fn read_rows(raw: &str) -> std::result::Result<RowSequence, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(RowSequence::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
