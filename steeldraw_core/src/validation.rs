//! # Submission Validation
//!
//! The gate between free-form editing and the network: every field of the
//! active dimension set (or every batch row, in order) must parse as a
//! strictly positive decimal before a generate request may be issued.
//! Empty text, non-numeric text, zero, and negatives all fail. The first
//! failure wins and names the field (single) or the 1-based row (batch).
//!
//! Validation is purely local and synchronous; it never contacts the service.

use crate::errors::ValidationError;
use crate::shapes::{BeamPayload, ColumnPayload, DimensionSet, DxfPayload};
use crate::workflow::BatchList;

/// Parse a raw field as a strictly positive, finite decimal.
pub fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Check a single-mode dimension set without converting it.
pub fn validate_single(set: &DimensionSet) -> Result<(), ValidationError> {
    single_payload(set).map(|_| ())
}

/// Check every row of a batch list without converting it.
pub fn validate_batch(list: &BatchList) -> Result<(), ValidationError> {
    batch_payloads(list).map(|_| ())
}

/// Validate and convert a single-mode dimension set in one pass.
pub fn single_payload(set: &DimensionSet) -> Result<DxfPayload, ValidationError> {
    match set {
        DimensionSet::Beam(d) => Ok(DxfPayload::Beam(BeamPayload {
            total_depth: field(&d.total_depth, "total_depth")?,
            flange_width: field(&d.flange_width, "flange_width")?,
            web_thickness: field(&d.web_thickness, "web_thickness")?,
            flange_thickness: field(&d.flange_thickness, "flange_thickness")?,
        })),
        DimensionSet::Column(d) => Ok(DxfPayload::Column(ColumnPayload {
            width: field(&d.width, "width")?,
            height: field(&d.height, "height")?,
        })),
    }
}

/// Validate and convert every batch row, in order. A row with any failing
/// field yields a row-level error.
pub fn batch_payloads(list: &BatchList) -> Result<Vec<DxfPayload>, ValidationError> {
    list.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| single_payload(row).map_err(|_| ValidationError::for_row(i + 1)))
        .collect()
}

fn field(raw: &str, name: &str) -> Result<f64, ValidationError> {
    parse_positive(raw).ok_or_else(|| ValidationError::for_field(name))
}
