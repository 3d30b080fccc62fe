//! # Wire Types and Endpoint Map
//!
//! The generation service exposes one generate endpoint per family and mode,
//! plus a single parse endpoint shared by both families. Request bodies are
//! JSON; generate responses are binary (a drawing or an archive); error
//! responses carry a JSON `{"detail": ...}` body even when the transport
//! labels it binary.

use serde::{Deserialize, Serialize};

use crate::shapes::{BeamPayload, ColumnPayload, DxfPayload, ShapeFamily};
use crate::workflow::Mode;

/// Path of the shared parse endpoint.
pub const PARSE_ENDPOINT: &str = "/parse/dxf";

/// Path of the generate endpoint for a family and mode.
pub fn generate_endpoint(family: ShapeFamily, mode: Mode) -> &'static str {
    match (family, mode) {
        (ShapeFamily::Beam, Mode::Single) => "/generate/ibeam",
        (ShapeFamily::Beam, Mode::Batch) => "/generate/ibeam/batch",
        (ShapeFamily::Column, Mode::Single) => "/generate/column",
        (ShapeFamily::Column, Mode::Batch) => "/generate/column/batch",
    }
}

/// Body of a batch generate request: the validated sets wrapped in `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub items: Vec<DxfPayload>,
}

/// Body of a successful parse response: the decoded family discriminator
/// plus that family's numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ParsedDimensions {
    #[serde(rename = "ibeam")]
    Beam(BeamPayload),
    #[serde(rename = "column")]
    Column(ColumnPayload),
}

impl ParsedDimensions {
    pub fn family(&self) -> ShapeFamily {
        match self {
            ParsedDimensions::Beam(_) => ShapeFamily::Beam,
            ParsedDimensions::Column(_) => ShapeFamily::Column,
        }
    }

    pub fn into_payload(self) -> DxfPayload {
        match self {
            ParsedDimensions::Beam(p) => DxfPayload::Beam(p),
            ParsedDimensions::Column(p) => DxfPayload::Column(p),
        }
    }
}

/// Structured error body returned by the service on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Recover `detail` from an error body delivered as raw bytes. Returns
/// `None` when the body is not the structured shape, so callers can fall
/// back to a generic transport message instead of failing error reporting.
pub fn error_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_map() {
        assert_eq!(
            generate_endpoint(ShapeFamily::Beam, Mode::Single),
            "/generate/ibeam"
        );
        assert_eq!(
            generate_endpoint(ShapeFamily::Beam, Mode::Batch),
            "/generate/ibeam/batch"
        );
        assert_eq!(
            generate_endpoint(ShapeFamily::Column, Mode::Single),
            "/generate/column"
        );
        assert_eq!(
            generate_endpoint(ShapeFamily::Column, Mode::Batch),
            "/generate/column/batch"
        );
    }

    #[test]
    fn test_batch_request_wraps_items() {
        let body = BatchRequest {
            items: vec![DxfPayload::Column(ColumnPayload {
                width: 100.0,
                height: 100.0,
            })],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"items": [{"width": 100.0, "height": 100.0}]})
        );
    }

    #[test]
    fn test_parse_response_discriminator() {
        let parsed: ParsedDimensions = serde_json::from_str(
            r#"{"type": "column", "data": {"width": 200, "height": 300}}"#,
        )
        .unwrap();
        assert_eq!(parsed.family(), ShapeFamily::Column);
        assert_eq!(
            parsed.into_payload(),
            DxfPayload::Column(ColumnPayload {
                width: 200.0,
                height: 300.0,
            })
        );
    }

    #[test]
    fn test_parse_response_beam_fields() {
        let parsed: ParsedDimensions = serde_json::from_str(
            r#"{"type": "ibeam", "data": {"total_depth": 300, "flange_width": 150,
                "web_thickness": 8, "flange_thickness": 12}}"#,
        )
        .unwrap();
        assert_eq!(parsed.family(), ShapeFamily::Beam);
    }

    #[test]
    fn test_error_detail_recovery() {
        assert_eq!(
            error_detail(br#"{"detail": "Batch size exceeds limit"}"#),
            Some("Batch size exceeds limit".to_string())
        );
        assert_eq!(error_detail(b"\x00\x01binary junk"), None);
        assert_eq!(error_detail(br#"{"message": "wrong shape"}"#), None);
    }
}
