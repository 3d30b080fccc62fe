//! # Shape Families and Dimension Sets
//!
//! The two structural member families the service can draw, plus both
//! representations of their cross-section dimensions:
//!
//! - **Edit-time**: [`BeamDimensions`] / [`ColumnDimensions`] hold raw text so
//!   the user can type partial or invalid input without fighting the field
//! - **Submit-time**: [`BeamPayload`] / [`ColumnPayload`] hold validated `f64`
//!   values and serialize to the service's wire format
//!
//! The tagged unions [`DimensionSet`] and [`DxfPayload`] let the workflow and
//! orchestrator treat both families uniformly.

use serde::{Deserialize, Serialize};

/// Structural member families supported by the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    Beam,
    Column,
}

impl ShapeFamily {
    pub const ALL: [ShapeFamily; 2] = [ShapeFamily::Beam, ShapeFamily::Column];

    /// User-facing name, as used in notifications and file names.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeFamily::Beam => "Beam",
            ShapeFamily::Column => "Column",
        }
    }

    /// Lowercase tag used in batch archive names and log events.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeFamily::Beam => "beam",
            ShapeFamily::Column => "column",
        }
    }

    /// Wire field names for this family, in declaration order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ShapeFamily::Beam => BeamDimensions::FIELDS,
            ShapeFamily::Column => ColumnDimensions::FIELDS,
        }
    }
}

impl std::fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Edit-time dimension sets (raw text)
// ============================================================================

/// I-beam cross-section dimensions as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeamDimensions {
    pub total_depth: String,
    pub flange_width: String,
    pub web_thickness: String,
    pub flange_thickness: String,
}

impl BeamDimensions {
    pub const FIELDS: &'static [&'static str] = &[
        "total_depth",
        "flange_width",
        "web_thickness",
        "flange_thickness",
    ];

    pub fn field(&self, name: &str) -> &str {
        match name {
            "total_depth" => &self.total_depth,
            "flange_width" => &self.flange_width,
            "web_thickness" => &self.web_thickness,
            "flange_thickness" => &self.flange_thickness,
            other => panic!("unknown beam field: {other}"),
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "total_depth" => self.total_depth = value,
            "flange_width" => self.flange_width = value,
            "web_thickness" => self.web_thickness = value,
            "flange_thickness" => self.flange_thickness = value,
            other => panic!("unknown beam field: {other}"),
        }
    }
}

/// Rectangular column cross-section dimensions as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDimensions {
    pub width: String,
    pub height: String,
}

impl ColumnDimensions {
    pub const FIELDS: &'static [&'static str] = &["width", "height"];

    pub fn field(&self, name: &str) -> &str {
        match name {
            "width" => &self.width,
            "height" => &self.height,
            other => panic!("unknown column field: {other}"),
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "width" => self.width = value,
            "height" => self.height = value,
            other => panic!("unknown column field: {other}"),
        }
    }
}

/// An edit-time dimension set tagged by its shape family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSet {
    Beam(BeamDimensions),
    Column(ColumnDimensions),
}

impl DimensionSet {
    /// A set with every field empty, ready for editing.
    pub fn blank(family: ShapeFamily) -> Self {
        match family {
            ShapeFamily::Beam => DimensionSet::Beam(BeamDimensions::default()),
            ShapeFamily::Column => DimensionSet::Column(ColumnDimensions::default()),
        }
    }

    pub fn family(&self) -> ShapeFamily {
        match self {
            DimensionSet::Beam(_) => ShapeFamily::Beam,
            DimensionSet::Column(_) => ShapeFamily::Column,
        }
    }

    /// `(field name, raw value)` pairs in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        self.family()
            .field_names()
            .iter()
            .map(|name| (*name, self.field(name)))
            .collect()
    }

    /// Raw value of the named field. Unknown names are a programming error.
    pub fn field(&self, name: &str) -> &str {
        match self {
            DimensionSet::Beam(d) => d.field(name),
            DimensionSet::Column(d) => d.field(name),
        }
    }

    /// Rewrite the named field. Unknown names are a programming error.
    pub fn set_field(&mut self, name: &str, value: String) {
        match self {
            DimensionSet::Beam(d) => d.set_field(name, value),
            DimensionSet::Column(d) => d.set_field(name, value),
        }
    }
}

// ============================================================================
// Submit-time payloads (validated numbers)
// ============================================================================

/// Validated I-beam dimensions as sent to the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamPayload {
    pub total_depth: f64,
    pub flange_width: f64,
    pub web_thickness: f64,
    pub flange_thickness: f64,
}

/// Validated column dimensions as sent to the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnPayload {
    pub width: f64,
    pub height: f64,
}

/// A submit-time payload tagged by family. Serializes as the bare field
/// object the service expects (the family is carried by the endpoint, not
/// the body).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DxfPayload {
    Beam(BeamPayload),
    Column(ColumnPayload),
}

impl DxfPayload {
    pub fn family(&self) -> ShapeFamily {
        match self {
            DxfPayload::Beam(_) => ShapeFamily::Beam,
            DxfPayload::Column(_) => ShapeFamily::Column,
        }
    }

    /// Convert back to edit-time text, e.g. after a parse response.
    pub fn to_dimensions(&self) -> DimensionSet {
        match self {
            DxfPayload::Beam(p) => DimensionSet::Beam(BeamDimensions {
                total_depth: p.total_depth.to_string(),
                flange_width: p.flange_width.to_string(),
                web_thickness: p.web_thickness.to_string(),
                flange_thickness: p.flange_thickness.to_string(),
            }),
            DxfPayload::Column(p) => DimensionSet::Column(ColumnDimensions {
                width: p.width.to_string(),
                height: p.height.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_set_matches_family() {
        for family in ShapeFamily::ALL {
            let set = DimensionSet::blank(family);
            assert_eq!(set.family(), family);
            assert!(set.fields().iter().all(|(_, raw)| raw.is_empty()));
        }
    }

    #[test]
    fn test_field_roundtrip_by_name() {
        let mut set = DimensionSet::blank(ShapeFamily::Beam);
        set.set_field("web_thickness", "8".to_string());
        assert_eq!(set.field("web_thickness"), "8");
        assert_eq!(set.field("total_depth"), "");
    }

    #[test]
    #[should_panic(expected = "unknown column field")]
    fn test_unknown_field_panics() {
        let mut set = DimensionSet::blank(ShapeFamily::Column);
        set.set_field("flange_width", "10".to_string());
    }

    #[test]
    fn test_payload_serializes_as_bare_object() {
        let payload = DxfPayload::Column(ColumnPayload {
            width: 200.0,
            height: 300.0,
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"width": 200.0, "height": 300.0}));
    }

    #[test]
    fn test_payload_to_dimensions_drops_trailing_zero() {
        let payload = DxfPayload::Beam(BeamPayload {
            total_depth: 300.0,
            flange_width: 150.0,
            web_thickness: 8.0,
            flange_thickness: 12.5,
        });
        let DimensionSet::Beam(dims) = payload.to_dimensions() else {
            panic!("expected beam dimensions");
        };
        assert_eq!(dims.total_depth, "300");
        assert_eq!(dims.flange_thickness, "12.5");
    }
}
