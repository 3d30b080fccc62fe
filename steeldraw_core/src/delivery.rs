//! # File Delivery
//!
//! Output naming for successful generate responses. Single-mode responses
//! are one drawing named from the submitted dimensions; batch-mode responses
//! are an archive named for the family. The archive's internal entry naming
//! is the service's business, not ours.

use crate::shapes::{DxfPayload, ShapeFamily};

pub const DXF_MEDIA_TYPE: &str = "application/dxf";
pub const ZIP_MEDIA_TYPE: &str = "application/zip";

/// A generated file ready to hand to the platform save dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveredFile {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DeliveredFile {
    /// A single drawing, named from the dimensions that produced it.
    pub fn single(payload: &DxfPayload, bytes: Vec<u8>) -> Self {
        let file_name = match payload {
            DxfPayload::Beam(p) => {
                format!("Beam_{}x{}.dxf", p.total_depth, p.flange_width)
            }
            DxfPayload::Column(p) => {
                format!("Column_{}x{}.dxf", p.width, p.height)
            }
        };
        DeliveredFile {
            file_name,
            media_type: DXF_MEDIA_TYPE,
            bytes,
        }
    }

    /// A batch archive, named for the family it holds.
    pub fn batch(family: ShapeFamily, bytes: Vec<u8>) -> Self {
        DeliveredFile {
            file_name: format!("{}s_batch.zip", family.tag()),
            media_type: ZIP_MEDIA_TYPE,
            bytes,
        }
    }

    /// File extension implied by the media type.
    pub fn extension(&self) -> &'static str {
        if self.media_type == ZIP_MEDIA_TYPE {
            "zip"
        } else {
            "dxf"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{BeamPayload, ColumnPayload};

    #[test]
    fn test_single_beam_name() {
        let file = DeliveredFile::single(
            &DxfPayload::Beam(BeamPayload {
                total_depth: 300.0,
                flange_width: 150.0,
                web_thickness: 8.0,
                flange_thickness: 12.0,
            }),
            vec![0u8; 4],
        );
        assert_eq!(file.file_name, "Beam_300x150.dxf");
        assert_eq!(file.media_type, DXF_MEDIA_TYPE);
        assert_eq!(file.extension(), "dxf");
    }

    #[test]
    fn test_single_column_name_keeps_decimals() {
        let file = DeliveredFile::single(
            &DxfPayload::Column(ColumnPayload {
                width: 200.5,
                height: 300.0,
            }),
            Vec::new(),
        );
        assert_eq!(file.file_name, "Column_200.5x300.dxf");
    }

    #[test]
    fn test_batch_names_per_family() {
        let beams = DeliveredFile::batch(ShapeFamily::Beam, Vec::new());
        assert_eq!(beams.file_name, "beams_batch.zip");
        assert_eq!(beams.media_type, ZIP_MEDIA_TYPE);
        let columns = DeliveredFile::batch(ShapeFamily::Column, Vec::new());
        assert_eq!(columns.file_name, "columns_batch.zip");
        assert_eq!(columns.extension(), "zip");
    }
}
