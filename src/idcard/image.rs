//! # Image Intake
//!
//! Photos and logos go through an image-editing step before they land on a
//! record. The step is a request/response boundary: the form hands over the
//! raw bytes of a source image together with the target size, and later
//! receives exactly one encoded image back (or nothing, if the edit is
//! cancelled). The form stays usable while an edit is outstanding.
//!
//! [`ImageEditor`] is the seam. [`SquareCropEditor`] is the built-in editor:
//! it embeds the source into a fixed-size square SVG that centre-crops it, so
//! every slot ends up with an image of the requested dimensions without
//! decoding the bitmap.

use crate::error::{CardError, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Side length of the square every edited image is produced at.
pub const EDIT_SIZE: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSlot {
    Photo,
    LogoLeft,
    LogoRight,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageSlot::Photo => "photo",
            ImageSlot::LogoLeft => "left logo",
            ImageSlot::LogoRight => "right logo",
        };
        write!(f, "{}", label)
    }
}

/// Identifies one outstanding edit so late or stale responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket(pub(crate) u64);

#[derive(Debug, Clone)]
pub struct SourceImage {
    pub bytes: Vec<u8>,
    pub name: Option<String>,
}

impl SourceImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, name: None }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Ok(Self {
            bytes,
            name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct EditRequest {
    pub ticket: EditTicket,
    pub slot: ImageSlot,
    pub source: SourceImage,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct EditedImage {
    pub ticket: EditTicket,
    pub data_uri: String,
}

pub trait ImageEditor {
    fn edit(&self, request: &EditRequest) -> Result<EditedImage>;
}

/// Encodes raw image bytes as a `data:` URI, sniffing the MIME type.
pub fn encode_data_uri(bytes: &[u8]) -> Result<String> {
    let kind = infer::get(bytes)
        .filter(|t| t.matcher_type() == infer::MatcherType::Image)
        .ok_or_else(|| CardError::Image("Unrecognized image format".to_string()))?;
    Ok(format!("data:{};base64,{}", kind.mime_type(), B64.encode(bytes)))
}

/// Crops to the requested square by SVG viewport only. The original bytes are
/// embedded unchanged, so the result is not a re-encoded bitmap of that size
/// and keeps the source's file weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquareCropEditor;

impl ImageEditor for SquareCropEditor {
    fn edit(&self, request: &EditRequest) -> Result<EditedImage> {
        let inner = encode_data_uri(&request.source.bytes)?;
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                r#"<image width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice" href="{src}"/>"#,
                "</svg>"
            ),
            w = request.width,
            h = request.height,
            src = inner
        );
        Ok(EditedImage {
            ticket: request.ticket,
            data_uri: format!("data:image/svg+xml;base64,{}", B64.encode(svg)),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const PNG_BYTES: [u8; 12] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    ];

    fn request(bytes: &[u8]) -> EditRequest {
        EditRequest {
            ticket: EditTicket(1),
            slot: ImageSlot::Photo,
            source: SourceImage::new(bytes.to_vec()),
            width: EDIT_SIZE,
            height: EDIT_SIZE,
        }
    }

    #[test]
    fn encodes_png_as_data_uri() {
        let uri = encode_data_uri(&PNG_BYTES).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = encode_data_uri(b"just some text").unwrap_err();
        assert!(matches!(err, CardError::Image(_)));
    }

    #[test]
    fn square_crop_produces_fixed_size_svg() {
        let edited = SquareCropEditor.edit(&request(&PNG_BYTES)).unwrap();
        assert_eq!(edited.ticket, EditTicket(1));

        let payload = edited
            .data_uri
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(B64.decode(payload).unwrap()).unwrap();
        assert!(svg.contains(r#"width="300""#));
        assert!(svg.contains(r#"height="300""#));
        assert!(svg.contains("xMidYMid slice"));
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn square_crop_embeds_source_bytes_unchanged() {
        let edited = SquareCropEditor.edit(&request(&PNG_BYTES)).unwrap();
        let payload = edited
            .data_uri
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(B64.decode(payload).unwrap()).unwrap();

        let inner = svg
            .split("data:image/png;base64,")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(B64.decode(inner).unwrap(), PNG_BYTES.to_vec());
    }

    #[test]
    fn square_crop_fails_on_non_image() {
        assert!(SquareCropEditor.edit(&request(b"nope")).is_err());
    }

    #[test]
    fn source_image_from_path_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        std::fs::write(&path, PNG_BYTES).unwrap();

        let source = SourceImage::from_path(&path).unwrap();
        assert_eq!(source.name.as_deref(), Some("face.png"));
        assert_eq!(source.bytes, PNG_BYTES.to_vec());
    }
}
