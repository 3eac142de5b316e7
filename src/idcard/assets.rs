//! # Image Assets
//!
//! A card shows three images: the employee photo and two logos. Each comes
//! from one of three places:
//!
//! - **Embedded**: a self-contained data URI stored on the record
//! - **Referenced**: a locator string (URL, path) the display layer resolves
//! - **Absent**: nothing on the record, so a default applies (or nothing is shown)
//!
//! The photo checks `photoData` (embedded) before `photo` (referenced) and has
//! no default. Logos are embedded or absent; an absent logo falls back to the
//! matching configured default. The right logo is always the green one and the
//! left logo always the purple one.

use crate::model::{non_empty, EmployeeRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "lowercase")]
pub enum ImageAsset {
    Embedded(String),
    Referenced(String),
    Absent,
}

impl ImageAsset {
    pub fn source(&self) -> Option<&str> {
        match self {
            ImageAsset::Embedded(s) | ImageAsset::Referenced(s) => Some(s),
            ImageAsset::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSide {
    Green,
    Purple,
}

/// Classifies the photo of a record by the slot that governs it.
pub fn photo_asset(record: &EmployeeRecord) -> ImageAsset {
    if let Some(data) = non_empty(&record.photo_data) {
        ImageAsset::Embedded(data.to_string())
    } else if let Some(locator) = non_empty(&record.photo) {
        ImageAsset::Referenced(locator.to_string())
    } else {
        ImageAsset::Absent
    }
}

/// The photo source to display, or `None` when the image should be hidden.
pub fn resolve_photo(record: &EmployeeRecord) -> Option<&str> {
    non_empty(&record.photo_data).or_else(|| non_empty(&record.photo))
}

pub fn resolve_logo<'a>(
    record: &'a EmployeeRecord,
    side: LogoSide,
    green: &'a str,
    purple: &'a str,
) -> &'a str {
    match side {
        LogoSide::Green => non_empty(&record.logo_right).unwrap_or(green),
        LogoSide::Purple => non_empty(&record.logo_left).unwrap_or(purple),
    }
}
