//! # Card Rendering
//!
//! [`render`] resolves a record and the global default logos into a
//! [`DisplayModel`]: everything a front-end needs to draw the printable card,
//! with every optional value already defaulted. Front-ends only lay it out.
//!
//! A missing record produces [`DisplayModel::NotFound`], which carries the
//! "Employee not found" marker and no rows.
//!
//! Row order is fixed per section:
//!
//! ```text
//! Personal   Birth Date, Passport No, Passport Issue Date, Passport Expire Date,
//!            Visa No, Visa Issue Date, Visa Expire Date, Referral No,
//!            Recruiting Agency*, Employer*, Country*         (* highlighted)
//! BMET       BMET No, Name (uppercase), Birth Date, Gender, Blood Group, NID
//! Passport   Name, Passport No 1
//! ```

use crate::assets::{photo_asset, resolve_logo, ImageAsset, LogoSide};
use crate::config::Defaults;
use crate::model::EmployeeRecord;
use crate::store::find_by_key;
use serde::Serialize;

pub const NOT_FOUND_MARKER: &str = "Employee not found";

/// Default logos used when a record carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGlobals {
    pub logo_green: String,
    pub logo_purple: String,
}

impl From<&Defaults> for CardGlobals {
    fn from(defaults: &Defaults) -> Self {
        Self {
            logo_green: defaults.logo_green.clone(),
            logo_purple: defaults.logo_purple.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoPair {
    pub green: String,
    pub purple: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Personal,
    Bmet,
    Passport,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Personal => "Personal Details",
            SectionKind::Bmet => "BMET Details",
            SectionKind::Passport => "Passport Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub highlighted: bool,
}

impl Row {
    fn plain(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            highlighted: false,
        }
    }

    fn highlighted(label: &'static str, value: &str) -> Self {
        Self {
            highlighted: true,
            ..Self::plain(label, value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub ec_no_line: String,
    pub ec_date_line: String,
    /// `Absent` means the photo element is left out.
    pub photo: ImageAsset,
    pub header_logos: LogoPair,
    pub section_logos: LogoPair,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DisplayModel {
    Found(Card),
    NotFound { marker: &'static str },
}

impl DisplayModel {
    pub fn not_found() -> Self {
        DisplayModel::NotFound {
            marker: NOT_FOUND_MARKER,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            DisplayModel::Found(card) => Some(card),
            DisplayModel::NotFound { .. } => None,
        }
    }

    pub fn sections(&self) -> &[Section] {
        self.card().map(|c| c.sections.as_slice()).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.sections().iter().map(|s| s.rows.len()).sum()
    }
}

pub fn render(record: Option<&EmployeeRecord>, globals: &CardGlobals) -> DisplayModel {
    let Some(r) = record else {
        return DisplayModel::not_found();
    };

    let logos = LogoPair {
        green: resolve_logo(r, LogoSide::Green, &globals.logo_green, &globals.logo_purple)
            .to_string(),
        purple: resolve_logo(r, LogoSide::Purple, &globals.logo_green, &globals.logo_purple)
            .to_string(),
    };
    let photo = photo_asset(r);

    let personal = Section {
        kind: SectionKind::Personal,
        rows: vec![
            Row::plain("Birth Date", &r.birth_date),
            Row::plain("Passport No", &r.passport_no),
            Row::plain("Passport Issue Date", &r.passport_issue_date),
            Row::plain("Passport Expire Date", &r.passport_expire_date),
            Row::plain("Visa No", &r.visa_no),
            Row::plain("Visa Issue Date", &r.visa_issue_date),
            Row::plain("Visa Expire Date", &r.visa_expire_date),
            Row::plain("Referral No", &r.referral_no),
            Row::highlighted("Recruiting Agency", &r.recruiting_agency),
            Row::highlighted("Employer", &r.employer),
            Row::highlighted("Country", &r.country),
        ],
    };
    let bmet = Section {
        kind: SectionKind::Bmet,
        rows: vec![
            Row::plain("BMET No", &r.bmet_no),
            Row::plain("Name", &r.name.to_uppercase()),
            Row::plain("Birth Date", &r.birth_date),
            Row::plain("Gender", &r.gender),
            Row::plain("Blood Group", &r.blood_group),
            Row::plain("NID", &r.nid),
        ],
    };
    let passport = Section {
        kind: SectionKind::Passport,
        rows: vec![
            Row::plain("Name", &r.passport_name),
            Row::plain("Passport No 1", &r.passport_no1),
        ],
    };

    DisplayModel::Found(Card {
        name: r.name.clone(),
        ec_no_line: format!("EC No: {}", r.ec_no),
        ec_date_line: format!("EC Date: {}", r.ec_date),
        photo,
        header_logos: logos.clone(),
        section_logos: logos,
        sections: vec![personal, bmet, passport],
    })
}

/// Looks `ec_no` up by exact match and renders the first hit.
pub fn render_by_key(list: &[EmployeeRecord], ec_no: &str, globals: &CardGlobals) -> DisplayModel {
    render(find_by_key(list, ec_no), globals)
}
