//! # Employee Form
//!
//! [`FormController`] turns raw form values into an [`EmployeeRecord`] and
//! writes the updated sequence back to the store.
//!
//! ## Modes
//!
//! The mode is decided once, when the form is opened, and never changes:
//!
//! - **Create** (default): empty fields, submit appends a record.
//! - **Edit**: the `index` parameter points at an existing record in the list
//!   captured at open time. Fields are pre-filled from it and submit replaces
//!   that position.
//!
//! An absent, non-numeric or out-of-range index silently opens Create mode.
//!
//! ## Captured List
//!
//! The controller keeps the list it was opened with and submits that whole
//! list. A write made by another session in between is overwritten (last
//! write wins).
//!
//! ## Images
//!
//! Each image slot changes only through the edit round-trip in
//! [`crate::image`]: [`FormController::request_image_edit`] issues a request,
//! [`FormController::complete_image_edit`] applies the response. Only one edit
//! is outstanding at a time and a new request supersedes the old one. While
//! an edit is outstanding the slot keeps its previous value, including for a
//! submit.

use crate::assets::resolve_photo;
use crate::date::{is_calendar_date, to_display, to_iso};
use crate::image::{EditRequest, EditTicket, EditedImage, ImageSlot, SourceImage, EDIT_SIZE};
use crate::model::EmployeeRecord;
use crate::store::{find_by_index, parse_index, RecordStore, SlotBackend};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit { index: usize },
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Employee",
            FormMode::Edit { .. } => "Edit Employee",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Save",
            FormMode::Edit { .. } => "Update",
        }
    }
}

/// Raw values of the form controls. Dates are ISO, as a date picker yields them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub ec_no: String,
    pub name: String,
    pub ec_date: String,
    pub birth_date: String,
    pub passport_no: String,
    pub passport_issue_date: String,
    pub passport_expire_date: String,
    pub visa_no: String,
    pub visa_issue_date: String,
    pub visa_expire_date: String,
    pub referral_no: String,
    pub recruiting_agency: String,
    pub employer: String,
    pub country: String,
    pub bmet_no: String,
    pub gender: String,
    pub blood_group: String,
    pub nid: String,
    pub passport_name: String,
    pub passport_no1: String,
}

impl FormFields {
    fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            ec_no: record.ec_no.clone(),
            name: record.name.clone(),
            ec_date: to_iso(&record.ec_date),
            birth_date: record.birth_date.clone(),
            passport_no: record.passport_no.clone(),
            passport_issue_date: record.passport_issue_date.clone(),
            passport_expire_date: record.passport_expire_date.clone(),
            visa_no: record.visa_no.clone(),
            visa_issue_date: record.visa_issue_date.clone(),
            visa_expire_date: record.visa_expire_date.clone(),
            referral_no: record.referral_no.clone(),
            recruiting_agency: record.recruiting_agency.clone(),
            employer: record.employer.clone(),
            country: record.country.clone(),
            bmet_no: record.bmet_no.clone(),
            gender: record.gender.clone(),
            blood_group: record.blood_group.clone(),
            nid: record.nid.clone(),
            passport_name: record.passport_name.clone(),
            passport_no1: record.passport_no1.clone(),
        }
    }

    fn dates(&self) -> [(&'static str, &str); 6] {
        [
            ("EC Date", self.ec_date.as_str()),
            ("Birth Date", self.birth_date.as_str()),
            ("Passport Issue Date", self.passport_issue_date.as_str()),
            ("Passport Expire Date", self.passport_expire_date.as_str()),
            ("Visa Issue Date", self.visa_issue_date.as_str()),
            ("Visa Expire Date", self.visa_expire_date.as_str()),
        ]
    }
}

/// Where the UI should go after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Navigation {
    ListView,
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub record: EmployeeRecord,
    pub index: usize,
    pub mode: FormMode,
    pub persisted: bool,
    pub warnings: Vec<String>,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, Default)]
struct ImageValues {
    photo: String,
    logo_left: String,
    logo_right: String,
}

impl ImageValues {
    fn get_mut(&mut self, slot: ImageSlot) -> &mut String {
        match slot {
            ImageSlot::Photo => &mut self.photo,
            ImageSlot::LogoLeft => &mut self.logo_left,
            ImageSlot::LogoRight => &mut self.logo_right,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingEdit {
    ticket: EditTicket,
    slot: ImageSlot,
}

pub struct FormController {
    mode: FormMode,
    list: Vec<EmployeeRecord>,
    fields: FormFields,
    images: ImageValues,
    pending: Option<PendingEdit>,
    next_ticket: u64,
}

impl FormController {
    /// Opens the form over `list`, in Edit mode when `index` resolves.
    pub fn open(list: Vec<EmployeeRecord>, index: Option<&str>) -> Self {
        let editing = index
            .and_then(parse_index)
            .and_then(|i| find_by_index(&list, i).map(|record| (i, record)));

        let (mode, fields, images) = match editing {
            Some((index, record)) => {
                let images = ImageValues {
                    photo: resolve_photo(record).unwrap_or_default().to_string(),
                    logo_left: record.logo_left.clone().unwrap_or_default(),
                    logo_right: record.logo_right.clone().unwrap_or_default(),
                };
                (
                    FormMode::Edit { index },
                    FormFields::from_record(record),
                    images,
                )
            }
            None => (FormMode::Create, FormFields::default(), ImageValues::default()),
        };

        Self {
            mode,
            list,
            fields,
            images,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Current value of an image slot; empty when nothing is loaded.
    pub fn image(&self, slot: ImageSlot) -> &str {
        match slot {
            ImageSlot::Photo => &self.images.photo,
            ImageSlot::LogoLeft => &self.images.logo_left,
            ImageSlot::LogoRight => &self.images.logo_right,
        }
    }

    pub fn pending_edit(&self) -> Option<ImageSlot> {
        self.pending.map(|p| p.slot)
    }

    pub fn request_image_edit(&mut self, slot: ImageSlot, source: SourceImage) -> EditRequest {
        let ticket = EditTicket(self.next_ticket);
        self.next_ticket += 1;
        if let Some(previous) = self.pending.replace(PendingEdit { ticket, slot }) {
            log::debug!("Image edit for {} superseded", previous.slot);
        }
        EditRequest {
            ticket,
            slot,
            source,
            width: EDIT_SIZE,
            height: EDIT_SIZE,
        }
    }

    /// Applies an edit response. Returns false for a stale or cancelled ticket.
    pub fn complete_image_edit(&mut self, edited: EditedImage) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == edited.ticket => {
                *self.images.get_mut(pending.slot) = edited.data_uri;
                self.pending = None;
                true
            }
            _ => {
                log::debug!("Ignoring stale image edit response");
                false
            }
        }
    }

    pub fn cancel_image_edit(&mut self) {
        self.pending = None;
    }

    pub fn build_record(&self) -> EmployeeRecord {
        let f = &self.fields;
        let text = |v: &str| v.trim().to_string();
        let image = |v: &str| (!v.is_empty()).then(|| v.to_string());

        EmployeeRecord {
            ec_no: text(&f.ec_no),
            name: text(&f.name),
            ec_date: to_display(&f.ec_date),
            birth_date: f.birth_date.clone(),
            passport_no: text(&f.passport_no),
            passport_issue_date: f.passport_issue_date.clone(),
            passport_expire_date: f.passport_expire_date.clone(),
            visa_no: text(&f.visa_no),
            visa_issue_date: f.visa_issue_date.clone(),
            visa_expire_date: f.visa_expire_date.clone(),
            referral_no: text(&f.referral_no),
            recruiting_agency: text(&f.recruiting_agency),
            employer: text(&f.employer),
            country: text(&f.country),
            bmet_no: text(&f.bmet_no),
            gender: text(&f.gender),
            blood_group: text(&f.blood_group),
            nid: text(&f.nid),
            passport_name: text(&f.passport_name),
            passport_no1: text(&f.passport_no1),
            photo_data: image(&self.images.photo),
            photo: None,
            logo_left: image(&self.images.logo_left),
            logo_right: image(&self.images.logo_right),
        }
    }

    /// Non-blocking checks on a built record.
    pub fn warnings(&self, record: &EmployeeRecord) -> Vec<String> {
        let mut warnings = Vec::new();
        if record.ec_no.is_empty() {
            warnings.push("EC No is empty; the card cannot be looked up".to_string());
        }
        if record.name.is_empty() {
            warnings.push("Name is empty".to_string());
        }

        let own_index = match self.mode {
            FormMode::Edit { index } => Some(index),
            FormMode::Create => None,
        };
        if !record.ec_no.is_empty() {
            let clash = self
                .list
                .iter()
                .enumerate()
                .find(|(i, r)| Some(*i) != own_index && r.ec_no == record.ec_no);
            if let Some((i, _)) = clash {
                warnings.push(format!(
                    "EC No {} is already used by record {}; card lookups show the first one",
                    record.ec_no, i
                ));
            }
        }

        for (label, value) in self.fields.dates() {
            if !value.is_empty() && !is_calendar_date(value) {
                warnings.push(format!("{} '{}' is not a valid date", label, value));
            }
        }
        warnings
    }

    pub fn submit<B: SlotBackend>(mut self, store: &mut RecordStore<B>) -> SubmitOutcome {
        let record = self.build_record();
        let warnings = self.warnings(&record);

        let index = match self.mode {
            FormMode::Edit { index } => {
                self.list[index] = record.clone();
                index
            }
            FormMode::Create => {
                self.list.push(record.clone());
                self.list.len() - 1
            }
        };
        let persisted = store.save(&self.list);

        SubmitOutcome {
            record,
            index,
            mode: self.mode,
            persisted,
            warnings,
            navigation: Navigation::ListView,
        }
    }
}
