//! The form state store: one owned entry, mutated only through [`Update`].

use crate::core::list_editor;
use crate::core::report::{self, ReportProjection};
use crate::core::roster;
use crate::core::tally::{self, Fulfillment};
use crate::errors::{AppError, AppResult};
use crate::models::temperature::PPM_OPTIONS;
use crate::models::{
    FieldValue, ItemField, ItemId, ItemTemplate, ListName, LogbookEntry, NamedPhoto, Photo,
    SectionKey, Shift, SlotArray, StaffField, TextField,
};
use chrono::NaiveDate;

/// Every state transition the logbook supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    SetText(TextField, String),
    SetShift(Shift),
    SetDate(NaiveDate),
    SetApplies(SectionKey, bool),
    SetHeadcount(String),
    UpdateStaff(ItemId, StaffField),
    AddItem(ListName, ItemTemplate),
    RemoveItem(ListName, ItemId),
    UpdateField(ListName, ItemId, ItemField, FieldValue),
    SetPhoto(NamedPhoto, Option<Photo>),
    SetSlot(SlotArray, usize, Option<Photo>),
}

/// What an applied update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    ItemAdded(ItemId),
    /// New roster length after a headcount change.
    Headcount(usize),
    /// The targeted id did not exist; nothing changed.
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    entry: LogbookEntry,
}

impl Session {
    pub fn new(entry: LogbookEntry) -> Self {
        Self { entry }
    }

    /// Session over a freshly seeded entry.
    pub fn fresh(date: NaiveDate) -> Self {
        Self::new(LogbookEntry::new(date))
    }

    pub fn entry(&self) -> &LogbookEntry {
        &self.entry
    }

    /// Apply one update. On error the entry is left exactly as it was.
    pub fn apply(&mut self, update: Update) -> AppResult<Applied> {
        let entry = &mut self.entry;

        let applied = match update {
            Update::SetText(field, value) => {
                if field == TextField::FvPpm && !PPM_OPTIONS.contains(&value.as_str()) {
                    return Err(AppError::InvalidPpm(value));
                }
                *entry.text_mut(field) = value;
                Applied::Changed
            }
            Update::SetShift(shift) => {
                entry.shift = shift;
                Applied::Changed
            }
            Update::SetDate(date) => {
                entry.date = date;
                Applied::Changed
            }
            Update::SetApplies(section, applies) => {
                entry.applies.set(section, applies);
                Applied::Changed
            }
            Update::SetHeadcount(raw) => Applied::Headcount(roster::set_headcount(entry, &raw)),
            Update::UpdateStaff(id, field) => changed_or_miss(roster::update_staff(entry, id, field)),
            Update::AddItem(list, template) => {
                Applied::ItemAdded(list_editor::add_item(entry, list, template)?)
            }
            Update::RemoveItem(list, id) => {
                changed_or_miss(list_editor::remove_item(entry, list, id))
            }
            Update::UpdateField(list, id, field, value) => {
                changed_or_miss(list_editor::update_field(entry, list, id, field, value)?)
            }
            Update::SetPhoto(field, photo) => {
                list_editor::set_photo(entry, field, photo);
                Applied::Changed
            }
            Update::SetSlot(array, index, photo) => {
                list_editor::set_slot(entry, array, index, photo)?;
                Applied::Changed
            }
        };

        Ok(applied)
    }

    pub fn fulfillment(&self) -> Fulfillment {
        tally::fulfillment(&self.entry)
    }

    pub fn report(&self) -> ReportProjection {
        report::project(&self.entry)
    }
}

fn changed_or_miss(found: bool) -> Applied {
    if found {
        Applied::Changed
    } else {
        Applied::NoMatch
    }
}
