//! Fulfillment tally: how many sections apply and how many of those carry
//! photo evidence.

use crate::models::{ListName, LogbookEntry, NamedPhoto, SectionKey, SlotArray};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Fulfillment {
    pub applicable: usize,
    pub fulfilled: usize,
}

impl Fulfillment {
    pub fn pending(&self) -> usize {
        self.applicable - self.fulfilled
    }
}

/// Whether any photo owned by `section` is present: its named photos, its
/// slot array, or the photo fields of the lists feeding it.
pub fn section_has_evidence(entry: &LogbookEntry, section: SectionKey) -> bool {
    let named = NamedPhoto::of_section(section).any(|p| entry.photo(p).is_some());
    if named {
        return true;
    }

    let slots = SlotArray::ALL
        .iter()
        .filter(|a| a.section() == section)
        .any(|a| match a {
            SlotArray::Handwash => entry.handwash_photos.any(),
            SlotArray::Cleaning => entry.cleaning_photos.any(),
        });
    if slots {
        return true;
    }

    ListName::ALL
        .iter()
        .filter(|l| l.section() == section)
        .any(|l| entry.list_has_evidence(*l))
}

/// Walk the sections in render order. Recomputed on every call.
pub fn fulfillment(entry: &LogbookEntry) -> Fulfillment {
    entry
        .applies
        .applicable()
        .fold(Fulfillment::default(), |mut acc, section| {
            acc.applicable += 1;
            if section_has_evidence(entry, section) {
                acc.fulfilled += 1;
            }
            acc
        })
}
