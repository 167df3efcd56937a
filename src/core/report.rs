//! Read-only projection of an entry into the printable report.
//!
//! Only applicable sections are projected. A phase whose sections are all
//! excluded is left out as well.

use crate::core::share::document_name;
use crate::core::tally::{self, Fulfillment};
use crate::models::{
    ItemId, ListItem, ListName, LogbookEntry, NamedPhoto, Phase, Photo, RiskState, SectionKey,
    Shift, SlotArray, StaffRow,
};
use chrono::NaiveDate;
use serde::Serialize;

pub const REPORT_TITLE: &str = "Bitácora Digital";

#[derive(Debug, Clone, Serialize)]
pub struct ReportHeader {
    pub unit: String,
    pub responsible: String,
    pub shift: Shift,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPhoto {
    pub label: String,
    pub present: bool,
    pub photo: Option<Photo>,
}

impl ReportPhoto {
    fn new(label: impl Into<String>, photo: Option<&Photo>) -> Self {
        Self {
            label: label.into(),
            present: photo.is_some(),
            photo: photo.cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub id: ItemId,
    pub label: String,
    pub readings: Vec<ReportField>,
    pub photos: Vec<ReportPhoto>,
    /// Present only on risk-classified lists.
    pub risk: Option<RiskState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub key: SectionKey,
    pub title: String,
    pub fulfilled: bool,
    pub fields: Vec<ReportField>,
    pub staff: Vec<StaffRow>,
    pub rows: Vec<ReportRow>,
    pub photos: Vec<ReportPhoto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPhase {
    pub phase: Phase,
    pub title: String,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportProjection {
    pub title: String,
    pub document_name: String,
    pub header: ReportHeader,
    pub fulfillment: Fulfillment,
    pub phases: Vec<ReportPhase>,
}

impl ReportProjection {
    pub fn sections(&self) -> impl Iterator<Item = &ReportSection> {
        self.phases.iter().flat_map(|p| p.sections.iter())
    }

    pub fn section(&self, key: SectionKey) -> Option<&ReportSection> {
        self.sections().find(|s| s.key == key)
    }
}

fn field(label: &str, value: &str) -> ReportField {
    ReportField {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn rows_of<T: ListItem>(list: ListName, items: &[T]) -> Vec<ReportRow> {
    let with_risk = list.risk_scale().is_some();

    items
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let label = match item.name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => list.item_label(pos),
            };
            ReportRow {
                id: item.id(),
                label,
                readings: item
                    .readings()
                    .into_iter()
                    .map(|(l, v)| field(l, v))
                    .collect(),
                photos: item
                    .photos()
                    .into_iter()
                    .map(|(l, p)| ReportPhoto::new(l, p))
                    .collect(),
                risk: if with_risk { item.risk() } else { None },
            }
        })
        .collect()
}

fn list_rows(entry: &LogbookEntry, list: ListName) -> Vec<ReportRow> {
    match list {
        ListName::Cook => rows_of(list, &entry.cook_list),
        ListName::Reheat => rows_of(list, &entry.reheat_list),
        ListName::Catering => rows_of(list, &entry.catering_list),
        ListName::HotBar => rows_of(list, &entry.hot_bar_list),
        ListName::ColdBar => rows_of(list, &entry.cold_bar_list),
        ListName::Fridges => rows_of(list, &entry.fridges),
        ListName::Retainers => rows_of(list, &entry.retainers),
        ListName::StaffPhotos => rows_of(list, &entry.staff_photos),
    }
}

fn section_fields(entry: &LogbookEntry, key: SectionKey) -> Vec<ReportField> {
    match key {
        SectionKey::Personal => vec![field("Personal en turno", &entry.staff_count)],
        SectionKey::Fv => vec![
            field("Hora", &entry.fv_time),
            field("PPM", &entry.fv_ppm),
        ],
        SectionKey::Cooling => vec![
            field("Alimento 1", &entry.cool_food_1),
            field("Alimento 2", &entry.cool_food_2),
        ],
        _ => Vec::new(),
    }
}

fn slot_photos(entry: &LogbookEntry, key: SectionKey) -> Vec<ReportPhoto> {
    let mut out = Vec::new();
    for array in SlotArray::ALL.iter().filter(|a| a.section() == key) {
        let photos: Vec<Option<&Photo>> = match array {
            SlotArray::Handwash => entry.handwash_photos.iter().collect(),
            SlotArray::Cleaning => entry.cleaning_photos.iter().collect(),
        };
        out.extend(
            array
                .labels()
                .iter()
                .zip(photos)
                .map(|(label, p)| ReportPhoto::new(*label, p)),
        );
    }
    out
}

fn project_section(entry: &LogbookEntry, key: SectionKey) -> ReportSection {
    let rows = ListName::ALL
        .iter()
        .filter(|l| l.section() == key)
        .flat_map(|l| list_rows(entry, *l))
        .collect();

    let mut photos = slot_photos(entry, key);
    photos.extend(NamedPhoto::of_section(key).map(|p| ReportPhoto::new(p.label(), entry.photo(p))));

    let staff = if key == SectionKey::Personal {
        entry.staff_list.clone()
    } else {
        Vec::new()
    };

    ReportSection {
        key,
        title: key.title().to_string(),
        fulfilled: tally::section_has_evidence(entry, key),
        fields: section_fields(entry, key),
        staff,
        rows,
        photos,
    }
}

/// Build the report of `entry` as it stands now.
pub fn project(entry: &LogbookEntry) -> ReportProjection {
    let mut phases: Vec<ReportPhase> = Vec::new();

    for key in entry.applies.applicable() {
        let section = project_section(entry, key);
        match phases.last_mut() {
            Some(last) if last.phase == key.phase() => last.sections.push(section),
            _ => phases.push(ReportPhase {
                phase: key.phase(),
                title: key.phase().title().to_string(),
                sections: vec![section],
            }),
        }
    }

    ReportProjection {
        title: REPORT_TITLE.to_string(),
        document_name: document_name(entry),
        header: ReportHeader {
            unit: entry.unit.clone(),
            responsible: entry.responsible.clone(),
            shift: entry.shift,
            date: entry.date,
        },
        fulfillment: tally::fulfillment(entry),
        phases,
    }
}
