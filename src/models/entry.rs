//! The logbook entry: the single aggregate holding a whole shift checklist.

use super::items::{
    FridgeUnit, ItemId, ItemTemplate, ListItem, ListName, PairedEvidenceItem, PhotoItem,
    SingleEvidenceItem,
};
use super::photo::{CLEANING_AREAS, HANDWASH_STEPS, NamedPhoto, Photo, PhotoSlots};
use super::section::{ApplicabilityMap, normalize};
use super::shift::Shift;
use super::staff::StaffRow;
use super::temperature::DEFAULT_PPM;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const SEED_FRIDGES: usize = 4;

/// Free-text scalar fields of the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Unit,
    Responsible,
    FvTime,
    FvPpm,
    CoolFood1,
    CoolFood2,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        TextField::Unit,
        TextField::Responsible,
        TextField::FvTime,
        TextField::FvPpm,
        TextField::CoolFood1,
        TextField::CoolFood2,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TextField::Unit => "unit",
            TextField::Responsible => "responsible",
            TextField::FvTime => "fvTime",
            TextField::FvPpm => "fvPpm",
            TextField::CoolFood1 => "coolFood1",
            TextField::CoolFood2 => "coolFood2",
        }
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        TextField::ALL
            .into_iter()
            .find(|f| normalize(f.key()) == wanted)
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookEntry {
    // Identification
    pub unit: String,
    pub responsible: String,
    pub shift: Shift,
    pub date: NaiveDate,

    pub applies: ApplicabilityMap,

    // A) Before service
    pub staff_count: String,
    pub staff_list: Vec<StaffRow>,
    pub staff_photos: Vec<PhotoItem>,
    pub handwash_photos: PhotoSlots<HANDWASH_STEPS>,
    pub cleaning_photos: PhotoSlots<CLEANING_AREAS>,
    pub retainers: Vec<PhotoItem>,
    pub fridges: Vec<FridgeUnit>,
    pub fv_time: String,
    pub fv_ppm: String,
    pub cook_list: Vec<SingleEvidenceItem>,
    pub reheat_list: Vec<SingleEvidenceItem>,

    // B) During service
    pub catering_list: Vec<PairedEvidenceItem>,
    pub hot_bar_list: Vec<SingleEvidenceItem>,
    pub cold_bar_list: Vec<SingleEvidenceItem>,
    pub cool_food_1: String,
    pub cool_food_2: String,

    /// Named single-photo evidence, across all phases.
    #[serde(default)]
    pub photos: BTreeMap<NamedPhoto, Photo>,

    next_id: u64,
}

impl LogbookEntry {
    /// Fresh entry with the domain defaults: everything applies, one seed
    /// item per food list and per retainer list, four fridge units, empty
    /// roster.
    pub fn new(date: NaiveDate) -> Self {
        let mut entry = Self {
            unit: String::new(),
            responsible: String::new(),
            shift: Shift::default(),
            date,
            applies: ApplicabilityMap::default(),
            staff_count: String::new(),
            staff_list: Vec::new(),
            staff_photos: Vec::new(),
            handwash_photos: PhotoSlots::default(),
            cleaning_photos: PhotoSlots::default(),
            retainers: Vec::new(),
            fridges: Vec::new(),
            fv_time: String::new(),
            fv_ppm: DEFAULT_PPM.to_string(),
            cook_list: Vec::new(),
            reheat_list: Vec::new(),
            catering_list: Vec::new(),
            hot_bar_list: Vec::new(),
            cold_bar_list: Vec::new(),
            cool_food_1: String::new(),
            cool_food_2: String::new(),
            photos: BTreeMap::new(),
            next_id: 1,
        };

        let blank = ItemTemplate::default();
        entry.retainers = vec![PhotoItem::from_template(entry.allocate_id(), &blank)];
        entry.fridges = (0..SEED_FRIDGES)
            .map(|_| FridgeUnit::from_template(entry.allocate_id(), &blank))
            .collect();
        entry.cook_list = vec![SingleEvidenceItem::from_template(entry.allocate_id(), &blank)];
        entry.reheat_list = vec![SingleEvidenceItem::from_template(entry.allocate_id(), &blank)];
        entry.catering_list = vec![PairedEvidenceItem::from_template(entry.allocate_id(), &blank)];
        entry.hot_bar_list = vec![SingleEvidenceItem::from_template(entry.allocate_id(), &blank)];
        entry.cold_bar_list = vec![SingleEvidenceItem::from_template(entry.allocate_id(), &blank)];
        for item in entry.hot_bar_list.iter_mut().chain(entry.cold_bar_list.iter_mut()) {
            item.track_risk();
        }
        entry
    }

    /// Hand out the next id. Ids are entry-wide, so an id names at most one
    /// element across every list and the roster.
    pub(crate) fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn photo(&self, field: NamedPhoto) -> Option<&Photo> {
        self.photos.get(&field)
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Unit => &self.unit,
            TextField::Responsible => &self.responsible,
            TextField::FvTime => &self.fv_time,
            TextField::FvPpm => &self.fv_ppm,
            TextField::CoolFood1 => &self.cool_food_1,
            TextField::CoolFood2 => &self.cool_food_2,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Unit => &mut self.unit,
            TextField::Responsible => &mut self.responsible,
            TextField::FvTime => &mut self.fv_time,
            TextField::FvPpm => &mut self.fv_ppm,
            TextField::CoolFood1 => &mut self.cool_food_1,
            TextField::CoolFood2 => &mut self.cool_food_2,
        }
    }

    /// Ids currently present in `list`, in order.
    pub fn item_ids(&self, list: ListName) -> Vec<ItemId> {
        fn ids<T: ListItem>(items: &[T]) -> Vec<ItemId> {
            items.iter().map(ListItem::id).collect()
        }
        match list {
            ListName::Cook => ids(&self.cook_list),
            ListName::Reheat => ids(&self.reheat_list),
            ListName::Catering => ids(&self.catering_list),
            ListName::HotBar => ids(&self.hot_bar_list),
            ListName::ColdBar => ids(&self.cold_bar_list),
            ListName::Fridges => ids(&self.fridges),
            ListName::Retainers => ids(&self.retainers),
            ListName::StaffPhotos => ids(&self.staff_photos),
        }
    }

    /// Whether any item of `list` carries a photo.
    pub fn list_has_evidence(&self, list: ListName) -> bool {
        fn any<T: ListItem>(items: &[T]) -> bool {
            items.iter().any(ListItem::has_evidence)
        }
        match list {
            ListName::Cook => any(&self.cook_list),
            ListName::Reheat => any(&self.reheat_list),
            ListName::Catering => any(&self.catering_list),
            ListName::HotBar => any(&self.hot_bar_list),
            ListName::ColdBar => any(&self.cold_bar_list),
            ListName::Fridges => any(&self.fridges),
            ListName::Retainers => any(&self.retainers),
            ListName::StaffPhotos => any(&self.staff_photos),
        }
    }

    /// Single-evidence list lookup, used for risk inspection.
    pub fn single_item(&self, list: ListName, id: ItemId) -> Option<&SingleEvidenceItem> {
        let items = match list {
            ListName::Cook => &self.cook_list,
            ListName::Reheat => &self.reheat_list,
            ListName::HotBar => &self.hot_bar_list,
            ListName::ColdBar => &self.cold_bar_list,
            _ => return None,
        };
        items.iter().find(|i| i.id == id)
    }
}
