//! Variable-length list items.
//!
//! Every list holds one item shape; all shapes share the [`ListItem`]
//! contract (a stable id, photo evidence, single-field updates).

use super::photo::Photo;
use super::section::{SectionKey, normalize};
use super::temperature::TemperatureScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry-local item identifier. Never reused once handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(ItemId)
    }
}

/// Fields an update can target on a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Name,
    Temp,
    TempOut,
    TempIn,
    Photo,
    PhotoOut,
    PhotoIn,
    PhotoEquipment,
    PhotoFood,
}

impl ItemField {
    pub const ALL: [ItemField; 9] = [
        ItemField::Name,
        ItemField::Temp,
        ItemField::TempOut,
        ItemField::TempIn,
        ItemField::Photo,
        ItemField::PhotoOut,
        ItemField::PhotoIn,
        ItemField::PhotoEquipment,
        ItemField::PhotoFood,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Temp => "temp",
            ItemField::TempOut => "tempOut",
            ItemField::TempIn => "tempIn",
            ItemField::Photo => "photo",
            ItemField::PhotoOut => "photoOut",
            ItemField::PhotoIn => "photoIn",
            ItemField::PhotoEquipment => "photoEquipment",
            ItemField::PhotoFood => "photoFood",
        }
    }

    pub fn is_photo(&self) -> bool {
        matches!(
            self,
            ItemField::Photo
                | ItemField::PhotoOut
                | ItemField::PhotoIn
                | ItemField::PhotoEquipment
                | ItemField::PhotoFood
        )
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        ItemField::ALL
            .into_iter()
            .find(|f| normalize(f.key()) == wanted)
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// New value for one item field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Photo(Option<Photo>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn photo(photo: Photo) -> Self {
        FieldValue::Photo(Some(photo))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Photo(_) => None,
        }
    }
}

/// Values used to build a new item. Fields a shape does not carry are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTemplate {
    pub name: String,
    pub temp: String,
    pub temp_out: String,
    pub temp_in: String,
    pub photo: Option<Photo>,
}

impl ItemTemplate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_photo(photo: Photo) -> Self {
        Self {
            photo: Some(photo),
            ..Self::default()
        }
    }
}

/// The field was not part of the item's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownField(pub ItemField);

pub trait ListItem {
    fn id(&self) -> ItemId;

    fn from_template(id: ItemId, template: &ItemTemplate) -> Self;

    /// Replace one field, leaving every other field untouched.
    fn set_field(&mut self, field: ItemField, value: FieldValue) -> Result<(), UnknownField>;

    /// Labelled photo fields, in display order.
    fn photos(&self) -> Vec<(&'static str, Option<&Photo>)>;

    fn has_evidence(&self) -> bool {
        self.photos().iter().any(|(_, p)| p.is_some())
    }

    /// Free-text label, for shapes that carry one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Labelled temperature readings, in display order.
    fn readings(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Start carrying risk state. No-op for shapes without a reading.
    fn track_risk(&mut self) {}

    fn risk(&self) -> Option<RiskState> {
        None
    }

    fn risk_mut(&mut self) -> Option<&mut RiskState> {
        None
    }
}

fn set_text(slot: &mut String, field: ItemField, value: FieldValue) -> Result<(), UnknownField> {
    match value {
        FieldValue::Text(s) => {
            *slot = s;
            Ok(())
        }
        FieldValue::Photo(_) => Err(UnknownField(field)),
    }
}

fn set_photo(
    slot: &mut Option<Photo>,
    field: ItemField,
    value: FieldValue,
) -> Result<(), UnknownField> {
    match value {
        FieldValue::Photo(p) => {
            *slot = p;
            Ok(())
        }
        FieldValue::Text(_) => Err(UnknownField(field)),
    }
}

/// Derived risk flags of a service-line reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskState {
    pub is_risk: bool,
    pub was_corrected: bool,
}

/// One food item with one reading and one photo (cooking, reheating, hot and
/// cold service lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleEvidenceItem {
    pub id: ItemId,
    pub name: String,
    pub temp: String,
    pub photo: Option<Photo>,
    /// Only service lines with a risk rule carry this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskState>,
}

impl ListItem for SingleEvidenceItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from_template(id: ItemId, template: &ItemTemplate) -> Self {
        Self {
            id,
            name: template.name.clone(),
            temp: template.temp.clone(),
            photo: template.photo.clone(),
            risk: None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: FieldValue) -> Result<(), UnknownField> {
        match field {
            ItemField::Name => set_text(&mut self.name, field, value),
            ItemField::Temp => set_text(&mut self.temp, field, value),
            ItemField::Photo => set_photo(&mut self.photo, field, value),
            other => Err(UnknownField(other)),
        }
    }

    fn photos(&self) -> Vec<(&'static str, Option<&Photo>)> {
        vec![("Evidencia Toma", self.photo.as_ref())]
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn readings(&self) -> Vec<(&'static str, &str)> {
        vec![("Temp", self.temp.as_str())]
    }

    fn track_risk(&mut self) {
        self.risk.get_or_insert_with(RiskState::default);
    }

    fn risk(&self) -> Option<RiskState> {
        self.risk
    }

    fn risk_mut(&mut self) -> Option<&mut RiskState> {
        self.risk.as_mut()
    }
}

/// Catering item: departure and arrival readings, each with its own photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairedEvidenceItem {
    pub id: ItemId,
    pub name: String,
    pub temp_out: String,
    pub temp_in: String,
    pub photo_out: Option<Photo>,
    pub photo_in: Option<Photo>,
}

impl ListItem for PairedEvidenceItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from_template(id: ItemId, template: &ItemTemplate) -> Self {
        Self {
            id,
            name: template.name.clone(),
            temp_out: template.temp_out.clone(),
            temp_in: template.temp_in.clone(),
            photo_out: None,
            photo_in: None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: FieldValue) -> Result<(), UnknownField> {
        match field {
            ItemField::Name => set_text(&mut self.name, field, value),
            ItemField::TempOut => set_text(&mut self.temp_out, field, value),
            ItemField::TempIn => set_text(&mut self.temp_in, field, value),
            ItemField::PhotoOut => set_photo(&mut self.photo_out, field, value),
            ItemField::PhotoIn => set_photo(&mut self.photo_in, field, value),
            other => Err(UnknownField(other)),
        }
    }

    fn photos(&self) -> Vec<(&'static str, Option<&Photo>)> {
        vec![
            ("Evidencia Salida", self.photo_out.as_ref()),
            ("Evidencia Llegada", self.photo_in.as_ref()),
        ]
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn readings(&self) -> Vec<(&'static str, &str)> {
        vec![("Salida", self.temp_out.as_str()), ("Llegada", self.temp_in.as_str())]
    }
}

/// Refrigerator unit: equipment display and stored food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeUnit {
    pub id: ItemId,
    pub photo_equipment: Option<Photo>,
    pub photo_food: Option<Photo>,
}

impl ListItem for FridgeUnit {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from_template(id: ItemId, _template: &ItemTemplate) -> Self {
        Self {
            id,
            photo_equipment: None,
            photo_food: None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: FieldValue) -> Result<(), UnknownField> {
        match field {
            ItemField::PhotoEquipment => set_photo(&mut self.photo_equipment, field, value),
            ItemField::PhotoFood => set_photo(&mut self.photo_food, field, value),
            other => Err(UnknownField(other)),
        }
    }

    fn photos(&self) -> Vec<(&'static str, Option<&Photo>)> {
        vec![
            ("Foto Equipo", self.photo_equipment.as_ref()),
            ("Foto Alimento", self.photo_food.as_ref()),
        ]
    }
}

/// A bare photo with an id (sanitizer retainers, staff photo batch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoItem {
    pub id: ItemId,
    pub photo: Option<Photo>,
}

impl ListItem for PhotoItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from_template(id: ItemId, template: &ItemTemplate) -> Self {
        Self {
            id,
            photo: template.photo.clone(),
        }
    }

    fn set_field(&mut self, field: ItemField, value: FieldValue) -> Result<(), UnknownField> {
        match field {
            ItemField::Photo => set_photo(&mut self.photo, field, value),
            other => Err(UnknownField(other)),
        }
    }

    fn photos(&self) -> Vec<(&'static str, Option<&Photo>)> {
        vec![("Foto", self.photo.as_ref())]
    }
}

/// Named variable-length lists of the logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListName {
    Cook,
    Reheat,
    Catering,
    HotBar,
    ColdBar,
    Fridges,
    Retainers,
    StaffPhotos,
}

impl ListName {
    pub const ALL: [ListName; 8] = [
        ListName::Cook,
        ListName::Reheat,
        ListName::Catering,
        ListName::HotBar,
        ListName::ColdBar,
        ListName::Fridges,
        ListName::Retainers,
        ListName::StaffPhotos,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ListName::Cook => "cook",
            ListName::Reheat => "reheat",
            ListName::Catering => "catering",
            ListName::HotBar => "hotBar",
            ListName::ColdBar => "coldBar",
            ListName::Fridges => "fridges",
            ListName::Retainers => "retainers",
            ListName::StaffPhotos => "staffPhotos",
        }
    }

    /// Section whose evidence this list contributes to.
    pub fn section(&self) -> SectionKey {
        match self {
            ListName::Cook => SectionKey::Cook,
            ListName::Reheat => SectionKey::Reheat,
            ListName::Catering => SectionKey::Catering,
            ListName::HotBar => SectionKey::HotBar,
            ListName::ColdBar => SectionKey::ColdBar,
            ListName::Fridges => SectionKey::Fridge,
            ListName::Retainers => SectionKey::Solution,
            ListName::StaffPhotos => SectionKey::Personal,
        }
    }

    /// Risk rule of the list: only the service lines opt in.
    pub fn risk_scale(&self) -> Option<TemperatureScale> {
        match self {
            ListName::HotBar => Some(TemperatureScale::Hot),
            ListName::ColdBar => Some(TemperatureScale::Cold),
            _ => None,
        }
    }

    /// Whether items of this list carry `field`.
    pub fn supports(&self, field: ItemField) -> bool {
        let fields: &[ItemField] = match self {
            ListName::Cook | ListName::Reheat | ListName::HotBar | ListName::ColdBar => {
                &[ItemField::Name, ItemField::Temp, ItemField::Photo]
            }
            ListName::Catering => &[
                ItemField::Name,
                ItemField::TempOut,
                ItemField::TempIn,
                ItemField::PhotoOut,
                ItemField::PhotoIn,
            ],
            ListName::Fridges => &[ItemField::PhotoEquipment, ItemField::PhotoFood],
            ListName::Retainers | ListName::StaffPhotos => &[ItemField::Photo],
        };
        fields.contains(&field)
    }

    /// Fallback label of the item at `position` (0-based) for shapes
    /// without a name.
    pub fn item_label(&self, position: usize) -> String {
        let n = position + 1;
        match self {
            ListName::Fridges => format!("Refrigerador {n}"),
            ListName::Retainers => format!("Retén {n}"),
            ListName::StaffPhotos => format!("Foto {n}"),
            _ => format!("Alimento {n}"),
        }
    }

    /// Lists whose items only exist together with their photo.
    pub fn requires_photo(&self) -> bool {
        matches!(self, ListName::StaffPhotos)
    }

    /// Field that carries the photo when none is named explicitly.
    pub fn default_photo_field(&self) -> ItemField {
        match self {
            ListName::Catering => ItemField::PhotoOut,
            ListName::Fridges => ItemField::PhotoEquipment,
            _ => ItemField::Photo,
        }
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        ListName::ALL
            .into_iter()
            .find(|l| normalize(l.key()) == wanted)
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
