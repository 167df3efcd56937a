//! Photo evidence: the opaque image payload, fixed-size slot arrays and the
//! named single-photo fields of the logbook.

use super::section::{SectionKey, normalize};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An embeddable image payload as handed over by the ingestion boundary
/// (a data URL, or a reference to a file the host can resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed-length ordered sequence of optional photos. The length is part of
/// the type and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSlots<const N: usize> {
    slots: [Option<Photo>; N],
}

impl<const N: usize> Default for PhotoSlots<N> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<const N: usize> PhotoSlots<N> {
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to one slot; `None` when `index >= N`.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Option<Photo>> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Photo>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn any(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<const N: usize> Serialize for PhotoSlots<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.slots.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for PhotoSlots<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<Option<Photo>> = Vec::deserialize(deserializer)?;
        let len = raw.len();
        let slots: [Option<Photo>; N] = raw
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"the fixed slot count"))?;
        Ok(Self { slots })
    }
}

pub const HANDWASH_STEPS: usize = 6;
pub const CLEANING_AREAS: usize = 4;

pub const HANDWASH_LABELS: [&str; HANDWASH_STEPS] = [
    "Cepillado de uñas",
    "Lavado entre dedos",
    "Palma",
    "Brazo",
    "Enjuague mano",
    "Secado",
];

pub const CLEANING_LABELS: [&str; CLEANING_AREAS] = ["Área 1", "Área 2", "Área 3", "Área 4"];

/// Names of the fixed-size slot arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotArray {
    Handwash,
    Cleaning,
}

impl SlotArray {
    pub const ALL: [SlotArray; 2] = [SlotArray::Handwash, SlotArray::Cleaning];

    pub fn key(&self) -> &'static str {
        match self {
            SlotArray::Handwash => "handwash",
            SlotArray::Cleaning => "cleaning",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SlotArray::Handwash => HANDWASH_STEPS,
            SlotArray::Cleaning => CLEANING_AREAS,
        }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SlotArray::Handwash => &HANDWASH_LABELS,
            SlotArray::Cleaning => &CLEANING_LABELS,
        }
    }

    pub fn section(&self) -> SectionKey {
        match self {
            SlotArray::Handwash => SectionKey::Handwash,
            SlotArray::Cleaning => SectionKey::Cleaning,
        }
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        SlotArray::ALL.into_iter().find(|a| a.key() == wanted)
    }
}

impl fmt::Display for SlotArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Named single-photo evidence fields. Each one belongs to exactly one
/// section and counts as evidence for it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum NamedPhoto {
    StaffUniform,
    SolutionRegister,
    ChlorineRegister,
    ChlorineMeasure,
    HoodRegister,
    HoodOperation,
    ThermoAdjust,
    FridgeRegister,
    FreezerRegister,
    FvStrip,
    FvRegister,
    FvWash,
    FvDisinfect,
    CookRegister,
    ReheatRegister,
    Mesh1,
    Mesh2,
    HotBarRegister,
    ColdBarRegister,
    Witness,
    WitnessRegister,
    DishwasherTemp,
    DishwasherRegister,
    CoolFood1,
    CoolFood2,
    CoolRegister,
    HandoverHotBar,
    HandoverColdBar,
    HandoverSalon,
    HandoverDry,
    HandoverChemicals,
    HandoverFridge,
    HandoverColdKitchen,
    HandoverHotKitchen,
    HandoverReception,
}

impl NamedPhoto {
    pub const ALL: [NamedPhoto; 35] = [
        NamedPhoto::StaffUniform,
        NamedPhoto::SolutionRegister,
        NamedPhoto::ChlorineRegister,
        NamedPhoto::ChlorineMeasure,
        NamedPhoto::HoodRegister,
        NamedPhoto::HoodOperation,
        NamedPhoto::ThermoAdjust,
        NamedPhoto::FridgeRegister,
        NamedPhoto::FreezerRegister,
        NamedPhoto::FvStrip,
        NamedPhoto::FvRegister,
        NamedPhoto::FvWash,
        NamedPhoto::FvDisinfect,
        NamedPhoto::CookRegister,
        NamedPhoto::ReheatRegister,
        NamedPhoto::Mesh1,
        NamedPhoto::Mesh2,
        NamedPhoto::HotBarRegister,
        NamedPhoto::ColdBarRegister,
        NamedPhoto::Witness,
        NamedPhoto::WitnessRegister,
        NamedPhoto::DishwasherTemp,
        NamedPhoto::DishwasherRegister,
        NamedPhoto::CoolFood1,
        NamedPhoto::CoolFood2,
        NamedPhoto::CoolRegister,
        NamedPhoto::HandoverHotBar,
        NamedPhoto::HandoverColdBar,
        NamedPhoto::HandoverSalon,
        NamedPhoto::HandoverDry,
        NamedPhoto::HandoverChemicals,
        NamedPhoto::HandoverFridge,
        NamedPhoto::HandoverColdKitchen,
        NamedPhoto::HandoverHotKitchen,
        NamedPhoto::HandoverReception,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NamedPhoto::StaffUniform => "staffUniform",
            NamedPhoto::SolutionRegister => "solutionRegister",
            NamedPhoto::ChlorineRegister => "chlorineRegister",
            NamedPhoto::ChlorineMeasure => "chlorineMeasure",
            NamedPhoto::HoodRegister => "hoodRegister",
            NamedPhoto::HoodOperation => "hoodOperation",
            NamedPhoto::ThermoAdjust => "thermoAdjust",
            NamedPhoto::FridgeRegister => "fridgeRegister",
            NamedPhoto::FreezerRegister => "freezerRegister",
            NamedPhoto::FvStrip => "fvStrip",
            NamedPhoto::FvRegister => "fvRegister",
            NamedPhoto::FvWash => "fvWash",
            NamedPhoto::FvDisinfect => "fvDisinfect",
            NamedPhoto::CookRegister => "cookRegister",
            NamedPhoto::ReheatRegister => "reheatRegister",
            NamedPhoto::Mesh1 => "mesh1",
            NamedPhoto::Mesh2 => "mesh2",
            NamedPhoto::HotBarRegister => "hotBarRegister",
            NamedPhoto::ColdBarRegister => "coldBarRegister",
            NamedPhoto::Witness => "witness",
            NamedPhoto::WitnessRegister => "witnessRegister",
            NamedPhoto::DishwasherTemp => "dishwasherTemp",
            NamedPhoto::DishwasherRegister => "dishwasherRegister",
            NamedPhoto::CoolFood1 => "coolFood1",
            NamedPhoto::CoolFood2 => "coolFood2",
            NamedPhoto::CoolRegister => "coolRegister",
            NamedPhoto::HandoverHotBar => "handoverHotBar",
            NamedPhoto::HandoverColdBar => "handoverColdBar",
            NamedPhoto::HandoverSalon => "handoverSalon",
            NamedPhoto::HandoverDry => "handoverDry",
            NamedPhoto::HandoverChemicals => "handoverChemicals",
            NamedPhoto::HandoverFridge => "handoverFridge",
            NamedPhoto::HandoverColdKitchen => "handoverColdKitchen",
            NamedPhoto::HandoverHotKitchen => "handoverHotKitchen",
            NamedPhoto::HandoverReception => "handoverReception",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NamedPhoto::StaffUniform => "Fotografía de grupo uniforme",
            NamedPhoto::SolutionRegister => "Registro Solución",
            NamedPhoto::ChlorineRegister => "Registro Cloro",
            NamedPhoto::ChlorineMeasure => "Medición Cloro",
            NamedPhoto::HoodRegister => "Registro Campana",
            NamedPhoto::HoodOperation => "Funcionamiento",
            NamedPhoto::ThermoAdjust => "Evidencia Ajuste",
            NamedPhoto::FridgeRegister => "Reg. Refrigeración",
            NamedPhoto::FreezerRegister => "Reg. Congelación",
            NamedPhoto::FvStrip => "Tira Reactiva",
            NamedPhoto::FvRegister => "Registro",
            NamedPhoto::FvWash => "Ev. Lavado",
            NamedPhoto::FvDisinfect => "Ev. Desinfección",
            NamedPhoto::CookRegister => "Registro Temp. Cocción",
            NamedPhoto::ReheatRegister => "Registro Temp. Recalentado",
            NamedPhoto::Mesh1 => "Evidencia 1",
            NamedPhoto::Mesh2 => "Evidencia 2",
            NamedPhoto::HotBarRegister => "Registro General Barra Caliente",
            NamedPhoto::ColdBarRegister => "Registro General Barra Fría",
            NamedPhoto::Witness => "Evidencia",
            NamedPhoto::WitnessRegister => "Registro",
            NamedPhoto::DishwasherTemp => "Evidencia",
            NamedPhoto::DishwasherRegister => "Registro",
            NamedPhoto::CoolFood1 => "Toma Temp 1",
            NamedPhoto::CoolFood2 => "Toma Temp 2",
            NamedPhoto::CoolRegister => "Reg. Enfriamiento",
            NamedPhoto::HandoverHotBar => "Barra Caliente",
            NamedPhoto::HandoverColdBar => "Barra Fría",
            NamedPhoto::HandoverSalon => "Salón",
            NamedPhoto::HandoverDry => "Almacén Secos",
            NamedPhoto::HandoverChemicals => "Alm. Químicos",
            NamedPhoto::HandoverFridge => "Cámara Refrig.",
            NamedPhoto::HandoverColdKitchen => "Cocina Fría",
            NamedPhoto::HandoverHotKitchen => "Cocina Caliente",
            NamedPhoto::HandoverReception => "Recepción",
        }
    }

    pub fn section(&self) -> SectionKey {
        match self {
            NamedPhoto::StaffUniform => SectionKey::Personal,
            NamedPhoto::SolutionRegister => SectionKey::Solution,
            NamedPhoto::ChlorineRegister | NamedPhoto::ChlorineMeasure => SectionKey::Chlorine,
            NamedPhoto::HoodRegister | NamedPhoto::HoodOperation => SectionKey::Hood,
            NamedPhoto::ThermoAdjust => SectionKey::Thermo,
            NamedPhoto::FridgeRegister | NamedPhoto::FreezerRegister => SectionKey::Fridge,
            NamedPhoto::FvStrip
            | NamedPhoto::FvRegister
            | NamedPhoto::FvWash
            | NamedPhoto::FvDisinfect => SectionKey::Fv,
            NamedPhoto::CookRegister => SectionKey::Cook,
            NamedPhoto::ReheatRegister => SectionKey::Reheat,
            NamedPhoto::Mesh1 | NamedPhoto::Mesh2 => SectionKey::Catering,
            NamedPhoto::HotBarRegister => SectionKey::HotBar,
            NamedPhoto::ColdBarRegister => SectionKey::ColdBar,
            NamedPhoto::Witness | NamedPhoto::WitnessRegister => SectionKey::Witness,
            NamedPhoto::DishwasherTemp | NamedPhoto::DishwasherRegister => {
                SectionKey::Dishwasher
            }
            NamedPhoto::CoolFood1 | NamedPhoto::CoolFood2 | NamedPhoto::CoolRegister => {
                SectionKey::Cooling
            }
            NamedPhoto::HandoverHotBar
            | NamedPhoto::HandoverColdBar
            | NamedPhoto::HandoverSalon
            | NamedPhoto::HandoverDry
            | NamedPhoto::HandoverChemicals
            | NamedPhoto::HandoverFridge
            | NamedPhoto::HandoverColdKitchen
            | NamedPhoto::HandoverHotKitchen
            | NamedPhoto::HandoverReception => SectionKey::Handover,
        }
    }

    /// Named photos of one section, in form order.
    pub fn of_section(section: SectionKey) -> impl Iterator<Item = NamedPhoto> {
        NamedPhoto::ALL
            .into_iter()
            .filter(move |p| p.section() == section)
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        NamedPhoto::ALL
            .into_iter()
            .find(|p| normalize(p.key()) == wanted)
    }
}

impl fmt::Display for NamedPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
