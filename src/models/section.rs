//! Checklist sections, the phase they belong to, and the per-shift
//! applicability map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Phase {
    Before,
    During,
    Handover,
}

impl Phase {
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Before => "A) Antes del Servicio",
            Phase::During => "B) Durante el Servicio",
            Phase::Handover => "C) Entrega de Turno",
        }
    }
}

/// Fixed, exhaustive set of checklist sections. Declaration order is the
/// render order of the form and the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Personal,
    Handwash,
    Cleaning,
    Solution,
    Chlorine,
    Hood,
    Thermo,
    Fridge,
    Fv,
    Cook,
    Reheat,
    Catering,
    HotBar,
    ColdBar,
    Witness,
    Dishwasher,
    Cooling,
    Handover,
}

impl SectionKey {
    pub const COUNT: usize = 18;

    pub const ALL: [SectionKey; SectionKey::COUNT] = [
        SectionKey::Personal,
        SectionKey::Handwash,
        SectionKey::Cleaning,
        SectionKey::Solution,
        SectionKey::Chlorine,
        SectionKey::Hood,
        SectionKey::Thermo,
        SectionKey::Fridge,
        SectionKey::Fv,
        SectionKey::Cook,
        SectionKey::Reheat,
        SectionKey::Catering,
        SectionKey::HotBar,
        SectionKey::ColdBar,
        SectionKey::Witness,
        SectionKey::Dishwasher,
        SectionKey::Cooling,
        SectionKey::Handover,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SectionKey::Personal => "personal",
            SectionKey::Handwash => "handwash",
            SectionKey::Cleaning => "cleaning",
            SectionKey::Solution => "solution",
            SectionKey::Chlorine => "chlorine",
            SectionKey::Hood => "hood",
            SectionKey::Thermo => "thermo",
            SectionKey::Fridge => "fridge",
            SectionKey::Fv => "fv",
            SectionKey::Cook => "cook",
            SectionKey::Reheat => "reheat",
            SectionKey::Catering => "catering",
            SectionKey::HotBar => "hotBar",
            SectionKey::ColdBar => "coldBar",
            SectionKey::Witness => "witness",
            SectionKey::Dishwasher => "dishwasher",
            SectionKey::Cooling => "cooling",
            SectionKey::Handover => "handover",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Personal => "Personal",
            SectionKey::Handwash => "Lavado de Manos",
            SectionKey::Cleaning => "Limpieza de Áreas",
            SectionKey::Solution => "Solución Desinfectante",
            SectionKey::Chlorine => "Cloro Residual",
            SectionKey::Hood => "Funcionamiento Campana",
            SectionKey::Thermo => "Ajuste de Termómetro",
            SectionKey::Fridge => "Refrigeración",
            SectionKey::Fv => "Frutas y Verduras",
            SectionKey::Cook => "Cocción",
            SectionKey::Reheat => "Recalentado",
            SectionKey::Catering => "Catering",
            SectionKey::HotBar => "Temperatura Barra Caliente",
            SectionKey::ColdBar => "Temperatura Barra Fría",
            SectionKey::Witness => "Muestras Testigo",
            SectionKey::Dishwasher => "Máquina Lavaloza",
            SectionKey::Cooling => "Enfriamiento",
            SectionKey::Handover => "Entrega de Turno",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            SectionKey::Catering
            | SectionKey::HotBar
            | SectionKey::ColdBar
            | SectionKey::Witness
            | SectionKey::Dishwasher
            | SectionKey::Cooling => Phase::During,
            SectionKey::Handover => Phase::Handover,
            _ => Phase::Before,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a section key from CLI input. Matching ignores case, `-` and `_`,
    /// so `hotBar`, `hot-bar` and `HOT_BAR` are the same section.
    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        SectionKey::ALL
            .into_iter()
            .find(|s| normalize(s.key()) == wanted)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub(crate) fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// "Does this section apply to the shift?" for every section.
///
/// The key set is fixed by `SectionKey`; every flag defaults to `true` and
/// only changes through [`ApplicabilityMap::set`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<SectionKey, bool>",
    into = "BTreeMap<SectionKey, bool>"
)]
pub struct ApplicabilityMap {
    flags: [bool; SectionKey::COUNT],
}

impl Default for ApplicabilityMap {
    fn default() -> Self {
        Self {
            flags: [true; SectionKey::COUNT],
        }
    }
}

impl ApplicabilityMap {
    pub fn applies(&self, key: SectionKey) -> bool {
        self.flags[key.index()]
    }

    pub fn set(&mut self, key: SectionKey, applies: bool) {
        self.flags[key.index()] = applies;
    }

    /// Iterate `(section, applies)` in render order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, bool)> + '_ {
        SectionKey::ALL.into_iter().map(|k| (k, self.applies(k)))
    }

    /// Sections that apply, in render order.
    pub fn applicable(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.iter().filter(|(_, a)| *a).map(|(k, _)| k)
    }
}

impl From<BTreeMap<SectionKey, bool>> for ApplicabilityMap {
    fn from(map: BTreeMap<SectionKey, bool>) -> Self {
        let mut out = ApplicabilityMap::default();
        for (k, v) in map {
            out.set(k, v);
        }
        out
    }
}

impl From<ApplicabilityMap> for BTreeMap<SectionKey, bool> {
    fn from(map: ApplicabilityMap) -> Self {
        map.iter().collect()
    }
}
