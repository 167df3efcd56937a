use super::items::ItemId;
use super::section::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven grooming checks of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroomingCheck {
    Mask,
    Uniform,
    Shoes,
    Hair,
    Nails,
    Jewelry,
    Watch,
}

impl GroomingCheck {
    pub const ALL: [GroomingCheck; 7] = [
        GroomingCheck::Mask,
        GroomingCheck::Uniform,
        GroomingCheck::Shoes,
        GroomingCheck::Hair,
        GroomingCheck::Nails,
        GroomingCheck::Jewelry,
        GroomingCheck::Watch,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GroomingCheck::Mask => "mask",
            GroomingCheck::Uniform => "uniform",
            GroomingCheck::Shoes => "shoes",
            GroomingCheck::Hair => "hair",
            GroomingCheck::Nails => "nails",
            GroomingCheck::Jewelry => "jewelry",
            GroomingCheck::Watch => "watch",
        }
    }

    /// Column header used on the form and the report.
    pub fn label(&self) -> &'static str {
        match self {
            GroomingCheck::Mask => "Cubre B.",
            GroomingCheck::Uniform => "Unif.",
            GroomingCheck::Shoes => "Zapato",
            GroomingCheck::Hair => "Cabello",
            GroomingCheck::Nails => "Uña",
            GroomingCheck::Jewelry => "Joyeria",
            GroomingCheck::Watch => "Reloj",
        }
    }

    pub fn from_key(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        GroomingCheck::ALL.into_iter().find(|c| c.key() == wanted)
    }
}

impl fmt::Display for GroomingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One row of the staff roster. New rows start with every check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRow {
    pub id: ItemId,
    pub name: String,
    pub mask: bool,
    pub uniform: bool,
    pub shoes: bool,
    pub hair: bool,
    pub nails: bool,
    pub jewelry: bool,
    pub watch: bool,
}

impl StaffRow {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            mask: true,
            uniform: true,
            shoes: true,
            hair: true,
            nails: true,
            jewelry: true,
            watch: true,
        }
    }

    pub fn check(&self, check: GroomingCheck) -> bool {
        match check {
            GroomingCheck::Mask => self.mask,
            GroomingCheck::Uniform => self.uniform,
            GroomingCheck::Shoes => self.shoes,
            GroomingCheck::Hair => self.hair,
            GroomingCheck::Nails => self.nails,
            GroomingCheck::Jewelry => self.jewelry,
            GroomingCheck::Watch => self.watch,
        }
    }

    pub fn set_check(&mut self, check: GroomingCheck, value: bool) {
        let slot = match check {
            GroomingCheck::Mask => &mut self.mask,
            GroomingCheck::Uniform => &mut self.uniform,
            GroomingCheck::Shoes => &mut self.shoes,
            GroomingCheck::Hair => &mut self.hair,
            GroomingCheck::Nails => &mut self.nails,
            GroomingCheck::Jewelry => &mut self.jewelry,
            GroomingCheck::Watch => &mut self.watch,
        };
        *slot = value;
    }

    pub fn all_passed(&self) -> bool {
        GroomingCheck::ALL.iter().all(|c| self.check(*c))
    }
}

/// Single-field update of a roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffField {
    Name(String),
    Check(GroomingCheck, bool),
}
