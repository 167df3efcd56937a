use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "Matutino")]
    Morning,
    #[serde(rename = "Vespertino")]
    Afternoon,
    #[serde(rename = "Mixto")]
    Mixed,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Mixed];

    /// Label shown on the form and in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Matutino",
            Shift::Afternoon => "Vespertino",
            Shift::Mixed => "Mixto",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Matutino" => Some(Shift::Morning),
            "Vespertino" => Some(Shift::Afternoon),
            "Mixto" => Some(Shift::Mixed),
            _ => None,
        }
    }

    /// Helper: convert input from CLI. Accepts the Spanish label or a short
    /// code (M/V/X, morning/afternoon/mixed), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "matutino" | "m" | "morning" => Some(Shift::Morning),
            "vespertino" | "v" | "afternoon" => Some(Shift::Afternoon),
            "mixto" | "x" | "mixed" => Some(Shift::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
