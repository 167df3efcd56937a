use serde::Serialize;
use std::fmt;

pub const HOT_READINGS: [&str; 7] = [
    "Menor a 60°C",
    "61°C",
    "62°C",
    "63°C",
    "64°C",
    "65°C",
    "Mayor a 65°C",
];

pub const COLD_READINGS: [&str; 5] = ["Menor a 4°C", "4°C", "5°C", "6°C", "Mayor a 7°C"];

pub const PPM_OPTIONS: [&str; 5] = ["0", "50", "100", "150", "200"];
pub const DEFAULT_PPM: &str = "50";

/// Enumerated temperature scale of a service line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Hot,
    Cold,
}

impl TemperatureScale {
    pub fn readings(&self) -> &'static [&'static str] {
        match self {
            TemperatureScale::Hot => &HOT_READINGS,
            TemperatureScale::Cold => &COLD_READINGS,
        }
    }

    /// The single out-of-safe-zone bucket: the lowest hot bucket ("too
    /// cold") or the highest cold bucket ("too warm").
    pub fn risk_sentinel(&self) -> &'static str {
        match self {
            TemperatureScale::Hot => HOT_READINGS[0],
            TemperatureScale::Cold => COLD_READINGS[COLD_READINGS.len() - 1],
        }
    }

    pub fn is_risk(&self, reading: &str) -> bool {
        reading == self.risk_sentinel()
    }

    /// Empty means "not selected yet" and is always accepted.
    pub fn accepts(&self, reading: &str) -> bool {
        reading.is_empty() || self.readings().contains(&reading)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Hot => "hot",
            TemperatureScale::Cold => "cold",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
