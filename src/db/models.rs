//! Database row models for stored logbook entries.
//! Thin wrappers around SQLite rows; the entry itself lives in `payload`.

use crate::models::{LogbookEntry, Shift};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Open,
    Closed,
}

impl EntryStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::Open => "open",
            EntryStatus::Closed => "closed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(EntryStatus::Open),
            "closed" => Some(EntryStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Summary columns of one row of `entries`.
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub id: i64,
    pub unit: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub responsible: String,
    pub status: EntryStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A row together with its decoded entry.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub row: EntryRow,
    pub entry: LogbookEntry,
}

impl StoredEntry {
    pub fn is_closed(&self) -> bool {
        self.row.status == EntryStatus::Closed
    }
}
