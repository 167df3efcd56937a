//! Unified application error type.
//! All modules (models, core, db, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Unknown section: {0}")]
    InvalidSection(String),

    #[error("Unknown list: {0}")]
    InvalidList(String),

    #[error("Unknown photo field: {0}")]
    InvalidPhotoField(String),

    #[error("Unknown slot array: {0}")]
    InvalidSlotArray(String),

    #[error("Field '{field}' does not exist on items of list '{list}'")]
    InvalidField { list: String, field: String },

    #[error("Unknown grooming check: {0}")]
    InvalidCheck(String),

    #[error("Reading '{value}' is not on the {scale} scale")]
    InvalidReading { scale: String, value: String },

    #[error("Invalid PPM value: {0}")]
    InvalidPpm(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Slot {index} is out of range for '{array}' ({len} slots)")]
    SlotOutOfRange {
        array: String,
        index: usize,
        len: usize,
    },

    #[error("Items of list '{0}' are added with their photo")]
    PhotoRequired(String),

    #[error("Logbook entry #{0} not found")]
    EntryNotFound(i64),

    #[error("No open logbook entry. Create one with `bitacora new`")]
    NoActiveEntry,

    #[error("Logbook entry #{0} is closed and can no longer be edited")]
    EntryClosed(i64),

    // ---------------------------
    // Image ingestion
    // ---------------------------
    #[error("Cannot read image '{path}': {reason}")]
    Ingest { path: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
