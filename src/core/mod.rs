pub mod backup;
pub mod config;
pub mod ingest;
pub mod list_editor;
pub mod log;
pub mod report;
pub mod risk;
pub mod roster;
pub mod session;
pub mod share;
pub mod tally;
