//! Command handlers plus the helpers they share: opening the store, loading
//! the active entry and parsing command-line keys.

pub mod applies;
pub mod backup;
pub mod close;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod item;
pub mod list;
pub mod log;
pub mod new;
pub mod photo;
pub mod print;
pub mod report;
pub mod set;
pub mod share;
pub mod show;
pub mod slot;
pub mod staff;
pub mod tally;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{ItemId, ListName, SectionKey, Shift};
use crate::utils::formatting::parse_switch;
use std::cell::RefCell;
use std::rc::Rc;

/// Open the configured database, bringing the schema up to date.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// The entry a command works on, loaded from the store.
pub(crate) struct ActiveEntry {
    pub id: i64,
    pub closed: bool,
    pub session: Rc<RefCell<Session>>,
}

impl ActiveEntry {
    /// Load the selected entry, or the most recently updated open one.
    pub fn load(pool: &DbPool, selector: Option<i64>) -> AppResult<Self> {
        let id = queries::resolve_active_entry(&pool.conn, selector)?;
        let stored = queries::load_entry(&pool.conn, id)?;
        Ok(Self {
            id,
            closed: stored.is_closed(),
            session: Rc::new(RefCell::new(Session::new(stored.entry))),
        })
    }

    /// Load for editing: closed entries are rejected.
    pub fn load_open(pool: &DbPool, selector: Option<i64>) -> AppResult<Self> {
        let active = Self::load(pool, selector)?;
        if active.closed {
            return Err(AppError::EntryClosed(active.id));
        }
        Ok(active)
    }

    /// Persist the session and record the change in the audit log.
    pub fn save(&self, pool: &DbPool, operation: &str, message: &str) -> AppResult<()> {
        queries::save_entry(&pool.conn, self.id, self.session.borrow().entry())?;
        audit(&pool.conn, operation, &format!("entry #{}", self.id), message);
        Ok(())
    }
}

pub(crate) fn parse_list(s: &str) -> AppResult<ListName> {
    ListName::from_key(s).ok_or_else(|| AppError::InvalidList(s.to_string()))
}

pub(crate) fn parse_section(s: &str) -> AppResult<SectionKey> {
    SectionKey::from_key(s).ok_or_else(|| AppError::InvalidSection(s.to_string()))
}

pub(crate) fn parse_shift(s: &str) -> AppResult<Shift> {
    Shift::from_code(s).ok_or_else(|| AppError::InvalidShift(s.to_string()))
}

pub(crate) fn parse_item_id(s: &str) -> AppResult<ItemId> {
    s.parse()
        .map_err(|_| AppError::Other(format!("Invalid item id: {}", s)))
}

pub(crate) fn parse_on_off(s: &str) -> AppResult<bool> {
    parse_switch(s).ok_or_else(|| AppError::Other(format!("Expected on/off, got '{}'", s)))
}
