use crate::cli::commands::{ActiveEntry, open_store};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::models::EntryStatus;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::report_view::tally_line;

pub fn handle(cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let active = ActiveEntry::load_open(&pool, selector)?;
    let tally = active.session.borrow().fulfillment();

    queries::set_status(&pool.conn, active.id, EntryStatus::Closed)?;
    audit(
        &pool.conn,
        "close",
        &format!("entry #{}", active.id),
        &tally_line(tally),
    );

    success(format!("Entry #{} closed.", active.id));
    info(tally_line(tally));
    Ok(())
}
