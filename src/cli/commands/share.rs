use crate::cli::commands::{ActiveEntry, open_store};
use crate::config::Config;
use crate::core::share::share_message;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let active = ActiveEntry::load(&pool, selector)?;
    let session = active.session.borrow();

    println!("{}", share_message(session.entry(), session.fulfillment()));
    Ok(())
}
