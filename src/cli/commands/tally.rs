use crate::cli::commands::{ActiveEntry, open_store};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let active = ActiveEntry::load(&pool, selector)?;
    let t = active.session.borrow().fulfillment();

    header(format!("Entry #{}", active.id));
    println!("Applicable: {}", t.applicable);
    println!("Fulfilled:  {}", t.fulfilled);
    println!("Pending:    {}", t.pending());
    Ok(())
}
