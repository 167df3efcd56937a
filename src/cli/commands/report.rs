use crate::cli::commands::{ActiveEntry, open_store};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::report_view::render_report;

pub fn handle(cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let active = ActiveEntry::load(&pool, selector)?;
    let report = active.session.borrow().report();

    print!("{}", render_report(&report, &cfg.separator_char));
    Ok(())
}
