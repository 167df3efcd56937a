use crate::cli::commands::{ActiveEntry, open_store};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::report_view::render_overview;

pub fn handle(cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let active = ActiveEntry::load(&pool, selector)?;
    let session = active.session.borrow();

    print!(
        "{}",
        render_overview(active.id, active.closed, session.entry(), &cfg.separator_char)
    );
    Ok(())
}
