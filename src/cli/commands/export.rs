use crate::cli::commands::{ActiveEntry, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let active = ActiveEntry::load(&pool, selector)?;
        let report = active.session.borrow().report();

        ExportLogic::export(&report, *format, file, *force)?;
        audit(
            &pool.conn,
            "export",
            &format!("entry #{}", active.id),
            &format!("{} → {}", format.as_str(), file),
        );
    }

    Ok(())
}
