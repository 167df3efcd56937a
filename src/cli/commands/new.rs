use crate::cli::commands::{open_store, parse_shift};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, Update};
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::TextField;
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        unit,
        responsible,
        shift,
        date,
    } = cmd
    {
        let date = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };
        let shift = match shift {
            Some(s) => parse_shift(s)?,
            None => cfg.default_shift(),
        };
        let unit = unit.clone().unwrap_or_else(|| cfg.default_unit.clone());
        let responsible = responsible
            .clone()
            .unwrap_or_else(|| cfg.default_responsible.clone());

        let mut session = Session::fresh(date);
        session.apply(Update::SetShift(shift))?;
        session.apply(Update::SetText(TextField::Unit, unit))?;
        session.apply(Update::SetText(TextField::Responsible, responsible))?;

        let pool = open_store(cfg)?;
        let id = queries::insert_entry(&pool.conn, session.entry())?;
        audit(
            &pool.conn,
            "new",
            &format!("entry #{}", id),
            &format!("New entry for {} ({})", date.format("%Y-%m-%d"), shift),
        );

        success(format!("Created logbook entry #{}", id));
        info("Use `bitacora show` to see item ids.");
    }

    Ok(())
}
