use crate::cli::commands::open_store;
use crate::config::Config;
use crate::db::models::EntryStatus;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let rows = queries::list_entries(&pool.conn)?;

    if rows.is_empty() {
        info("No logbook entries yet. Create one with `bitacora new`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Fecha"),
        Column::new("Turno"),
        Column::new("Unidad"),
        Column::new("Responsable"),
        Column::new("Estado"),
    ]);

    for r in &rows {
        table.add_row(vec![
            format!("#{}", r.id),
            r.date.format("%Y-%m-%d").to_string(),
            r.shift.to_string(),
            r.unit.clone(),
            r.responsible.clone(),
            r.status.to_string(),
        ]);
    }

    for (i, line) in table.render().lines().enumerate() {
        // header first, then one line per row
        let color = match i.checked_sub(1).and_then(|n| rows.get(n)) {
            Some(r) if r.status == EntryStatus::Open => GREEN,
            Some(_) => GREY,
            None => RESET,
        };
        println!("{color}{}{RESET}", line.trim_end());
    }
    Ok(())
}
