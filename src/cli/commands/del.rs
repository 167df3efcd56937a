use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let pool = open_store(cfg)?;
        let stored = queries::load_entry(&pool.conn, *id)?;

        if !*force {
            warning(format!(
                "Delete entry #{} ({} - {} - {})?",
                id,
                stored.row.unit,
                stored.row.date.format("%Y-%m-%d"),
                stored.row.shift
            ));
            print!("Confirm [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                info("Deletion cancelled.");
                return Ok(());
            }
        }

        if !queries::delete_entry(&pool.conn, *id)? {
            return Err(AppError::EntryNotFound(*id));
        }
        audit(&pool.conn, "del", &format!("entry #{}", id), "Entry deleted");
        success(format!("Entry #{} deleted.", id));
    }

    Ok(())
}
