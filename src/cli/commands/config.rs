use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            let added = ConfigLogic::migrate(&path)?;
            if !added.is_empty() && Path::new(&cfg.database).exists() {
                let conn = Connection::open(&cfg.database)?;
                audit(
                    &conn,
                    "config_migrate",
                    &path.to_string_lossy(),
                    &format!("Added keys: {}", added.join(", ")),
                );
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
