//! Bitácora Digital library root.
//! Exposes the CLI parser, the `run()` entry point and the domain modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let entry = cli.entry;
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::New { .. } => commands::new::handle(&cli.command, cfg),
        Commands::Set { .. } => commands::set::handle(&cli.command, cfg, entry),
        Commands::Applies { .. } => commands::applies::handle(&cli.command, cfg, entry),
        Commands::Staff { .. } => commands::staff::handle(&cli.command, cfg, entry),
        Commands::Item { .. } => commands::item::handle(&cli.command, cfg, entry),
        Commands::Photo { .. } => commands::photo::handle(&cli.command, cfg, entry),
        Commands::Slot { .. } => commands::slot::handle(&cli.command, cfg, entry),
        Commands::Show => commands::show::handle(cfg, entry),
        Commands::Tally => commands::tally::handle(cfg, entry),
        Commands::Report => commands::report::handle(cfg, entry),
        Commands::Share => commands::share::handle(cfg, entry),
        Commands::Print { .. } => commands::print::handle(&cli.command, cfg, entry),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, entry),
        Commands::List => commands::list::handle(cfg),
        Commands::Close => commands::close::handle(cfg, entry),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line override of the database path
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
