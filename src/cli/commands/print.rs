use crate::cli::commands::{ActiveEntry, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::report_view::render_report;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Document name made safe to use as one file name in `dir`.
fn file_name(document_name: &str) -> String {
    document_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Print { dir } = cmd {
        let pool = open_store(cfg)?;
        let active = ActiveEntry::load(&pool, selector)?;
        let report = active.session.borrow().report();

        let dir = match dir {
            Some(d) => expand_tilde(d),
            None => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.txt", file_name(&report.document_name)));
        fs::write(&path, render_report(&report, &cfg.separator_char))?;

        println!("{}", report.document_name);
        success(format!("Report written to {}", path.display()));
        audit(
            &pool.conn,
            "print",
            &format!("entry #{}", active.id),
            &path.to_string_lossy(),
        );
    }

    Ok(())
}
