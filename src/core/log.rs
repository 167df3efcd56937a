use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "new" | "add" | "photo" => Colour::Green,
        "del" | "rm" | "unphoto" => Colour::Red,
        "set" | "applies" | "staff" | "slot" => Colour::Yellow,
        "close" => Colour::Cyan,
        "export" | "print" => Colour::Blue,
        "migration_applied" | "config_migrate" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogLine {
    id: i64,
    date: String,
    operation: String,
    op_target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;
        let visible_len = |s: &str| ansi.replace_all(s, "").chars().count();

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let target = target.unwrap_or_default();
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(LogLine {
                id,
                date,
                operation,
                op_target,
                message,
            })
        })?;

        let mut lines = Vec::new();
        for r in rows {
            lines.push(r?);
        }

        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = lines
            .iter()
            .map(|l| l.op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for line in lines {
            let color = color_for_operation(&line.operation);

            let visible = if line.op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = line.op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                line.op_target.clone()
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(visible_len(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                line.date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
