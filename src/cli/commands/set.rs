use crate::cli::commands::{ActiveEntry, open_store, parse_shift};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Update;
use crate::errors::AppResult;
use crate::models::TextField;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Set {
        unit,
        responsible,
        shift,
        date,
        fv_time,
        fv_ppm,
        cool_food_1,
        cool_food_2,
    } = cmd
    {
        // Parse everything first so a bad value changes nothing.
        let mut updates = Vec::new();
        if let Some(s) = shift {
            updates.push(Update::SetShift(parse_shift(s)?));
        }
        if let Some(d) = date {
            updates.push(Update::SetDate(parse_date(d)?));
        }
        let texts = [
            (TextField::Unit, unit),
            (TextField::Responsible, responsible),
            (TextField::FvTime, fv_time),
            (TextField::FvPpm, fv_ppm),
            (TextField::CoolFood1, cool_food_1),
            (TextField::CoolFood2, cool_food_2),
        ];
        for (field, value) in texts {
            if let Some(v) = value {
                updates.push(Update::SetText(field, v.clone()));
            }
        }

        if updates.is_empty() {
            warning("Nothing to set. See `bitacora set --help`.");
            return Ok(());
        }

        let pool = open_store(cfg)?;
        let active = ActiveEntry::load_open(&pool, selector)?;
        let count = updates.len();
        {
            let mut session = active.session.borrow_mut();
            for update in updates {
                session.apply(update)?;
            }
        }
        active.save(&pool, "set", &format!("{} field(s) updated", count))?;
        success(format!("Entry #{} updated.", active.id));
    }

    Ok(())
}
