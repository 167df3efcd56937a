use crate::cli::commands::{ActiveEntry, open_store, parse_item_id, parse_on_off};
use crate::cli::parser::{Commands, StaffAction};
use crate::config::Config;
use crate::core::ingest::{IngestOutcome, ingest_batch};
use crate::core::session::{Applied, Update};
use crate::errors::{AppError, AppResult};
use crate::models::{GroomingCheck, ListName, StaffField};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let Commands::Staff { action } = cmd else {
        return Ok(());
    };

    let pool = open_store(cfg)?;
    let active = ActiveEntry::load_open(&pool, selector)?;

    match action {
        StaffAction::Count { value } => {
            let applied = active
                .session
                .borrow_mut()
                .apply(Update::SetHeadcount(value.clone()))?;
            if let Applied::Headcount(n) = applied {
                active.save(&pool, "staff", &format!("headcount {:?} -> {} rows", value, n))?;
                success(format!("Roster now has {} row(s).", n));
            }
        }

        StaffAction::Check { id, check, value } => {
            let id = parse_item_id(id)?;
            let check =
                GroomingCheck::from_key(check).ok_or_else(|| AppError::InvalidCheck(check.clone()))?;
            let passed = parse_on_off(value)?;

            let applied = active
                .session
                .borrow_mut()
                .apply(Update::UpdateStaff(id, StaffField::Check(check, passed)))?;
            if applied == Applied::NoMatch {
                warning(format!("No roster row with id #{}", id));
                return Ok(());
            }
            active.save(&pool, "staff", &format!("#{} {} = {}", id, check.key(), passed))?;
            success(format!("Roster row #{} updated.", id));
        }

        StaffAction::Name { id, name } => {
            let id = parse_item_id(id)?;
            let applied = active
                .session
                .borrow_mut()
                .apply(Update::UpdateStaff(id, StaffField::Name(name.clone())))?;
            if applied == Applied::NoMatch {
                warning(format!("No roster row with id #{}", id));
                return Ok(());
            }
            active.save(&pool, "staff", &format!("#{} name set", id))?;
            success(format!("Roster row #{} updated.", id));
        }

        StaffAction::Photos { files } => {
            let outcomes = ingest_batch(&active.session, ListName::StaffPhotos, files)?;

            let mut added = 0;
            for (path, outcome) in outcomes {
                match outcome {
                    IngestOutcome::Applied(Applied::ItemAdded(id)) => {
                        added += 1;
                        success(format!("Added staff photo #{}: {}", id, path));
                    }
                    IngestOutcome::Failed(reason) => warning(format!("Skipped: {}", reason)),
                    _ => {}
                }
            }

            if added > 0 {
                active.save(&pool, "photo", &format!("{} staff photo(s) added", added))?;
            }
        }

        StaffAction::Unphoto { id } => {
            let id = parse_item_id(id)?;
            let applied = active
                .session
                .borrow_mut()
                .apply(Update::RemoveItem(ListName::StaffPhotos, id))?;
            if applied == Applied::NoMatch {
                warning(format!("No staff photo with id #{}", id));
                return Ok(());
            }
            active.save(&pool, "unphoto", &format!("staff photo #{} removed", id))?;
            success(format!("Staff photo #{} removed.", id));
        }
    }

    Ok(())
}
