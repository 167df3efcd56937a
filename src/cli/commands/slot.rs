use crate::cli::commands::{ActiveEntry, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::{IngestOutcome, PendingPhoto, PhotoTarget, read_image};
use crate::core::session::Update;
use crate::errors::{AppError, AppResult};
use crate::models::SlotArray;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Slot {
        array,
        index,
        file,
        clear,
    } = cmd
    {
        let array =
            SlotArray::from_key(array).ok_or_else(|| AppError::InvalidSlotArray(array.clone()))?;

        // 1-based on the command line
        let slot = match index.checked_sub(1) {
            Some(i) if i < array.len() => i,
            _ => {
                return Err(AppError::SlotOutOfRange {
                    array: array.key().to_string(),
                    index: *index,
                    len: array.len(),
                });
            }
        };
        let label = array.labels()[slot];

        let pool = open_store(cfg)?;
        let active = ActiveEntry::load_open(&pool, selector)?;

        match (file.as_deref(), *clear) {
            (_, true) => {
                active
                    .session
                    .borrow_mut()
                    .apply(Update::SetSlot(array, slot, None))?;
                active.save(&pool, "unphoto", &format!("{} {}", array, index))?;
                success(format!("{} slot {} ({}) cleared.", array, index, label));
            }
            (Some(file), false) => {
                let pending = PendingPhoto::new(&active.session, PhotoTarget::Slot(array, slot));
                match pending.complete(read_image(file))? {
                    IngestOutcome::Applied(_) => {
                        active.save(&pool, "slot", &format!("{} {}", array, index))?;
                        success(format!("{} slot {} ({}) set.", array, index, label));
                    }
                    IngestOutcome::Failed(reason) => warning(reason),
                    IngestOutcome::Detached => {}
                }
            }
            (None, false) => {
                return Err(AppError::Other(
                    "Provide an image file or --clear".to_string(),
                ));
            }
        }
    }

    Ok(())
}
