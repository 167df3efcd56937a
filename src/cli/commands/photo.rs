use crate::cli::commands::{ActiveEntry, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::{IngestOutcome, PendingPhoto, PhotoTarget, read_image};
use crate::core::session::Update;
use crate::errors::{AppError, AppResult};
use crate::models::NamedPhoto;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Photo { field, file, clear } = cmd {
        let field =
            NamedPhoto::from_key(field).ok_or_else(|| AppError::InvalidPhotoField(field.clone()))?;

        let pool = open_store(cfg)?;
        let active = ActiveEntry::load_open(&pool, selector)?;

        match (file.as_deref(), *clear) {
            (_, true) => {
                active
                    .session
                    .borrow_mut()
                    .apply(Update::SetPhoto(field, None))?;
                active.save(&pool, "unphoto", field.key())?;
                success(format!("Photo '{}' cleared.", field.label()));
            }
            (Some(file), false) => {
                let pending = PendingPhoto::new(&active.session, PhotoTarget::Named(field));
                match pending.complete(read_image(file))? {
                    IngestOutcome::Applied(_) => {
                        active.save(&pool, "photo", field.key())?;
                        success(format!("Photo '{}' set.", field.label()));
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
