use crate::cli::commands::{ActiveEntry, open_store, parse_item_id, parse_list};
use crate::cli::parser::{Commands, ItemAction};
use crate::config::Config;
use crate::core::ingest::{IngestOutcome, PendingPhoto, PhotoTarget, read_image};
use crate::core::session::{Applied, Update};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, ItemField, ItemId, ItemTemplate, ListName};
use crate::ui::messages::{success, warning};

fn parse_field(list: ListName, field: &str) -> AppResult<ItemField> {
    ItemField::from_key(field).ok_or_else(|| AppError::InvalidField {
        list: list.key().to_string(),
        field: field.to_string(),
    })
}

fn photo_field(list: ListName, field: &Option<String>) -> AppResult<ItemField> {
    let f = match field {
        Some(f) => parse_field(list, f)?,
        None => list.default_photo_field(),
    };
    if !f.is_photo() {
        return Err(AppError::InvalidField {
            list: list.key().to_string(),
            field: f.key().to_string(),
        });
    }
    Ok(f)
}

fn no_match(list: ListName, id: ItemId) {
    warning(format!("No item #{} in list '{}'", id, list));
}

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    let Commands::Item { action } = cmd else {
        return Ok(());
    };

    let pool = open_store(cfg)?;
    let active = ActiveEntry::load_open(&pool, selector)?;

    match action {
        ItemAction::Add {
            list,
            name,
            temp,
            temp_out,
            temp_in,
        } => {
            let list = parse_list(list)?;
            let template = ItemTemplate {
                name: name.clone().unwrap_or_default(),
                temp: temp.clone().unwrap_or_default(),
                temp_out: temp_out.clone().unwrap_or_default(),
                temp_in: temp_in.clone().unwrap_or_default(),
                photo: None,
            };

            let applied = active
                .session
                .borrow_mut()
                .apply(Update::AddItem(list, template))?;
            if let Applied::ItemAdded(id) = applied {
                active.save(&pool, "add", &format!("{} item #{}", list, id))?;
                success(format!("Added item #{} to '{}'.", id, list));
            }
        }

        ItemAction::Rm { list, id } => {
            let list = parse_list(list)?;
            let id = parse_item_id(id)?;
            let applied = active
                .session
                .borrow_mut()
                .apply(Update::RemoveItem(list, id))?;
            if applied == Applied::NoMatch {
                no_match(list, id);
                return Ok(());
            }
            active.save(&pool, "rm", &format!("{} item #{}", list, id))?;
            success(format!("Removed item #{} from '{}'.", id, list));
        }

        ItemAction::Set {
            list,
            id,
            field,
            value,
        } => {
            let list = parse_list(list)?;
            let id = parse_item_id(id)?;
            let field = parse_field(list, field)?;
            if field.is_photo() {
                return Err(AppError::Other(format!(
                    "'{}' is a photo field; use `bitacora item photo`",
                    field
                )));
            }

            let applied = active.session.borrow_mut().apply(Update::UpdateField(
                list,
                id,
                field,
                FieldValue::text(value.clone()),
            ))?;
            if applied == Applied::NoMatch {
                no_match(list, id);
                return Ok(());
            }
            active.save(&pool, "set", &format!("{} #{} {} = {}", list, id, field, value))?;
            success(format!("Item #{} updated.", id));
        }

        ItemAction::Photo {
            list,
            id,
            file,
            field,
        } => {
            let list = parse_list(list)?;
            let id = parse_item_id(id)?;
            let field = photo_field(list, field)?;
            if !list.supports(field) {
                return Err(AppError::InvalidField {
                    list: list.key().to_string(),
                    field: field.key().to_string(),
                });
            }

            let pending = PendingPhoto::new(&active.session, PhotoTarget::Item { list, id, field });
            match pending.complete(read_image(file))? {
                IngestOutcome::Applied(Applied::NoMatch) => no_match(list, id),
                IngestOutcome::Applied(_) => {
                    active.save(&pool, "photo", &format!("{} #{} {}", list, id, field))?;
                    success(format!("Photo attached to item #{} ({}).", id, field));
                }
                IngestOutcome::Failed(reason) => warning(reason),
                IngestOutcome::Detached => {}
            }
        }

        ItemAction::Unphoto { list, id, field } => {
            let list = parse_list(list)?;
            let id = parse_item_id(id)?;
            let field = photo_field(list, field)?;

            let applied = active.session.borrow_mut().apply(Update::UpdateField(
                list,
                id,
                field,
                FieldValue::Photo(None),
            ))?;
            if applied == Applied::NoMatch {
                no_match(list, id);
                return Ok(());
            }
            active.save(&pool, "unphoto", &format!("{} #{} {}", list, id, field))?;
            success(format!("Photo removed from item #{}.", id));
        }
    }

    Ok(())
}
