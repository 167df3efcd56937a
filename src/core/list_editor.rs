//! Shape-preserving edits of the entry's lists, slot arrays and named photos.

use crate::core::risk;
use crate::errors::{AppError, AppResult};
use crate::models::items::UnknownField;
use crate::models::{
    FieldValue, ItemField, ItemId, ItemTemplate, ListItem, ListName, LogbookEntry, NamedPhoto,
    Photo, SlotArray, TemperatureScale,
};

/// Run `$body` with `$items` bound to the `&mut Vec<_>` behind `$list`.
macro_rules! on_list {
    ($entry:expr, $list:expr, |$items:ident| $body:expr) => {
        match $list {
            ListName::Cook => {
                let $items = &mut $entry.cook_list;
                $body
            }
            ListName::Reheat => {
                let $items = &mut $entry.reheat_list;
                $body
            }
            ListName::Catering => {
                let $items = &mut $entry.catering_list;
                $body
            }
            ListName::HotBar => {
                let $items = &mut $entry.hot_bar_list;
                $body
            }
            ListName::ColdBar => {
                let $items = &mut $entry.cold_bar_list;
                $body
            }
            ListName::Fridges => {
                let $items = &mut $entry.fridges;
                $body
            }
            ListName::Retainers => {
                let $items = &mut $entry.retainers;
                $body
            }
            ListName::StaffPhotos => {
                let $items = &mut $entry.staff_photos;
                $body
            }
        }
    };
}

fn check_reading(scale: Option<TemperatureScale>, reading: &str) -> AppResult<()> {
    match scale {
        Some(scale) if !scale.accepts(reading) => Err(AppError::InvalidReading {
            scale: scale.name().to_string(),
            value: reading.to_string(),
        }),
        _ => Ok(()),
    }
}

fn push_new<T: ListItem>(
    items: &mut Vec<T>,
    id: ItemId,
    template: &ItemTemplate,
    scale: Option<TemperatureScale>,
) {
    let mut item = T::from_template(id, template);
    if let Some(scale) = scale {
        item.track_risk();
        if let Some(state) = item.risk_mut() {
            risk::reclassify(state, scale, &template.temp);
        }
    }
    items.push(item);
}

/// Append a new item built from `template` and return its fresh id.
pub fn add_item(
    entry: &mut LogbookEntry,
    list: ListName,
    template: ItemTemplate,
) -> AppResult<ItemId> {
    if list.requires_photo() && template.photo.is_none() {
        return Err(AppError::PhotoRequired(list.key().to_string()));
    }

    let scale = list.risk_scale();
    check_reading(scale, &template.temp)?;

    let id = entry.allocate_id();
    on_list!(entry, list, |items| push_new(items, id, &template, scale));
    Ok(id)
}

fn remove_from<T: ListItem>(items: &mut Vec<T>, id: ItemId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Remove the item with `id`. Returns `false` (and changes nothing) when no
/// item matches.
pub fn remove_item(entry: &mut LogbookEntry, list: ListName, id: ItemId) -> bool {
    on_list!(entry, list, |items| remove_from(items, id))
}

fn update_in<T: ListItem>(
    items: &mut [T],
    id: ItemId,
    field: ItemField,
    value: FieldValue,
    scale: Option<TemperatureScale>,
) -> Result<bool, UnknownField> {
    let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
        return Ok(false);
    };

    let reading = match (field, &value) {
        (ItemField::Temp, FieldValue::Text(t)) => Some(t.clone()),
        _ => None,
    };

    item.set_field(field, value)?;

    if let (Some(scale), Some(reading)) = (scale, reading) {
        item.track_risk();
        if let Some(state) = item.risk_mut() {
            risk::reclassify(state, scale, &reading);
        }
    }
    Ok(true)
}

/// Replace one field of the item with `id`, keeping every other field.
///
/// Returns `Ok(false)` when no item matches. A temperature change on a
/// risk-classified list reclassifies the item in the same step.
pub fn update_field(
    entry: &mut LogbookEntry,
    list: ListName,
    id: ItemId,
    field: ItemField,
    value: FieldValue,
) -> AppResult<bool> {
    let invalid = |field: ItemField| AppError::InvalidField {
        list: list.key().to_string(),
        field: field.key().to_string(),
    };

    if !list.supports(field) {
        return Err(invalid(field));
    }

    let scale = list.risk_scale();
    if field == ItemField::Temp
        && let Some(reading) = value.as_text()
    {
        check_reading(scale, reading)?;
    }

    let updated = on_list!(entry, list, |items| update_in(items, id, field, value, scale));
    updated.map_err(|UnknownField(f)| invalid(f))
}

/// Replace the photo at `index` of a fixed-size slot array.
pub fn set_slot(
    entry: &mut LogbookEntry,
    array: SlotArray,
    index: usize,
    photo: Option<Photo>,
) -> AppResult<()> {
    let slot = match array {
        SlotArray::Handwash => entry.handwash_photos.slot_mut(index),
        SlotArray::Cleaning => entry.cleaning_photos.slot_mut(index),
    };

    match slot {
        Some(slot) => {
            *slot = photo;
            Ok(())
        }
        None => Err(AppError::SlotOutOfRange {
            array: array.key().to_string(),
            index,
            len: array.len(),
        }),
    }
}

/// Set or clear a named single-photo field.
pub fn set_photo(entry: &mut LogbookEntry, field: NamedPhoto, photo: Option<Photo>) {
    match photo {
        Some(p) => {
            entry.photos.insert(field, p);
        }
        None => {
            entry.photos.remove(&field);
        }
    }
}
