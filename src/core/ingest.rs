//! Image ingestion boundary.
//!
//! Reading a file happens outside the update path. A [`PendingPhoto`] keeps
//! only a weak handle to the session, so finishing an ingestion after the
//! session is gone does nothing.

use crate::core::session::{Applied, Session, Update};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, ItemField, ItemId, ItemTemplate, ListName, NamedPhoto, Photo, SlotArray};
use crate::utils::path::expand_tilde;
use std::cell::RefCell;
use std::fs;
use std::rc::{Rc, Weak};

pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "heic", "bmp"];

fn ingest_error(path: &str, reason: impl Into<String>) -> AppError {
    AppError::Ingest {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Accept `path` as photo evidence and return a reference to it.
///
/// The file must exist, be a regular readable file and carry an image
/// extension. The payload is the canonical path; the bytes are not copied.
pub fn read_image(path: &str) -> AppResult<Photo> {
    let expanded = expand_tilde(path);

    let ext = expanded
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ingest_error(path, "not an image file"));
    }

    let meta = fs::metadata(&expanded).map_err(|e| ingest_error(path, e.to_string()))?;
    if !meta.is_file() {
        return Err(ingest_error(path, "not a regular file"));
    }
    fs::File::open(&expanded).map_err(|e| ingest_error(path, e.to_string()))?;

    let canonical = fs::canonicalize(&expanded).map_err(|e| ingest_error(path, e.to_string()))?;
    Ok(Photo::new(canonical.to_string_lossy()))
}

/// Where a finished ingestion lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoTarget {
    Named(NamedPhoto),
    Slot(SlotArray, usize),
    Item {
        list: ListName,
        id: ItemId,
        field: ItemField,
    },
    /// Append a new item carrying the photo.
    Append(ListName),
}

impl PhotoTarget {
    fn update(self, photo: Photo) -> Update {
        match self {
            PhotoTarget::Named(field) => Update::SetPhoto(field, Some(photo)),
            PhotoTarget::Slot(array, index) => Update::SetSlot(array, index, Some(photo)),
            PhotoTarget::Item { list, id, field } => {
                Update::UpdateField(list, id, field, FieldValue::photo(photo))
            }
            PhotoTarget::Append(list) => Update::AddItem(list, ItemTemplate::with_photo(photo)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Applied(Applied),
    /// The read failed; the target was left unset.
    Failed(String),
    /// The session was dropped before completion.
    Detached,
}

#[derive(Debug)]
pub struct PendingPhoto {
    session: Weak<RefCell<Session>>,
    target: PhotoTarget,
}

impl PendingPhoto {
    pub fn new(session: &Rc<RefCell<Session>>, target: PhotoTarget) -> Self {
        Self {
            session: Rc::downgrade(session),
            target,
        }
    }

    pub fn target(&self) -> PhotoTarget {
        self.target
    }

    /// Finish the ingestion with the result of the read. Applies at most one
    /// update.
    pub fn complete(self, result: AppResult<Photo>) -> AppResult<IngestOutcome> {
        let Some(session) = self.session.upgrade() else {
            return Ok(IngestOutcome::Detached);
        };

        let photo = match result {
            Ok(photo) => photo,
            Err(e) => return Ok(IngestOutcome::Failed(e.to_string())),
        };

        let applied = session.borrow_mut().apply(self.target.update(photo))?;
        Ok(IngestOutcome::Applied(applied))
    }
}

/// Read every file of a batch and append one item per readable file to
/// `list`. Files that fail are reported and skipped.
pub fn ingest_batch(
    session: &Rc<RefCell<Session>>,
    list: ListName,
    paths: &[String],
) -> AppResult<Vec<(String, IngestOutcome)>> {
    let pending: Vec<(String, PendingPhoto)> = paths
        .iter()
        .map(|p| (p.clone(), PendingPhoto::new(session, PhotoTarget::Append(list))))
        .collect();

    pending
        .into_iter()
        .map(|(path, job)| {
            let outcome = job.complete(read_image(&path))?;
            Ok((path, outcome))
        })
        .collect()
}
