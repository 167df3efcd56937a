mod common;

use bitacora::core::ingest::{IngestOutcome, PendingPhoto, PhotoTarget, ingest_batch, read_image};
use bitacora::core::session::{Applied, Session, Update};
use bitacora::errors::AppError;
use bitacora::models::{ItemField, ListName, NamedPhoto, Photo, SlotArray};
use chrono::NaiveDate;
use common::temp_image;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

fn shared() -> Rc<RefCell<Session>> {
    Rc::new(RefCell::new(Session::fresh(
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    )))
}

#[test]
fn read_image_accepts_existing_image_files() {
    let path = temp_image("ingest_ok");
    let photo = read_image(&path).unwrap();

    let canonical = fs::canonicalize(&path).unwrap();
    assert_eq!(photo.as_str(), canonical.to_string_lossy());
}

#[test]
fn read_image_rejects_missing_and_non_images() {
    let missing = std::env::temp_dir().join("ingest_missing_bitacora.png");
    fs::remove_file(&missing).ok();
    let err = read_image(&missing.to_string_lossy()).unwrap_err();
    assert!(matches!(err, AppError::Ingest { .. }));

    let text = std::env::temp_dir().join("ingest_notes_bitacora.txt");
    fs::write(&text, "hola").unwrap();
    let err = read_image(&text.to_string_lossy()).unwrap_err();
    assert!(matches!(err, AppError::Ingest { .. }));
}

#[test]
fn completed_ingestion_sets_the_target() {
    let session = shared();
    let pending = PendingPhoto::new(&session, PhotoTarget::Slot(SlotArray::Cleaning, 2));

    let outcome = pending
        .complete(Ok(Photo::new("/fotos/area3.jpg")))
        .unwrap();

    assert_eq!(outcome, IngestOutcome::Applied(Applied::Changed));
    assert_eq!(
        session.borrow().entry().cleaning_photos.get(2),
        Some(&Photo::new("/fotos/area3.jpg"))
    );
}

#[test]
fn failed_read_leaves_target_unset() {
    let session = shared();
    let pending = PendingPhoto::new(&session, PhotoTarget::Named(NamedPhoto::Witness));

    let outcome = pending
        .complete(read_image("/definitely/not/here.jpg"))
        .unwrap();

    assert!(matches!(outcome, IngestOutcome::Failed(_)));
    assert!(session.borrow().entry().photo(NamedPhoto::Witness).is_none());
}

#[test]
fn completion_after_session_is_gone_does_nothing() {
    let session = shared();
    let pending = PendingPhoto::new(&session, PhotoTarget::Named(NamedPhoto::HoodOperation));
    drop(session);

    let outcome = pending.complete(Ok(Photo::new("/fotos/campana.jpg"))).unwrap();
    assert_eq!(outcome, IngestOutcome::Detached);
}

#[test]
fn completion_for_removed_item_is_a_no_op() {
    let session = shared();
    let id = session.borrow().entry().item_ids(ListName::HotBar)[0];
    let pending = PendingPhoto::new(
        &session,
        PhotoTarget::Item {
            list: ListName::HotBar,
            id,
            field: ItemField::Photo,
        },
    );

    session
        .borrow_mut()
        .apply(Update::RemoveItem(ListName::HotBar, id))
        .unwrap();
    let before = session.borrow().entry().clone();

    let outcome = pending.complete(Ok(Photo::new("/fotos/barra.jpg"))).unwrap();

    assert_eq!(outcome, IngestOutcome::Applied(Applied::NoMatch));
    assert_eq!(session.borrow().entry(), &before);
}

#[test]
fn batch_appends_one_item_per_readable_file() {
    let session = shared();
    let files = vec![
        temp_image("batch_one"),
        "/definitely/not/here.jpg".to_string(),
        temp_image("batch_two"),
    ];

    let outcomes = ingest_batch(&session, ListName::StaffPhotos, &files).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[1].1, IngestOutcome::Failed(_)));

    let entry = session.borrow().entry().clone();
    assert_eq!(entry.staff_photos.len(), 2);
    assert!(entry.staff_photos.iter().all(|p| p.photo.is_some()));
    assert_ne!(entry.staff_photos[0].id, entry.staff_photos[1].id);
}
