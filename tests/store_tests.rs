use bitacora::core::session::{Applied, Session, Update};
use bitacora::db::initialize::init_db;
use bitacora::db::migrate::schema_status;
use bitacora::db::models::EntryStatus;
use bitacora::db::queries;
use bitacora::errors::AppError;
use bitacora::models::{ItemTemplate, ListName, TextField};
use chrono::NaiveDate;
use rusqlite::Connection;

fn store() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

fn entry_for(unit: &str, day: u32) -> Session {
    let mut s = Session::fresh(NaiveDate::from_ymd_opt(2025, 9, day).unwrap());
    s.apply(Update::SetText(TextField::Unit, unit.into())).unwrap();
    s
}

#[test]
fn migrations_are_idempotent() {
    let conn = store();
    init_db(&conn).unwrap();

    let status = schema_status(&conn).unwrap();
    assert!(status.iter().all(|(_, present)| *present));

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}

#[test]
fn timestamps_are_stored_in_utc() {
    let conn = store();
    let id = queries::insert_entry(&conn, entry_for("Cocina Central", 1).entry()).unwrap();
    queries::set_status(&conn, id, EntryStatus::Closed).unwrap();

    let rows = queries::list_entries(&conn).unwrap();
    let row = rows.iter().find(|r| r.id == id).unwrap();
    for stamp in [&row.created_at, &row.updated_at] {
        let parsed = chrono::DateTime::parse_from_rfc3339(stamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0, "{stamp}");
    }
}

#[test]
fn draft_survives_save_and_load() {
    let conn = store();
    let mut s = entry_for("Cocina Central", 1);
    let id = queries::insert_entry(&conn, s.entry()).unwrap();

    let added = match s
        .apply(Update::AddItem(ListName::Reheat, ItemTemplate::named("Frijoles")))
        .unwrap()
    {
        Applied::ItemAdded(id) => id,
        other => panic!("unexpected {:?}", other),
    };
    queries::save_entry(&conn, id, s.entry()).unwrap();

    let stored = queries::load_entry(&conn, id).unwrap();
    assert_eq!(&stored.entry, s.entry());
    assert_eq!(stored.row.unit, "Cocina Central");
    assert_eq!(stored.row.status, EntryStatus::Open);

    // the id counter is part of the draft
    let mut reloaded = Session::new(stored.entry);
    let next = match reloaded
        .apply(Update::AddItem(ListName::Reheat, ItemTemplate::default()))
        .unwrap()
    {
        Applied::ItemAdded(id) => id,
        other => panic!("unexpected {:?}", other),
    };
    assert!(next > added);
}

#[test]
fn active_entry_is_latest_open_one() {
    let conn = store();
    assert!(matches!(
        queries::resolve_active_entry(&conn, None),
        Err(AppError::NoActiveEntry)
    ));

    let first = queries::insert_entry(&conn, entry_for("A", 1).entry()).unwrap();
    let second = queries::insert_entry(&conn, entry_for("B", 2).entry()).unwrap();
    assert_eq!(queries::resolve_active_entry(&conn, None).unwrap(), second);

    queries::set_status(&conn, second, EntryStatus::Closed).unwrap();
    assert_eq!(queries::resolve_active_entry(&conn, None).unwrap(), first);

    // an explicit selection may point at a closed entry
    assert_eq!(
        queries::resolve_active_entry(&conn, Some(second)).unwrap(),
        second
    );
    assert!(matches!(
        queries::resolve_active_entry(&conn, Some(999)),
        Err(AppError::EntryNotFound(999))
    ));
}

#[test]
fn list_and_delete_entries() {
    let conn = store();
    let a = queries::insert_entry(&conn, entry_for("A", 3).entry()).unwrap();
    let b = queries::insert_entry(&conn, entry_for("B", 5).entry()).unwrap();

    let rows = queries::list_entries(&conn).unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b, a]);

    assert!(queries::delete_entry(&conn, a).unwrap());
    assert!(!queries::delete_entry(&conn, a).unwrap());
    assert!(matches!(
        queries::load_entry(&conn, a),
        Err(AppError::EntryNotFound(_))
    ));
    assert_eq!(queries::list_entries(&conn).unwrap().len(), 1);
}
