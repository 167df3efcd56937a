mod common;

use common::{bti, init_db_with_entry, setup_test_db, temp_image, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    bti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_new_and_show() {
    let db_path = setup_test_db("cli_new_show");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Bitácora #1 (abierta)"))
        .stdout(contains("Comedor Norte"))
        .stdout(contains("Vespertino"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("fridges (4 elementos)"));
}

#[test]
fn test_commands_without_entry_fail() {
    let db_path = setup_test_db("cli_no_entry");

    bti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bti()
        .args(["--db", &db_path, "tally"])
        .assert()
        .failure()
        .stderr(contains("No open logbook entry"));
}

#[test]
fn test_hot_bar_risk_and_correction() {
    let db_path = setup_test_db("cli_hot_bar");
    init_db_with_entry(&db_path);

    // seeds take ids 1..=10, so the new item is #11
    bti()
        .args([
            "--db",
            &db_path,
            "item",
            "add",
            "hotBar",
            "--name",
            "Arroz",
            "--temp",
            "Menor a 60°C",
        ])
        .assert()
        .success()
        .stdout(contains("Added item #11 to 'hotBar'."));

    bti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("#11 Arroz"))
        .stdout(contains("RIESGO"));

    bti()
        .args(["--db", &db_path, "item", "set", "hotBar", "11", "temp", "63°C"])
        .assert()
        .success();

    bti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("corregido"))
        .stdout(contains("RIESGO").not());
}

#[test]
fn test_invalid_reading_is_rejected() {
    let db_path = setup_test_db("cli_bad_reading");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "item", "set", "coldBar", "10", "temp", "63°C"])
        .assert()
        .failure()
        .stderr(contains("not on the cold scale"));
}

#[test]
fn test_unknown_item_only_warns() {
    let db_path = setup_test_db("cli_unknown_item");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "item", "rm", "cook", "77"])
        .assert()
        .success()
        .stdout(contains("No item #77 in list 'cook'"));
}

#[test]
fn test_tally_counts_evidence() {
    let db_path = setup_test_db("cli_tally");
    init_db_with_entry(&db_path);

    for section in [
        "personal",
        "handwash",
        "cleaning",
        "solution",
        "hood",
        "thermo",
        "fridge",
        "fv",
        "cook",
        "reheat",
        "catering",
        "hotBar",
        "coldBar",
        "witness",
        "dishwasher",
        "cooling",
        "handover",
    ] {
        bti()
            .args(["--db", &db_path, "applies", section, "off"])
            .assert()
            .success();
    }

    bti()
        .args(["--db", &db_path, "tally"])
        .assert()
        .success()
        .stdout(contains("Applicable: 1"))
        .stdout(contains("Fulfilled:  0"));

    let image = temp_image("cli_tally");
    bti()
        .args(["--db", &db_path, "photo", "chlorineMeasure", &image])
        .assert()
        .success();

    bti()
        .args(["--db", &db_path, "tally"])
        .assert()
        .success()
        .stdout(contains("Applicable: 1"))
        .stdout(contains("Fulfilled:  1"));
}

#[test]
fn test_missing_image_leaves_photo_unset() {
    let db_path = setup_test_db("cli_missing_image");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "photo", "witness", "/no/such/file.jpg"])
        .assert()
        .success()
        .stdout(contains("Cannot read image"));

    bti()
        .args(["--db", &db_path, "tally"])
        .assert()
        .success()
        .stdout(contains("Fulfilled:  0"));
}

#[test]
fn test_staff_roster_resizes() {
    let db_path = setup_test_db("cli_staff");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "staff", "count", "3"])
        .assert()
        .success()
        .stdout(contains("Roster now has 3 row(s)."));

    // roster rows continue after the seeds: #11, #12, #13
    bti()
        .args(["--db", &db_path, "staff", "check", "12", "mask", "off"])
        .assert()
        .success()
        .stdout(contains("Roster row #12 updated."));

    bti()
        .args(["--db", &db_path, "staff", "count", "-2"])
        .assert()
        .success()
        .stdout(contains("Roster now has 0 row(s)."));
}

#[test]
fn test_slot_index_is_one_based() {
    let db_path = setup_test_db("cli_slot");
    init_db_with_entry(&db_path);
    let image = temp_image("cli_slot");

    bti()
        .args(["--db", &db_path, "slot", "handwash", "6", &image])
        .assert()
        .success();

    bti()
        .args(["--db", &db_path, "slot", "handwash", "7", &image])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    bti()
        .args(["--db", &db_path, "slot", "cleaning", "0", "--clear"])
        .assert()
        .failure();
}

#[test]
fn test_share_message() {
    let db_path = setup_test_db("cli_share");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "share"])
        .assert()
        .success()
        .stdout(contains("*Reporte: Bitácora Digital*"))
        .stdout(contains("📍 Unidad: Comedor Norte"))
        .stdout(contains("⏰ Turno: Vespertino"))
        .stdout(contains("Aplicaron 18 apartados, de los cuales 0 se cumplieron."));
}

#[test]
fn test_report_and_print() {
    let db_path = setup_test_db("cli_print");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "applies", "witness", "off"])
        .assert()
        .success();

    bti()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("A) Antes del Servicio"))
        .stdout(contains("Muestras Testigo").not());

    let dir = std::env::temp_dir().join("cli_print_bitacora");
    fs::remove_dir_all(&dir).ok();
    let dir_str = dir.to_string_lossy().to_string();

    bti()
        .args(["--db", &db_path, "print", "--dir", &dir_str])
        .assert()
        .success()
        .stdout(contains("Comedor Norte - 2025-09-01 - Vespertino"));

    let written = dir.join("Comedor Norte - 2025-09-01 - Vespertino.txt");
    let text = fs::read_to_string(written).expect("report file");
    assert!(text.starts_with("Bitácora Digital"));
}

#[test]
fn test_print_file_name_with_path_separators() {
    let db_path = setup_test_db("cli_print_sep");
    bti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    bti()
        .args([
            "--db",
            &db_path,
            "new",
            "--unit",
            "../Planta 1/2",
            "--responsible",
            "Ana",
            "--shift",
            "v",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success();

    let dir = std::env::temp_dir().join("cli_print_sep_bitacora");
    fs::remove_dir_all(&dir).ok();
    let dir_str = dir.to_string_lossy().to_string();

    bti()
        .args(["--db", &db_path, "print", "--dir", &dir_str])
        .assert()
        .success()
        .stdout(contains("../Planta 1/2 - 2025-09-01 - Vespertino"));

    let written = dir.join(".._Planta 1_2 - 2025-09-01 - Vespertino.txt");
    let text = fs::read_to_string(written).expect("report file inside --dir");
    assert!(text.contains("../Planta 1/2"));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_entry(&db_path);

    let json_out = temp_out("cli_export", "json");
    bti()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read json");
    let v: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(
        v["document_name"],
        Value::from("Comedor Norte - 2025-09-01 - Vespertino")
    );
    assert_eq!(v["fulfillment"]["applicable"], Value::from(18));
    assert_eq!(v["phases"].as_array().map(|a| a.len()), Some(3));

    let csv_out = temp_out("cli_export", "csv");
    bti()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read csv");
    assert!(content.starts_with("phase,section,item,label,reading,evidence,risk"));
    assert!(content.contains("PPM"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_rel");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "export", "--file", "report.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_closed_entry_is_read_only() {
    let db_path = setup_test_db("cli_close");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "close"])
        .assert()
        .success()
        .stdout(contains("Entry #1 closed."));

    // no open entry is left
    bti()
        .args(["--db", &db_path, "item", "add", "cook"])
        .assert()
        .failure()
        .stderr(contains("No open logbook entry"));

    bti()
        .args(["--db", &db_path, "--entry", "1", "item", "add", "cook"])
        .assert()
        .failure()
        .stderr(contains("is closed"));

    bti()
        .args(["--db", &db_path, "--entry", "1", "show"])
        .assert()
        .success()
        .stdout(contains("(cerrada)"));
}

#[test]
fn test_list_del_and_log() {
    let db_path = setup_test_db("cli_list_del");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "new", "--unit", "Comedor Sur", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Created logbook entry #2"));

    bti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Comedor Norte"))
        .stdout(contains("Comedor Sur"));

    bti()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    bti()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("Entry #1 deleted."));

    bti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Comedor Norte").not());

    bti()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    bti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("del"));
}

#[test]
fn test_db_check_and_backup() {
    let db_path = setup_test_db("cli_db");
    init_db_with_entry(&db_path);

    bti()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("table 'entries' present"));

    let backup = temp_out("cli_db_backup", "sqlite");
    bti()
        .args(["--db", &db_path, "backup", "--file", &backup])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&backup).exists());
}
