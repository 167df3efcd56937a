#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bti() -> Command {
    cargo_bin_cmd!("bitacora")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bitacora.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small placeholder image file and return its path
pub fn temp_image(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bitacora.jpg", name));
    fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).expect("write test image");
    path.to_string_lossy().to_string()
}

/// Initialize DB and open one entry for a known unit, date and shift
pub fn init_db_with_entry(db_path: &str) {
    bti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bti()
        .args([
            "--db",
            db_path,
            "new",
            "--unit",
            "Comedor Norte",
            "--responsible",
            "Ana",
            "--shift",
            "v",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success();
}
