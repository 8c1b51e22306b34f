#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn etk() -> Command {
    cargo_bin_cmd!("equiptrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_equiptrack.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema; --test skips touching the user config)
    etk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    etk()
        .args([
            "--db", db_path, "add", "--date", "2025-09-01", "--cat", "camera", "--contract",
            "CT-100", "--serial", "SN-100",
        ])
        .assert()
        .success();

    etk()
        .args([
            "--db", db_path, "add", "--date", "2025-09-15", "--cat", "box", "--contract",
            "CT-200", "--serial", "SN-200",
        ])
        .assert()
        .success();
}

/// First item id listed for a date (ids are 32 hex chars).
pub fn first_id(db_path: &str, date: &str) -> String {
    let out = etk()
        .args(["--db", db_path, "list", "--date", date, "--ids"])
        .output()
        .expect("run list --ids");
    let text = String::from_utf8_lossy(&out.stdout).to_string();
    let re = regex::Regex::new(r"[0-9a-f]{32}").unwrap();
    re.find(&text)
        .unwrap_or_else(|| panic!("no item id in output:\n{text}"))
        .as_str()
        .to_string()
}
