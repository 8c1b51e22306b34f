mod common;
use common::{etk, first_id, init_db_with_data, setup_test_db};
use predicates::prelude::*;
use std::path::Path;

#[test]
fn test_init_creates_database_file() {
    let db_path = setup_test_db("init_creates_db");

    etk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_then_list_shows_the_item() {
    let db_path = setup_test_db("add_then_list");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CAMERA"))
        .stdout(predicate::str::contains("CT-100"))
        .stdout(predicate::str::contains("SN-100"));
}

#[test]
fn test_list_other_date_is_empty() {
    let db_path = setup_test_db("list_other_date");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-10-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No equipment recorded."));
}

#[test]
fn test_list_month_aggregates_both_days() {
    let db_path = setup_test_db("list_month");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-30", "--month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CT-100"))
        .stdout(predicate::str::contains("CT-200"));
}

#[test]
fn test_add_rejects_invalid_category() {
    let db_path = setup_test_db("add_bad_category");
    init_db_with_data(&db_path);

    etk()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-01", "--cat", "tripod",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}

#[test]
fn test_set_updates_fields_by_id() {
    let db_path = setup_test_db("set_updates");
    init_db_with_data(&db_path);
    let id = first_id(&db_path, "2025-09-01");

    etk()
        .args([
            "--db", &db_path, "set", "--date", "2025-09-01", "--id", &id, "--serial", "SN-999",
        ])
        .assert()
        .success();

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SN-999"));
}

#[test]
fn test_set_unknown_id_fails() {
    let db_path = setup_test_db("set_unknown_id");
    init_db_with_data(&db_path);

    etk()
        .args([
            "--db", &db_path, "set", "--date", "2025-09-01", "--id", "deadbeef", "--serial", "x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item with id"));
}

#[test]
fn test_del_removes_the_item() {
    let db_path = setup_test_db("del_removes");
    init_db_with_data(&db_path);
    let id = first_id(&db_path, "2025-09-01");

    etk()
        .args([
            "--db", &db_path, "del", "--date", "2025-09-01", "--cat", "camera", "-y", &id,
        ])
        .assert()
        .success();

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CT-100").not());
}

#[test]
fn test_search_finds_across_dates() {
    let db_path = setup_test_db("search_across");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "search", "ct-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("2025-09-15"));
}

#[test]
fn test_search_rejects_short_query() {
    let db_path = setup_test_db("search_short");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "search", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query too short"));
}

#[test]
fn test_clear_wipes_everything() {
    let db_path = setup_test_db("clear_wipes");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "clear", "-y"])
        .assert()
        .success();

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No equipment recorded."));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_records");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "list", "--audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);
    let dest = common::temp_out("backup_copy", "sqlite");

    etk()
        .args(["--db", &db_path, "backup", "--file", &dest, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    assert!(Path::new(&dest).exists());
}
