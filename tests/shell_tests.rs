mod common;
use common::{etk, init_db_with_data, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_shell_add_and_set_persist_on_quit() {
    let db_path = setup_test_db("shell_add_set");
    init_db_with_data(&db_path);

    // append a row to CHIP, read its id back from the session output,
    // then edit it in a second session
    let out = etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-02"])
        .write_stdin("cat chip\nadd\nquit\n")
        .output()
        .expect("run shell");
    assert!(out.status.success());

    let text = String::from_utf8_lossy(&out.stdout).to_string();
    let re = regex::Regex::new(r"[0-9a-f]{32}").unwrap();
    let id = re.find(&text).expect("added row id in output").as_str();

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-02"])
        .write_stdin(format!("set {id} serial=SN-SHELL\nquit\n"))
        .assert()
        .success();

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SN-SHELL"));
}

#[test]
fn test_shell_undo_restores_previous_state() {
    let db_path = setup_test_db("shell_undo");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-03"])
        .write_stdin("cat camera\nadd\nundo\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Undone."));

    // the undone row never reaches the store
    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No equipment recorded."));
}

#[test]
fn test_shell_undo_with_empty_history_is_a_no_op() {
    let db_path = setup_test_db("shell_undo_empty");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-04"])
        .write_stdin("undo\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo."));
}

#[test]
fn test_shell_lock_blocks_editing_until_allowed() {
    let db_path = setup_test_db("shell_lock_allow");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-05"])
        .write_stdin("lock\nadd\nrequest\nallow\nadd\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Editing is locked"))
        .stdout(predicate::str::contains("Access allowed temporarily."))
        .stdout(predicate::str::contains("Added row"));
}

#[test]
fn test_shell_denied_request_stays_locked() {
    let db_path = setup_test_db("shell_lock_deny");
    init_db_with_data(&db_path);

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-06"])
        .write_stdin("lock\nrequest\ndeny\nadd\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Request denied"))
        .stdout(predicate::str::contains("Editing is locked"));
}

#[test]
fn test_shell_delete_mode_flow() {
    let db_path = setup_test_db("shell_delete_mode");
    init_db_with_data(&db_path);

    let out = etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-01"])
        .write_stdin("show\nquit\n")
        .output()
        .expect("run shell");
    let text = String::from_utf8_lossy(&out.stdout).to_string();
    let re = regex::Regex::new(r"[0-9a-f]{32}").unwrap();
    let id = re.find(&text).expect("listed row id").as_str();

    etk()
        .args(["--db", &db_path, "shell", "--date", "2025-09-01"])
        .write_stdin(format!("delmode\nselect {id}\ndelete\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 item(s)."));

    etk()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CT-100").not());
}
