use assert_cmd::Command;
use predicates::prelude::*;

fn shelf(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn add_then_list_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added"));

    shelf(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Frank Herbert"))
        .stdout(predicate::str::contains("in stock"));
}

#[test]
fn ids_survive_deletion_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();
    shelf(&data)
        .args(["add", "Hyperion", "Simmons", "1989"])
        .assert()
        .success();
    shelf(&data).args(["delete", "1"]).assert().success();
    shelf(&data)
        .args(["add", "Foundation", "Asimov", "1951"])
        .assert()
        .success()
        // id 1 was freed but is never reused
        .stdout(predicate::str::contains("[3] Foundation"));
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No book with id 42"));
}

#[test]
fn non_numeric_id_is_caught_at_the_boundary() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Id must be a number"));

    // the store was never touched, so no file was created
    assert!(!data.exists());
}

#[test]
fn invalid_status_leaves_file_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();
    let before = std::fs::read_to_string(&data).unwrap();

    shelf(&data)
        .args(["status", "1", "lost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid status"));

    let after = std::fs::read_to_string(&data).unwrap();
    assert_eq!(before, after);
}

#[test]
fn status_update_is_persisted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();
    shelf(&data)
        .args(["status", "1", "checked out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked out"));

    let raw = std::fs::read_to_string(&data).unwrap();
    assert!(raw.contains("\"checked out\""));
}

#[test]
fn search_matches_year_exactly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .args(["add", "LOTR", "Tolkien", "1954"])
        .assert()
        .success();
    shelf(&data)
        .args(["add", "Other", "Nobody", "19540"])
        .assert()
        .success();

    shelf(&data)
        .args(["search", "1954"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOTR"))
        .stdout(predicate::str::contains("Other").not());
}

#[test]
fn malformed_data_file_starts_empty_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");
    std::fs::write(&data, "{ not json").unwrap();

    shelf(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load data file"))
        .stdout(predicate::str::contains("The library is empty."));
}

#[test]
fn menu_exits_on_choice_six() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu:"))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn menu_adds_a_book_interactively() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .write_stdin("1\nDune\nHerbert\n1965\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added"));

    let raw = std::fs::read_to_string(&data).unwrap();
    assert!(raw.contains("Dune"));
}

#[test]
fn menu_reports_bad_id_without_aborting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("library.json");

    shelf(&data)
        .write_stdin("2\nnope\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Id must be a number"))
        .stdout(predicate::str::contains("Bye."));
}
