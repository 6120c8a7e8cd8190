// tests/integration/end_to_end.rs
use crate::common::{TempWorkspace, file_names, purge_cmd, read};
use predicates::prelude::*;
use std::fs;

#[test]
fn backup_and_purge_empties_source() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");
    ws.invoice("b.json");

    purge_cmd(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 invoice(s)."))
        .stdout(predicate::str::contains("Backed up 2 invoice(s)."));

    assert_eq!(file_names(&ws.path().join("downloaded_invoices")), ["a.json", "b.json"]);
    assert!(file_names(&ws.invoices()).is_empty());
}

#[test]
fn existing_backup_is_not_overwritten() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");
    let old = ws.write_file("downloaded_invoices/a.json", "previous run");

    purge_cmd(ws.path()).args(["--mode", "copy"]).assert().success();

    assert_eq!(read(&old), "previous run");
    let copy = ws.path().join("downloaded_invoices").join("a(1).json");
    assert_eq!(read(&copy), "{\"invoice\":\"a.json\"}");
    assert!(ws.invoices().join("a.json").exists());
}

#[test]
fn missing_source_directory_is_reported_without_changes() {
    let ws = TempWorkspace::new();
    fs::remove_dir(ws.invoices()).unwrap();

    purge_cmd(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory './invoices' does not exist."))
        .stdout(predicate::str::is_empty());

    assert!(!ws.path().join("downloaded_invoices").exists());
}

#[test]
fn no_matching_files_is_reported() {
    let ws = TempWorkspace::new();
    ws.write_file("invoices/notes.txt", "hello");

    purge_cmd(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No invoice files found in './invoices'."));

    assert!(ws.invoices().join("notes.txt").exists());
}

#[test]
fn delete_mode_skips_backup() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");
    ws.write_file("invoices/keep.txt", "not an invoice");

    purge_cmd(ws.path())
        .args(["--mode", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: ./invoices"))
        .stdout(predicate::str::contains("Deleted 1 invoice(s)."));

    assert_eq!(file_names(&ws.invoices()), ["keep.txt"]);
    assert!(!ws.path().join("downloaded_invoices").exists());
}

#[test]
fn text_backup_goes_to_backup_txt() {
    let ws = TempWorkspace::new();
    ws.invoice("inv-1.json");

    purge_cmd(ws.path())
        .args(["--backup-format", "text", "--mode", "copy"])
        .assert()
        .success();

    let txt = ws.path().join("backup_txt").join("inv-1.txt");
    assert_eq!(read(&txt), "{\"invoice\":\"inv-1.json\"}");
}

#[test]
fn list_changes_nothing() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");

    purge_cmd(ws.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.json"))
        .stdout(predicate::str::contains("TOTAL (1 invoices)"));

    assert!(ws.invoices().join("a.json").exists());
    assert!(!ws.path().join("downloaded_invoices").exists());
}

#[test]
fn config_file_supplies_directories() -> anyhow::Result<()> {
    let ws = TempWorkspace::new();
    ws.write_file("billing/2024-01.json", "{}");
    fs::write(
        ws.path().join("purge.yaml"),
        "source_dir: billing\ndest_dir: archive\nmode: copy\n",
    )?;

    purge_cmd(ws.path()).args(["--config", "purge.yaml"]).assert().success();

    assert_eq!(file_names(&ws.path().join("archive")), ["2024-01.json"]);
    assert!(fs::metadata(ws.path().join("billing").join("2024-01.json"))?.is_file());
    Ok(())
}

#[test]
fn recursive_walk_flattens_into_backup() -> anyhow::Result<()> {
    let ws = TempWorkspace::new();
    ws.write_file("invoices/2023/a.json", "{\"year\":2023}");
    ws.write_file("invoices/2024/a.json", "{\"year\":2024}");

    purge_cmd(ws.path())
        .args(["--recursive", "--mode", "copy"])
        .assert()
        .success();

    let backup = ws.path().join("downloaded_invoices");
    assert_eq!(file_names(&backup), ["a(1).json", "a.json"]);
    assert_eq!(fs::read_to_string(backup.join("a.json"))?, "{\"year\":2023}");
    Ok(())
}

#[test]
fn self_backup_is_refused() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");

    purge_cmd(ws.path())
        .args(["--dest", "./invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is the source directory"));

    assert_eq!(file_names(&ws.invoices()), ["a.json"]);
}

#[cfg(unix)]
#[test]
fn failed_copy_keeps_original_and_strict_fails() {
    use std::os::unix::fs::PermissionsExt;

    let ws = TempWorkspace::new();
    ws.invoice("a.json");
    let locked = ws.invoice("b.json");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // root ignores file permissions; the scenario cannot be produced there
    if fs::File::open(&locked).is_ok() {
        return;
    }

    purge_cmd(ws.path())
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed: ./invoices/b.json"))
        .stdout(predicate::str::contains("Skipped: ./invoices/b.json"));

    assert_eq!(file_names(&ws.invoices()), ["b.json"]);
    assert_eq!(file_names(&ws.path().join("downloaded_invoices")), ["a.json"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[test]
fn strict_fails_on_non_text_invoice() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");
    let binary = ws.invoices().join("b.json");
    fs::write(&binary, [0xff_u8, 0xfe, 0x00]).unwrap();

    purge_cmd(ws.path())
        .args(["--backup-format", "text", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed: ./invoices/b.json"))
        .stdout(predicate::str::contains("is not valid UTF-8 text"))
        .stdout(predicate::str::contains("Skipped: ./invoices/b.json"));

    assert_eq!(file_names(&ws.invoices()), ["b.json"]);
    assert_eq!(file_names(&ws.path().join("backup_txt")), ["a.txt"]);
}

#[test]
fn non_text_invoice_without_strict_still_succeeds() {
    let ws = TempWorkspace::new();
    fs::write(ws.invoices().join("b.json"), [0xff_u8, 0xfe]).unwrap();

    purge_cmd(ws.path())
        .args(["--backup-format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 operation(s) failed."));
}

#[test]
fn recursive_scan_refuses_backup_inside_source() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");

    for _ in 0..2 {
        purge_cmd(ws.path())
            .args(["--recursive", "--dest", "./invoices/backup"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("inside the source directory"));
    }

    assert_eq!(file_names(&ws.invoices()), ["a.json"]);
}

#[test]
fn list_and_delete_ignore_backup_directory() {
    let ws = TempWorkspace::new();
    ws.invoice("a.json");

    purge_cmd(ws.path())
        .args(["--list", "--dest", "./invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL (1 invoices)"));

    purge_cmd(ws.path())
        .args(["--mode", "delete", "--dest", "./invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 invoice(s)."));

    assert!(file_names(&ws.invoices()).is_empty());
}
