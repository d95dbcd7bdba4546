use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn tally(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn add_list_checkout_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("catalog.json");

    tally(&data_file)
        .args(["add", "1", "Rice", "50.00", "--discount", "10"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product added"));

    tally(&data_file)
        .args(["add", "2", "Beans", "8.25"])
        .assert()
        .success();

    // Both products survived the process boundary, in insertion order.
    tally(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Rice").and(predicates::str::contains("Beans")));

    // 2 x 50.00 at 10% off = 90.00; the unknown id is reported, not priced.
    tally(&data_file)
        .args(["checkout", "1:2", "99:1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("90.00"))
        .stdout(predicates::str::contains("TOTAL ="))
        .stdout(predicates::str::contains("Product 99 not found"));
}

#[test]
fn modify_changes_only_given_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("catalog.json");

    tally(&data_file)
        .args(["add", "1", "Rice", "50.00", "--discount", "10"])
        .assert()
        .success();

    tally(&data_file)
        .args(["modify", "1", "--price", "60.00"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product updated"));

    tally(&data_file)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("60.00"))
        .stdout(predicates::str::contains("Rice"))
        .stdout(predicates::str::contains("10%"));
}

#[test]
fn duplicate_add_is_reported_and_leaves_catalog_alone() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("catalog.json");

    tally(&data_file)
        .args(["add", "1", "Rice", "50.00"])
        .assert()
        .success();

    tally(&data_file)
        .args(["add", "1", "Beans", "8.25"])
        .assert()
        .success()
        .stdout(predicates::str::contains("already exists"));

    tally(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Rice"))
        .stdout(predicates::str::contains("Beans").not());
}

#[test]
fn delete_twice_reports_not_found_without_crashing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("catalog.json");

    tally(&data_file)
        .args(["add", "1", "Rice", "50.00"])
        .assert()
        .success();

    tally(&data_file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product deleted"));

    tally(&data_file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product not found"));
}

#[test]
fn missing_data_file_lists_empty_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("catalog.json");

    tally(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No products in the catalog."));
}
