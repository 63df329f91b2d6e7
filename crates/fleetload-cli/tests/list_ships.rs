use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture_ships() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/ships.csv")
        .canonicalize()
        .expect("ship catalog fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fleetload-cli");
    cmd.env("RUST_LOG", "error").env("NO_COLOR", "1");
    cmd
}

#[test]
fn lists_ships_with_limits() {
    cli()
        .env("FLEETLOAD_SHIP_DATA", fixture_ships())
        .arg("ships")
        .assert()
        .success()
        .stdout(contains("Available ships (3):"))
        .stdout(contains("Max Weight (kg)"))
        .stdout(contains("CargoX"))
        .stdout(contains("50,000"))
        .stdout(contains("120,000"));
}

#[test]
fn explicit_catalog_overrides_environment() {
    let temp_dir = tempdir().expect("create temp dir");
    let catalog = temp_dir.path().join("ships.csv");
    fs::write(&catalog, "name,max_weight,max_containers\nSkiff,900,2\n").expect("write catalog");

    cli()
        .env("FLEETLOAD_SHIP_DATA", fixture_ships())
        .arg("ships")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("Available ships (1):"))
        .stdout(contains("Skiff"));
}

#[test]
fn lists_ships_as_json() {
    cli()
        .env("FLEETLOAD_SHIP_DATA", fixture_ships())
        .args(["ships", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"max_containers\": 24"));
}

#[test]
fn invalid_catalog_fails() {
    let temp_dir = tempdir().expect("create temp dir");
    let catalog = temp_dir.path().join("ships.csv");
    fs::write(&catalog, "name,max_weight,max_containers\nSkiff,-5,2\n").expect("write catalog");

    cli()
        .arg("ships")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(contains("max_weight must be a finite positive number"));
}
