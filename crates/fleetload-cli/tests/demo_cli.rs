use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fleetload-cli");
    cmd.env("RUST_LOG", "error").env("NO_COLOR", "1");
    cmd
}

#[test]
fn demo_prints_each_step() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains(
            "Ship CargoX created. Max containers: 10, max weight: 50000 kg.",
        ))
        .stdout(contains("Created containers: KON-L-1, KON-G-1, KON-C-1"))
        .stdout(contains("Loaded 9000 kg into KON-L-1."))
        .stdout(contains("Container KON-C-1 loaded on ship CargoX."))
        .stdout(contains(
            "Ship CargoX carries 3 container(s) (23000 of 50000 kg reserved, 10 slot(s)):",
        ))
        .stdout(contains(" - KON-G-1, current load: 8000 kg (max 8000 kg)"))
        .stdout(contains("After unloading KON-G-1 it still holds 400 kg of gas."))
        .stdout(contains("After removing KON-L-1 ship CargoX carries 2 container(s)."))
        .stdout(contains(
            "Overfill: overfill in container KON-C-1: loading 6000 onto 4500 exceeds max load 5000",
        ))
        .stdout(contains("1 step(s) failed and were skipped."))
        .stdout(contains("Testing finished."))
        .stdout(contains("[HAZARD]").not());
}

#[test]
fn demo_no_color_flag_strips_escape_codes() {
    let mut cmd = cargo_bin_cmd!("fleetload-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("NO_COLOR")
        .env("TERM", "xterm-256color")
        .args(["--no-color", "demo"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

#[test]
fn demo_json_reports_outcomes() {
    let output = cli()
        .args(["demo", "--format", "json"])
        .output()
        .expect("run demo");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["ship"], "CargoX");
    assert_eq!(json["containers"][1], "KON-G-1");
    assert_eq!(json["manifest"]["container_count"], 3);
    assert_eq!(json["final_manifest"]["container_count"], 2);

    let last = json["events"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["status"], "failed");
    assert_eq!(last["kind"], "overfill");
}
