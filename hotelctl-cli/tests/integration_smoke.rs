//! Smoke tests for the hotelctl binary, each against its own database file

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn seeded_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hotel.db");
    hotelctl(&db).arg("init").assert().success();
    (dir, db)
}

/// Binary isolated from the caller's home, config and environment.
fn hotelctl_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hotelctl").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("HOTELCTL_DB")
        .env_remove("RUST_LOG");
    cmd
}

/// Database files live in the temp dir that also serves as `HOME`.
fn hotelctl(db: &Path) -> Command {
    let home = db.parent().unwrap();
    let mut cmd = hotelctl_in(home);
    cmd.arg("--db").arg(db);
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--json").output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

// === Init ===

#[test]
fn test_init_reports_seed_counts() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hotel.db");

    hotelctl(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chambre").and(predicate::str::contains("8")));

    // Second run neither fails nor duplicates.
    let stats = json_output(hotelctl(&db).arg("init"));
    let counts = stats["data"]["counts"].as_array().unwrap();
    let reservations = counts.iter().find(|c| c[0] == "Reservation").unwrap();
    assert_eq!(reservations[1], 8);
}

#[test]
fn test_init_without_seed() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("empty.db");

    hotelctl(&db).args(["init", "--no-seed"]).assert().success();
    hotelctl(&db)
        .arg("clients")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucun client enregistré"));
}

#[test]
fn test_init_honours_home_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(".hotelctl");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[database]\nseed = false\n").unwrap();
    let db = dir.path().join("hotel.db");

    hotelctl(&db).arg("init").assert().success();
    let value = json_output(hotelctl(&db).arg("clients"));
    assert_eq!(value["data"].as_array().unwrap().len(), 0);
}

// === Listings ===

#[test]
fn test_reservations_table() {
    let (_dir, db) = seeded_db();
    hotelctl(&db)
        .arg("reservations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jean Dupont"))
        .stdout(predicate::str::contains("2025-06-15"))
        .stdout(predicate::str::contains("type_chambre"));
}

#[test]
fn test_clients_json() {
    let (_dir, db) = seeded_db();
    let value = json_output(hotelctl(&db).arg("clients"));
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"].as_array().unwrap().len(), 5);
    assert_eq!(value["data"][0]["name"], "Jean Dupont");
}

// === Availability ===

#[test]
fn test_available_all_rooms_when_no_overlap() {
    let (_dir, db) = seeded_db();
    let value = json_output(hotelctl(&db).args(["available", "--from", "2027-03-01", "--to", "2027-03-05"]));
    assert_eq!(value["data"]["rooms"].as_array().unwrap().len(), 8);
    assert_eq!(value["data"]["nights"], 4);
}

#[test]
fn test_available_excludes_same_day_turnover() {
    let (_dir, db) = seeded_db();
    let value = json_output(hotelctl(&db).args(["available", "--from", "2025-06-18", "--to", "2025-06-20"]));
    let ids: Vec<i64> = value["data"]["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&1));
    assert_eq!(ids.len(), 7);
}

#[test]
fn test_available_rejects_reversed_dates() {
    let (_dir, db) = seeded_db();
    hotelctl(&db)
        .args(["available", "--from", "2025-06-20", "--to", "2025-06-18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("La date de départ doit être après"));
}

// === Mutations ===

#[test]
fn test_add_client_then_list() {
    let (_dir, db) = seeded_db();
    hotelctl(&db)
        .args([
            "add-client",
            "--name",
            "Test User",
            "--email",
            "t@example.com",
            "--phone",
            "0600000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client ajouté"));

    let value = json_output(hotelctl(&db).arg("clients"));
    let clients = value["data"].as_array().unwrap();
    assert_eq!(clients.len(), 6);
    assert_eq!(clients[5]["email"], "t@example.com");
}

#[test]
fn test_add_client_blank_email_fails() {
    let (_dir, db) = seeded_db();
    let value = json_output(hotelctl(&db).args([
        "add-client",
        "--name",
        "Test User",
        "--email",
        "",
        "--phone",
        "0600000000",
    ]));
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["code"], "ERR_MISSING_REQUIRED");

    let value = json_output(hotelctl(&db).arg("clients"));
    assert_eq!(value["data"].as_array().unwrap().len(), 5);
}

#[test]
fn test_add_reservation_round_trip() {
    let (_dir, db) = seeded_db();
    hotelctl(&db)
        .args([
            "add-reservation",
            "--client",
            "3",
            "--room",
            "2",
            "--from",
            "2027-01-10",
            "--to",
            "2027-01-12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Réservation enregistrée"));

    let value = json_output(hotelctl(&db).arg("reservations"));
    let rows = value["data"].as_array().unwrap();
    let row = rows.iter().find(|r| r["arrival"] == "2027-01-10").unwrap();
    assert_eq!(row["client"], "Paul Moreau");
    assert_eq!(row["room_number"], 502);
    assert_eq!(row["departure"], "2027-01-12");
}

#[test]
fn test_add_reservation_unavailable_room() {
    let (_dir, db) = seeded_db();
    let value = json_output(hotelctl(&db).args([
        "add-reservation",
        "--client",
        "1",
        "--room",
        "1",
        "--from",
        "2025-06-17",
        "--to",
        "2025-06-20",
    ]));
    assert_eq!(value["error"]["code"], "ERR_ROOM_NOT_AVAILABLE");
}

#[test]
fn test_add_reservation_without_clients() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("empty.db");
    let value = json_output(hotelctl(&db).args([
        "add-reservation",
        "--client",
        "1",
        "--room",
        "1",
        "--from",
        "2027-01-10",
        "--to",
        "2027-01-12",
    ]));
    assert_eq!(value["error"]["code"], "ERR_NO_CLIENTS");
}

// === Help / misc ===

#[test]
fn test_available_help() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = hotelctl_in(home.path());
    cmd.arg("available").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Arrival date"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = hotelctl_in(home.path());
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hotelctl"));
}
