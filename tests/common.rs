#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sb() -> Command {
    cargo_bin_cmd!("shiftboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    sb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Post a complete listing as `user` through the CLI.
pub fn post_listing(db_path: &str, user: &str, category: &str, from: &str, upto: &str) {
    sb().args([
        "--db",
        db_path,
        "--user",
        user,
        "post",
        "--category",
        category,
        "--short-desc",
        "Weekend help needed",
        "--location",
        "Milano",
        "--from",
        from,
        "--upto",
        upto,
        "--shift-start",
        "09:00",
        "--shift-end",
        "17:00",
        "--break",
        "1",
        "--salary",
        "120",
        "--salary-condition",
        "per day",
        "--long-desc",
        "Serving tables and helping in the kitchen during the weekend rush.",
    ])
    .assert()
    .success();
}

/// Init a DB and add three listings: two by alice, one by dave.
pub fn init_db_with_listings(db_path: &str) {
    init_db(db_path);
    post_listing(db_path, "alice", "Cleaning", "2024-01-10", "2024-01-15");
    post_listing(db_path, "alice", "Waiter", "2024-02-01", "2024-02-03");
    post_listing(db_path, "dave", "House cleaning", "2024-03-01", "2024-03-01");
}
