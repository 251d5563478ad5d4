#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fl() -> Command {
    cargo_bin_cmd!("feedlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feedlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    fl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    fl().args([
        "--db", db_path, "add", "2025-08-20", "--start", "09:05", "--end", "09:35", "--side",
        "left",
    ])
    .assert()
    .success();

    fl().args([
        "--db", db_path, "add", "2025-08-20", "--start", "13:10", "--end", "13:40", "--side",
        "right", "--pos", "cradle",
    ])
    .assert()
    .success();
}
