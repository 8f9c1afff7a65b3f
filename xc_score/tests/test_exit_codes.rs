// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::test_helper::flight::{get_bonus_as_csv, get_track_as_csv};
use std::{path::PathBuf, process::Command};

fn xc_score() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xc_score"))
}

fn write_fixture(test_name: &str, name: &str, content: &str) -> PathBuf {
    let mut folder = std::env::temp_dir();
    folder.push("xc_score_exit_code_tests");
    folder.push(test_name);
    std::fs::create_dir_all(&folder)
        .unwrap_or_else(|e| panic!("Failed to create {}. Error: {e}", folder.to_string_lossy()));
    folder.push(name);
    std::fs::write(&folder, content)
        .unwrap_or_else(|e| panic!("Failed to write {}. Error: {e}", folder.to_string_lossy()));
    folder
}

#[test]
pub fn single_argument_exits_with_one() {
    let status = xc_score()
        .arg("track.csv")
        .status()
        .unwrap_or_else(|e| panic!("Failed to run xc_score. Error: {e}"));
    assert_eq!(status.code(), Some(1));
}

#[test]
pub fn missing_track_file_exits_with_one() {
    let output = xc_score()
        .args(["/does/not/exist/track.csv", "/does/not/exist/bonus.csv"])
        .output()
        .unwrap_or_else(|e| panic!("Failed to run xc_score. Error: {e}"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
pub fn scored_flight_exits_with_zero() {
    let track = write_fixture("scored_flight_exits_with_zero", "track.csv", get_track_as_csv());
    let bonus = write_fixture("scored_flight_exits_with_zero", "bonus.csv", get_bonus_as_csv());

    let output = xc_score()
        .arg(&track)
        .arg(&bonus)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run xc_score. Error: {e}"));

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.trim_end();
    assert!(line.starts_with(r#"{"score_km":"#), "unexpected output {line}");
    assert!(line.ends_with(r#""start_index":0,"end_index":3}"#), "unexpected output {line}");
}
