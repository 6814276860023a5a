// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::process::{Command, Output};

use sensor_codec::{encode, SensorRecord};

fn run(args: &[&str]) -> Output {
    // Keep the user's own config files out of the picture.
    let home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_sensor-decode"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .current_dir(home.path())
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn prints_decoded_record() {
    let out = run(&["AbQAewDpBy0="]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "=== Sensor Data ===\n\
         Node ID:          1\n\
         Wind Direction:   180°\n\
         Air Speed:        1.23 m/s\n\
         Virtual Temp:     20.25°C\n\
         ===================\n"
    );
    assert!(stderr(&out).is_empty());
}

#[test]
fn out_of_range_values_still_print() {
    let record = SensorRecord {
        node_id: 42,
        wind_direction: 400,
        air_speed_scaled: 350,
        virtual_temp_scaled: 2200,
    };
    let out = run(&[&encode(&record, 0)]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Node ID:          42\n"));
    assert!(text.contains("Wind Direction:   400°\n"));
    assert!(text.contains("Air Speed:        3.50 m/s\n"));
    assert!(text.contains("Virtual Temp:     22.00°C\n"));

    let log = stderr(&out);
    assert!(log.contains("node id outside documented range"));
    assert!(log.contains("wind direction outside documented range"));
    assert!(!log.contains("air speed outside"));
    assert!(!log.contains("virtual temp outside"));
    assert!(!log.contains('\u{1b}'), "redirected log carries colour codes");
}

#[test]
fn missing_argument_prints_usage() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out),
        "Usage: sensor-decode <base64_string>\nExample: sensor-decode AbQAewDpBy0=\n"
    );
}

#[test]
fn empty_payload_is_too_short() {
    let out = run(&[""]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert_eq!(
        stderr(&out),
        "Error: invalid data length: expected at least 8 bytes, got 0 bytes\n"
    );
}

#[test]
fn invalid_base64_fails() {
    let out = run(&["not-base64!!"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("Error: base64 decode failed: "));
}

#[test]
fn leading_hyphen_payload_is_invalid_base64() {
    let out = run(&["-AbQAewDpBy0="]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("Error: base64 decode failed: "));
}

#[test]
fn extra_arguments_are_ignored() {
    let out = run(&["AbQAewDpBy0=", "extra", "-x"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Air Speed:        1.23 m/s\n"));
    assert!(stderr(&out).is_empty());
}

#[test]
fn explicit_config_without_section_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sensor-rs.toml");
    std::fs::write(&path, "[other]\nkey = 1\n").unwrap();

    let out = run(&["--config", path.to_str().unwrap(), "AbQAewDpBy0="]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("has no [sensor-decode] section"));
}

#[test]
fn print_config_emits_section() {
    let out = run(&["--print-config"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("[sensor-decode]"));
}
