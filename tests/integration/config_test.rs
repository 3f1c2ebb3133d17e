//! Configuration file tests

use super::{run, stderr, stdout};
use std::io::Write;

#[test]
fn test_config_overrides_offset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nshort_offset = 0.0").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["--config", path, "95", "100"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Stock is overvalued by $5.00. Recommended action: SHORT."
    );
}

#[test]
fn test_empty_config_keeps_default_offset() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["-c", path, "5", "100"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("$5.00"));
}

#[test]
fn test_missing_config_fails() {
    let output = run(&["--config", "/nonexistent/path/config.toml", "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Could not load config"));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nshort_offset = \"ninety\"").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["--config", path, "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_example_parses() {
    let config =
        fairvalue_signal::config::Config::from_toml(include_str!("../../config.toml.example"))
            .unwrap();
    assert_eq!(config.engine.short_offset, 90.0);
}
