//! Integration tests

mod config_test;

use std::process::{Command, Output};

/// Run the compiled binary with the given arguments
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fairvalue-signal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
