#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path of the built `sva` binary
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sva"))
}

/// Command running `sva` with a fixed width, independent of the terminal.
pub fn run_sva<P: AsRef<std::ffi::OsStr>>(file_path: P) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.arg(file_path).arg("--width").arg("56").env_remove("RUST_LOG");
    cmd
}

/// Render states as FANN training text; every input line is followed by a
/// single-value output line.
pub fn training_text(states: &[Vec<u8>]) -> String {
    let width = states.first().map(|s| s.len()).unwrap_or(0);
    let mut text = format!("{} {} 1\n", states.len(), width);
    for state in states {
        let bits: Vec<String> = state.iter().map(|b| b.to_string()).collect();
        text.push_str(&bits.join(" "));
        text.push_str("\n0\n");
    }
    text
}

/// States whose bit `b` flips every `periods[b]` steps.
pub fn square_waves(len: usize, periods: &[usize]) -> Vec<Vec<u8>> {
    (0..len)
        .map(|t| {
            periods
                .iter()
                .map(|&p| ((t / p) % 2 == 0) as u8)
                .collect()
        })
        .collect()
}

/// Write training text to a file in the system temp directory, named per
/// test process so parallel runs do not collide.
pub fn write_training_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sva-tests-{}-{}", std::process::id(), name));
    fs::write(&path, text).expect("Failed to write training file");
    path
}

pub fn remove_file(path: &Path) {
    let _ = fs::remove_file(path);
}
