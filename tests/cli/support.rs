use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};
use std::process::Output;

/// Get a Command for stepsearch reading its config from `config_dir`
pub fn stepsearch_in(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("stepsearch");
    cmd.env("STEPSEARCH_CONFIG_DIR", config_dir)
        .env_remove("STEPSEARCH_GRAPH")
        .env_remove("STEPSEARCH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for stepsearch with no config file, so built-in defaults apply
pub fn stepsearch() -> Command {
    stepsearch_in(&missing_config_dir())
}

/// A config directory that never contains a config file
fn missing_config_dir() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("stepsearch-no-config")
}

/// Stdout of a finished command, split into lines
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
