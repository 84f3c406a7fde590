#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fg() -> Command {
    cargo_bin_cmd!("framegap")
}

/// Command with an isolated config file, so the user's ~/.framegap is never read
pub fn fg_with_config(name: &str) -> (Command, String) {
    let conf = setup_test_config(name);
    let mut cmd = fg();
    cmd.args(["--config", &conf]);
    (cmd, conf)
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_framegap.conf", name));
    let conf_path = path.to_string_lossy().to_string();
    fs::remove_file(&conf_path).ok();
    conf_path
}

/// Write a frame list into the temp dir and return its path
pub fn frames_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frames.{}", name, ext));
    fs::write(&path, content).expect("write frames file");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
