#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GOLDEN_REPORT: &str = include_str!("../fixtures/report.txt");

/// Runs the binary inside an empty scratch directory with an isolated HOME.
pub struct TestEnv {
    tmp: TempDir,
    pub home: PathBuf,
    pub workdir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let workdir = tmp.path().join("work");
        std::fs::create_dir_all(&home).expect("create isolated home");
        std::fs::create_dir_all(&workdir).expect("create workdir");
        Self { tmp, home, workdir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("emergence");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.workdir);
        cmd
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Number of entries left anywhere under the scratch directory besides
    /// the two directories created by `new`.
    pub fn stray_entries(&self) -> usize {
        fn count(dir: &std::path::Path) -> usize {
            std::fs::read_dir(dir)
                .map(|rd| {
                    rd.flatten()
                        .map(|e| {
                            let p = e.path();
                            if p.is_dir() {
                                1 + count(&p)
                            } else {
                                1
                            }
                        })
                        .sum()
                })
                .unwrap_or(0)
        }
        count(self.tmp.path()) - 2
    }
}
