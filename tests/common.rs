#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config directory plus task store for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Same as [`TestEnv::path`], as a string for command arguments.
    pub fn path_str(&self, name: &str) -> String {
        self.path(name).to_string_lossy().to_string()
    }

    /// Command with the config dir pointed at the temp dir and `--tasks` set.
    pub fn rtw(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rtaskweek");
        cmd.env("RTASKWEEK_HOME", self.dir.path());
        cmd.env_remove("RTASKWEEK_LOG");
        cmd.arg("--tasks").arg(self.tasks_path());
        cmd
    }

    pub fn write_seed(&self, json: &str) -> String {
        let p = self.path("seed.json");
        fs::write(&p, json).expect("write seed");
        p.to_string_lossy().to_string()
    }

    /// Raw JSON records currently in the store.
    pub fn stored(&self) -> Vec<serde_json::Value> {
        read_array(&self.tasks_path())
    }

    pub fn id_of(&self, title: &str) -> String {
        self.stored()
            .iter()
            .find(|t| t["title"] == title)
            .and_then(|t| t["id"].as_str())
            .map(str::to_string)
            .expect("task present in store")
    }

    pub fn add(&self, title: &str, start: &str, end: &str) -> String {
        self.rtw()
            .args(["add", title, "--start", start, "--end", end])
            .assert()
            .success();
        self.id_of(title)
    }
}

pub fn read_array(path: &Path) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(path).expect("read json file");
    serde_json::from_str::<serde_json::Value>(&content)
        .expect("valid json")
        .as_array()
        .cloned()
        .expect("json array")
}

pub const SEED: &str = r#"[
  {"id":"seed_1","title":"Sprint planning","description":"Q1 goals","start_datetime":"2024-01-01T09:00","end_datetime":"2024-01-01T10:00","status":"backlog"},
  {"id":"seed_2","title":"Deploy","start_datetime":"2024-01-01T09:30","end_datetime":"2024-01-01T10:30","status":"in_progress"},
  {"id":"seed_3","title":"Legacy record","start_date":"2024-01-03","end_date":"2024-01-03","status":"done"},
  {"id":"broken","title":"","start_datetime":"2024-01-01T09:00","end_datetime":"2024-01-01T10:00"}
]"#;
