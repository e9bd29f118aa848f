//! Integration tests for the pipetrack CLI
//!
//! These tests run the binary against a snapshot of a small production,
//! testing the full path: config -> store -> resolver -> report.


use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A small production: asset "cianlu" (Model, Rig), asset "sword" (Model),
/// shot "sq010_050" (Layout, Animation) linking both assets.
pub const SNAPSHOT: &str = r#"{
  "Task": [
    {"id": 10, "content": "01_Model", "step": {"type": "Step", "id": 2, "name": "Model"},
     "entity": {"type": "Asset", "id": 7, "name": "cianlu"},
     "project": {"type": "Project", "id": 124, "name": "SandBox"},
     "task_assignees": [{"type": "HumanUser", "id": 88}]},
    {"id": 11, "content": "02_Rig", "step": {"type": "Step", "id": 3, "name": "Rig"},
     "entity": {"type": "Asset", "id": 7, "name": "cianlu"},
     "project": {"type": "Project", "id": 124, "name": "SandBox"},
     "task_assignees": [{"type": "HumanUser", "id": 88}]},
    {"id": 20, "content": "01_Model", "step": {"type": "Step", "id": 2, "name": "Model"},
     "entity": {"type": "Asset", "id": 8, "name": "sword"},
     "project": {"type": "Project", "id": 124, "name": "SandBox"}},
    {"id": 30, "content": "01_Layout", "step": {"type": "Step", "id": 10, "name": "Layout"},
     "entity": {"type": "Shot", "id": 1174, "name": "sq010_050"},
     "project": {"type": "Project", "id": 124, "name": "SandBox"}},
    {"id": 31, "content": "02_Animation", "step": {"type": "Step", "id": 11, "name": "Animation"},
     "entity": {"type": "Shot", "id": 1174, "name": "sq010_050"},
     "project": {"type": "Project", "id": 124, "name": "SandBox"}}
  ],
  "Version": [
    {"id": 100, "code": "cianlu_model_v001", "sg_status_list": "apr",
     "created_at": "2025-01-01T10:00:00Z", "sg_task": {"type": "Task", "id": 10},
     "published_files": [{"type": "PublishedFile", "id": 1000, "name": "cianlu_model.abc"}]},
    {"id": 110, "code": "cianlu_rig_v001", "sg_status_list": "apr",
     "created_at": "2025-01-02T10:00:00Z", "sg_task": {"type": "Task", "id": 11},
     "published_files": [{"type": "PublishedFile", "id": 1100, "name": "cianlu_rig.ma"}]},
    {"id": 111, "code": "cianlu_rig_v002", "sg_status_list": "rej",
     "created_at": "2025-01-03T10:00:00Z", "sg_task": {"type": "Task", "id": 11},
     "published_files": []},
    {"id": 300, "code": "sq010_050_layout_v001", "sg_status_list": "rev",
     "created_at": "2025-01-04T10:00:00Z", "sg_task": {"type": "Task", "id": 30},
     "published_files": [{"type": "PublishedFile", "id": 3000, "name": "sq010_050_layout.ma"}]}
  ],
  "Shot": [
    {"id": 1174, "code": "sq010_050",
     "assets": [{"type": "Asset", "id": 7, "name": "cianlu"}, {"type": "Asset", "id": 8, "name": "sword"}]}
  ],
  "Asset": [
    {"id": 7, "code": "cianlu", "sg_asset_type": "Character"},
    {"id": 8, "code": "sword", "sg_asset_type": "Prop"}
  ]
}"#;

/// Temporary home directory with a snapshot file
pub struct Studio {
    dir: TempDir,
}

impl Studio {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn snapshot(&self) -> PathBuf {
        self.dir.path().join("snapshot.json")
    }

    /// Write `~/.pipetrack/config.toml`
    pub fn write_home_config(&self, content: &str) -> PathBuf {
        let dir = self.dir.path().join(".pipetrack");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a config file outside the default location
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// A pipetrack command isolated from the real home directory
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pipetrack"));
        cmd.env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("PIPETRACK_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// A command already pointed at the snapshot
    pub fn cmd_with_store(&self) -> assert_cmd::Command {
        let mut cmd = self.cmd();
        cmd.arg("--store").arg(self.snapshot());
        cmd
    }
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version() {
    Studio::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pipetrack"));
}

#[test]
fn test_version_json() {
    let output = Studio::new().cmd().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help() {
    Studio::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pipeline rules map each step"));
}

#[test]
fn test_no_args_shows_info() {
    Studio::new()
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'pipetrack --help' for usage"));
}
