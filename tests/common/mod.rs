//! Common test utilities shared across all test modules
//!
//! Provides a recording console executor, a fixed game folder, and scratch
//! paths for settings files.

#![allow(dead_code)]

use std::path::PathBuf;

use langmenu::engine::{CommandExecutor, GameInfo};

/// Executor that keeps every command string it receives
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub commands: Vec<String>,
}

impl CommandExecutor for RecordingExecutor {
    fn client_cmd(&mut self, cmd: &str) {
        self.commands.push(cmd.to_string());
    }
}

/// Game configuration pinned to one content folder
pub struct Folder(pub &'static str);

impl GameInfo for Folder {
    fn game_folder(&self) -> &str {
        self.0
    }
}

/// Unique settings file path under the system temp directory
pub fn scratch_settings_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("langmenu-test-{}-{}", name, std::process::id()))
        .join("settings.json")
}

/// Remove the directory created for a scratch settings path
pub fn cleanup_scratch(path: &std::path::Path) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}
