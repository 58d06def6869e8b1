//! Shared test utilities for integration tests
//!
//! Builds sample project trees and runs the binaries with an isolated home and
//! config directory, so a user-level config file never leaks into a test.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A temp directory holding `project/` and an isolated `home/`
pub struct Sandbox {
    _temp: TempDir,
    pub project: PathBuf,
    pub home: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let home = temp.path().join("home");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(home.join(".config")).unwrap();
        Self {
            _temp: temp,
            project,
            home,
        }
    }

    /// Write `contents` at `relative` inside the project, creating parents
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.project.join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project.join(relative)).unwrap()
    }

    /// Run a binary from the project directory with isolated config lookup
    pub fn run(&self, bin: &str, args: &[&str]) -> Output {
        run_binary(bin, &self.project, &self.home, args)
    }
}

pub fn run_binary(bin: &str, cwd: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CODESNAP_LOG")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

/// Lines of a rendered tree after the header and its blank line
pub fn tree_body(rendered: &str) -> Vec<String> {
    rendered.lines().skip(2).map(str::to_string).collect()
}
