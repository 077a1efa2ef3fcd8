//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture exists")
}

/// A temporary directory holding copies of fixture bots
pub struct BotWorkspace {
    temp_dir: TempDir,
}

impl BotWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Copy a fixture in under a new name and return its path
    pub fn with_fixture(&self, fixture: &str, name: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::copy(fixture_path(fixture), &path)?;
        Ok(path)
    }

    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_json(&self, name: &str) -> Result<Value> {
        let content = fs::read_to_string(self.path().join(name))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Follow a path of object keys and array indices through a JSON value
pub fn at<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
    path.iter().fold(value, |current, segment| match segment.parse::<usize>() {
        Ok(index) => &current[index],
        Err(_) => &current[*segment],
    })
}
