//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A project tree carrying the three files release-stamp rewrites
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project with the stock fixture files at version 2.9.1
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::create_dir_all(path.join("src"))?;

    std::fs::write(
      path.join("CMakeLists.txt"),
      r"cmake_minimum_required(VERSION 3.21)

project(stampdemo VERSION 2.9.1)

add_subdirectory(src)
",
    )?;

    std::fs::write(
      path.join("src/CMakeLists.txt"),
      r"project(stampdemo-src VERSION 2.9.1)

add_executable(stampdemo main.c)
",
    )?;

    std::fs::write(
      path.join("app.metainfo.xml.in"),
      r#"<?xml version="1.0" encoding="utf-8"?>
<component type="desktop-application">
  <id>org.example.stampdemo</id>
  <releases>
    <release version="2.9.1" date="2024-11-02"/>
    <release version="2.9.0" date="2024-08-15"/>
  </releases>
</component>
"#,
    )?;

    Ok(Self { _root: root, path })
  }

  /// Overwrite a file in the project
  pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(rel), content)?;
    Ok(())
  }

  /// Read a file from the project
  pub fn read_file(&self, rel: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(rel))?)
  }
}

/// Run release-stamp in `cwd`, expecting success
pub fn run_release_stamp(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_release_stamp_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "release-stamp failed: release-stamp {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run release-stamp in `cwd` without checking the exit status
pub fn run_release_stamp_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_release-stamp");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run release-stamp")
}

/// Today's UTC date the way release-stamp writes it
pub fn today_utc() -> String {
  chrono::Utc::now().format("%Y-%m-%d").to_string()
}
