//! Shared test helpers for CLI tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const HASH: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

/// Registry with `A` (no result subset) and `B` (result subset `zero`).
pub const TWO_REPORT_REGISTRY: &str = r#"[
  {"name": "A", "input_dataset": "dataset-a", "display_title": "Report A"},
  {"name": "B", "input_dataset": "dataset-b", "result_subset": "zero", "display_title": "Report B"}
]"#;

/// Fake renderer: appends its arguments to `{log}` (one line per call) and
/// prints a result descriptor named after `--output-subdir`.
const FAKE_RENDERER: &str = r#"#!/bin/sh
echo "$*" >> "{log}"
subdir=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "--output-subdir" ]; then subdir="$arg"; fi
  prev="$arg"
done
printf '{"election_title": {"en": "Election %s"}, "rel_home_page": "index.html", "zip_file": {"path": "%s.zip", "bytes": 1500, "hash": "{hash}"}}\n' "$subdir" "$subdir"
"#;

pub fn demogen_cmd() -> Command {
  cargo_bin_cmd!("demogen")
}

/// Isolated working tree for one test.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  pub fn registry(&self) -> PathBuf {
    self.write_file("reports.json", TWO_REPORT_REGISTRY)
  }

  pub fn build_dir(&self) -> PathBuf {
    self.path().join("_build")
  }

  pub fn log_path(&self) -> PathBuf {
    self.path().join("invocations.log")
  }

  /// One line per renderer invocation.
  pub fn invocations(&self) -> Vec<String> {
    std::fs::read_to_string(self.log_path())
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  pub fn index_html(&self) -> String {
    std::fs::read_to_string(self.build_dir().join("index.html")).unwrap()
  }

  /// A demogen command wired to this environment.
  pub fn cmd(&self) -> Command {
    let mut cmd = demogen_cmd();
    cmd
      .current_dir(self.path())
      .env("TRAVIS_COMMIT", "0123abcd")
      .env_remove("RUST_LOG")
      .arg("--repo-root")
      .arg(self.path())
      .arg("--build-dir")
      .arg(self.build_dir());
    cmd
  }

  #[cfg(unix)]
  pub fn fake_renderer(&self) -> PathBuf {
    self.script("fake-orr", &FAKE_RENDERER.replace("{log}", &self.log_path().display().to_string()).replace("{hash}", HASH))
  }

  #[cfg(unix)]
  pub fn script(&self, name: &str, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.write_file(name, content);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }
}
