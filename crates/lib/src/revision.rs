//! Source revision lookup for the index page footer.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::warn;

use crate::consts::REVISION_ENV_VAR;

#[derive(Debug, Error)]
pub enum RevisionError {
  #[error("failed to run git: {0}")]
  Spawn(#[from] std::io::Error),

  #[error("git rev-parse HEAD failed with exit code {0:?}")]
  GitFailed(Option<i32>),

  #[error("git rev-parse HEAD printed nothing")]
  Empty,
}

/// Where the run's source revision comes from.
pub trait RevisionSource {
  fn source_revision(&self) -> Result<String, RevisionError>;
}

/// Prefers the CI-provided commit and falls back to asking Git.
#[derive(Debug, Clone)]
pub struct GitRevision {
  repo_root: PathBuf,
}

impl GitRevision {
  pub fn new(repo_root: &Path) -> Self {
    Self {
      repo_root: repo_root.to_path_buf(),
    }
  }
}

impl RevisionSource for GitRevision {
  fn source_revision(&self) -> Result<String, RevisionError> {
    if let Some(sha) = std::env::var(REVISION_ENV_VAR).ok().filter(|s| !s.is_empty()) {
      return Ok(sha);
    }

    warn!("environment variable {:?} not found: falling back to Git", REVISION_ENV_VAR);
    let output = Command::new("git")
      .args(["rev-parse", "HEAD"])
      .current_dir(&self.repo_root)
      .stdin(Stdio::null())
      .stderr(Stdio::inherit())
      .output()?;

    if !output.status.success() {
      return Err(RevisionError::GitFailed(output.status.code()));
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() {
      return Err(RevisionError::Empty);
    }
    Ok(sha)
  }
}

/// A revision known up front.
#[derive(Debug, Clone)]
pub struct FixedRevision(pub String);

impl RevisionSource for FixedRevision {
  fn source_revision(&self) -> Result<String, RevisionError> {
    Ok(self.0.clone())
  }
}
