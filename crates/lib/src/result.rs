//! The renderer's result descriptor.
//!
//! The renderer prints one JSON object per invocation. It is parsed once into
//! a [`BuildResult`] whose titles are already resolved to display strings, so
//! nothing downstream needs to care about the raw shape.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::util::hash::is_sha256_hex;

const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum ResultError {
  #[error("malformed result descriptor: {0}")]
  Json(#[from] serde_json::Error),

  #[error("{field} has no \"en\" entry")]
  MissingLocale { field: &'static str },

  #[error("zip hash is not a SHA-256 hex digest: {0:?}")]
  InvalidHash(String),
}

/// The zip archive the renderer built for a report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZipArtifact {
  /// Path relative to the report's output subdirectory.
  pub path: String,
  pub bytes: u64,
  /// Hex SHA-256 of the archive.
  pub hash: String,
}

impl ZipArtifact {
  /// Final path component, used as link text.
  pub fn file_name(&self) -> &str {
    self.path.rsplit('/').next().unwrap_or(&self.path)
  }
}

/// A per-locale title, or the bare string older renderers emit.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawTitle {
  Localized(BTreeMap<String, String>),
  Legacy(String),
}

#[derive(Debug, Deserialize)]
struct RawBuildResult {
  election_title: BTreeMap<String, String>,
  #[serde(default)]
  results_title: Option<RawTitle>,
  rel_home_page: String,
  zip_file: ZipArtifact,
}

/// Metadata for one successfully rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
  pub election_title: String,
  pub results_title: Option<String>,
  /// Home page path relative to the report's output subdirectory.
  pub rel_home_page: String,
  pub zip_file: ZipArtifact,
}

impl BuildResult {
  /// Parse the renderer's captured stdout.
  pub fn from_json(output: &str) -> Result<Self, ResultError> {
    let raw: RawBuildResult = serde_json::from_str(output)?;

    let election_title = raw
      .election_title
      .get(DEFAULT_LOCALE)
      .cloned()
      .ok_or(ResultError::MissingLocale { field: "election_title" })?;

    let results_title = match raw.results_title {
      None => None,
      Some(RawTitle::Localized(titles)) => Some(
        titles
          .get(DEFAULT_LOCALE)
          .cloned()
          .ok_or(ResultError::MissingLocale { field: "results_title" })?,
      ),
      Some(RawTitle::Legacy(title)) => {
        warn!(results_title = %title, "results_title not an internationalized dict");
        Some(title)
      }
    };

    if !is_sha256_hex(&raw.zip_file.hash) {
      return Err(ResultError::InvalidHash(raw.zip_file.hash));
    }

    Ok(Self {
      election_title,
      results_title,
      rel_home_page: raw.rel_home_page,
      zip_file: raw.zip_file,
    })
  }

  /// Title shown on the index page.
  pub fn title(&self) -> String {
    match &self.results_title {
      Some(results_title) => format!("[{}] {}", results_title, self.election_title),
      None => self.election_title.clone(),
    }
  }
}

/// What a single renderer invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
  Built(BuildResult),
  /// The renderer ran in a mode that reports no metadata.
  NoMetadata,
}

impl ReportOutcome {
  pub fn metadata(&self) -> Option<&BuildResult> {
    match self {
      ReportOutcome::Built(result) => Some(result),
      ReportOutcome::NoMetadata => None,
    }
  }
}
