use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named report the demo can build.
///
/// The name doubles as the output subdirectory, so it must be unique within
/// a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
  /// Registry key, also used for `--output-subdir`.
  pub name: String,
  /// Dataset subdirectory inside the sample-data root.
  pub input_dataset: String,
  /// Optional result subset inside the rendered input directory.
  #[serde(default)]
  pub result_subset: Option<String>,
  /// Title shown on the index page when the renderer reports none.
  pub display_title: String,
}

impl ReportDefinition {
  pub fn new(name: &str, input_dataset: &str, display_title: &str) -> Self {
    Self {
      name: name.to_string(),
      input_dataset: input_dataset.to_string(),
      result_subset: None,
      display_title: display_title.to_string(),
    }
  }

  pub fn with_result_subset(mut self, subset: &str) -> Self {
    self.result_subset = Some(subset.to_string());
    self
  }

  /// Output subdirectory for this report's artifacts.
  pub fn output_subdir(&self) -> &str {
    &self.name
  }
}

#[derive(Debug, Error)]
pub enum RegistryError {
  #[error("report not found: {0}")]
  NotFound(String),

  #[error("duplicate report name: {0}")]
  Duplicate(String),

  #[error("failed to read registry file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid registry file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}
