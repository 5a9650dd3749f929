use std::time::Duration;

use thiserror::Error;

use crate::render::RenderError;
use crate::resolve::UnknownReportError;
use crate::result::ReportOutcome;
use crate::revision::RevisionError;

#[derive(Debug, Error)]
pub enum RunError {
  #[error(transparent)]
  UnknownReport(#[from] UnknownReportError),

  #[error("could not determine source revision: {0}")]
  Revision(#[from] RevisionError),

  #[error("build of report {report} failed: {source}")]
  Render {
    report: String,
    #[source]
    source: RenderError,
  },
}

/// One built report, as it will appear on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
  /// Subdirectory of the output tree holding this report.
  pub output_subdir: String,
  /// Renderer-provided title when available, else the registry's.
  pub title: String,
  pub outcome: ReportOutcome,
}

/// Everything the index page needs from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
  /// Entries in resolution order.
  pub entries: Vec<ReportEntry>,
  pub source_revision: String,
  pub elapsed: Duration,
}
