use thiserror::Error;

use crate::result::ResultError;

/// Errors from a single renderer invocation.
#[derive(Debug, Error)]
pub enum RenderError {
  /// The executable could not be started.
  #[error("failed to run {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The renderer exited unsuccessfully.
  #[error("command failed with exit code {code:?}: {cmd}")]
  CmdFailed { cmd: String, code: Option<i32> },

  /// The renderer succeeded but its output is not a valid result descriptor.
  #[error("unusable output from renderer for report {report}: {source}")]
  Malformed {
    report: String,
    #[source]
    source: ResultError,
  },
}
