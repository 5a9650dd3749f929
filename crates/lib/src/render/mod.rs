//! Runs the external report renderer.
//!
//! [`Renderer`] is the seam between the orchestrator and the outside world.
//! [`ProcessRenderer`] is the real implementation: it spawns either the
//! renderer directly or its isolation wrapper, waits for it, and parses what
//! it printed on stdout.

mod types;

use std::ffi::OsString;
use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

pub use types::*;

use crate::build::{BuildRequest, RunConfig};
use crate::consts::LOGGED_OUTPUT_LIMIT;
use crate::result::{BuildResult, ReportOutcome};

/// Something that can turn a [`BuildRequest`] into a rendered report.
pub trait Renderer {
  fn render(&self, request: &BuildRequest) -> impl Future<Output = Result<ReportOutcome, RenderError>>;
}

/// Invokes the renderer as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRenderer {
  renderer_exe: String,
  isolation_exe: String,
  expect_metadata: bool,
}

impl ProcessRenderer {
  pub fn new(config: &RunConfig) -> Self {
    Self {
      renderer_exe: config.renderer_exe.clone(),
      isolation_exe: config.isolation_exe.clone(),
      expect_metadata: config.expect_metadata,
    }
  }

  /// The executable to run for this request.
  pub fn program(&self, request: &BuildRequest) -> &str {
    if request.use_isolation {
      &self.isolation_exe
    } else {
      &self.renderer_exe
    }
  }
}

impl Renderer for ProcessRenderer {
  async fn render(&self, request: &BuildRequest) -> Result<ReportOutcome, RenderError> {
    let program = self.program(request);
    let args = request.args();
    let cmd = command_line(program, &args);

    info!(report = %request.report_name, "running command:\n    $ {}", cmd);

    let output = Command::new(program)
      .args(&args)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      // Renderer logging goes straight to the operator's terminal.
      .stderr(Stdio::inherit())
      .output()
      .await
      .map_err(|source| RenderError::Spawn {
        program: program.to_string(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout);

    if !output.status.success() {
      if !stdout.is_empty() {
        debug!(stdout = %stdout, "command stdout");
      }
      return Err(RenderError::CmdFailed {
        cmd,
        code: output.status.code(),
      });
    }

    info!(
      report = %request.report_name,
      "completed command:\n    $ {}\nwith output:\n\"\"\"{}\"\"\"",
      cmd,
      truncate(&stdout, LOGGED_OUTPUT_LIMIT)
    );
    debug!(stdout = %stdout, "full command output");

    if !self.expect_metadata {
      return Ok(ReportOutcome::NoMetadata);
    }

    BuildResult::from_json(&stdout)
      .map(ReportOutcome::Built)
      .map_err(|source| RenderError::Malformed {
        report: request.report_name.clone(),
        source,
      })
  }
}

/// Render a command line the way a POSIX shell would accept it.
pub fn command_line(program: &str, args: &[OsString]) -> String {
  std::iter::once(shell_quote(program))
    .chain(args.iter().map(|a| shell_quote(&a.to_string_lossy())))
    .collect::<Vec<_>>()
    .join(" ")
}

fn shell_quote(arg: &str) -> String {
  let is_safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);
  if !arg.is_empty() && arg.chars().all(is_safe) {
    return arg.to_string();
  }
  format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

fn truncate(text: &str, limit: usize) -> String {
  match text.char_indices().nth(limit) {
    Some((cut, _)) => format!("{}... ({} more bytes)", &text[..cut], text.len() - cut),
    None => text.to_string(),
  }
}
