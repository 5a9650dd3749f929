//! Renders a run summary as the `index.html` landing page.
//!
//! Items appear in the order the orchestrator collected them. Reports the
//! renderer gave metadata for get a home link, a zip link, its size, and its
//! hash. Reports without metadata get a single static link.

pub mod templates;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use crate::consts::{INDEX_FILE_NAME, STATIC_HOME_PAGE};
use crate::orchestrate::{ReportEntry, RunSummary};
use crate::result::ReportOutcome;
use crate::util::size::format_size;
use templates::{INDEX_HTML_TEMPLATE, REPORT_ITEM_TEMPLATE, STATIC_ITEM_TEMPLATE};

#[derive(Debug, Error)]
pub enum IndexError {
  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Render the full page.
pub fn render_index(summary: &RunSummary, now: &NaiveDateTime) -> String {
  let items_html: String = summary.entries.iter().map(render_item).collect();

  fill(
    INDEX_HTML_TEMPLATE,
    &[
      ("now", format_timestamp(now).as_str()),
      ("git_sha", escape_html(&summary.source_revision).as_str()),
      ("elapsed", format_elapsed(summary.elapsed).as_str()),
      ("items_html", items_html.trim_end()),
    ],
  )
}

fn render_item(entry: &ReportEntry) -> String {
  let title = escape_html(&entry.title);
  match &entry.outcome {
    ReportOutcome::Built(result) => fill(
      REPORT_ITEM_TEMPLATE,
      &[
        ("title", title.as_str()),
        ("home_href", escape_html(&join_href(&entry.output_subdir, &result.rel_home_page)).as_str()),
        ("zip_href", escape_html(&join_href(&entry.output_subdir, &result.zip_file.path)).as_str()),
        ("zip_name", escape_html(result.zip_file.file_name()).as_str()),
        ("zip_size", format_size(result.zip_file.bytes).as_str()),
        ("zip_hash", escape_html(&result.zip_file.hash).as_str()),
      ],
    ),
    ReportOutcome::NoMetadata => fill(
      STATIC_ITEM_TEMPLATE,
      &[
        ("title", title.as_str()),
        ("home_href", escape_html(&join_href(&entry.output_subdir, STATIC_HOME_PAGE)).as_str()),
      ],
    ),
  }
}

/// Substitute `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never scanned again. Braces that do not name a
/// known placeholder are copied through unchanged.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(open) = rest.find('{') {
    out.push_str(&rest[..open]);
    let after = &rest[open + 1..];
    let placeholder = after.find('}').and_then(|close| {
      let name = &after[..close];
      values.iter().find(|(key, _)| *key == name).map(|(_, value)| (*value, close))
    });

    match placeholder {
      Some((value, close)) => {
        out.push_str(value);
        rest = &after[close + 1..];
      }
      None => {
        out.push('{');
        rest = after;
      }
    }
  }

  out.push_str(rest);
  out
}

/// Write the page to `<build_dir>/index.html`, replacing any previous one.
pub fn write_index(build_dir: &Path, html: &str) -> Result<PathBuf, IndexError> {
  let path = build_dir.join(INDEX_FILE_NAME);
  let write_err = |source| IndexError::Write {
    path: path.clone(),
    source,
  };

  std::fs::create_dir_all(build_dir).map_err(write_err)?;
  info!(path = %path.display(), "writing index.html");
  std::fs::write(&path, html).map_err(write_err)?;
  Ok(path)
}

/// e.g. "Tuesday, March 3, 2020 at 4:05:09 PM".
pub fn format_timestamp(now: &NaiveDateTime) -> String {
  now.format("%A, %B %-d, %Y at %-I:%M:%S %p").to_string()
}

/// Whole minutes and whole seconds; fractions are dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
  let total = elapsed.as_secs();
  format!("{} mins and {} secs", total / 60, total % 60)
}

fn join_href(subdir: &str, rel_path: &str) -> String {
  let rel_path = rel_path.trim_start_matches("./").trim_start_matches('/');
  format!("{}/{}", subdir.trim_end_matches('/'), rel_path)
}

fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#x27;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
