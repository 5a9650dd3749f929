//! Turns a user's report selection into an ordered work list.

use thiserror::Error;
use tracing::warn;

use crate::registry::{Registry, ReportDefinition};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid report name: '{name}' (choose from: {})", valid_names.join(", "))]
pub struct UnknownReportError {
  pub name: String,
  /// Every registry key, sorted.
  pub valid_names: Vec<String>,
}

/// Resolve requested names against the registry.
///
/// An empty request selects every report in registry order. Otherwise the
/// caller's order is kept, and the first unknown name fails the whole request.
/// A name requested more than once is built once, at its first position, so
/// every job gets its own output subdirectory.
pub fn resolve<'r, S: AsRef<str>>(
  requested: &[S],
  registry: &'r Registry,
) -> Result<Vec<&'r ReportDefinition>, UnknownReportError> {
  if requested.is_empty() {
    return Ok(registry.reports().iter().collect());
  }

  let mut jobs: Vec<&ReportDefinition> = Vec::with_capacity(requested.len());
  for name in requested {
    let name = name.as_ref();
    let definition = registry.lookup(name).map_err(|_| UnknownReportError {
      name: name.to_string(),
      valid_names: registry.sorted_names(),
    })?;
    if jobs.iter().any(|job| job.name == definition.name) {
      warn!(report = %name, "report requested more than once; building it once");
      continue;
    }
    jobs.push(definition);
  }
  Ok(jobs)
}
