//! Sequential build of every selected report.
//!
//! Jobs run one at a time in resolution order. The isolated environment is
//! built by the first job only; every later job asks the wrapper to reuse it.
//! The first failing job aborts the run and no summary is produced.

mod types;

use std::time::Instant;

use tracing::{debug, info};

pub use types::*;

use crate::build::{RunConfig, build_request};
use crate::registry::Registry;
use crate::render::Renderer;
use crate::resolve::resolve;
use crate::result::ReportOutcome;
use crate::revision::RevisionSource;
use crate::util::hash::verify_file;

pub struct Orchestrator<'a, R, V> {
  registry: &'a Registry,
  config: &'a RunConfig,
  renderer: R,
  revision: V,
}

impl<'a, R: Renderer, V: RevisionSource> Orchestrator<'a, R, V> {
  pub fn new(registry: &'a Registry, config: &'a RunConfig, renderer: R, revision: V) -> Self {
    Self {
      registry,
      config,
      renderer,
      revision,
    }
  }

  /// Build the requested reports (all of them when `requested` is empty).
  pub async fn run<S: AsRef<str>>(&self, requested: &[S]) -> Result<RunSummary, RunError> {
    let jobs = resolve(requested, self.registry)?;
    let source_revision = self.revision.source_revision()?;
    debug!(revision = %source_revision, jobs = jobs.len(), "starting run");

    let start = Instant::now();
    let mut entries = Vec::with_capacity(jobs.len());
    let mut environment_built = false;

    for definition in jobs {
      let mut request = build_request(definition, self.config);
      request.skip_isolation_rebuild |= environment_built;

      info!(report = %definition.name, "building report");
      let outcome = self.renderer.render(&request).await.map_err(|source| RunError::Render {
        report: definition.name.clone(),
        source,
      })?;
      environment_built = true;

      let title = match &outcome {
        ReportOutcome::Built(result) => {
          if self.config.verify_zips {
            let zip_path = self
              .config
              .build_dir
              .join(&request.output_subdir)
              .join(&result.zip_file.path);
            verify_file(&zip_path, &result.zip_file.hash);
          }
          result.title()
        }
        ReportOutcome::NoMetadata => definition.display_title.clone(),
      };

      entries.push(ReportEntry {
        output_subdir: request.output_subdir,
        title,
        outcome,
      });
    }

    let elapsed = start.elapsed();
    info!(reports = entries.len(), elapsed_secs = elapsed.as_secs_f64(), "all reports built");

    Ok(RunSummary {
      entries,
      source_revision,
      elapsed,
    })
  }
}
