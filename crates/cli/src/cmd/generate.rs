//! Implementation of the build run.
//!
//! Builds the selected reports one after another and writes `index.html`
//! into the build directory once every report has succeeded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use tracing::{info, warn};

use demogen_lib::build::RunConfig;
use demogen_lib::consts::{BUILD_DIR, DEFAULT_ISOLATION_EXE, DEFAULT_RENDERER_EXE, ORR_SUBMODULE_DIR};
use demogen_lib::index::{render_index, write_index};
use demogen_lib::orchestrate::{Orchestrator, RunError};
use demogen_lib::registry::Registry;
use demogen_lib::render::ProcessRenderer;
use demogen_lib::revision::GitRevision;

#[derive(Args, Debug)]
pub struct GenerateArgs {
  /// The name of one or more reports to generate. Defaults to generating all reports.
  #[arg(value_name = "NAME")]
  pub reports: Vec<String>,

  /// Checkout root containing the renderer and sample-data submodules
  #[arg(long, value_name = "DIR", default_value = ".")]
  pub repo_root: PathBuf,

  /// Directory of the renderer repository to use; it holds the Dockerfile
  /// used to build the isolated environment [default: <REPO_ROOT>/submodules/osv-results-reporter]
  #[arg(long, value_name = "DIR")]
  pub orr_dir: Option<PathBuf>,

  /// Root of the sample election datasets [default: <REPO_ROOT>/submodules/osv-sample-data]
  #[arg(long, value_name = "DIR")]
  pub sample_data_dir: Option<PathBuf>,

  /// Output directory for the reports and index.html
  #[arg(long, value_name = "DIR", default_value = BUILD_DIR)]
  pub build_dir: PathBuf,

  /// JSON file listing the reports, replacing the built-in list
  #[arg(long, value_name = "FILE")]
  pub registry: Option<PathBuf>,

  /// Renderer executable for direct invocation
  #[arg(long, value_name = "NAME", default_value = DEFAULT_RENDERER_EXE)]
  pub orr_exe: String,

  /// Renderer wrapper executable for invocation under Docker
  #[arg(long, value_name = "NAME", default_value = DEFAULT_ISOLATION_EXE)]
  pub orr_docker_exe: String,

  /// Suppress using Docker
  #[arg(long)]
  pub no_docker: bool,

  /// Reuse the existing Docker image, even for the first report
  #[arg(long)]
  pub skip_docker_build: bool,

  /// Allow directory deletions without prompting
  #[arg(long)]
  pub delete_okay: bool,

  /// Skip PDF generation (useful for testing)
  #[arg(long)]
  pub skip_pdf: bool,

  /// Do not read result metadata from the renderer; the index lists plain links
  #[arg(long)]
  pub no_metadata: bool,

  /// Recompute the SHA-256 of every zip file and warn on mismatch
  #[arg(long)]
  pub verify_zips: bool,
}

impl GenerateArgs {
  pub fn run_config(&self) -> RunConfig {
    let mut config = RunConfig::for_repo(&self.repo_root);
    if let Some(orr_dir) = &self.orr_dir {
      config.orr_dir = orr_dir.clone();
    }
    if let Some(sample_data_dir) = &self.sample_data_dir {
      config.sample_data_dir = sample_data_dir.clone();
    }
    config.build_dir = self.build_dir.clone();
    config.renderer_exe = self.orr_exe.clone();
    config.isolation_exe = self.orr_docker_exe.clone();
    config.use_isolation = !self.no_docker;
    config.skip_isolation_rebuild = self.skip_docker_build;
    config.delete_okay = self.delete_okay;
    config.skip_pdf = self.skip_pdf;
    config.expect_metadata = !self.no_metadata;
    config.verify_zips = self.verify_zips;
    config
  }
}

/// Build the selected reports and write the index page.
///
/// Returns exit code 1 for an unknown report name. Every other failure is an
/// error and no index is written.
pub fn cmd_generate(args: &GenerateArgs) -> Result<ExitCode> {
  let registry = match &args.registry {
    Some(path) => Registry::from_file(path).context("Failed to load report registry")?,
    None => Registry::builtin(),
  };
  let config = args.run_config();
  check_renderer_dir(&config, &args.repo_root);

  let orchestrator = Orchestrator::new(
    &registry,
    &config,
    ProcessRenderer::new(&config),
    GitRevision::new(&args.repo_root),
  );

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let summary = match rt.block_on(orchestrator.run(args.reports.as_slice())) {
    Ok(summary) => summary,
    Err(RunError::UnknownReport(err)) => {
      eprintln!("ERROR: {}.", err);
      return Ok(ExitCode::from(1));
    }
    Err(err) => return Err(err).context("Build failed"),
  };

  let html = render_index(&summary, &Local::now().naive_local());
  let path = write_index(&config.build_dir, &html)?;
  info!(path = %path.display(), reports = summary.entries.len(), "done");

  Ok(ExitCode::SUCCESS)
}

/// Warn when the renderer directory looks unusable for a Docker build.
fn check_renderer_dir(config: &RunConfig, repo_root: &Path) {
  if !config.use_isolation {
    return;
  }

  let default_dir = repo_root.join(ORR_SUBMODULE_DIR);
  if config.orr_dir != default_dir {
    warn!(
      orr_dir = %config.orr_dir.display(),
      submodule_dir = %default_dir.display(),
      "using a renderer directory other than the submodule"
    );
  }
  if !config.orr_dir.join("Dockerfile").is_file() {
    warn!(orr_dir = %config.orr_dir.display(), "renderer directory has no Dockerfile");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[derive(Parser)]
  struct TestCli {
    #[command(flatten)]
    args: GenerateArgs,
  }

  fn parse(argv: &[&str]) -> GenerateArgs {
    TestCli::parse_from(std::iter::once("demogen").chain(argv.iter().copied())).args
  }

  #[test]
  fn defaults_use_docker_and_submodules() {
    let config = parse(&[]).run_config();

    assert!(config.use_isolation);
    assert!(config.expect_metadata);
    assert!(!config.skip_isolation_rebuild);
    assert_eq!(config.orr_dir, PathBuf::from("./submodules/osv-results-reporter"));
    assert_eq!(config.build_dir, PathBuf::from("_build"));
    assert_eq!(config.isolation_exe, "orr-docker");
  }

  #[test]
  fn flags_map_onto_config() {
    let args = parse(&[
      "B",
      "A",
      "--no-docker",
      "--skip-pdf",
      "--delete-okay",
      "--orr-dir",
      "/opt/orr",
      "--no-metadata",
    ]);
    let config = args.run_config();

    assert_eq!(args.reports, vec!["B", "A"]);
    assert!(!config.use_isolation);
    assert!(config.skip_pdf);
    assert!(config.delete_okay);
    assert!(!config.expect_metadata);
    assert_eq!(config.orr_dir, PathBuf::from("/opt/orr"));
  }
}
