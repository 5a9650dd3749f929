use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::consts::{
  BUILD_DIR, DEFAULT_ISOLATION_EXE, DEFAULT_RENDERER_EXE, ORR_SUBMODULE_DIR, SAMPLE_DATA_SUBMODULE_DIR,
};

/// Settings shared by every job in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  /// Root of the renderer's source tree (templates, sample data, Dockerfile).
  pub orr_dir: PathBuf,
  /// Root of the sample election datasets.
  pub sample_data_dir: PathBuf,
  /// Output tree root; every report gets a subdirectory and the index lives here.
  pub build_dir: PathBuf,
  /// Executable for direct invocation.
  pub renderer_exe: String,
  /// Executable for invocation inside the isolated environment.
  pub isolation_exe: String,
  pub use_isolation: bool,
  /// Skip rebuilding the isolated environment even for the first job.
  pub skip_isolation_rebuild: bool,
  pub skip_pdf: bool,
  pub delete_okay: bool,
  /// Parse the renderer's stdout as a result descriptor.
  pub expect_metadata: bool,
  /// Recompute zip digests after each build.
  pub verify_zips: bool,
}

impl RunConfig {
  /// Defaults for a checkout whose submodules live under `repo_root`.
  pub fn for_repo(repo_root: &Path) -> Self {
    Self {
      orr_dir: repo_root.join(ORR_SUBMODULE_DIR),
      sample_data_dir: repo_root.join(SAMPLE_DATA_SUBMODULE_DIR),
      build_dir: PathBuf::from(BUILD_DIR),
      renderer_exe: DEFAULT_RENDERER_EXE.to_string(),
      isolation_exe: DEFAULT_ISOLATION_EXE.to_string(),
      use_isolation: true,
      skip_isolation_rebuild: false,
      skip_pdf: false,
      delete_okay: false,
      expect_metadata: true,
      verify_zips: false,
    }
  }
}

/// Everything needed to invoke the renderer for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
  pub report_name: String,
  pub input_dir: PathBuf,
  pub input_results_dir: Option<PathBuf>,
  pub template_dir: PathBuf,
  pub extra_template_dirs: Vec<PathBuf>,
  pub output_root: PathBuf,
  pub output_subdir: String,
  pub verbose: bool,
  pub skip_pdf: bool,
  pub delete_okay: bool,
  pub use_isolation: bool,
  pub isolation_source_dir: Option<PathBuf>,
  pub skip_isolation_rebuild: bool,
}

impl BuildRequest {
  /// Arguments for the renderer, not including the executable.
  ///
  /// Order: the common renderer flags, then `--source-dir` (isolated runs
  /// only), then `--delete-okay`, then `--skip-docker-build`.
  pub fn args(&self) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
      "--input-dir".into(),
      self.input_dir.clone().into(),
      "--template-dir".into(),
      self.template_dir.clone().into(),
    ];
    for dir in &self.extra_template_dirs {
      args.push("--extra-template-dirs".into());
      args.push(dir.clone().into());
    }
    args.extend([
      "--output-parent".into(),
      self.output_root.clone().into(),
      "--output-subdir".into(),
      self.output_subdir.clone().into(),
    ]);
    if self.verbose {
      args.push("--verbose".into());
    }
    if let Some(results_dir) = &self.input_results_dir {
      args.push("--input-results-dir".into());
      args.push(results_dir.clone().into());
    }
    if self.skip_pdf {
      args.push("--skip-pdf".into());
    }

    if self.use_isolation
      && let Some(source_dir) = &self.isolation_source_dir
    {
      args.push("--source-dir".into());
      args.push(source_dir.clone().into());
    }
    if self.delete_okay {
      args.push("--delete-okay".into());
    }
    if self.use_isolation && self.skip_isolation_rebuild {
      args.push("--skip-docker-build".into());
    }

    args
  }
}
