//! Derives renderer invocations from report definitions.
//!
//! This is pure path and flag construction; nothing here touches the
//! filesystem or spawns processes.

mod types;

use std::path::PathBuf;

pub use types::*;

use crate::consts::{EXTRA_TEMPLATE_SUBDIR, MINIMAL_DEMO_DATASET, MINIMAL_DEMO_SAMPLE_DIR, RENDERED_INPUT_LEAF, TEMPLATE_DIR};
use crate::registry::ReportDefinition;

/// Resolve `(input_dir, input_results_dir)` for a report.
///
/// The minimal demo reads the sample data bundled with the renderer and never
/// has a result subset. Every other report reads
/// `<sample-data>/<dataset>/out-orr`, with the optional subset beneath it.
pub fn input_dirs(definition: &ReportDefinition, config: &RunConfig) -> (PathBuf, Option<PathBuf>) {
  if definition.input_dataset == MINIMAL_DEMO_DATASET {
    return (config.orr_dir.join(MINIMAL_DEMO_SAMPLE_DIR), None);
  }

  let input_dir = config
    .sample_data_dir
    .join(&definition.input_dataset)
    .join(RENDERED_INPUT_LEAF);
  let input_results_dir = definition.result_subset.as_ref().map(|subset| input_dir.join(subset));

  (input_dir, input_results_dir)
}

/// Build the renderer request for one report.
pub fn build_request(definition: &ReportDefinition, config: &RunConfig) -> BuildRequest {
  let (input_dir, input_results_dir) = input_dirs(definition, config);
  let template_dir = config.orr_dir.join(TEMPLATE_DIR);
  let extra_template_dir = template_dir.join(EXTRA_TEMPLATE_SUBDIR);

  BuildRequest {
    report_name: definition.name.clone(),
    input_dir,
    input_results_dir,
    template_dir,
    extra_template_dirs: vec![extra_template_dir],
    output_root: config.build_dir.clone(),
    output_subdir: definition.output_subdir().to_string(),
    verbose: true,
    skip_pdf: config.skip_pdf,
    delete_okay: config.delete_okay,
    use_isolation: config.use_isolation,
    isolation_source_dir: config.use_isolation.then(|| config.orr_dir.clone()),
    skip_isolation_rebuild: config.skip_isolation_rebuild,
  }
}
