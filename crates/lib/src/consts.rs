//! Fixed names and locations shared across the build pipeline.

/// Output tree root, relative to the working directory.
pub const BUILD_DIR: &str = "_build";

/// Name of the aggregate page written at the root of the output tree.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Registry dataset name that maps to the sample data bundled with the renderer.
pub const MINIMAL_DEMO_DATASET: &str = "minimal-demo";

/// Bundled sample data, relative to the renderer directory.
pub const MINIMAL_DEMO_SAMPLE_DIR: &str = "sampledata/minimal-test";

/// Leaf directory holding renderer-ready input inside each dataset.
pub const RENDERED_INPUT_LEAF: &str = "out-orr";

/// Template directory, relative to the renderer directory.
pub const TEMPLATE_DIR: &str = "templates/demo-template";

/// Extra template directory, relative to the template directory.
pub const EXTRA_TEMPLATE_SUBDIR: &str = "extra";

pub const ORR_SUBMODULE_DIR: &str = "submodules/osv-results-reporter";
pub const SAMPLE_DATA_SUBMODULE_DIR: &str = "submodules/osv-sample-data";

pub const DEFAULT_RENDERER_EXE: &str = "orr";
pub const DEFAULT_ISOLATION_EXE: &str = "orr-docker";

/// CI-provided commit variable, preferred over asking Git.
pub const REVISION_ENV_VAR: &str = "TRAVIS_COMMIT";

/// Decimal (not binary) unit step used by the size formatter.
pub const KBYTES: u64 = 1000;

/// Characters of renderer output kept in the `info` log line.
pub const LOGGED_OUTPUT_LIMIT: usize = 2000;

/// Length of a hex-encoded SHA-256 digest.
pub const CONTENT_HASH_LEN: usize = 64;

/// Home page linked for reports built without result metadata.
pub const STATIC_HOME_PAGE: &str = "index.html";
