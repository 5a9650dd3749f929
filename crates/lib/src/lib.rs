//! demogen-lib: build orchestration for the results reporter demo pages.
//!
//! This crate drives the external report renderer once per registered report
//! and aggregates the results into a single index page:
//! - `Registry`: the ordered set of known reports
//! - `resolve`: turns a name selection into an ordered work list
//! - `BuildRequest`: the renderer invocation derived for one report
//! - `Orchestrator`: runs every job in order and collects the results
//! - `index`: renders the collected results as `index.html`

pub mod build;
pub mod consts;
pub mod index;
pub mod orchestrate;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod result;
pub mod revision;
pub mod util;
