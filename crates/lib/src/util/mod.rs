//! Shared utilities.
//!
//! Size formatting for the index page and SHA-256 helpers for artifact checks.

pub mod hash;
pub mod size;
