//! SHA-256 helpers for checking the integrity of built artifacts.
//!
//! The renderer reports a hex digest for every zip file it produces. These
//! helpers recompute that digest from disk so a run can flag artifacts whose
//! content no longer matches what was advertised on the index page.

use std::fs;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::consts::CONTENT_HASH_LEN;

/// A full 64-character SHA-256 digest, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(pub String);

impl std::fmt::Display for ContentHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
  #[error("failed to read file {path}: {message}")]
  ReadFile { path: String, message: String },
}

/// Whether `value` has the shape of a hex-encoded SHA-256 digest.
pub fn is_sha256_hex(value: &str) -> bool {
  value.len() == CONTENT_HASH_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Hash a file's contents.
pub fn hash_file(path: &Path) -> Result<ContentHash, HashError> {
  let read_err = |e: std::io::Error| HashError::ReadFile {
    path: path.display().to_string(),
    message: e.to_string(),
  };

  let mut file = fs::File::open(path).map_err(read_err)?;
  let mut hasher = Sha256::new();
  let mut buffer = [0u8; 8192];

  loop {
    let bytes_read = file.read(&mut buffer).map_err(read_err)?;
    if bytes_read == 0 {
      break;
    }
    hasher.update(&buffer[..bytes_read]);
  }

  Ok(ContentHash(hex::encode(hasher.finalize())))
}

/// Compare a file's digest against an advertised one.
///
/// Never fails: an unreadable file or a mismatch is logged as a warning and
/// reported as `false`.
pub fn verify_file(path: &Path, expected: &str) -> bool {
  match hash_file(path) {
    Ok(actual) if actual.0.eq_ignore_ascii_case(expected) => {
      debug!(path = %path.display(), "artifact hash verified");
      true
    }
    Ok(actual) => {
      warn!(
        path = %path.display(),
        expected = %expected,
        actual = %actual,
        "artifact hash mismatch"
      );
      false
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "could not verify artifact hash");
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  const HELLO_WORLD_SHA256: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

  #[test]
  fn hash_file_known_value() {
    let temp = tempdir().unwrap();
    let file_path = temp.path().join("test.zip");
    fs::write(&file_path, "hello world").unwrap();

    assert_eq!(hash_file(&file_path).unwrap().0, HELLO_WORLD_SHA256);
  }

  #[test]
  fn hash_file_missing_is_error() {
    let temp = tempdir().unwrap();
    let result = hash_file(&temp.path().join("missing.zip"));
    assert!(matches!(result, Err(HashError::ReadFile { .. })));
  }

  #[test]
  fn verify_file_accepts_uppercase_digest() {
    let temp = tempdir().unwrap();
    let file_path = temp.path().join("test.zip");
    fs::write(&file_path, "hello world").unwrap();

    assert!(verify_file(&file_path, &HELLO_WORLD_SHA256.to_uppercase()));
  }

  #[test]
  fn verify_file_rejects_mismatch_and_missing() {
    let temp = tempdir().unwrap();
    let file_path = temp.path().join("test.zip");
    fs::write(&file_path, "changed").unwrap();

    assert!(!verify_file(&file_path, HELLO_WORLD_SHA256));
    assert!(!verify_file(&temp.path().join("missing.zip"), HELLO_WORLD_SHA256));
  }

  #[test]
  fn sha256_shape() {
    assert!(is_sha256_hex(HELLO_WORLD_SHA256));
    assert!(!is_sha256_hex("abc123"));
    assert!(!is_sha256_hex(&"g".repeat(64)));
  }
}
