//! Human-readable file sizes for the index page.
//!
//! Sizes use decimal units (1 kB = 1000 bytes), not binary ones. Values are
//! rounded half-to-even, so `1_500` is "2 kB" and `2_500` is "2 kB".

use crate::consts::KBYTES;

pub fn format_size(size: u64) -> String {
  if size < KBYTES {
    return format!("{} bytes", size);
  }

  let kbytes = size as f64 / KBYTES as f64;
  if kbytes < KBYTES as f64 {
    return format!("{} kB", kbytes.round_ties_even());
  }

  let mbytes = kbytes / KBYTES as f64;
  format!("{} MB", mbytes.round_ties_even())
}
