//! The version stamper: read a file, substitute a version pattern, write
//! the result back in place
//!
//! Two substitution rules exist:
//!
//! - **cmake**: rewrite the version token of a `project(... VERSION x.y.z)`
//!   declaration in a CMakeLists.txt.
//! - **metainfo**: prepend a dated `<release .../>` entry to the
//!   `<releases>` history of an AppStream metainfo template.
//!
//! Both rules read the whole file, require their pattern to match at least
//! once, and report how many substitutions were made. A file whose pattern
//! does not match is never written.

pub mod cmake;
pub mod metainfo;

use crate::error::{StampError, StampResult};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one successful stamp operation
///
/// The `Display` form is the exact success line the tool prints:
/// `<path>: <count> change(s) made`, with `, release date: <date>`
/// appended by the metainfo rule.
#[derive(Debug, Clone)]
pub struct StampReport {
  /// File that was rewritten
  pub path: PathBuf,
  /// Number of substitutions made
  pub changes: usize,
  /// Release date stamped into the file (metainfo rule only)
  pub release_date: Option<String>,
}

impl fmt::Display for StampReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {} change(s) made", self.path.display(), self.changes)?;
    if let Some(date) = &self.release_date {
      write!(f, ", release date: {}", date)?;
    }
    Ok(())
  }
}

/// Read `path`, run `transform` over its content, and overwrite `path` with
/// the result. Returns the substitution count reported by the transform.
///
/// The write happens only after the transform has succeeded, so a failed
/// transform leaves the file untouched.
fn rewrite_file<F>(path: &Path, transform: F) -> StampResult<usize>
where
  F: FnOnce(&str) -> StampResult<(String, usize)>,
{
  let content = fs::read_to_string(path).map_err(|e| StampError::io(path, e))?;
  let (new_content, count) = transform(&content)?;
  fs::write(path, new_content).map_err(|e| StampError::io(path, e))?;
  Ok(count)
}
