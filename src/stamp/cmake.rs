//! Build-configuration stamping: `project(... VERSION x.y.z)`

use crate::error::{StampError, StampResult};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

use super::{StampReport, rewrite_file};

/// What a build-configuration file must contain for the stamp to apply
const EXPECTED: &str = "a `project(<name> ... VERSION <digits-and-dots>)` declaration";

fn project_version_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(project\(.+?\s+VERSION\s+)([0-9.]+)(\))").unwrap())
}

/// Rewrite the version token of every `project(... VERSION ...)` declaration
/// in `content`.
///
/// Each occurrence keeps its own opening tokens (project name, `VERSION`
/// keyword, surrounding whitespace) and closing parenthesis byte-for-byte;
/// only the digits-and-dots version token becomes `vername`.
fn replace_project_version(path: &Path, content: &str, vername: &str) -> StampResult<(String, usize)> {
  let mut count = 0;
  let replaced = project_version_re().replace_all(content, |caps: &Captures| {
    count += 1;
    format!("{}{}{}", &caps[1], vername, &caps[3])
  });

  if count == 0 {
    return Err(StampError::PatternNotFound {
      path: path.to_path_buf(),
      expected: EXPECTED,
    });
  }

  Ok((replaced.into_owned(), count))
}

/// Stamp `vername` into the `project(... VERSION ...)` declaration of the
/// build-configuration file at `path`, overwriting it in place.
pub fn stamp_version(path: &Path, vername: &str) -> StampResult<StampReport> {
  let changes = rewrite_file(path, |content| replace_project_version(path, content, vername))?;

  Ok(StampReport {
    path: path.to_path_buf(),
    changes,
    release_date: None,
  })
}
