//! Metadata-descriptor stamping: prepend a dated `<release/>` entry
//!
//! AppStream metainfo templates keep their release history newest-first:
//!
//! ```xml
//! <releases>
//!   <release version="2.9.1" date="2024-11-02"/>
//!   <release version="2.9.0" date="2024-08-15"/>
//! ```
//!
//! Stamping inserts an entry for the new version, dated today (UTC),
//! directly above the previous most-recent entry, with the same
//! indentation. The previous entry stays in place unchanged, so the
//! history accretes one line per release.

use crate::error::{StampError, StampResult};
use chrono::Utc;
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

use super::{StampReport, rewrite_file};

/// What a metainfo descriptor must contain for the stamp to apply
const EXPECTED: &str = "a `<releases>` section opening onto a self-closing `<release .../>` entry";

fn releases_head_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"<releases>\n+(\s*)(<release .+?/>)\n").unwrap())
}

/// Insert a `<release version=".." date=".."/>` line for `vername` directly
/// above the current most-recent entry, reusing that entry's indentation.
fn prepend_release_entry(path: &Path, content: &str, vername: &str, date: &str) -> StampResult<(String, usize)> {
  let mut count = 0;
  let replaced = releases_head_re().replace_all(content, |caps: &Captures| {
    count += 1;
    let indent = &caps[1];
    let previous = &caps[2];
    format!(
      "<releases>\n{}<release version=\"{}\" date=\"{}\"/>\n{}{}\n",
      indent, vername, date, indent, previous
    )
  });

  if count == 0 {
    return Err(StampError::PatternNotFound {
      path: path.to_path_buf(),
      expected: EXPECTED,
    });
  }

  Ok((replaced.into_owned(), count))
}

/// Stamp a release entry for `vername`, dated today (UTC), into the
/// metainfo descriptor at `path`, overwriting it in place.
pub fn stamp_release(path: &Path, vername: &str) -> StampResult<StampReport> {
  let today = Utc::now().format("%Y-%m-%d").to_string();
  let changes = rewrite_file(path, |content| prepend_release_entry(path, content, vername, &today))?;

  Ok(StampReport {
    path: path.to_path_buf(),
    changes,
    release_date: Some(today),
  })
}
