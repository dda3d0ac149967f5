//! `bump` command: stamp a release into every version-bearing file

use crate::error::StampResult;
use crate::stamp::{cmake, metainfo};
use std::path::Path;

/// Build-configuration files carrying a `project(... VERSION ...)` declaration
const CMAKE_TARGETS: [&str; 2] = ["CMakeLists.txt", "src/CMakeLists.txt"];

/// Metainfo descriptor carrying the `<releases>` history
const METAINFO_TARGET: &str = "app.metainfo.xml.in";

/// Stamp `vername` into each target file in turn, printing one report line
/// per file as it lands.
///
/// The files are processed in a fixed order and the first failure stops the
/// run. Files stamped before the failure keep their new contents; the
/// failing file itself is never left half-written.
pub fn run_bump(vername: &str) -> StampResult<()> {
  for target in CMAKE_TARGETS {
    let report = cmake::stamp_version(Path::new(target), vername)?;
    println!("{}", report);
  }

  let report = metainfo::stamp_release(Path::new(METAINFO_TARGET), vername)?;
  println!("{}", report);

  Ok(())
}
