//! Error types for release-stamp with contextual help and exit codes
//!
//! Stamping has exactly two ways to fail: a target file is missing the
//! expected textual structure, or the file cannot be read or written.
//! Both are fatal; nothing in this tool catches or retries an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// System error (file I/O)
  System = 2,
  /// Validation failure (expected pattern absent from a target file)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-stamp
#[derive(Debug)]
pub enum StampError {
  /// The expected version pattern is absent from a target file
  PatternNotFound {
    path: PathBuf,
    /// What the file was expected to contain, for the help text
    expected: &'static str,
  },

  /// Reading or writing a target file failed
  Io { path: PathBuf, source: io::Error },
}

impl StampError {
  /// Wrap an I/O error with the path it occurred on
  pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    StampError::Io {
      path: path.into(),
      source,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      StampError::PatternNotFound { .. } => ExitCode::Validation,
      StampError::Io { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      StampError::PatternNotFound { expected, .. } => {
        Some(format!("The file is expected to contain {}.", expected))
      }
      StampError::Io { .. } => None,
    }
  }
}

impl fmt::Display for StampError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StampError::PatternNotFound { path, .. } => {
        write!(f, "{}: pattern not found", path.display())
      }
      StampError::Io { path, source } => {
        write!(f, "{}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for StampError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      StampError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Result type alias for release-stamp
pub type StampResult<T> = Result<T, StampError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &StampError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
