//! User-facing command implementations
//!
//! release-stamp has a single operation:
//! - **bump**: stamp a new version into the build configuration and
//!   metainfo descriptor, recording today's date for the release

pub mod bump;

pub use bump::run_bump;
