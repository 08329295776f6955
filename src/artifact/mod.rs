//! Artifact naming
//!
//! Maps a variant and build flavour onto the archive the build server
//! publishes for it, and bundles the resulting download target.

mod filename;
mod target;

pub use filename::{ArchiveKind, BuildDescriptor, Edition, resolve_filename};
pub use target::DownloadTarget;

/// Common prefix of every published archive.
pub const ARTIFACT_PREFIX: &str = "couchbase-lite-core";
