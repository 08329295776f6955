use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use super::layout::SubdirectoryLayout;
use crate::runtime::{
    Runtime,
    path::{absolutize, resolve_lenient},
};
use crate::variant::split_variant;

/// Computes the directory a variant's artifacts are written to.
///
/// `output_base` is anchored at the current working directory when
/// relative; the subdirectory comes from `layout`, and the joined path is
/// normalized with any existing symlinked prefix resolved.
#[tracing::instrument(skip(runtime, layout))]
pub fn resolve_path<R: Runtime + ?Sized>(
    runtime: &R,
    layout: &dyn SubdirectoryLayout,
    variant: &str,
    output_base: &Path,
) -> Result<PathBuf> {
    let base = absolutize(runtime, output_base)?;
    let pair = split_variant(variant)?;
    let subdirectory = layout.subdirectory_for(&pair.os, &pair.abi);
    debug!("Variant {} -> {} -> {:?}", variant, pair, subdirectory);
    Ok(resolve_lenient(runtime, &base.join(subdirectory)))
}
