use anyhow::Result;
use std::path::{Path, PathBuf};

use super::filename::resolve_filename;
use crate::platform::{SubdirectoryLayout, resolve_path};
use crate::runtime::Runtime;

/// Where a variant is fetched from and where it lands. Computed fresh for
/// every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub filename: String,
    pub url: String,
    pub output_dir: PathBuf,
}

impl DownloadTarget {
    pub fn compute<R: Runtime + ?Sized>(
        runtime: &R,
        layout: &dyn SubdirectoryLayout,
        download_folder: &str,
        variant: &str,
        build: Option<&str>,
        debug: bool,
        output_base: &Path,
    ) -> Result<Self> {
        let filename = resolve_filename(variant, debug, build)?;
        let url = format!("{}/{}", download_folder.trim_end_matches('/'), filename);
        let output_dir = resolve_path(runtime, layout, variant, output_base)?;
        Ok(Self {
            filename,
            url,
            output_dir,
        })
    }

    /// Location the downloaded archive is written to.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }
}
