//! Fetching variants from the build server
//!
//! For every concrete variant the fetcher computes the download target,
//! replaces the output directory with a fresh one, downloads the archive
//! into it and extracts it in place. Variants are handled one after
//! another and a failure on one never stops the rest.

use anyhow::Result;
use log::debug;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::archive::ArchiveExtractor;
use crate::artifact::DownloadTarget;
use crate::console::Console;
use crate::download::download_file;
use crate::error::status_code_of;
use crate::http::HttpClient;
use crate::platform::SubdirectoryLayout;
use crate::runtime::Runtime;
use crate::variant::IOS_NET;

/// Width the `--- Checking` label is padded to with dots.
const CHECK_LABEL_WIDTH: usize = 80;

/// Request parameters shared by every variant in a run.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub download_folder: String,
    pub build: Option<String>,
    pub debug: bool,
    pub output_base: PathBuf,
}

/// Result of a dry-run check for one variant.
#[derive(Debug)]
pub struct CheckOutcome {
    pub target: DownloadTarget,
    /// HTTP status, or `None` if the server could not be reached.
    pub status: Option<u16>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

pub struct Fetcher<R: Runtime, E: ArchiveExtractor> {
    runtime: R,
    http_client: HttpClient,
    extractor: E,
    layout: Box<dyn SubdirectoryLayout>,
    console: Console,
}

impl<R: Runtime + 'static, E: ArchiveExtractor> Fetcher<R, E> {
    pub fn new(
        runtime: R,
        http_client: HttpClient,
        extractor: E,
        layout: Box<dyn SubdirectoryLayout>,
        console: Console,
    ) -> Self {
        Self {
            runtime,
            http_client,
            extractor,
            layout,
            console,
        }
    }

    pub fn target(&self, options: &FetchOptions, variant: &str) -> Result<DownloadTarget> {
        DownloadTarget::compute(
            &self.runtime,
            self.layout.as_ref(),
            &options.download_folder,
            variant,
            options.build.as_deref(),
            options.debug,
            &options.output_base,
        )
    }

    /// Downloads and extracts one variant.
    ///
    /// The variant's output directory is deleted and recreated first, so
    /// anything already in it is lost even if the download then fails.
    #[tracing::instrument(skip(self, options))]
    pub async fn fetch(&self, options: &FetchOptions, variant: &str) -> Result<()> {
        let target = self.target(options, variant)?;
        self.console.progress(format!(
            "--- Downloading {} to {}...",
            target.filename,
            target.output_dir.display()
        ));

        if self.runtime.exists(&target.output_dir) {
            debug!("Removing previous contents of {:?}", target.output_dir);
            self.runtime.remove_dir_all(&target.output_dir)?;
        }
        self.runtime.create_dir_all(&target.output_dir)?;

        let archive_path = target.archive_path();
        download_file(&self.runtime, &target.url, &archive_path, &self.http_client).await?;

        if variant == IOS_NET {
            debug!("{} is not extracted", IOS_NET);
            return Ok(());
        }

        self.console
            .progress(format!("--- Extracting {}...", target.filename));
        self.extractor
            .extract(&self.runtime, &archive_path, &target.output_dir)
    }

    /// Reports whether a variant is available without touching the
    /// filesystem.
    #[tracing::instrument(skip(self, options))]
    pub async fn check(&self, options: &FetchOptions, variant: &str) -> Result<CheckOutcome> {
        let target = self.target(options, variant)?;
        let label = format!("--- Checking {}", target.filename);

        let (status, shown) = match self.http_client.status(&target.url).await {
            Ok(status) => (Some(status), status.to_string()),
            Err(e) => (None, format!("{:#}", e)),
        };

        self.console
            .report(format!("{:.<width$}{}", label, shown, width = CHECK_LABEL_WIDTH));
        self.console
            .report(format!("\tDownload path: {}", target.output_dir.display()));

        Ok(CheckOutcome { target, status })
    }

    /// Processes every variant in order and returns how many failed.
    pub async fn run_all(
        &self,
        options: &FetchOptions,
        variants: &BTreeSet<String>,
        dry_run: bool,
    ) -> usize {
        let mut failures = 0;

        for variant in variants {
            let failed = if dry_run {
                match self.check(options, variant).await {
                    // The status is already on the check line
                    Ok(outcome) => !outcome.passed(),
                    Err(e) => {
                        self.report_failure(variant, &e);
                        true
                    }
                }
            } else {
                match self.fetch(options, variant).await {
                    Ok(()) => false,
                    Err(e) => {
                        self.report_failure(variant, &e);
                        true
                    }
                }
            };

            if failed {
                failures += 1;
            }
        }

        debug!("{} of {} variant(s) failed", failures, variants.len());
        failures
    }

    fn report_failure(&self, variant: &str, error: &anyhow::Error) {
        debug!("Variant {} failed: {:#}", variant, error);
        match status_code_of(error) {
            Some(status) => self.console.failure(format!("!!! Failed: {}", status)),
            None => self.console.failure(format!("!!! Failed: {:#}", error)),
        }
    }
}
