use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::{
    archive::ArchiveExtractor,
    console::Console,
    fetch::FetchOptions,
    runtime::Runtime,
    variant::expand_variants,
};

pub mod config;

use config::Config;

/// One invocation of the tool, as collected from the command line.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub variants: Vec<String>,
    pub options: FetchOptions,
    pub ext_path: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Fetches (or, in dry-run mode, checks) every requested variant and
/// returns the number that failed.
#[tracing::instrument(skip(runtime, request))]
pub async fn fetch<R: Runtime + 'static>(runtime: R, request: FetchRequest) -> Result<usize> {
    let console = Console::new(request.quiet);
    let config = Config::new(runtime, request.ext_path.as_deref(), console)?;
    Ok(run(&request, config).await)
}

pub async fn run<R: Runtime + 'static, E: ArchiveExtractor>(
    request: &FetchRequest,
    config: Config<R, E>,
) -> usize {
    let variants = expand_variants(&request.variants);
    debug!("Requested {:?} expanded to {:?}", request.variants, variants);

    let fetcher = config.into_fetcher();
    let failures = fetcher
        .run_all(&request.options, &variants, request.dry_run)
        .await;

    info!(
        "{} variant(s) processed, {} failed",
        variants.len(),
        failures
    );
    failures
}
