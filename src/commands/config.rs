use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use std::path::Path;

use crate::{
    archive::{ArchiveExtractor, ArchiveExtractorImpl},
    console::Console,
    fetch::Fetcher,
    http::HttpClient,
    platform::{DefaultLayout, PlatformExtension, SubdirectoryLayout, locate_extension_dir},
    runtime::Runtime,
};

pub const USER_AGENT: &str = concat!("fetch-litecore/", env!("LITECORE_FETCH_VERSION"));

/// Everything a run needs, assembled once at startup.
pub struct Config<R: Runtime, E: ArchiveExtractor> {
    pub runtime: R,
    pub http_client: HttpClient,
    pub extractor: E,
    pub layout: Box<dyn SubdirectoryLayout>,
    pub console: Console,
}

impl<R: Runtime + 'static> Config<R, ArchiveExtractorImpl> {
    pub fn new(runtime: R, ext_path: Option<&Path>, console: Console) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let layout = load_layout(&runtime, ext_path, &console)?;

        Ok(Self {
            runtime,
            http_client: HttpClient::new(client),
            extractor: ArchiveExtractorImpl::new(),
            layout,
            console,
        })
    }
}

impl<R: Runtime + 'static, E: ArchiveExtractor> Config<R, E> {
    pub fn into_fetcher(self) -> Fetcher<R, E> {
        Fetcher::new(
            self.runtime,
            self.http_client,
            self.extractor,
            self.layout,
            self.console,
        )
    }
}

/// Picks the subdirectory layout for the run.
///
/// A missing `ext_path` directory is fatal; a missing or unreadable
/// extension file inside it only downgrades to the default layout.
pub fn load_layout<R: Runtime + ?Sized>(
    runtime: &R,
    ext_path: Option<&Path>,
    console: &Console,
) -> Result<Box<dyn SubdirectoryLayout>> {
    let Some(ext_path) = ext_path else {
        debug!("No platform extension path given, using <os>/<abi> layout");
        return Ok(Box::new(DefaultLayout));
    };

    let dir = locate_extension_dir(runtime, ext_path)?;
    match PlatformExtension::load(runtime, &dir) {
        Ok(extension) => {
            info!("Loaded platform extension from {:?}", dir);
            Ok(Box::new(extension))
        }
        Err(e) => {
            console.failure(
                "!!! Unable to load platform extensions, falling back to <os>/<abi> for subdirectory...",
            );
            debug!("Platform extension not loaded: {:#}", e);
            Ok(Box::new(DefaultLayout))
        }
    }
}
