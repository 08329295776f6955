use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use litecore_fetch::commands::{FetchRequest, fetch};
use litecore_fetch::fetch::FetchOptions;
use litecore_fetch::variant::VALID_PLATFORMS;
use std::path::PathBuf;
use std::process::ExitCode;

/// fetch-litecore - download prebuilt LiteCore binaries
///
/// Downloads the LiteCore archives for the requested platforms from a
/// build server folder and extracts each into <output>/<os>/<abi>.
///
/// WARNING: every variant's output directory is deleted and recreated
/// before downloading.
///
/// Examples:
///   fetch-litecore -u https://host/builds -v dotnet -o vendor
///   fetch-litecore -u https://host/builds -v linux,macosx -b 3.1.0-97-EE -n
#[derive(Parser, Debug)]
#[command(author, version = env!("LITECORE_FETCH_VERSION"), about)]
struct Cli {
    /// URL of the build server folder holding the archives
    #[arg(short = 'u', long = "url", env = "LITECORE_DOWNLOAD_URL", value_name = "URL")]
    download_url: String,

    /// Platforms to fetch; meta-platforms (dotnet, android, java, windows, macos) expand
    #[arg(
        short = 'v',
        long = "variant",
        value_name = "VARIANT",
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(VALID_PLATFORMS.iter().copied())
    )]
    variants: Vec<String>,

    /// Build to fetch, e.g. 3.1.0-97 (append -EE for enterprise)
    #[arg(short = 'b', long = "build", value_name = "VERSION-BUILD[-EE]")]
    build: Option<String>,

    /// Fetch debug archives instead of release
    #[arg(short = 'd', long)]
    debug: bool,

    /// Base directory the per-platform directories are created in
    #[arg(
        short = 'o',
        long = "output",
        env = "LITECORE_OUTPUT_DIR",
        value_name = "DIR",
        default_value = "."
    )]
    output: PathBuf,

    /// Directory containing platform_fetch.json to customise subdirectory names
    #[arg(long = "ext-path", env = "LITECORE_EXT_PATH", value_name = "DIR")]
    ext_path: Option<PathBuf>,

    /// Only check that each archive exists and print where it would go
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn into_request(self) -> FetchRequest {
        FetchRequest {
            variants: self.variants,
            options: FetchOptions {
                download_folder: self.download_url,
                build: self.build,
                debug: self.debug,
                output_base: self.output,
            },
            ext_path: self.ext_path,
            dry_run: self.dry_run,
            quiet: self.quiet,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runtime = litecore_fetch::runtime::RealRuntime;
    let failures = fetch(runtime, cli.into_request()).await?;

    Ok(ExitCode::from(failures.min(u8::MAX as usize) as u8))
}
