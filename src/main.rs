use clap::Parser;
use menu_image_fetcher::{check, Config, Downloader, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Download menu images listed in a `name=identifier` mapping file.
#[derive(Parser, Debug)]
#[command(name = "menu-image-fetcher")]
struct Cli {
    /// Mapping file with one `name=identifier` pair per line
    #[arg(long)]
    mapping: Option<PathBuf>,

    /// Directory the images are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Endpoint prefix the identifier is appended to
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Keep files rejected as too small instead of deleting them
    #[arg(long)]
    keep_rejected: bool,

    /// Only report which images are missing or too small on disk
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(mapping) = self.mapping {
            config.mapping_path = mapping;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = Duration::from_secs(timeout);
        }
        config.keep_rejected = self.keep_rejected;
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let check_only = cli.check;
    let config = cli.into_config();
    let mut stdout = io::stdout();

    if check_only {
        check::run_check(&config, &mut stdout)?;
        return Ok(());
    }

    let downloader = Downloader::from_config(config)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(downloader.run(&mut stdout))?;
    Ok(())
}
