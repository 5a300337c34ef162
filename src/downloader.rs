mod downloadresult;
mod summary;

pub use downloadresult::{DownloadResult, TransferFailure};
pub use summary::RunSummary;

use crate::{Config, Mapping, Result};
use bytes::Bytes;
use reqwest::{redirect, Client};
use std::{
    fs,
    fs::File,
    io::{copy, Write},
    path::Path,
};
use tracing::{debug, info, warn};

const MAX_REDIRECTS: usize = 10;

pub struct Downloader {
    mapping: Mapping,
    config: Config,
    client: Client,
}

impl Downloader {
    pub fn new(mapping: Mapping, config: Config) -> Result<Downloader> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Downloader {
            mapping,
            config,
            client,
        })
    }

    /// Loads the mapping named by `config` and builds a downloader for it.
    pub fn from_config(config: Config) -> Result<Downloader> {
        let mapping = Mapping::load(&config.mapping_path)?;
        Downloader::new(mapping, config)
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Downloads every entry in order, writing progress and the final
    /// summary to `out`. Per-entry failures are recorded, never returned.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        // Entries still run and fail individually when the directory is unusable.
        if let Err(e) = fs::create_dir_all(&self.config.output_dir) {
            warn!(
                output_dir = %self.config.output_dir.display(),
                error = %e,
                "couldn't create output directory"
            );
        }

        let total = self.mapping.len();
        let mut summary = RunSummary::new(total);
        info!(total, output_dir = %self.config.output_dir.display(), "starting batch download");

        writeln!(out, "📥 Downloading {} menu images...", total)?;
        writeln!(out, "{}", "=".repeat(summary::RULE_WIDTH))?;

        for (idx, (name, identifier)) in self.mapping.iter().enumerate() {
            write!(out, "[{}/{}] {}... ", idx + 1, total, name)?;
            out.flush()?;

            let result = self.download_entry(name, identifier).await;
            writeln!(out, "{}", result.status_text())?;
            summary.record(name, &result);
        }

        summary.print_result(out)?;
        info!(
            succeeded = summary.success_count,
            failed = summary.failed_names.len(),
            "batch download finished"
        );
        Ok(summary)
    }

    pub async fn download_entry(&self, name: &str, identifier: &str) -> DownloadResult {
        if !Config::is_safe_name(name) {
            warn!(name, "refusing to write outside the output directory");
            return DownloadResult::TransferFailed(TransferFailure::UnsafeName);
        }

        let url = self.config.url_for(identifier);
        let dest_path = self.config.output_path_for(name);

        let result = match self.download_file(&url, &dest_path).await {
            Ok(size) => DownloadResult::classify(size, self.config.min_size),
            Err(failure) => {
                warn!(name, url = %url, error = %failure, "transfer failed");
                return DownloadResult::TransferFailed(failure);
            }
        };

        if let DownloadResult::TooSmall(size) = result {
            warn!(name, size, "downloaded file is too small");
            if !self.config.keep_rejected {
                Downloader::discard(&dest_path);
            }
        }
        result
    }

    async fn download_file(
        &self,
        url: &str,
        dest_path: &Path,
    ) -> std::result::Result<u64, TransferFailure> {
        debug!(url, "requesting");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransferFailure::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferFailure::Status(status.as_u16()));
        }

        let content: Bytes = response
            .bytes()
            .await
            .map_err(|e| TransferFailure::from_reqwest(&e))?;

        let mut dest = File::create(dest_path)?;
        copy(&mut content.as_ref(), &mut dest)?;

        Ok(fs::metadata(dest_path)?.len())
    }

    fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "couldn't remove rejected file");
        }
    }
}
