pub mod check;
pub mod config;
pub mod downloader;
pub mod mapping;

pub use config::Config;
pub use downloader::{DownloadResult, Downloader, RunSummary, TransferFailure};
pub use mapping::Mapping;

use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        HttpRequest(reqwest::Error);
    }

    errors {
        MappingFileMissing(path: String) {
            description("mapping file not found")
            display("mapping file not found: {}", path)
        }
    }
}
