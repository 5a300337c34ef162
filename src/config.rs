use std::path::{Path, PathBuf};
use std::time::Duration;

pub const MAPPING_FILE_PATH: &str = "scripts/all-image-urls.txt";
pub const OUTPUT_DIR_PATH: &str = "public/menus/";
pub const BASE_URL: &str = "https://www.genspark.ai/api/files/s";
pub const EXTENSION: &str = "jpg";
pub const TIMEOUT_SECS: u64 = 30;
/// Files at or below this many bytes are rejected as placeholders.
pub const MIN_SIZE: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub mapping_path: PathBuf,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub extension: String,
    pub timeout: Duration,
    pub min_size: u64,
    pub keep_rejected: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mapping_path: PathBuf::from(MAPPING_FILE_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR_PATH),
            base_url: BASE_URL.to_string(),
            extension: EXTENSION.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            min_size: MIN_SIZE,
            keep_rejected: false,
        }
    }
}

impl Config {
    pub fn url_for(&self, identifier: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), identifier)
    }

    /// Names that would resolve outside `output_dir` are not written.
    pub fn is_safe_name(name: &str) -> bool {
        name != ".." && !name.contains(['/', '\\'])
    }

    pub fn output_path_for(&self, name: &str) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}.{}", name, self.extension))
    }
}
