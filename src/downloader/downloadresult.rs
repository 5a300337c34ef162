use std::fmt;

/// Why a single transfer did not produce a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferFailure {
    Timeout,
    Connect(String),
    Status(u16),
    Body(String),
    Io(String),
    UnsafeName,
}

impl TransferFailure {
    pub fn from_reqwest(error: &reqwest::Error) -> TransferFailure {
        if error.is_timeout() {
            TransferFailure::Timeout
        } else if error.is_connect() || error.is_request() || error.is_redirect() {
            TransferFailure::Connect(error.to_string())
        } else {
            TransferFailure::Body(error.to_string())
        }
    }
}

impl fmt::Display for TransferFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferFailure::Timeout => write!(f, "timed out"),
            TransferFailure::Connect(e) => write!(f, "connection failed: {}", e),
            TransferFailure::Status(code) => write!(f, "HTTP {}", code),
            TransferFailure::Body(e) => write!(f, "body read failed: {}", e),
            TransferFailure::Io(e) => write!(f, "write failed: {}", e),
            TransferFailure::UnsafeName => write!(f, "name is not a plain file name"),
        }
    }
}

impl From<std::io::Error> for TransferFailure {
    fn from(error: std::io::Error) -> TransferFailure {
        TransferFailure::Io(error.to_string())
    }
}

/// Outcome of one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    Success(u64),
    TooSmall(u64),
    TransferFailed(TransferFailure),
}

impl DownloadResult {
    /// Sizes strictly above `min_size` count as a real image.
    pub fn classify(size: u64, min_size: u64) -> DownloadResult {
        if size > min_size {
            DownloadResult::Success(size)
        } else {
            DownloadResult::TooSmall(size)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DownloadResult::Success(_))
    }

    /// Status glyph and detail shown after the progress prefix.
    pub fn status_text(&self) -> String {
        match self {
            DownloadResult::Success(size) => format!("✅ {}KB", size / 1024),
            DownloadResult::TooSmall(size) => format!("⚠️ Too small ({}B)", size),
            DownloadResult::TransferFailed(TransferFailure::Status(_)) => "❌ Failed".to_string(),
            DownloadResult::TransferFailed(reason) => format!("❌ Error: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_strictly_greater_than() {
        assert_eq!(DownloadResult::classify(1000, 1000), DownloadResult::TooSmall(1000));
        assert_eq!(DownloadResult::classify(1001, 1000), DownloadResult::Success(1001));
        assert_eq!(DownloadResult::classify(0, 1000), DownloadResult::TooSmall(0));
    }

    #[test]
    fn status_text_per_outcome() {
        assert_eq!(DownloadResult::Success(5000).status_text(), "✅ 4KB");
        assert_eq!(
            DownloadResult::TooSmall(512).status_text(),
            "⚠️ Too small (512B)"
        );
        assert_eq!(
            DownloadResult::TransferFailed(TransferFailure::Status(404)).status_text(),
            "❌ Failed"
        );
        assert_eq!(
            DownloadResult::TransferFailed(TransferFailure::Timeout).status_text(),
            "❌ Error: timed out"
        );
    }

    #[test]
    fn only_success_is_success() {
        assert!(DownloadResult::Success(2000).is_success());
        assert!(!DownloadResult::TooSmall(10).is_success());
        assert!(!DownloadResult::TransferFailed(TransferFailure::Timeout).is_success());
    }
}
