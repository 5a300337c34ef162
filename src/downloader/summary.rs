use super::DownloadResult;
use std::io::{self, Write};

const SHOWN_FAILURES: usize = 5;
pub const RULE_WIDTH: usize = 60;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub success_count: usize,
    pub failed_names: Vec<String>,
}

impl RunSummary {
    pub fn new(total: usize) -> RunSummary {
        RunSummary {
            total,
            ..RunSummary::default()
        }
    }

    pub fn record(&mut self, name: &str, result: &DownloadResult) {
        if result.is_success() {
            self.success_count += 1;
        } else {
            self.failed_names.push(name.to_string());
        }
    }

    pub fn attempted(&self) -> usize {
        self.success_count + self.failed_names.len()
    }

    pub fn print_result<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "✅ Successfully downloaded: {}/{}",
            self.success_count, self.total
        )?;
        if !self.failed_names.is_empty() {
            let shown: Vec<&str> = self
                .failed_names
                .iter()
                .take(SHOWN_FAILURES)
                .map(String::as_str)
                .collect();
            writeln!(
                out,
                "❌ Failed: {} - {}",
                self.failed_names.len(),
                shown.join(", ")
            )?;
        }
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::TransferFailure;

    fn render(summary: &RunSummary) -> String {
        let mut out = Vec::new();
        summary.print_result(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn failed_status_goes_to_failed_names() {
        let mut summary = RunSummary::new(1);
        summary.record(
            "lunch",
            &DownloadResult::TransferFailed(TransferFailure::Status(500)),
        );
        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failed_names, vec!["lunch".to_string()]);
    }

    #[test]
    fn too_small_counts_as_failure() {
        let mut summary = RunSummary::new(2);
        summary.record("a", &DownloadResult::Success(4096));
        summary.record("b", &DownloadResult::TooSmall(12));
        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.failed_names, vec!["b".to_string()]);
        assert_eq!(summary.attempted(), 2);
    }

    #[test]
    fn all_success_prints_no_failure_line() {
        let mut summary = RunSummary::new(1);
        summary.record("a", &DownloadResult::Success(4096));
        let text = render(&summary);
        assert!(text.contains("Successfully downloaded: 1/1"));
        assert!(!text.contains("Failed"));
    }

    #[test]
    fn only_first_five_failures_are_listed() {
        let mut summary = RunSummary::new(7);
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            summary.record(name, &DownloadResult::TooSmall(0));
        }
        let text = render(&summary);
        assert!(text.contains("❌ Failed: 7 - a, b, c, d, e\n"));
    }
}
