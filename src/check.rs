//! Offline audit of the output directory against the mapping.

use crate::{Config, Mapping, Result};
use std::fs;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Present(u64),
    Undersized(u64),
    Missing,
}

impl ImageStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ImageStatus::Present(_))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: Vec<(String, ImageStatus)>,
}

impl CheckReport {
    pub fn ok_count(&self) -> usize {
        self.entries.iter().filter(|(_, s)| s.is_ok()).count()
    }

    pub fn problems(&self) -> impl Iterator<Item = &(String, ImageStatus)> {
        self.entries.iter().filter(|(_, s)| !s.is_ok())
    }

    pub fn print_result<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (name, status) in self.problems() {
            match status {
                ImageStatus::Missing => writeln!(out, "- {} (missing)", name)?,
                ImageStatus::Undersized(size) => {
                    writeln!(out, "- {} (too small: {}B)", name, size)?
                }
                ImageStatus::Present(_) => {}
            }
        }
        let ok = self.ok_count();
        writeln!(out, "Total menus: {}", self.entries.len())?;
        writeln!(out, "Images OK: {}", ok)?;
        writeln!(out, "Problems: {}", self.entries.len() - ok)
    }
}

/// Inspects `<output-dir>/<name>.<ext>` for every entry without touching the network.
pub fn check(mapping: &Mapping, config: &Config) -> CheckReport {
    let entries = mapping
        .iter()
        .map(|(name, _)| {
            if !Config::is_safe_name(name) {
                return (name.to_string(), ImageStatus::Missing);
            }
            let status = match fs::metadata(config.output_path_for(name)) {
                Ok(meta) if meta.is_file() && meta.len() > config.min_size => {
                    ImageStatus::Present(meta.len())
                }
                Ok(meta) if meta.is_file() => ImageStatus::Undersized(meta.len()),
                _ => ImageStatus::Missing,
            };
            (name.to_string(), status)
        })
        .collect();
    CheckReport { entries }
}

/// Loads the configured mapping, audits it and prints the report to `out`.
/// A missing mapping file is returned before anything is printed.
pub fn run_check<W: Write>(config: &Config, out: &mut W) -> Result<CheckReport> {
    let mapping = Mapping::load(&config.mapping_path)?;
    let report = check(&mapping, config);
    report.print_result(out)?;
    Ok(report)
}
