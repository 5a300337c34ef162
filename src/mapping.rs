use crate::{ErrorKind, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

const SEPARATOR: char = '=';

/// Menu name to remote file identifier, kept in first-seen order.
///
/// A repeated name overwrites the earlier identifier but keeps the
/// position where the name first appeared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl Mapping {
    pub fn new() -> Mapping {
        Mapping::default()
    }

    pub fn load(path: &Path) -> Result<Mapping> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ErrorKind::MappingFileMissing(path.display().to_string()).into()
            }
            _ => crate::Error::from(e),
        })?;
        Ok(Mapping::parse(&contents))
    }

    pub fn parse(contents: &str) -> Mapping {
        let mut mapping = Mapping::new();
        for line in contents.lines() {
            if let Some((name, identifier)) = line.split_once(SEPARATOR) {
                mapping.insert(name.trim(), identifier.trim());
            }
        }
        mapping
    }

    pub fn insert(&mut self, name: &str, identifier: &str) {
        match self.positions.get(name) {
            Some(&idx) => self.entries[idx].1 = identifier.to_string(),
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries
                    .push((name.to_string(), identifier.to_string()));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, identifier)| (name.as_str(), identifier.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_separatorless_lines_are_skipped() {
        let mapping = Mapping::parse("a=1\n\nb=2\nnot a pair\nc=3\n\nd=4\ne=5\n");
        assert_eq!(mapping.len(), 5);
    }

    #[test]
    fn later_occurrence_wins() {
        let mapping = Mapping::parse("kimchi=old\nramen=r1\nkimchi=new\n");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("kimchi"), Some("new"));
        let names: Vec<&str> = mapping.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["kimchi", "ramen"]);
    }

    #[test]
    fn splits_on_first_separator_and_trims() {
        let mapping = Mapping::parse("  tteokbokki =  abc=def  \n");
        assert_eq!(mapping.get("tteokbokki"), Some("abc=def"));
    }

    #[test]
    fn keeps_file_order() {
        let mapping = Mapping::parse("z=1\na=2\nm=3\n");
        let pairs: Vec<(&str, &str)> = mapping.iter().collect();
        assert_eq!(pairs, vec![("z", "1"), ("a", "2"), ("m", "3")]);
    }

    #[test]
    fn missing_file_is_reported_as_mapping_file_missing() {
        let err = Mapping::load(Path::new("definitely/not/here.txt")).unwrap_err();
        match err.kind() {
            ErrorKind::MappingFileMissing(path) => assert!(path.ends_with("here.txt")),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }
}
