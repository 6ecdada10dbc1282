//! Pep440 facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Comparator, Version, VersionParser, VersionParserError};

/// Main facade for PEP 440 versioning operations
pub struct Pep440;

impl Pep440 {
    /// Parse both strings and compare them
    pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionParserError> {
        let parser = VersionParser::new();
        let a = parser.parse(a)?;
        let b = parser.parse(b)?;
        Ok(Comparator::compare(&a, &b))
    }

    /// Check if a version string is valid
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Parse with the original index; unparseable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parser.parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original strings in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert_eq!(Pep440::compare("1.0", "2.0").unwrap(), Ordering::Less);
        assert_eq!(Pep440::compare("1.0", "1.0.0").unwrap(), Ordering::Equal);
        assert_eq!(Pep440::compare("1!1.0", "2.0").unwrap(), Ordering::Greater);
        assert!(Pep440::compare("1.0", "not-a-version!!").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Pep440::is_valid("1.0.0rc1"));
        assert!(Pep440::is_valid("v2!1.0.post1.dev2+abc"));
        assert!(!Pep440::is_valid("1.0.0rc1rc2"));
        assert!(!Pep440::is_valid(""));
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0", "0.1", "0.1", "3.2.1", "2.4.0a1", "2.4.0"];
        let sorted = Pep440::sort(&versions);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4.0a1", "2.4.0", "3.2.1"]);
    }

    #[test]
    fn test_sort_qualifiers() {
        let versions = [
            "1.0.post1",
            "1.0",
            "1.0rc1",
            "1.0.dev0",
            "1.0a1",
            "1.0.post1.dev1",
        ];
        let sorted = Pep440::sort(&versions);
        assert_eq!(
            sorted,
            vec!["1.0.dev0", "1.0a1", "1.0rc1", "1.0", "1.0.post1.dev1", "1.0.post1"]
        );
    }

    #[test]
    fn test_sort_drops_invalid() {
        let versions = ["2.0", "not-a-version!!", "1.0"];
        assert_eq!(Pep440::sort(&versions), vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_sort_is_stable() {
        // equal versions keep their input order
        let versions = ["1.0.0", "1.0", "1"];
        assert_eq!(Pep440::sort(&versions), vec!["1.0.0", "1.0", "1"]);
        assert_eq!(Pep440::rsort(&versions), vec!["1.0.0", "1.0", "1"]);
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0", "0.1", "3.2.1", "2.4.0a1", "2.4.0"];
        let rsorted = Pep440::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0a1", "1.0", "0.1"]);
    }
}
