//! PEP 440 version parsing, normalization and comparison
//!
//! This crate parses version strings into a structured representation,
//! renders them in canonical form and orders any two versions according to
//! the PEP 440 comparison rules.

mod comparator;
mod pep440;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use pep440::Pep440;
pub use version::{LocalSegment, PreKind, Version};
pub use version_parser::{VersionParser, VersionParserError};
