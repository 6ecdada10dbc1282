//! Structured version representation and canonical rendering

use std::fmt;
use std::str::FromStr;

use crate::version_parser::{VersionParser, VersionParserError};

/// Pre-release labels, declared in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreKind {
    Alpha,
    Beta,
    Rc,
}

impl PreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreKind::Alpha => "a",
            PreKind::Beta => "b",
            PreKind::Rc => "rc",
        }
    }
}

impl fmt::Display for PreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dot-separated segment of a local version label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSegment {
    Num(u64),
    Alpha(String),
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSegment::Num(n) => write!(f, "{}", n),
            LocalSegment::Alpha(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed PEP 440 version.
///
/// Instances are produced by [`VersionParser`] and are immutable afterwards;
/// everything else on this type is a read-only derivation. Separator and case
/// variations are folded away during parsing, so two versions that normalize
/// to the same text hold identical fields.
///
/// Equality follows the PEP 440 comparison rules rather than the stored
/// fields (`1.0` equals `1.0.0`), which is also why `Hash` is not derived.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) epoch: u64,
    pub(crate) release: Vec<u64>,
    pub(crate) pre: Option<(PreKind, u64)>,
    pub(crate) post: Option<u64>,
    pub(crate) dev: Option<u64>,
    pub(crate) local: Option<Vec<LocalSegment>>,
}

impl Version {
    /// Version epoch, 0 unless the input carried an `N!` prefix.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Release segments, never empty.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Pre-release label and number, if any.
    pub fn pre(&self) -> Option<(PreKind, u64)> {
        self.pre
    }

    /// Post-release number, if any.
    pub fn post(&self) -> Option<u64> {
        self.post
    }

    /// Dev-release number, if any.
    pub fn dev(&self) -> Option<u64> {
        self.dev
    }

    /// Local version segments, if any.
    pub fn local(&self) -> Option<&[LocalSegment]> {
        self.local.as_deref()
    }

    /// True for pre-releases and dev-releases; both precede their final
    /// release for ordering purposes.
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }

    pub fn is_postrelease(&self) -> bool {
        self.post.is_some()
    }

    pub fn is_devrelease(&self) -> bool {
        self.dev.is_some()
    }

    /// Canonical form without the local version label.
    pub fn public(&self) -> String {
        let mut out = String::new();

        if self.epoch != 0 {
            out.push_str(&self.epoch.to_string());
            out.push('!');
        }

        for (i, n) in self.release.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&n.to_string());
        }

        if let Some((kind, num)) = self.pre {
            out.push_str(kind.as_str());
            out.push_str(&num.to_string());
        }

        if let Some(num) = self.post {
            out.push_str(".post");
            out.push_str(&num.to_string());
        }

        if let Some(num) = self.dev {
            out.push_str(".dev");
            out.push_str(&num.to_string());
        }

        out
    }

    /// Full canonical form, local version label included.
    pub fn normalized(&self) -> String {
        let mut out = self.public();
        if let Some(tag) = self.local_tag() {
            out.push('+');
            out.push_str(&tag);
        }
        out
    }

    /// Epoch and release only, pre/post/dev stripped.
    pub fn base_version(&self) -> String {
        let mut out = String::new();
        if self.epoch != 0 {
            out.push_str(&self.epoch.to_string());
            out.push('!');
        }
        for (i, n) in self.release.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&n.to_string());
        }
        out
    }

    /// Rendered pre-release tag, e.g. `a1`.
    pub fn pre_tag(&self) -> Option<String> {
        self.pre.map(|(kind, num)| format!("{}{}", kind.as_str(), num))
    }

    /// Rendered post-release tag, e.g. `post2`.
    pub fn post_tag(&self) -> Option<String> {
        self.post.map(|num| format!("post{}", num))
    }

    /// Rendered dev-release tag, e.g. `dev3`.
    pub fn dev_tag(&self) -> Option<String> {
        self.dev.map(|num| format!("dev{}", num))
    }

    /// Rendered local version label, segments joined by `.`.
    pub fn local_tag(&self) -> Option<String> {
        self.local.as_ref().map(|segments| {
            let parts: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
            parts.join(".")
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}
