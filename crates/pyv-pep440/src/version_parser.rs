//! Version parsing module
//!
//! Matches the PEP 440 grammar with a byte-level scanner: each qualifier is
//! attempted in sequence with full rewind on failure and markers are matched
//! longest-first, so ambiguous inputs resolve per the published grammar's
//! alternation order.

use thiserror::Error;

use crate::version::{LocalSegment, PreKind, Version};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid version string \"{version}\": number \"{digits}\" out of range")]
    NumberOverflow { version: String, digits: String },
}

/// Pre-release markers with their canonical label, longest first so that
/// `alpha` wins over `a` and `preview` over `pre`.
const PRE_MARKERS: [(&str, PreKind); 8] = [
    ("alpha", PreKind::Alpha),
    ("beta", PreKind::Beta),
    ("preview", PreKind::Rc),
    ("pre", PreKind::Rc),
    ("rc", PreKind::Rc),
    ("a", PreKind::Alpha),
    ("b", PreKind::Beta),
    ("c", PreKind::Rc),
];

/// Post-release markers, longest first (`rev` before `r`).
const POST_MARKERS: [&str; 3] = ["post", "rev", "r"];

/// Byte cursor over a lowercased version string. Only ever advances past
/// ASCII bytes, so positions stay on character boundaries.
struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consume one `.`, `-` or `_` if present. The grammar treats every
    /// qualifier separator as optional, so this never fails.
    fn eat_separator(&mut self) {
        if matches!(self.peek(), Some(b'.') | Some(b'-') | Some(b'_')) {
            self.pos += 1;
        }
    }

    /// Consume a run of ASCII digits.
    fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(&self.input[start..self.pos])
        }
    }

    /// Consume a run of ASCII letters and digits.
    fn alnum(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn accept(&mut self, word: &str) -> bool {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            return true;
        }
        false
    }
}

/// Version parser for the PEP 440 grammar
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string into its structured form.
    ///
    /// The whole input must match the grammar after stripping surrounding
    /// whitespace and one optional leading `v`; there are no partial parses.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let text = version.trim().to_ascii_lowercase();
        let mut s = Scanner::new(&text);

        s.eat(b'v');

        let epoch = match_epoch(&mut s, version)?;

        let mut release = Vec::new();
        match s.digits() {
            Some(digits) => release.push(parse_number(version, digits)?),
            None => return Err(VersionParserError::InvalidVersion(version.to_string())),
        }
        loop {
            let mark = s.pos;
            if !s.eat(b'.') {
                break;
            }
            match s.digits() {
                Some(digits) => release.push(parse_number(version, digits)?),
                None => {
                    s.pos = mark;
                    break;
                }
            }
        }

        let pre = match_pre(&mut s, version)?;
        let post = match_post(&mut s, version)?;
        let dev = match_dev(&mut s, version)?;
        let local = match_local(&mut s, version)?;

        if !s.done() {
            return Err(VersionParserError::InvalidVersion(version.to_string()));
        }

        Ok(Version {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// `N!` prefix; a digit run not followed by `!` belongs to the release.
fn match_epoch(s: &mut Scanner, version: &str) -> Result<u64, VersionParserError> {
    let mark = s.pos;
    if let Some(digits) = s.digits() {
        if s.eat(b'!') {
            return parse_number(version, digits);
        }
    }
    s.pos = mark;
    Ok(0)
}

fn match_pre(s: &mut Scanner, version: &str) -> Result<Option<(PreKind, u64)>, VersionParserError> {
    let mark = s.pos;
    s.eat_separator();

    let mut kind = None;
    for (word, marker_kind) in PRE_MARKERS {
        if s.accept(word) {
            kind = Some(marker_kind);
            break;
        }
    }
    let kind = match kind {
        Some(kind) => kind,
        None => {
            s.pos = mark;
            return Ok(None);
        }
    };

    s.eat_separator();
    let num = match s.digits() {
        Some(digits) => parse_number(version, digits)?,
        None => 0,
    };
    Ok(Some((kind, num)))
}

fn match_post(s: &mut Scanner, version: &str) -> Result<Option<u64>, VersionParserError> {
    let mark = s.pos;

    // Implicit form: a bare `-N` with no keyword.
    if s.eat(b'-') {
        if let Some(digits) = s.digits() {
            return Ok(Some(parse_number(version, digits)?));
        }
        s.pos = mark;
    }

    s.eat_separator();
    if !POST_MARKERS.iter().any(|word| s.accept(word)) {
        s.pos = mark;
        return Ok(None);
    }

    s.eat_separator();
    let num = match s.digits() {
        Some(digits) => parse_number(version, digits)?,
        None => 0,
    };
    Ok(Some(num))
}

fn match_dev(s: &mut Scanner, version: &str) -> Result<Option<u64>, VersionParserError> {
    let mark = s.pos;
    s.eat_separator();
    if !s.accept("dev") {
        s.pos = mark;
        return Ok(None);
    }

    s.eat_separator();
    let num = match s.digits() {
        Some(digits) => parse_number(version, digits)?,
        None => 0,
    };
    Ok(Some(num))
}

fn match_local(
    s: &mut Scanner,
    version: &str,
) -> Result<Option<Vec<LocalSegment>>, VersionParserError> {
    if !s.eat(b'+') {
        return Ok(None);
    }

    let mut segments = Vec::new();
    loop {
        let text = s.alnum();
        if text.is_empty() {
            return Err(VersionParserError::InvalidVersion(version.to_string()));
        }
        segments.push(local_segment(text, version)?);

        if matches!(s.peek(), Some(b'.') | Some(b'-') | Some(b'_')) {
            s.pos += 1;
            continue;
        }
        break;
    }
    Ok(Some(segments))
}

fn local_segment(text: &str, version: &str) -> Result<LocalSegment, VersionParserError> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(LocalSegment::Num(parse_number(version, text)?));
    }
    Ok(LocalSegment::Alpha(text.to_string()))
}

fn parse_number(version: &str, digits: &str) -> Result<u64, VersionParserError> {
    digits.parse().map_err(|_| VersionParserError::NumberOverflow {
        version: version.to_string(),
        digits: digits.to_string(),
    })
}
