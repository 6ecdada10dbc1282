//! Version comparison utilities
//!
//! Implements the PEP 440 total order over parsed versions. Each version maps
//! to an ordered key: epoch, zero-padded release, a pre/post/dev precedence
//! key, then the local label as a tie-breaker.

use std::cmp::Ordering;

use crate::version::{LocalSegment, PreKind, Version};

/// Comparator for parsed versions
pub struct Comparator;

impl Comparator {
    /// Total-order comparison of two versions
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.cmp(b)
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        version1 > version2
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 >= version2
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        version1 < version2
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 <= version2
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        version1 == version2
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 != version2
    }
}

/// Pre-release slot of the comparison key. A dev release with no other
/// qualifier sorts before every pre-release of the same release segment; a
/// version without a pre-release sorts after all of them.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum PreKey {
    ImplicitDev,
    Tagged(PreKind, u64),
    Final,
}

/// Post-release slot: absence sorts first.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum PostKey {
    Absent,
    Tagged(u64),
}

/// Dev-release slot: a dev suffix lowers precedence relative to the same
/// qualifier without it, so presence sorts first.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum DevKey {
    Tagged(u64),
    Absent,
}

fn pre_key(v: &Version) -> PreKey {
    match v.pre() {
        Some((kind, num)) => PreKey::Tagged(kind, num),
        None if v.post().is_none() && v.dev().is_some() => PreKey::ImplicitDev,
        None => PreKey::Final,
    }
}

fn post_key(v: &Version) -> PostKey {
    match v.post() {
        Some(num) => PostKey::Tagged(num),
        None => PostKey::Absent,
    }
}

fn dev_key(v: &Version) -> DevKey {
    match v.dev() {
        Some(num) => DevKey::Tagged(num),
        None => DevKey::Absent,
    }
}

/// Element-wise comparison with the shorter sequence right-padded with
/// zeros, so `1.0` equals `1` and `1.0.1` exceeds `1`.
fn compare_release(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        let cmp = left.cmp(&right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    Ordering::Equal
}

/// Numeric local segments compare numerically and outrank alphanumeric
/// segments at the same position.
fn compare_local_segment(a: &LocalSegment, b: &LocalSegment) -> Ordering {
    match (a, b) {
        (LocalSegment::Num(x), LocalSegment::Num(y)) => x.cmp(y),
        (LocalSegment::Alpha(x), LocalSegment::Alpha(y)) => x.cmp(y),
        (LocalSegment::Num(_), LocalSegment::Alpha(_)) => Ordering::Greater,
        (LocalSegment::Alpha(_), LocalSegment::Num(_)) => Ordering::Less,
    }
}

/// Absent local sorts before any present local; otherwise segment-wise, with
/// the longer sequence greater when one is a prefix of the other.
fn compare_local(a: Option<&[LocalSegment]>, b: Option<&[LocalSegment]>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            for (left, right) in a.iter().zip(b.iter()) {
                let cmp = compare_local_segment(left, right);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            a.len().cmp(&b.len())
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch()
            .cmp(&other.epoch())
            .then_with(|| compare_release(self.release(), other.release()))
            .then_with(|| pre_key(self).cmp(&pre_key(other)))
            .then_with(|| post_key(self).cmp(&post_key(other)))
            .then_with(|| dev_key(self).cmp(&dev_key(other)))
            .then_with(|| compare_local(self.local(), other.local()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
