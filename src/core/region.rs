use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open coordinate interval `[start, end)` on a named contig.
///
/// Coordinates are 0-based in contig space. The `Display` rendering
/// (`name:start-end`) is used in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Name of the contig this interval lies on
    pub reference_name: String,

    /// 0-based inclusive start position
    pub start: u64,

    /// 0-based exclusive end position
    pub end: u64,
}

impl Region {
    pub fn new(reference_name: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            reference_name: reference_name.into(),
            start,
            end,
        }
    }

    /// Number of bases spanned by the interval.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the interval spans zero bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check that the interval is well formed: a named contig and
    /// `start <= end`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.reference_name.is_empty() && self.start <= self.end
    }

    /// Whether `other` lies fully within this interval, on the same contig.
    #[must_use]
    pub fn contains(&self, other: &Region) -> bool {
        self.reference_name == other.reference_name
            && other.start >= self.start
            && other.end <= self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.reference_name, self.start, self.end)
    }
}
