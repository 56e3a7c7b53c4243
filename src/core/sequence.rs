use serde::{Deserialize, Serialize};

use crate::core::region::Region;

/// Cached bases for one region of one contig.
///
/// The region may cover the whole contig or a sub-range of it. A valid entry
/// has exactly one base per position in `region`; the store enforces this at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSequence {
    /// The genomic interval the cached bases cover
    pub region: Region,

    /// The nucleotide sequence, one character per position in `region`
    pub bases: String,
}

impl ReferenceSequence {
    pub fn new(region: Region, bases: impl Into<String>) -> Self {
        Self {
            region,
            bases: bases.into(),
        }
    }
}
