use serde::{Deserialize, Serialize};

/// Metadata for a single contig/chromosome in a reference genome.
///
/// A `Contig` describes the entire chromosome, independent of how much of its
/// sequence is actually cached in a store. The order of contigs in the list
/// handed to the store fixes the traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name (e.g. "chr1")
    pub name: String,

    /// Ordinal position of this contig within the reference
    #[serde(default)]
    pub index: usize,

    /// Full length of the contig in bases
    pub length: u64,

    /// Free-form description of the contig
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Contig {
    pub fn new(name: impl Into<String>, index: usize, length: u64) -> Self {
        Self {
            name: name.into(),
            index,
            length,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
