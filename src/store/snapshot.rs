//! JSON snapshot format for store inputs.
//!
//! Useful when contig metadata and pre-extracted sequence data arrive as a
//! serialized blob (from a test fixture or another process) rather than as
//! in-process values. Decoded snapshots go through the same validation as
//! directly supplied lists; this module does no file I/O.

use serde::{Deserialize, Serialize};

use crate::core::contig::Contig;
use crate::core::sequence::ReferenceSequence;
use crate::store::memory::InMemoryRefStore;
use crate::store::StoreError;

/// Serializable form of a store's inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    /// Contig metadata, in traversal order
    pub contigs: Vec<Contig>,

    /// Cached sequence entries, at most one per contig
    pub sequences: Vec<ReferenceSequence>,
}

impl InMemoryRefStore {
    /// Build a store from a JSON snapshot of contigs and sequences.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the JSON cannot be decoded, or
    /// `StoreError::InvalidArgument` if the decoded lists fail construction
    /// validation.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: StoreData = serde_json::from_str(json)?;
        Self::new(data.contigs, data.sequences)
    }

    /// Export the store's contigs and cached sequences as a snapshot.
    ///
    /// Sequences are emitted in contig order; entries whose contig is not in
    /// the metadata list (permitted at construction) follow at the end.
    #[must_use]
    pub fn to_store_data(&self) -> StoreData {
        let mut sequences = Vec::with_capacity(self.inner.seqs.len());
        for contig in &self.inner.contigs {
            if let Some(seq) = self.inner.seqs.get(&contig.name) {
                sequences.push(seq.clone());
            }
        }
        for seq in self.inner.seqs.values() {
            if !self.has_contig(&seq.region.reference_name) {
                sequences.push(seq.clone());
            }
        }

        StoreData {
            contigs: self.inner.contigs.clone(),
            sequences,
        }
    }

    /// Export the store as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.to_store_data())?)
    }
}
