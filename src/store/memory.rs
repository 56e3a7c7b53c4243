//! The immutable in-memory reference store.
//!
//! [`InMemoryRefStore`] holds validated contig metadata alongside a mapping
//! from contig name to at most one cached sequence entry. Internals live
//! behind an [`Arc`] so that cheap clones of the handle and traversal cursors
//! can share them without copying sequence data.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::core::contig::Contig;
use crate::core::region::Region;
use crate::core::sequence::ReferenceSequence;
use crate::store::builder::build_sequence_map;
use crate::store::traverse::{FullTraversal, TraversalMode};
use crate::store::StoreError;

/// Shared state behind every store handle and traversal cursor.
#[derive(Debug)]
pub(crate) struct StoreInner {
    /// Contig metadata, in traversal order
    pub(crate) contigs: Vec<Contig>,

    /// Cached sequence entries keyed by contig name, at most one per contig
    pub(crate) seqs: HashMap<String, ReferenceSequence>,
}

/// An immutable, in-memory store of reference genome sequence data.
///
/// Built once from contig metadata and cached sequence regions; all
/// subsequent operations are read-only. Cloning the handle is cheap and the
/// store is safe to share across threads.
#[derive(Debug, Clone)]
pub struct InMemoryRefStore {
    pub(crate) inner: Arc<StoreInner>,
}

impl InMemoryRefStore {
    /// Build a store from contig metadata and cached sequence regions.
    ///
    /// `contigs` describes every contig of the reference; a contig entry
    /// covers the whole chromosome even when the corresponding sequence entry
    /// caches only a sub-range. The order of `contigs` fixes the traversal
    /// order. `seqs` holds the cached slices, at most one per contig; contigs
    /// without a cached slice are permitted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if a sequence region is
    /// malformed, if its bases length does not match the region span, or if
    /// two sequences name the same contig. On failure no store is produced.
    pub fn new(contigs: Vec<Contig>, seqs: Vec<ReferenceSequence>) -> Result<Self, StoreError> {
        let seqs = build_sequence_map(seqs)?;

        debug!(
            contigs = contigs.len(),
            sequences = seqs.len(),
            "built in-memory reference store"
        );

        Ok(Self {
            inner: Arc::new(StoreInner { contigs, seqs }),
        })
    }

    /// All contigs, in traversal order.
    #[must_use]
    pub fn contigs(&self) -> &[Contig] {
        &self.inner.contigs
    }

    /// Number of contigs in the reference.
    #[must_use]
    pub fn n_contigs(&self) -> usize {
        self.inner.contigs.len()
    }

    /// Names of all contigs, in traversal order.
    #[must_use]
    pub fn contig_names(&self) -> Vec<&str> {
        self.inner.contigs.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up contig metadata by name.
    #[must_use]
    pub fn contig(&self, name: &str) -> Option<&Contig> {
        self.inner.contigs.iter().find(|c| c.name == name)
    }

    /// Whether the reference contains a contig with this name.
    #[must_use]
    pub fn has_contig(&self, name: &str) -> bool {
        self.contig(name).is_some()
    }

    /// Check that a range is well formed and lies within a known contig.
    #[must_use]
    pub fn is_valid_interval(&self, range: &Region) -> bool {
        range.is_valid()
            && self
                .contig(&range.reference_name)
                .is_some_and(|contig| range.end <= contig.length)
    }

    /// Extract the bases covered by `range` from the cached sequence data.
    ///
    /// The range must be fully contained in the cached region for its contig:
    /// partial overlap is rejected, not clipped. An empty in-bounds range
    /// yields an empty string. The result is a copy; the store's internal
    /// buffer is never exposed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if the range is malformed, if no
    /// sequence is cached for its contig, or if the range is not fully
    /// contained in the cached region.
    pub fn get_bases(&self, range: &Region) -> Result<String, StoreError> {
        if !range.is_valid() {
            return Err(StoreError::InvalidArgument(format!(
                "Invalid interval: {range}"
            )));
        }

        let seq = self.inner.seqs.get(&range.reference_name).ok_or_else(|| {
            StoreError::InvalidArgument(format!(
                "No sequence cached for contig {}",
                range.reference_name
            ))
        })?;

        if !seq.region.contains(range) {
            return Err(StoreError::InvalidArgument(format!(
                "Cannot query range={range} as this store only has bases in the interval={}",
                seq.region
            )));
        }

        let pos = usize::try_from(range.start - seq.region.start)
            .map_err(|_| StoreError::InvalidArgument(format!("Range too large: {range}")))?;
        let len = usize::try_from(range.len())
            .map_err(|_| StoreError::InvalidArgument(format!("Range too large: {range}")))?;

        Ok(seq.bases[pos..pos + len].to_string())
    }

    /// Traverse all contigs in reference order, yielding each contig's full
    /// cached bases.
    ///
    /// Uses [`TraversalMode::StopAtGap`]: the traversal ends at the first
    /// contig without a cached sequence, even when later contigs have one.
    #[must_use]
    pub fn iterate(&self) -> FullTraversal {
        self.iterate_with(TraversalMode::StopAtGap)
    }

    /// Traverse with an explicit policy for contigs without a cached
    /// sequence.
    ///
    /// Each call returns an independent single-pass cursor; concurrent
    /// cursors over the same store do not interfere.
    #[must_use]
    pub fn iterate_with(&self, mode: TraversalMode) -> FullTraversal {
        FullTraversal::new(Arc::downgrade(&self.inner), mode)
    }
}
