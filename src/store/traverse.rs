//! Full-traversal iteration over the store.
//!
//! A traversal cursor walks the contig list in order and yields each contig's
//! full cached bases. Cursors are single-pass and independent; to traverse
//! again, obtain a fresh one from the store. Each cursor holds only a weak
//! handle to the store, so stepping a cursor whose store has been released
//! fails with [`StoreError::StoreReleased`] instead of touching freed data.

use std::sync::Weak;

use serde::{Deserialize, Serialize};

use crate::store::memory::StoreInner;
use crate::store::StoreError;

/// One record of a full traversal: a contig name and its full cached bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// Contig name
    pub name: String,

    /// The full cached bases for this contig
    pub bases: String,
}

/// Policy for contigs that have no cached sequence during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// End the traversal at the first contig without cached bases, even when
    /// later contigs have them. This matches long-standing behavior and is
    /// the default.
    #[default]
    StopAtGap,

    /// Skip contigs without cached bases and continue with the next one
    SkipMissing,
}

/// A stateful, single-pass cursor over the records of one data source.
///
/// `next_record` yields `Ok(Some(record))` until the source is exhausted,
/// then `Ok(None)` on every further call. `is_alive` reports whether the
/// underlying source can still be read.
pub trait RecordIterable {
    type Record;

    /// Advance to the next record.
    ///
    /// # Errors
    ///
    /// Fails if the underlying data source has been released.
    fn next_record(&mut self) -> Result<Option<Self::Record>, StoreError>;

    /// Whether the underlying data source is still available.
    fn is_alive(&self) -> bool;
}

/// Forward-only cursor over all contigs of an
/// [`InMemoryRefStore`](crate::store::memory::InMemoryRefStore).
#[derive(Debug)]
pub struct FullTraversal {
    store: Weak<StoreInner>,
    pos: usize,
    mode: TraversalMode,
}

impl FullTraversal {
    pub(crate) fn new(store: Weak<StoreInner>, mode: TraversalMode) -> Self {
        Self {
            store,
            pos: 0,
            mode,
        }
    }
}

impl RecordIterable for FullTraversal {
    type Record = ReferenceRecord;

    fn next_record(&mut self) -> Result<Option<ReferenceRecord>, StoreError> {
        let store = self.store.upgrade().ok_or(StoreError::StoreReleased)?;

        while self.pos < store.contigs.len() {
            let name = &store.contigs[self.pos].name;
            match store.seqs.get(name) {
                Some(seq) => {
                    self.pos += 1;
                    return Ok(Some(ReferenceRecord {
                        name: name.clone(),
                        bases: seq.bases.clone(),
                    }));
                }
                None if self.mode == TraversalMode::SkipMissing => self.pos += 1,
                // A gap ends the traversal outright; the cursor stays put and
                // keeps reporting exhaustion.
                None => return Ok(None),
            }
        }

        Ok(None)
    }

    fn is_alive(&self) -> bool {
        self.store.strong_count() > 0
    }
}

impl Iterator for FullTraversal {
    type Item = Result<ReferenceRecord, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
