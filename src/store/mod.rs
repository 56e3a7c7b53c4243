//! In-memory sequence storage, range queries, and traversal.
//!
//! The store is built once from two caller-supplied lists (contig metadata
//! and cached sequence regions) and is immutable thereafter. Construction
//! validates every sequence against its region; queries and traversal are
//! read-only and safe to run concurrently from multiple threads.
//!
//! ## Example
//!
//! ```rust
//! use ref_store::store::traverse::RecordIterable;
//! use ref_store::{Contig, InMemoryRefStore, ReferenceSequence, Region};
//!
//! let contigs = vec![Contig::new("chrM", 0, 4)];
//! let seqs = vec![ReferenceSequence::new(Region::new("chrM", 0, 4), "ACGT")];
//! let store = InMemoryRefStore::new(contigs, seqs).unwrap();
//!
//! let mut iter = store.iterate();
//! let record = iter.next_record().unwrap().unwrap();
//! assert_eq!(record.name, "chrM");
//! assert_eq!(record.bases, "ACGT");
//! ```

pub mod builder;
pub mod memory;
pub mod snapshot;
pub mod traverse;

use thiserror::Error;

/// Errors produced by store construction, queries, and traversal.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A region, query range, or sequence entry failed a precondition check.
    /// The message echoes the offending interval.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An iterator was stepped after every handle to its store was dropped
    #[error("Iterator used after its store was released")]
    StoreReleased,

    /// A JSON snapshot could not be decoded
    #[error("Failed to parse store data: {0}")]
    Parse(#[from] serde_json::Error),
}
