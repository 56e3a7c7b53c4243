//! # ref-store
//!
//! An immutable, in-memory store of reference genome sequence data.
//!
//! When reference sequence data is already resident in memory (supplied by a
//! caller, handed over by another process, or constructed in a test) there is
//! no need to stream it from an indexed FASTA file on disk. `ref-store` holds
//! such data behind a validated, query-only interface:
//!
//! - **Range queries**: extract the bases covered by a half-open interval,
//!   with strict containment checks against the cached region.
//! - **Full traversal**: iterate all contigs in reference order, yielding each
//!   contig's cached bases.
//!
//! Contig metadata describes the entire chromosome even when only a sub-range
//! of its sequence is cached. All coordinates are 0-based, half-open, in
//! contig space.
//!
//! ## Example
//!
//! ```rust
//! use ref_store::{Contig, InMemoryRefStore, ReferenceSequence, Region};
//!
//! let contigs = vec![Contig::new("chr1", 0, 248_956_422)];
//! let seqs = vec![ReferenceSequence::new(
//!     Region::new("chr1", 100, 110),
//!     "ACGTACGTAC",
//! )];
//!
//! let store = InMemoryRefStore::new(contigs, seqs).unwrap();
//! let bases = store.get_bases(&Region::new("chr1", 102, 106)).unwrap();
//! assert_eq!(bases, "GTAC");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for contigs, regions, and cached sequences
//! - [`store`]: Store construction, range queries, and full traversal

pub mod core;
pub mod store;

// Re-export commonly used types for convenience
pub use crate::core::contig::Contig;
pub use crate::core::region::Region;
pub use crate::core::sequence::ReferenceSequence;
pub use crate::store::memory::InMemoryRefStore;
pub use crate::store::snapshot::StoreData;
pub use crate::store::traverse::{FullTraversal, RecordIterable, ReferenceRecord, TraversalMode};
pub use crate::store::StoreError;
