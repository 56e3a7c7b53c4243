//! Core data types for in-memory reference sequence storage.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Contig`]: Metadata for a single sequence/chromosome with name, ordinal
//!   position, and full length
//! - [`Region`]: A half-open coordinate interval `[start, end)` on a named
//!   contig
//! - [`ReferenceSequence`]: Cached bases covering one region of one contig
//!
//! ## Coordinates
//!
//! All coordinates are 0-based and half-open, in contig space. A `Contig`
//! describes the entire chromosome even when the corresponding
//! `ReferenceSequence` covers only a subset of its bases.

pub mod contig;
pub mod region;
pub mod sequence;
