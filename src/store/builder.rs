//! Construction-time validation for the in-memory store.
//!
//! Caller-supplied sequence entries are checked once, here, before any store
//! exists: the whole build either succeeds or fails, and a failed build leaves
//! nothing behind. Violations are never silently repaired.

use std::collections::HashMap;

use tracing::debug;

use crate::core::sequence::ReferenceSequence;
use crate::store::StoreError;

/// Validate caller-supplied sequence entries and key them by contig name.
///
/// Entries are checked in input order; the first violation aborts the build.
/// An entry is rejected when its region is malformed, when its bases length
/// does not match the region span, or when an earlier entry already claimed
/// the same contig.
pub(crate) fn build_sequence_map(
    seqs: Vec<ReferenceSequence>,
) -> Result<HashMap<String, ReferenceSequence>, StoreError> {
    let mut seq_map: HashMap<String, ReferenceSequence> = HashMap::with_capacity(seqs.len());

    for seq in seqs {
        if !seq.region.is_valid() {
            return Err(StoreError::InvalidArgument(format!(
                "Malformed region {}",
                seq.region
            )));
        }

        if seq.region.len() != seq.bases.len() as u64 {
            return Err(StoreError::InvalidArgument(format!(
                "Region size = {} not equal to bases length = {} for {}",
                seq.region.len(),
                seq.bases.len(),
                seq.region
            )));
        }

        let name = seq.region.reference_name.clone();
        if seq_map.insert(name.clone(), seq).is_some() {
            return Err(StoreError::InvalidArgument(format!(
                "Each sequence must be on a different contig but multiple were found on {name}"
            )));
        }
    }

    debug!(sequences = seq_map.len(), "validated cached sequences");
    Ok(seq_map)
}
