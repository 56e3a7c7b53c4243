//! End-to-end tests for store construction, range queries, and traversal.
//!
//! These exercise the public API the way a caller would: build a store from
//! contig metadata and cached sequences, then query and traverse it.

use ref_store::{
    Contig, InMemoryRefStore, RecordIterable, ReferenceSequence, Region, StoreError, TraversalMode,
};

fn full_seq(name: &str, bases: &str) -> ReferenceSequence {
    ReferenceSequence::new(Region::new(name, 0, bases.len() as u64), bases)
}

#[test]
fn round_trip_every_cached_entry() {
    let contigs = vec![
        Contig::new("chr1", 0, 1_000_000),
        Contig::new("chr2", 1, 500_000),
        Contig::new("chrM", 2, 16_569),
    ];
    let seqs = vec![
        ReferenceSequence::new(Region::new("chr1", 5000, 5010), "ACGTACGTAC"),
        full_seq("chr2", "TTTTGGGG"),
        ReferenceSequence::new(Region::new("chrM", 0, 6), "GATCCA"),
    ];

    let store = InMemoryRefStore::new(contigs, seqs.clone()).unwrap();

    for seq in &seqs {
        assert_eq!(store.get_bases(&seq.region).unwrap(), seq.bases);
    }
}

#[test]
fn construction_rejects_duplicate_contig() {
    let seqs = vec![
        ReferenceSequence::new(Region::new("chr1", 0, 4), "ACGT"),
        ReferenceSequence::new(Region::new("chr1", 100, 102), "GG"),
    ];
    let err = InMemoryRefStore::new(vec![Contig::new("chr1", 0, 1000)], seqs).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn construction_rejects_length_mismatch() {
    let seqs = vec![ReferenceSequence::new(Region::new("chr1", 0, 10), "ACGTA")];
    let err = InMemoryRefStore::new(vec![Contig::new("chr1", 0, 1000)], seqs).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn construction_rejects_malformed_region() {
    let seqs = vec![ReferenceSequence::new(Region::new("chr1", 5, 2), "")];
    let err = InMemoryRefStore::new(vec![Contig::new("chr1", 0, 1000)], seqs).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn query_containment_is_enforced() {
    let contigs = vec![Contig::new("chr1", 0, 1000)];
    let seqs = vec![ReferenceSequence::new(
        Region::new("chr1", 100, 200),
        "C".repeat(100),
    )];
    let store = InMemoryRefStore::new(contigs, seqs).unwrap();

    // Partial overlap is rejected, not clipped
    assert!(store.get_bases(&Region::new("chr1", 90, 150)).is_err());

    // The exact cached region succeeds
    assert_eq!(
        store.get_bases(&Region::new("chr1", 100, 200)).unwrap(),
        "C".repeat(100)
    );

    // An empty in-bounds query succeeds with an empty string
    assert_eq!(store.get_bases(&Region::new("chr1", 150, 150)).unwrap(), "");
}

#[test]
fn traversal_yields_contig_list_order() {
    // chr2 appears before chr1 in the contig list and must be yielded first
    let contigs = vec![Contig::new("chr2", 0, 8), Contig::new("chr1", 1, 4)];
    let seqs = vec![full_seq("chr1", "ACGT"), full_seq("chr2", "TTTTGGGG")];
    let store = InMemoryRefStore::new(contigs, seqs).unwrap();

    let records: Result<Vec<_>, _> = store.iterate().collect();
    let records = records.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "chr2");
    assert_eq!(records[0].bases, "TTTTGGGG");
    assert_eq!(records[1].name, "chr1");
    assert_eq!(records[1].bases, "ACGT");
}

#[test]
fn traversal_stops_at_first_gap() {
    // Only chr2 has cached bases; default traversal yields nothing because it
    // stops at chr1 rather than skipping ahead
    let contigs = vec![Contig::new("chr1", 0, 4), Contig::new("chr2", 1, 4)];
    let store = InMemoryRefStore::new(contigs, vec![full_seq("chr2", "ACGT")]).unwrap();

    let mut iter = store.iterate();
    assert!(iter.next_record().unwrap().is_none());

    // Opting in to SkipMissing reaches chr2
    let mut skipping = store.iterate_with(TraversalMode::SkipMissing);
    assert_eq!(skipping.next_record().unwrap().unwrap().name, "chr2");
    assert!(skipping.next_record().unwrap().is_none());
}

#[test]
fn cursor_outliving_store_reports_release() {
    let contigs = vec![Contig::new("chr1", 0, 4)];
    let store = InMemoryRefStore::new(contigs, vec![full_seq("chr1", "ACGT")]).unwrap();

    let mut iter = store.iterate();

    // A clone keeps the store alive even after the original handle is gone
    let handle = store.clone();
    drop(store);
    assert!(iter.is_alive());
    assert!(iter.next_record().unwrap().is_some());

    drop(handle);
    assert!(!iter.is_alive());
    assert!(matches!(iter.next_record(), Err(StoreError::StoreReleased)));
}

#[test]
fn concurrent_queries_from_multiple_threads() {
    let contigs = vec![Contig::new("chr1", 0, 1000)];
    let seqs = vec![ReferenceSequence::new(
        Region::new("chr1", 0, 400),
        "ACGT".repeat(100),
    )];
    let store = InMemoryRefStore::new(contigs, seqs).unwrap();

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                let start = i * 4;
                store.get_bases(&Region::new("chr1", start, start + 4)).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "ACGT");
    }
}
