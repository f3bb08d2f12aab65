//! Integration tests for N-d indexing and the fixed bitset

use ungrd_foundation::{FixedBitSet, NdIndexing};

// =============================================================================
// NdIndexing
// =============================================================================

#[test]
fn last_dimension_varies_fastest() {
    let indexing = NdIndexing::new([2, 3, 4]);
    assert_eq!(indexing.strides(), [12, 4, 1]);
    assert_eq!(indexing.size(), 24);
    assert_eq!(indexing.encode([1, 2, 3]), 23);
    assert_eq!(indexing.decode(5), [0, 1, 1]);
}

#[test]
fn every_offset_round_trips() {
    let indexing = NdIndexing::new([3, 1, 5]);
    for index in 0..indexing.size() {
        assert_eq!(indexing.encode(indexing.decode(index)), index);
    }
}

#[test]
fn try_encode_rejects_each_dimension() {
    let indexing = NdIndexing::new([4, 4]);
    assert_eq!(indexing.try_encode([3, 3]), Some(15));
    assert_eq!(indexing.try_encode([4, 0]), None);
    assert_eq!(indexing.try_encode([0, 4]), None);
}

#[test]
fn default_indexing_is_empty() {
    let indexing = NdIndexing::<3>::default();
    assert!(indexing.is_empty());
    assert_eq!(indexing.extents(), [0, 0, 0]);
    assert_eq!(indexing.try_encode([0, 0, 0]), None);
}

// =============================================================================
// FixedBitSet
// =============================================================================

#[test]
fn bitset_scans_across_words() {
    let mut bits = FixedBitSet::new(130);
    for index in 0..100 {
        bits.set(index);
    }
    assert_eq!(bits.trailing_ones(), 100);
    assert_eq!(bits.trailing_zeros(), 0);
    assert_eq!(bits.count_ones(), 100);

    bits.reset_all();
    bits.set(129);
    assert_eq!(bits.trailing_zeros(), 129);
    assert_eq!(bits.trailing_ones(), 0);
}

#[test]
fn bitset_tail_bits_do_not_leak() {
    let mut bits = FixedBitSet::new(70);
    bits.set_all();
    assert!(bits.all());
    assert_eq!(bits.count_ones(), 70);
    assert_eq!(bits.trailing_ones(), 70);

    bits.reset(69);
    assert!(!bits.all());
    assert!(bits.any());
}

#[test]
#[should_panic(expected = "out of range")]
fn bitset_access_past_len_panics() {
    let bits = FixedBitSet::new(8);
    let _ = bits.get(8);
}
