//! Integration tests for coordinates and positions

use ungrd_foundation::{
    Coordinate, Entry, componentwise_max, componentwise_min, grid_position, most_negative,
    most_positive,
};

// =============================================================================
// Sentinel Positions
// =============================================================================

#[test]
fn sentinels_bound_every_position() {
    let lo = most_negative::<i16, 3>();
    let hi = most_positive::<i16, 3>();
    let sample = [-7, 0, 12_000];

    assert_eq!(componentwise_max(&lo, &sample), sample);
    assert_eq!(componentwise_min(&hi, &sample), sample);
}

#[test]
fn bounding_box_fold() {
    let positions = [[3, -1], [-2, 4], [0, 0]];
    let (lo, hi) = positions.iter().fold(
        (most_positive::<i32, 2>(), most_negative::<i32, 2>()),
        |(lo, hi), p| (componentwise_min(&lo, p), componentwise_max(&hi, p)),
    );
    assert_eq!(lo, [-2, -1]);
    assert_eq!(hi, [3, 4]);
}

#[test]
fn widening_spans_full_range() {
    let span = i64::MAX.to_i128() - i64::MIN.to_i128();
    assert_eq!(span, i128::from(u64::MAX));
    assert_eq!(i8::from_i128(128), None);
    assert_eq!(i8::from_i128(-128), Some(i8::MIN));
}

// =============================================================================
// Continuous Points
// =============================================================================

#[test]
fn grid_position_buckets_particles() {
    assert_eq!(grid_position::<i32, 3>([0.5, 1.5, -0.5], 1.0), Some([0, 1, -1]));
    assert_eq!(grid_position::<i32, 2>([9.99, 10.0], 2.5), Some([3, 4]));
}

#[test]
fn grid_position_rejects_out_of_range() {
    assert_eq!(grid_position::<i8, 1>([1000.0], 1.0), None);
    assert_eq!(grid_position::<i32, 1>([f64::NAN], 1.0), None);
    assert_eq!(grid_position::<i32, 1>([1.0], 0.0), None);
}

// =============================================================================
// Entries
// =============================================================================

#[test]
fn entries_index_side_tables() {
    let table = vec!["a", "b", "c"];
    assert_eq!(table[2u16.index()], "c");
    assert_eq!(u64::from_index(2), 2);
}

#[test]
#[should_panic(expected = "does not fit")]
fn oversized_entry_index_panics() {
    let _ = u16::from_index(70_000);
}
