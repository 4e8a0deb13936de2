#![cfg(feature = "serde")]

//! Integration tests for serde support of `Range`.

use rstest::rstest;
use seqkit::eager;
use seqkit::seq::Range;

#[rstest]
fn test_range_json_shape() {
    let range = Range::new(2_usize, 5);

    assert_eq!(serde_json::to_string(&range).unwrap(), r#"{"start":2,"end":5}"#);
}

#[rstest]
fn test_range_json_roundtrip() {
    let range = Range::new(-4_i64, 9);
    let json = serde_json::to_string(&range).unwrap();
    let restored: Range<i64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, range);
}

#[rstest]
fn test_partition_ranges_json_roundtrip() {
    let ranges: Vec<Range<usize>> = eager::partition_ranges(13, 5).unwrap().to_vec();
    let json = serde_json::to_string(&ranges).unwrap();
    let restored: Vec<Range<usize>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, ranges);
}

#[rstest]
fn test_range_rejects_missing_bound() {
    assert!(serde_json::from_str::<Range<u8>>(r#"{"start":1}"#).is_err());
}
