use std::cell::Cell;

use sequin::{empty, AsciiCaseInsensitive, Items, Sequence, SequenceExt};

#[test]
fn test_distinct_keeps_first_occurrences_in_order() {
    let distinct = Items::from([3, 1, 3, 2, 1]).distinct();
    assert_eq!(distinct.to_vec(), vec![3, 1, 2]);
}

#[test]
fn test_distinct_on_empty_sequence() {
    assert_eq!(empty::<i32>().distinct().to_vec(), Vec::<i32>::new());
}

#[test]
fn test_distinct_is_lazy() {
    let calls = Cell::new(0);
    let counted = Items::from([1, 1, 2]).map(|n| {
        calls.set(calls.get() + 1);
        n
    });
    let distinct = counted.distinct();
    assert_eq!(calls.get(), 0);
    let mut cursor = distinct.cursor();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(calls.get(), 1);
    // the duplicate is pulled and suppressed on the way to the next value
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_distinct_with_custom_comparer() {
    let distinct =
        Items::from(["Alpha", "ALPHA", "beta", "Beta"]).distinct_with(AsciiCaseInsensitive::new());
    assert_eq!(distinct.to_vec(), vec!["Alpha", "beta"]);
}

#[test]
fn test_union_concatenates_first_occurrences() {
    let union = Items::from([1, 2, 3]).union(Items::from([2, 3, 4]));
    assert_eq!(union.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_union_deduplicates_within_each_input() {
    let union = Items::from([1, 1, 2]).union(Items::from([2, 3, 3]));
    assert_eq!(union.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_union_with_empty_sides() {
    assert_eq!(empty::<i32>().union(Items::from([1, 2])).to_vec(), vec![1, 2]);
    assert_eq!(Items::from([1, 2]).union(empty()).to_vec(), vec![1, 2]);
    assert_eq!(empty::<i32>().union(empty()).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_union_with_custom_comparer() {
    let union = Items::from(["One", "two"])
        .union_with(Items::from(["ONE", "Three"]), AsciiCaseInsensitive::new());
    assert_eq!(union.to_vec(), vec!["One", "two", "Three"]);
}

#[test]
fn test_distinct_restarts_cleanly_on_reenumeration() {
    let distinct = Items::from([1, 2, 1]).distinct();
    assert_eq!(distinct.to_vec(), vec![1, 2]);
    // a fresh cursor gets a fresh seen-set
    assert_eq!(distinct.to_vec(), vec![1, 2]);
}
