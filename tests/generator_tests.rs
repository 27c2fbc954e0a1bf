//! Unfold and the generators built on it.


use lazyq::prelude::*;
use rstest::rstest;
use test_data_gen::collect;

#[test]
fn test_range_yields_consecutive_integers() {
    assert_eq!(collect(&range(1, 3)), vec![1, 2, 3]);
    assert!(collect(&range(7, 0)).is_empty());
}

#[rstest]
#[case(i32::MAX, 1, vec![i32::MAX])]
#[case(i32::MAX - 2, 3, vec![i32::MAX - 2, i32::MAX - 1, i32::MAX])]
#[case(i32::MIN, 2, vec![i32::MIN, i32::MIN + 1])]
fn test_range_at_the_edges(#[case] start: i32, #[case] count: i32, #[case] expected: Vec<i32>) {
    assert_eq!(collect(&range(start, count)), expected);
}

#[rstest]
#[case(0, -1)]
#[case(i32::MAX, 2)]
#[case(2, i32::MAX)]
fn test_range_rejects_lazily(#[case] start: i32, #[case] count: i32) {
    // Construction succeeds; the failure surfaces on enumeration.
    let seq = range(start, count);
    let err = seq.to_vec().unwrap_err();
    assert_eq!(
        err,
        SeqError::OutOfRange {
            param: "count",
            value: i64::from(count)
        }
    );
}

#[test]
fn test_repeat() {
    assert_eq!(collect(&repeat("ab", 3)), vec!["ab", "ab", "ab"]);
    assert!(collect(&repeat(1u8, 0)).is_empty());

    let negative = repeat('x', -1);
    assert!(matches!(
        negative.first(),
        Err(SeqError::OutOfRange { param: "count", value: -1 })
    ));
}

#[test]
fn test_repeat_forever_with_take() {
    assert_eq!(collect(&repeat_forever(9).take(4)), vec![9, 9, 9, 9]);
}

#[test]
fn test_unfold_fibonacci() {
    let fib = unfold((0u64, 1u64), |_| true, |(a, b)| (b, a + b), |&(a, _)| a);
    assert_eq!(collect(&fib.take(10)), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_unfold_stops_when_condition_fails() {
    let halves = unfold(100, |n: &i32| *n > 0, |n| n / 2, |n| *n);
    assert_eq!(collect(&halves), vec![100, 50, 25, 12, 6, 3, 1]);
}

#[test]
fn test_from_slice_copies_elements() {
    let data = [String::from("x"), String::from("y")];
    let seq = from_slice(&data);
    drop(data);
    assert_eq!(collect(&seq), vec!["x".to_string(), "y".to_string()]);
    assert_eq!(seq.len(), 2);
}
