//! Take/skip, the while-gates, default_if_empty and reverse.


use lazyq::prelude::*;
use rstest::rstest;
use test_data_gen::{collect, counted, pulled};

#[rstest]
#[case(-1, vec![])]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(10, vec![1, 2, 3])]
fn test_take(#[case] n: i64, #[case] expected: Vec<i32>) {
    assert_eq!(collect(&range(1, 3).take(n)), expected);
}

#[rstest]
#[case(-1, vec![1, 2, 3])]
#[case(0, vec![1, 2, 3])]
#[case(2, vec![3])]
#[case(10, vec![])]
fn test_skip(#[case] n: i64, #[case] expected: Vec<i32>) {
    assert_eq!(collect(&range(1, 3).skip(n)), expected);
}

#[test]
fn test_take_stops_pulling_the_source() {
    let (source, counter) = counted(vec![1, 2, 3, 4, 5]);
    assert_eq!(collect(&source.take(2)), vec![1, 2]);
    assert_eq!(pulled(&counter), 2);
}

#[test]
fn test_take_over_infinite_source() {
    let naturals = unfold(0u32, |_| true, |n| n + 1, |n| *n);
    assert_eq!(collect(&naturals.skip(5).take(3)), vec![5, 6, 7]);
}

#[test]
fn test_take_while_and_skip_while() {
    let data = from_vec(vec![1, 3, 5, 2, 7, 9]);
    assert_eq!(collect(&data.clone().take_while(|x| x % 2 == 1)), vec![1, 3, 5]);
    assert_eq!(collect(&data.clone().skip_while(|x| x % 2 == 1)), vec![2, 7, 9]);
    assert_eq!(collect(&data.clone().take_while_indexed(|_, i| i < 2)), vec![1, 3]);
    assert_eq!(collect(&data.skip_while_indexed(|x, i| *x < 5 || i < 4)), vec![7, 9]);
}

#[test]
fn test_take_while_does_not_overpull() {
    let (source, counter) = counted(vec![2, 4, 5, 6, 8]);
    assert_eq!(collect(&source.take_while(|x| x % 2 == 0)), vec![2, 4]);
    // The first failing element is pulled, nothing after it.
    assert_eq!(pulled(&counter), 3);
}

#[test]
fn test_default_if_empty() {
    assert_eq!(collect(&empty::<i32>().default_if_empty(-1)), vec![-1]);
    assert_eq!(collect(&from_vec(vec![4, 5]).default_if_empty(-1)), vec![4, 5]);
}

#[test]
fn test_reverse_buffers_then_yields_backwards() {
    let (source, counter) = counted(vec![1, 2, 3]);
    let reversed = source.reverse();
    let mut cursor = reversed.cursor();
    assert_eq!(pulled(&counter), 0);
    assert_eq!(cursor.pull().unwrap(), Some(3));
    assert_eq!(pulled(&counter), 3);
    assert_eq!(cursor.pull().unwrap(), Some(2));
    assert_eq!(cursor.pull().unwrap(), Some(1));
    assert_eq!(cursor.pull().unwrap(), None);
    assert_eq!(collect(&reversed), vec![3, 2, 1]);
}
