//! Bind and the projection family: select, filter, select_many, concat, casts.


use lazyq::prelude::*;
use rstest::rstest;
use test_data_gen::{collect, people};

#[test]
fn test_filter_then_select_matches_bind() {
    let source = from_vec(vec![5, -2, 8, 0, 3, -7]);
    let p = |x: &i32| *x > 0;
    let f = |x: i32| x * 100;

    let composed = source.clone().filter(p).select(f);
    let via_bind = bind(source, move |x| {
        if p(&x) {
            from_vec(vec![f(x)])
        } else {
            from_vec(vec![])
        }
    });
    assert_eq!(collect(&composed), collect(&via_bind));
    assert_eq!(collect(&composed), vec![500, 800, 300]);
}

#[test]
fn test_indexed_forms_restart_at_zero() {
    let seq = from_vec(vec!["a", "b", "c"]).select_indexed(|s, i| format!("{i}{s}"));
    assert_eq!(collect(&seq), vec!["0a", "1b", "2c"]);
    assert_eq!(collect(&seq), vec!["0a", "1b", "2c"]);

    let odd_positions = range(10, 6).filter_indexed(|_, i| i % 2 == 1);
    assert_eq!(collect(&odd_positions), vec![11, 13, 15]);

    let pairs = from_vec(vec!['x', 'y']).indexed();
    assert_eq!(collect(&pairs), vec![(0, 'x'), (1, 'y')]);
}

#[test]
fn test_select_many_is_depth_first() {
    let seq = range(1, 3).select_many(|n| repeat(n, i64::from(n)));
    assert_eq!(collect(&seq), vec![1, 2, 2, 3, 3, 3]);

    let tagged = from_vec(vec![2, 0, 1]).select_many_indexed(|n, i| repeat(i, i64::from(n)));
    assert_eq!(collect(&tagged), vec![0, 0, 2]);
}

#[test]
fn test_select_many_with_result_selector() {
    let seq = from_vec(people())
        .take(2)
        .select_many_with(
            |p| from_vec(vec![p.age, p.age + 1]),
            |p, age| format!("{}:{age}", p.name),
        );
    assert_eq!(collect(&seq), vec!["ada:36", "ada:37", "bob:41", "bob:42"]);
}

#[rstest]
#[case(vec![], vec![], vec![])]
#[case(vec![1, 2], vec![], vec![1, 2])]
#[case(vec![], vec![3], vec![3])]
#[case(vec![1, 2], vec![3, 4], vec![1, 2, 3, 4])]
fn test_concat(#[case] a: Vec<i32>, #[case] b: Vec<i32>, #[case] expected: Vec<i32>) {
    let seq = from_vec(a).concat(from_vec(b));
    assert_eq!(collect(&seq), expected);
}

#[test]
fn test_concat_opens_second_lazily() {
    let seq = from_vec(vec![1, 2]).concat(fail(SeqError::Empty));
    assert_eq!(collect(&seq.clone().take(2)), vec![1, 2]);
    assert_eq!(seq.to_vec(), Err(SeqError::Empty));
}

#[test]
fn test_cast_fails_at_offending_element() {
    let seq = from_vec(vec![1i64, 2, i64::MAX, 4]).cast::<i32>();
    let mut cursor = seq.cursor();
    assert_eq!(cursor.pull().unwrap(), Some(1));
    assert_eq!(cursor.pull().unwrap(), Some(2));
    assert!(matches!(cursor.pull(), Err(SeqError::InvalidCast(name)) if name == "i32"));
    assert_eq!(cursor.pull().unwrap(), None);
}

#[test]
fn test_of_type_keeps_convertible_elements() {
    let seq = from_vec(vec![-1i32, 7, 300, 42]).of_type::<u8>();
    assert_eq!(collect(&seq), vec![7u8, 42]);
}
