//! Sequence kernel: restartability, exhaustion and deferred execution.


use lazyq::prelude::*;
use test_data_gen::{collect, counted, pulled};

#[test]
fn test_sequence_is_restartable() {
    let seq = from_vec(vec![3, 1, 2]).select(|x| x * 2).filter(|x| *x > 2);
    assert_eq!(collect(&seq), vec![6, 4]);
    assert_eq!(collect(&seq), vec![6, 4]);
}

#[test]
fn test_cursors_are_independent() {
    let seq = range(0, 4);
    let mut a = seq.cursor();
    let mut b = seq.cursor();
    assert_eq!(a.pull().unwrap(), Some(0));
    assert_eq!(a.pull().unwrap(), Some(1));
    assert_eq!(b.pull().unwrap(), Some(0));
    assert_eq!(a.pull().unwrap(), Some(2));
    assert_eq!(b.pull().unwrap(), Some(1));
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut cursor = from_vec(vec![1]).cursor();
    assert_eq!(cursor.pull().unwrap(), Some(1));
    for _ in 0..3 {
        assert_eq!(cursor.pull().unwrap(), None);
    }
}

#[test]
fn test_cursor_is_exhausted_after_error() {
    let seq = from_vec(vec![1]).concat(fail(SeqError::NoMatch)).concat(from_vec(vec![2]));
    let mut cursor = seq.cursor();
    assert_eq!(cursor.pull().unwrap(), Some(1));
    assert_eq!(cursor.pull(), Err(SeqError::NoMatch));
    assert_eq!(cursor.pull().unwrap(), None);
}

#[test]
fn test_nothing_runs_before_a_pull() {
    let (source, counter) = counted(vec![1, 2, 3]);
    let query = source.select(|x| x + 1).filter(|x| x % 2 == 0);
    let mut cursor = query.cursor();
    assert_eq!(pulled(&counter), 0);
    assert_eq!(cursor.pull().unwrap(), Some(2));
    assert_eq!(pulled(&counter), 1);
}

#[test]
fn test_defer_builds_on_first_pull() {
    let seq = defer(|| Ok(from_vec(vec!["a", "b"])));
    assert_eq!(collect(&seq), vec!["a", "b"]);

    let failing = defer(|| -> Result<Items<i32>> { Err(SeqError::Config("nope".into())) });
    let mut cursor = failing.cursor();
    assert_eq!(cursor.pull(), Err(SeqError::Config("nope".into())));
    assert_eq!(cursor.pull().unwrap(), None);
}

#[test]
fn test_from_fn_starts_fresh_per_cursor() {
    let seq = from_fn(|| vec![1, 2, 3]);
    assert_eq!(collect(&seq), vec![1, 2, 3]);
    assert_eq!(collect(&seq.clone().take(2)), vec![1, 2]);
}

#[test]
fn test_iter_bridge_yields_error_once() {
    let seq = from_vec(vec![1, 2]).concat(fail(SeqError::Empty));
    let got: Vec<Result<i32>> = seq.iter().collect();
    assert_eq!(got, vec![Ok(1), Ok(2), Err(SeqError::Empty)]);

    let total: i32 = range(1, 4).iter().map(|r| r.unwrap()).sum();
    assert_eq!(total, 10);
}

#[test]
fn test_empty_and_once() {
    assert!(collect(&empty::<u8>()).is_empty());
    assert_eq!(collect(&once("x")), vec!["x"]);
}
