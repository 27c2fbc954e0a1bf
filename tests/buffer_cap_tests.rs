//! Buffer cap enforcement. The engine config is process-wide, so this file is
//! its own test binary and every test installs the same cap first.

use lazyq::lazyq_core::config::{self, EngineConfig};
use lazyq::prelude::*;

const CAP: usize = 4;

fn with_cap() {
    config::install(EngineConfig::default().with_buffer_cap(CAP));
    assert_eq!(config::current().buffer_cap, Some(CAP));
}

fn cap_error(op: &'static str) -> SeqError {
    SeqError::BufferCapExceeded { op, cap: CAP }
}

#[test]
fn test_order_by_over_cap_fails_at_first_pull() {
    with_cap();
    let sorted = range(0, 10).order_by(|x| -x);
    let mut cursor = sorted.cursor();
    assert_eq!(cursor.pull(), Err(cap_error("order_by")));

    let small = range(0, CAP as i32).order_by(|x| -x);
    assert_eq!(small.to_vec().unwrap(), vec![3, 2, 1, 0]);
}

#[test]
fn test_reverse_over_cap() {
    with_cap();
    assert_eq!(range(0, 5).reverse().to_vec(), Err(cap_error("reverse")));
}

#[test]
fn test_distinct_yields_up_to_cap_then_fails() {
    with_cap();
    let seq = range(0, 10).distinct();
    let mut cursor = seq.cursor();
    for expected in 0..CAP as i32 {
        assert_eq!(cursor.pull(), Ok(Some(expected)));
    }
    assert_eq!(cursor.pull(), Err(cap_error("distinct")));
    assert_eq!(cursor.pull(), Ok(None));

    // Duplicates are not charged again.
    let repeated = from_vec(vec![1, 1, 1, 1, 1, 1, 2]).distinct();
    assert_eq!(repeated.to_vec().unwrap(), vec![1, 2]);
}

#[test]
fn test_group_by_and_join_tables_are_capped() {
    with_cap();
    assert_eq!(
        range(0, 6).group_by(|x| x % 2).to_vec().map(|g| g.len()),
        Err(cap_error("group_by"))
    );

    let rows = from_vec(vec![1]).join(range(0, 6), |o| *o, |i| *i, |o, i| o + i);
    assert_eq!(rows.to_vec(), Err(cap_error("join")));
}

#[test]
fn test_materializing_terminals_are_not_capped() {
    with_cap();
    assert_eq!(range(0, 100).to_vec().map(|v| v.len()), Ok(100));

    let lookup = range(0, 100).to_lookup(|x| x % 3).unwrap();
    assert_eq!(lookup.get(&0).len(), 34);

    // Peak tracking sees buffered operators in this process.
    let _ = range(0, 3).reverse().to_vec();
    assert!(lazyq::lazyq_mem::peak_buffered() >= 3);
}
