//! Distinct, union, intersect and except.


use lazyq::prelude::*;
use test_data_gen::{collect, counted, pulled};

#[test]
fn test_distinct_keeps_first_occurrence_order() {
    let seq = from_vec(vec![2, 3, 4, 3, 2, 1, 0, 2, 3, 4, 5]).distinct();
    assert_eq!(collect(&seq), vec![2, 3, 4, 1, 0, 5]);
}

#[test]
fn test_distinct_is_lazy() {
    let (source, counter) = counted(vec![7, 7, 8, 9]);
    let mut cursor = source.distinct().cursor();
    assert_eq!(cursor.pull().unwrap(), Some(7));
    assert_eq!(pulled(&counter), 1);
    assert_eq!(cursor.pull().unwrap(), Some(8));
    assert_eq!(pulled(&counter), 3);
}

#[test]
fn test_distinct_with_comparer() {
    let words = from_vec(vec!["Apple", "apple", "Pear", "APPLE", "pear", "fig"]);
    let seq = words.distinct_with(by_key(|s: &&str| s.to_lowercase()));
    assert_eq!(collect(&seq), vec!["Apple", "Pear", "fig"]);
}

#[test]
fn test_union() {
    let a = from_vec(vec![5, 3, 9, 7, 5, 9, 3, 7]);
    let b = from_vec(vec![8, 3, 6, 4, 4, 9, 1, 0]);
    assert_eq!(collect(&a.union(b)), vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);
}

#[test]
fn test_intersect_emits_each_element_once() {
    let a = from_vec(vec![44, 26, 92, 30, 71, 38, 26, 30]);
    let b = from_vec(vec![39, 59, 83, 47, 26, 4, 30, 30]);
    assert_eq!(collect(&a.intersect(b)), vec![26, 30]);
}

#[test]
fn test_except() {
    let a = from_vec(vec![2, 2, 1, 3, 5, 4, 1]);
    let b = from_vec(vec![4, 9]);
    assert_eq!(collect(&a.except(b)), vec![2, 1, 3, 5]);
}

#[test]
fn test_set_ops_with_case_insensitive_comparer() {
    let fold_case = || by_key(|s: &String| s.to_lowercase());
    let a = from_vec(vec!["Red".to_string(), "green".to_string(), "BLUE".to_string()]);
    let b = from_vec(vec!["GREEN".to_string(), "blue".to_string(), "teal".to_string()]);

    let both = a.clone().intersect_with(b.clone(), fold_case());
    assert_eq!(collect(&both), vec!["green".to_string(), "BLUE".to_string()]);

    let only_a = a.clone().except_with(b.clone(), fold_case());
    assert_eq!(collect(&only_a), vec!["Red".to_string()]);

    let all = a.union_with(b, fold_case());
    assert_eq!(all.count().unwrap(), 4);
}

#[test]
fn test_set_ops_are_restartable() {
    let seq = from_vec(vec![1, 1, 2]).union(from_vec(vec![2, 3]));
    assert_eq!(collect(&seq), vec![1, 2, 3]);
    assert_eq!(collect(&seq), vec![1, 2, 3]);
}
