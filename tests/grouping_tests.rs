//! GroupBy, lookups and dictionaries.


use lazyq::prelude::*;
use test_data_gen::{collect, counted, people, pulled, Person};

#[test]
fn test_groups_in_first_seen_key_order() {
    let groups = collect(&from_vec(people()).group_by(|p| p.dept));
    let keys: Vec<i32> = groups.iter().map(|g| *g.key()).collect();
    assert_eq!(keys, vec![4, 3, 5]);

    let fours: Vec<&str> = collect(&groups[0]).into_iter().map(|p| p.name).collect();
    assert_eq!(fours, vec!["ada", "dee", "eve"]);
    assert_eq!(groups[1].len(), 1);
    assert_eq!(groups[2].len(), 2);
}

#[test]
fn test_group_by_is_deferred() {
    let (source, counter) = counted(vec![1, 2, 3, 4]);
    let grouped = source.group_by(|x| x % 2);
    let mut cursor = grouped.cursor();
    assert_eq!(pulled(&counter), 0);
    let first = cursor.pull().unwrap().unwrap();
    // The whole source is consumed before the first group comes out.
    assert_eq!(pulled(&counter), 4);
    assert_eq!(*first.key(), 1);
    assert_eq!(first.items().as_slice(), &[1, 3]);
}

#[test]
fn test_group_by_with_element_selector_and_comparer() {
    let words = from_vec(vec!["Alpha", "beta", "apple", "Bravo", "cat"]);
    let grouped = words.group_by_with(
        |w| w.chars().next().unwrap_or(' '),
        |w| w.len(),
        by_key(|c: &char| c.to_ascii_lowercase()),
    );
    let got: Vec<(char, Vec<usize>)> = collect(&grouped)
        .into_iter()
        .map(|g| {
            let (k, items) = g.into_parts();
            (k, items.as_slice().to_vec())
        })
        .collect();
    assert_eq!(got, vec![('A', vec![5, 5]), ('b', vec![4, 5]), ('c', vec![3])]);
}

#[test]
fn test_group_by_result_selector() {
    let totals = from_vec(people()).group_by_result(
        |p| p.dept,
        |p| p.age as i32,
        |dept, ages| (dept, ages.sum().unwrap()),
    );
    assert_eq!(collect(&totals), vec![(4, 106), (3, 41), (5, 65)]);
}

#[test]
fn test_lookup_get_and_missing_key() {
    let lookup = from_vec(people()).to_lookup(|p| p.dept).unwrap();
    assert_eq!(lookup.len(), 3);
    assert!(lookup.contains_key(&5));
    assert_eq!(lookup.get(&4).len(), 3);
    assert!(lookup.get(&99).is_empty());

    let keys: Vec<i32> = lookup.keys().copied().collect();
    assert_eq!(keys, vec![4, 3, 5]);

    // A lookup is itself a sequence of groupings.
    let sizes: Vec<usize> = collect(&lookup.clone().select(|g| g.len()));
    assert_eq!(sizes, vec![3, 1, 2]);
}

#[test]
fn test_lookup_with_element_selector() {
    let lookup = from_vec(people())
        .to_lookup_with(|p| p.age, |p| p.name, NaturalEq)
        .unwrap();
    assert_eq!(lookup.get(&41).as_slice(), &["bob", "dee"]);
}

#[test]
fn test_to_dictionary() {
    let dict = from_vec(people()).to_dictionary(|p| p.name).unwrap();
    assert_eq!(dict.len(), 6);
    assert_eq!(dict.get(&"cy").map(|p| p.age), Some(29));
    let keys: Vec<&str> = dict.keys().copied().collect();
    assert_eq!(&keys[..2], &["ada", "bob"]);
}

#[test]
fn test_to_dictionary_rejects_duplicate_keys() {
    let err = from_vec(people()).to_dictionary(|p| p.dept).unwrap_err();
    // `dee` (position 3) repeats dept 4.
    assert_eq!(err, SeqError::DuplicateKey { index: 3 });
}

#[test]
fn test_to_dictionary_with_element_selector() {
    let dict = from_vec(people())
        .to_dictionary_with(|p: &Person| (p.dept, p.name), |p| p.age, NaturalEq)
        .unwrap();
    assert_eq!(dict.get(&(4, "ada")), Some(&36));
    assert!(!dict.contains_key(&(3, "ada")));
    assert_eq!(dict.values().copied().collect::<Vec<_>>(), vec![36, 41, 29, 41, 29, 36]);
}
