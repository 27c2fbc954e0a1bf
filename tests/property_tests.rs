//! Algebraic properties over generated inputs.


use lazyq::prelude::*;
use proptest::prelude::*;
use test_data_gen::collect;

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..40)
}

proptest! {
    // Enumerating twice yields the same elements, buffered or not.
    #[test]
    fn prop_sequences_are_restartable(v in values()) {
        let streaming = from_vec(v.clone()).filter(|x| x % 3 != 0).select(|x| x / 2);
        prop_assert_eq!(collect(&streaming), collect(&streaming));

        let buffered = from_vec(v).reverse().distinct();
        prop_assert_eq!(collect(&buffered), collect(&buffered));
    }

    #[test]
    fn prop_filter_then_select_matches_iterators(v in values(), m in 1i32..7) {
        let seq = from_vec(v.clone())
            .filter(move |x| x % m == 0)
            .select(|x| x.wrapping_mul(3));
        let expected: Vec<i32> = v
            .iter()
            .filter(|x| *x % m == 0)
            .map(|x| x.wrapping_mul(3))
            .collect();
        prop_assert_eq!(collect(&seq), expected);
    }

    #[test]
    fn prop_concat_appends(a in values(), b in values()) {
        let joined = from_vec(a.clone()).concat(from_vec(b.clone()));
        let mut expected = a.clone();
        expected.extend(b.iter().copied());
        prop_assert_eq!(collect(&joined), expected);

        prop_assert_eq!(collect(&from_vec(a.clone()).concat(empty::<i32>())), a.clone());
        prop_assert_eq!(collect(&empty::<i32>().concat(from_vec(a.clone()))), a);
    }

    // Rows equal on both keys come out in source order.
    #[test]
    fn prop_two_key_ordering_is_stable(v in prop::collection::vec(-20i32..20, 0..40)) {
        let rows: Vec<(i32, i32, usize)> = v
            .iter()
            .enumerate()
            .map(|(i, x)| (x.rem_euclid(3), x.rem_euclid(5), i))
            .collect();
        let seq = from_vec(rows.clone())
            .order_by_descending(|r| r.0)
            .then_by(|r| r.1);

        let mut expected = rows;
        expected.sort_by_key(|r| (std::cmp::Reverse(r.0), r.1));
        prop_assert_eq!(collect(&seq), expected);
    }
}
