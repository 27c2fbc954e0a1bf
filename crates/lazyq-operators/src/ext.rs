//! Method syntax for every operator.
//!
//! Lazy operators consume the factory (clone it first to keep using it);
//! terminal operators borrow it and open a fresh cursor per call.

use std::hash::Hash;

use lazyq_core::comparer::{Comparer, EqualityComparer, NaturalEq, NaturalOrder};
use lazyq_core::error::Result;
use lazyq_core::numeric::Numeric;
use lazyq_core::seq::{IntoCursor, Sequence};

use crate::aggregate;
use crate::bind::{self, Indexed};
use crate::cast;
use crate::element;
use crate::fold;
use crate::gen::Items;
use crate::group::{self, Dictionary, GroupBy, Grouping, Lookup};
use crate::join::{self, GroupJoin, Join};
use crate::order::{self, KeyLevel, OrderBy};
use crate::set::{self, Distinct, SetProbe};
use crate::slice::{self, DefaultIfEmpty, Reverse, SkipWhile, Take, TakeWhile};

pub trait SequenceExt: Sequence {
    // --- projection and filtering ---

    fn select<U, F>(self, f: F) -> impl Sequence<Item = U>
    where
        F: Fn(Self::Item) -> U,
    {
        bind::select(self, f)
    }

    fn select_indexed<U, F>(self, f: F) -> impl Sequence<Item = U>
    where
        F: Fn(Self::Item, usize) -> U,
    {
        bind::select_indexed(self, f)
    }

    /// `Where`.
    fn filter<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        bind::filter(self, predicate)
    }

    fn filter_indexed<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        bind::filter_indexed(self, predicate)
    }

    fn select_many<I, F>(self, f: F) -> impl Sequence<Item = I::Item>
    where
        F: Fn(Self::Item) -> I,
        I: IntoCursor,
    {
        bind::select_many(self, f)
    }

    fn select_many_indexed<I, F>(self, f: F) -> impl Sequence<Item = I::Item>
    where
        F: Fn(Self::Item, usize) -> I,
        I: IntoCursor,
    {
        bind::select_many_indexed(self, f)
    }

    fn select_many_with<I, R, F, G>(self, collection: F, result: G) -> impl Sequence<Item = R>
    where
        F: Fn(&Self::Item) -> I,
        I: Sequence,
        G: Fn(&Self::Item, I::Item) -> R,
    {
        bind::select_many_with(self, collection, result)
    }

    fn concat<B>(self, other: B) -> impl Sequence<Item = Self::Item>
    where
        B: Sequence<Item = Self::Item>,
    {
        bind::concat(self, other)
    }

    /// `(index, element)` pairs.
    fn indexed(self) -> Indexed<Self> {
        bind::indexed(self)
    }

    // --- slicing ---

    fn take(self, count: i64) -> Take<Self> {
        slice::take(self, count)
    }

    fn skip(self, count: i64) -> impl Sequence<Item = Self::Item> {
        slice::skip(self, count)
    }

    fn take_while<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        slice::take_while(self, predicate)
    }

    fn take_while_indexed<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        slice::take_while_indexed(self, predicate)
    }

    fn skip_while<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        slice::skip_while(self, predicate)
    }

    fn skip_while_indexed<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        slice::skip_while_indexed(self, predicate)
    }

    fn default_if_empty(self, value: Self::Item) -> DefaultIfEmpty<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        slice::default_if_empty(self, value)
    }

    fn reverse(self) -> Reverse<Self> {
        slice::reverse(self)
    }

    // --- casting ---

    fn cast<U>(self) -> impl Sequence<Item = U>
    where
        Self::Item: TryInto<U>,
    {
        cast::cast(self)
    }

    fn of_type<U>(self) -> impl Sequence<Item = U>
    where
        Self::Item: TryInto<U>,
    {
        cast::of_type(self)
    }

    // --- set algebra ---

    fn distinct(self) -> Distinct<Self, NaturalEq>
    where
        Self::Item: Clone + Hash + Eq,
    {
        set::distinct_with(self, NaturalEq)
    }

    fn distinct_with<E>(self, comparer: E) -> Distinct<Self, E>
    where
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        set::distinct_with(self, comparer)
    }

    fn union<B>(self, other: B) -> impl Sequence<Item = Self::Item>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        set::union_with(self, other, NaturalEq)
    }

    fn union_with<B, E>(self, other: B, comparer: E) -> impl Sequence<Item = Self::Item>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        set::union_with(self, other, comparer)
    }

    fn intersect<B>(self, other: B) -> SetProbe<Self, B, NaturalEq>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        set::intersect_with(self, other, NaturalEq)
    }

    fn intersect_with<B, E>(self, other: B, comparer: E) -> SetProbe<Self, B, E>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        set::intersect_with(self, other, comparer)
    }

    fn except<B>(self, other: B) -> SetProbe<Self, B, NaturalEq>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone + Hash + Eq,
    {
        set::except_with(self, other, NaturalEq)
    }

    fn except_with<B, E>(self, other: B, comparer: E) -> SetProbe<Self, B, E>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        E: EqualityComparer<Self::Item>,
    {
        set::except_with(self, other, comparer)
    }

    // --- ordering ---

    fn order_by<K, F>(self, key: F) -> OrderBy<Self, KeyLevel<F, NaturalOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        order::order_by(self, key)
    }

    fn order_by_descending<K, F>(self, key: F) -> OrderBy<Self, KeyLevel<F, NaturalOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        order::order_by_descending(self, key)
    }

    fn order_by_with<K, F, C>(self, key: F, comparer: C) -> OrderBy<Self, KeyLevel<F, C>>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        order::order_by_with(self, key, comparer, false)
    }

    fn order_by_descending_with<K, F, C>(self, key: F, comparer: C) -> OrderBy<Self, KeyLevel<F, C>>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        order::order_by_with(self, key, comparer, true)
    }

    // --- grouping ---

    fn group_by<K, F>(self, key: F) -> impl Sequence<Item = Grouping<K, Self::Item>>
    where
        F: Fn(&Self::Item) -> K,
        K: Clone + Hash + Eq,
        Self::Item: Clone,
    {
        group::group_by_with(self, key, |item: Self::Item| item, NaturalEq)
    }

    fn group_by_with<K, V, FK, FE, E>(
        self,
        key: FK,
        element: FE,
        comparer: E,
    ) -> GroupBy<Self, FK, FE, E>
    where
        FK: Fn(&Self::Item) -> K,
        FE: Fn(Self::Item) -> V,
        E: EqualityComparer<K>,
    {
        group::group_by_with(self, key, element, comparer)
    }

    /// Group, then map every `(key, elements)` pair through `result`.
    fn group_by_result<K, V, R, FK, FE, FR>(
        self,
        key: FK,
        element: FE,
        result: FR,
    ) -> impl Sequence<Item = R>
    where
        FK: Fn(&Self::Item) -> K,
        FE: Fn(Self::Item) -> V,
        FR: Fn(K, Items<V>) -> R,
        K: Clone + Hash + Eq,
        V: Clone,
    {
        bind::select(group::group_by_with(self, key, element, NaturalEq), move |g: Grouping<K, V>| {
            let (k, items) = g.into_parts();
            result(k, items)
        })
    }

    // --- joins ---

    fn join<I, K, R, FO, FI, FR>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Join<Self, I, FO, FI, FR, NaturalEq>
    where
        I: Sequence,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(&Self::Item, &I::Item) -> R,
        K: Hash + Eq,
    {
        join::join_with(self, inner, outer_key, inner_key, result, NaturalEq)
    }

    fn join_with<I, K, R, FO, FI, FR, E>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
        comparer: E,
    ) -> Join<Self, I, FO, FI, FR, E>
    where
        I: Sequence,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(&Self::Item, &I::Item) -> R,
        E: EqualityComparer<K>,
    {
        join::join_with(self, inner, outer_key, inner_key, result, comparer)
    }

    fn group_join<I, K, R, FO, FI, FR>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> GroupJoin<Self, I, FO, FI, FR, NaturalEq>
    where
        I: Sequence,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(Self::Item, Items<I::Item>) -> R,
        K: Hash + Eq,
    {
        join::group_join_with(self, inner, outer_key, inner_key, result, NaturalEq)
    }

    fn group_join_with<I, K, R, FO, FI, FR, E>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        result: FR,
        comparer: E,
    ) -> GroupJoin<Self, I, FO, FI, FR, E>
    where
        I: Sequence,
        FO: Fn(&Self::Item) -> K,
        FI: Fn(&I::Item) -> K,
        FR: Fn(Self::Item, Items<I::Item>) -> R,
        E: EqualityComparer<K>,
    {
        join::group_join_with(self, inner, outer_key, inner_key, result, comparer)
    }

    // --- materialization ---

    /// `ToArray` / `ToList`.
    fn to_vec(&self) -> Result<Vec<Self::Item>> {
        fold::to_vec(self)
    }

    fn run(&self) -> Result<()> {
        fold::run(self)
    }

    fn to_lookup<K, F>(&self, key: F) -> Result<Lookup<K, Self::Item, NaturalEq>>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        group::to_lookup_with(self, key, |item: Self::Item| item, NaturalEq)
    }

    fn to_lookup_with<K, V, FK, FE, E>(
        &self,
        key: FK,
        element: FE,
        comparer: E,
    ) -> Result<Lookup<K, V, E>>
    where
        FK: Fn(&Self::Item) -> K,
        FE: Fn(Self::Item) -> V,
        E: EqualityComparer<K>,
    {
        group::to_lookup_with(self, key, element, comparer)
    }

    fn to_dictionary<K, F>(&self, key: F) -> Result<Dictionary<K, Self::Item, NaturalEq>>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        group::to_dictionary_with(self, key, |item: Self::Item| item, NaturalEq)
    }

    fn to_dictionary_with<K, V, FK, FE, E>(
        &self,
        key: FK,
        element: FE,
        comparer: E,
    ) -> Result<Dictionary<K, V, E>>
    where
        FK: Fn(&Self::Item) -> K,
        FE: Fn(Self::Item) -> V,
        E: EqualityComparer<K>,
    {
        group::to_dictionary_with(self, key, element, comparer)
    }

    // --- folds ---

    fn fold<A, F>(&self, seed: A, f: F) -> Result<A>
    where
        F: Fn(A, Self::Item) -> A,
    {
        fold::fold(self, seed, f)
    }

    fn try_fold<A, F>(&self, seed: A, f: F) -> Result<A>
    where
        F: Fn(A, Self::Item) -> Result<A>,
    {
        fold::try_fold(self, seed, f)
    }

    fn aggregate<F>(&self, f: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        fold::aggregate(self, f)
    }

    fn aggregate_seeded<A, R, F, G>(&self, seed: A, f: F, finish: G) -> Result<R>
    where
        F: Fn(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        fold::aggregate_seeded(self, seed, f, finish)
    }

    fn count(&self) -> Result<i32> {
        fold::count_where(self, |_| true)
    }

    fn count_where<P>(&self, predicate: P) -> Result<i32>
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::count_where(self, predicate)
    }

    fn long_count(&self) -> Result<i64> {
        fold::long_count_where(self, |_| true)
    }

    fn long_count_where<P>(&self, predicate: P) -> Result<i64>
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::long_count_where(self, predicate)
    }

    fn all<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::all(self, predicate)
    }

    fn any(&self) -> Result<bool> {
        fold::any_where(self, |_| true)
    }

    fn any_where<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        fold::any_where(self, predicate)
    }

    fn contains(&self, value: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        fold::contains(self, value)
    }

    fn contains_with<E>(&self, value: &Self::Item, comparer: E) -> Result<bool>
    where
        E: EqualityComparer<Self::Item>,
    {
        fold::contains_with(self, value, comparer)
    }

    fn sequence_equal<B>(&self, other: &B) -> Result<bool>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        fold::sequence_equal(self, other)
    }

    fn sequence_equal_with<B, E>(&self, other: &B, comparer: E) -> Result<bool>
    where
        B: Sequence<Item = Self::Item>,
        E: EqualityComparer<Self::Item>,
    {
        fold::sequence_equal_with(self, other, comparer)
    }

    // --- numeric ---

    fn sum(&self) -> Result<Self::Item>
    where
        Self::Item: Numeric,
    {
        aggregate::sum(self)
    }

    fn sum_by<N, F>(&self, f: F) -> Result<N>
    where
        F: Fn(Self::Item) -> N,
        N: Numeric,
    {
        aggregate::sum(&bind::select(self.clone(), f))
    }

    fn sum_nullable<N>(&self) -> Result<N>
    where
        Self: Sequence<Item = Option<N>>,
        N: Numeric,
    {
        aggregate::sum_nullable(self)
    }

    fn average(&self) -> Result<<Self::Item as Numeric>::Mean>
    where
        Self::Item: Numeric,
    {
        aggregate::average(self)
    }

    fn average_by<N, F>(&self, f: F) -> Result<N::Mean>
    where
        F: Fn(Self::Item) -> N,
        N: Numeric,
    {
        aggregate::average(&bind::select(self.clone(), f))
    }

    fn average_nullable<N>(&self) -> Result<Option<N::Mean>>
    where
        Self: Sequence<Item = Option<N>>,
        N: Numeric,
    {
        aggregate::average_nullable(self)
    }

    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::min(self)
    }

    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::max(self)
    }

    fn min_by<U, F>(&self, f: F) -> Result<U>
    where
        F: Fn(Self::Item) -> U,
        U: PartialOrd,
    {
        aggregate::min(&bind::select(self.clone(), f))
    }

    fn max_by<U, F>(&self, f: F) -> Result<U>
    where
        F: Fn(Self::Item) -> U,
        U: PartialOrd,
    {
        aggregate::max(&bind::select(self.clone(), f))
    }

    fn min_nullable<T>(&self) -> Result<Option<T>>
    where
        Self: Sequence<Item = Option<T>>,
        T: PartialOrd,
    {
        aggregate::min_nullable(self)
    }

    fn max_nullable<T>(&self) -> Result<Option<T>>
    where
        Self: Sequence<Item = Option<T>>,
        T: PartialOrd,
    {
        aggregate::max_nullable(self)
    }

    fn min_nullable_by<U, F>(&self, f: F) -> Result<Option<U>>
    where
        F: Fn(Self::Item) -> Option<U>,
        U: PartialOrd,
    {
        aggregate::min_nullable(&bind::select(self.clone(), f))
    }

    fn max_nullable_by<U, F>(&self, f: F) -> Result<Option<U>>
    where
        F: Fn(Self::Item) -> Option<U>,
        U: PartialOrd,
    {
        aggregate::max_nullable(&bind::select(self.clone(), f))
    }

    // --- element access ---

    fn first(&self) -> Result<Self::Item> {
        element::first(self)
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first_where(self, predicate)
    }

    fn first_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::first_or_default(self)
    }

    fn first_or_none(&self) -> Result<Option<Self::Item>> {
        element::first_or_none(self)
    }

    fn first_where_or_none<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first_where_or_none(self, predicate)
    }

    fn last(&self) -> Result<Self::Item> {
        element::last(self)
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last_where(self, predicate)
    }

    fn last_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::last_or_default(self)
    }

    fn last_or_none(&self) -> Result<Option<Self::Item>> {
        element::last_or_none(self)
    }

    fn last_where_or_none<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last_where_or_none(self, predicate)
    }

    fn single(&self) -> Result<Self::Item> {
        element::single(self)
    }

    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::single_where(self, predicate)
    }

    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::single_or_default(self)
    }

    fn single_or_none(&self) -> Result<Option<Self::Item>> {
        element::single_or_none(self)
    }

    fn single_where_or_none<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::single_where_or_none(self, predicate)
    }

    fn element_at(&self, index: i64) -> Result<Self::Item> {
        element::element_at(self, index)
    }

    fn element_at_or_default(&self, index: i64) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::element_at_or_default(self, index)
    }

    fn element_at_or_none(&self, index: i64) -> Result<Option<Self::Item>> {
        element::element_at_or_none(self, index)
    }
}

impl<S: Sequence> SequenceExt for S {}
