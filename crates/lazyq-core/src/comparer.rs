//! Equality and ordering strategies supplied per operator.
//!
//! Operators take a strategy value instead of growing an overload per
//! comparer. The defaults are `NaturalEq` (`Hash + Eq`) and `NaturalOrder` (`Ord`).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Hash/equality strategy used by distinct, set algebra, grouping, joins and lookups.
///
/// Contract: `equals(a, b)` implies `hash(a) == hash(b)` for the same hasher state.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// Structural equality through the element's own `Hash + Eq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalEq;

impl<T: Hash + Eq + ?Sized> EqualityComparer<T> for NaturalEq {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Equality on a projected key, e.g. case-insensitive strings via `to_lowercase`.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

pub fn by_key<T, K, F>(f: F) -> ByKey<F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    ByKey(f)
}

impl<T, K, F> EqualityComparer<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.0)(a) == (self.0)(b)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.0)(value).hash(state);
    }
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Arc<E> {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash(value, state);
    }
}

/// Ordering strategy for one level of a sort key chain.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Natural total ordering. Keys without a total order (floats) need an explicit
/// comparer such as `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
