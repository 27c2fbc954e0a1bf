//! Equi-join and group-join.
//!
//! Both build a lookup over the inner sequence on the first pull, then probe it
//! once per outer element in outer order.

use std::sync::Arc;

use lazyq_core::comparer::EqualityComparer;
use lazyq_core::error::Result;
use lazyq_core::seq::{Cursor, Fused, Sequence};
use lazyq_mem::BufferBudget;

use crate::gen::Items;
use crate::group::{build_lookup, Lookup};

struct JoinKeys<FO, FI, E> {
    outer_key: Arc<FO>,
    inner_key: Arc<FI>,
    comparer: Arc<E>,
}

impl<FO, FI, E> Clone for JoinKeys<FO, FI, E> {
    fn clone(&self) -> Self {
        Self {
            outer_key: Arc::clone(&self.outer_key),
            inner_key: Arc::clone(&self.inner_key),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<FO, FI, E> JoinKeys<FO, FI, E> {
    fn index<I, K>(&self, op: &'static str, inner: &I) -> Result<Lookup<K, I::Item, Arc<E>>>
    where
        I: Sequence,
        FI: Fn(&I::Item) -> K,
        E: EqualityComparer<K>,
    {
        let mut budget = BufferBudget::for_op(op);
        build_lookup(
            &mut inner.cursor(),
            &*self.inner_key,
            &|item: I::Item| item,
            Arc::clone(&self.comparer),
            &mut budget,
        )
    }
}

// --- join ---

pub struct Join<O, I, FO, FI, FR, E> {
    outer: O,
    inner: I,
    keys: JoinKeys<FO, FI, E>,
    result: Arc<FR>,
}

pub fn join_with<O, I, K, R, FO, FI, FR, E>(
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    result: FR,
    comparer: E,
) -> Join<O, I, FO, FI, FR, E>
where
    O: Sequence,
    I: Sequence,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&O::Item, &I::Item) -> R,
    E: EqualityComparer<K>,
{
    Join {
        outer,
        inner,
        keys: JoinKeys {
            outer_key: Arc::new(outer_key),
            inner_key: Arc::new(inner_key),
            comparer: Arc::new(comparer),
        },
        result: Arc::new(result),
    }
}

impl<O: Clone, I: Clone, FO, FI, FR, E> Clone for Join<O, I, FO, FI, FR, E> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            keys: self.keys.clone(),
            result: Arc::clone(&self.result),
        }
    }
}

impl<O, I, K, R, FO, FI, FR, E> Sequence for Join<O, I, FO, FI, FR, E>
where
    O: Sequence,
    I: Sequence,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&O::Item, &I::Item) -> R,
    E: EqualityComparer<K>,
{
    type Item = R;
    type Cursor = JoinCursor<O::Cursor, I, K, FO, FI, FR, E>;

    fn cursor(&self) -> Self::Cursor {
        JoinCursor {
            outer: Fused::new(self.outer.cursor()),
            inner: Some(self.inner.clone()),
            keys: self.keys.clone(),
            result: Arc::clone(&self.result),
            table: None,
            current: None,
        }
    }
}

pub struct JoinCursor<C: Cursor, I: Sequence, K, FO, FI, FR, E> {
    outer: Fused<C>,
    // Consumed when the inner table is built.
    inner: Option<I>,
    keys: JoinKeys<FO, FI, E>,
    result: Arc<FR>,
    table: Option<Lookup<K, I::Item, Arc<E>>>,
    // Outer element being paired, its matches, and the next match position.
    current: Option<(C::Item, Items<I::Item>, usize)>,
}

impl<C, I, K, R, FO, FI, FR, E> Cursor for JoinCursor<C, I, K, FO, FI, FR, E>
where
    C: Cursor,
    I: Sequence,
    FO: Fn(&C::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(&C::Item, &I::Item) -> R,
    E: EqualityComparer<K>,
{
    type Item = R;

    fn pull(&mut self) -> Result<Option<R>> {
        if let Some(inner) = self.inner.take() {
            match self.keys.index("join", &inner) {
                Ok(table) => self.table = Some(table),
                Err(e) => {
                    self.outer.finish();
                    return Err(e);
                }
            }
        }
        let Some(table) = self.table.as_ref() else {
            return Ok(None);
        };
        loop {
            if let Some((outer, matches, pos)) = self.current.as_mut() {
                if let Some(inner) = matches.get(*pos) {
                    *pos += 1;
                    return Ok(Some((self.result)(&*outer, inner)));
                }
                self.current = None;
            }
            let Some(outer) = self.outer.pull()? else {
                return Ok(None);
            };
            let matches = table.get(&(self.keys.outer_key)(&outer));
            if !matches.is_empty() {
                self.current = Some((outer, matches, 0));
            }
        }
    }
}

// --- group_join ---

pub struct GroupJoin<O, I, FO, FI, FR, E> {
    outer: O,
    inner: I,
    keys: JoinKeys<FO, FI, E>,
    result: Arc<FR>,
}

/// One result per outer element; `result` receives its (possibly empty) matches.
pub fn group_join_with<O, I, K, R, FO, FI, FR, E>(
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    result: FR,
    comparer: E,
) -> GroupJoin<O, I, FO, FI, FR, E>
where
    O: Sequence,
    I: Sequence,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(O::Item, Items<I::Item>) -> R,
    E: EqualityComparer<K>,
{
    GroupJoin {
        outer,
        inner,
        keys: JoinKeys {
            outer_key: Arc::new(outer_key),
            inner_key: Arc::new(inner_key),
            comparer: Arc::new(comparer),
        },
        result: Arc::new(result),
    }
}

impl<O: Clone, I: Clone, FO, FI, FR, E> Clone for GroupJoin<O, I, FO, FI, FR, E> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            keys: self.keys.clone(),
            result: Arc::clone(&self.result),
        }
    }
}

impl<O, I, K, R, FO, FI, FR, E> Sequence for GroupJoin<O, I, FO, FI, FR, E>
where
    O: Sequence,
    I: Sequence,
    FO: Fn(&O::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(O::Item, Items<I::Item>) -> R,
    E: EqualityComparer<K>,
{
    type Item = R;
    type Cursor = GroupJoinCursor<O::Cursor, I, K, FO, FI, FR, E>;

    fn cursor(&self) -> Self::Cursor {
        GroupJoinCursor {
            outer: Fused::new(self.outer.cursor()),
            inner: Some(self.inner.clone()),
            keys: self.keys.clone(),
            result: Arc::clone(&self.result),
            table: None,
        }
    }
}

pub struct GroupJoinCursor<C, I: Sequence, K, FO, FI, FR, E> {
    outer: Fused<C>,
    inner: Option<I>,
    keys: JoinKeys<FO, FI, E>,
    result: Arc<FR>,
    table: Option<Lookup<K, I::Item, Arc<E>>>,
}

impl<C, I, K, R, FO, FI, FR, E> Cursor for GroupJoinCursor<C, I, K, FO, FI, FR, E>
where
    C: Cursor,
    I: Sequence,
    FO: Fn(&C::Item) -> K,
    FI: Fn(&I::Item) -> K,
    FR: Fn(C::Item, Items<I::Item>) -> R,
    E: EqualityComparer<K>,
{
    type Item = R;

    fn pull(&mut self) -> Result<Option<R>> {
        if let Some(inner) = self.inner.take() {
            match self.keys.index("group_join", &inner) {
                Ok(table) => self.table = Some(table),
                Err(e) => {
                    self.outer.finish();
                    return Err(e);
                }
            }
        }
        let Some(table) = self.table.as_ref() else {
            return Ok(None);
        };
        let Some(outer) = self.outer.pull()? else {
            return Ok(None);
        };
        let matches = table.get(&(self.keys.outer_key)(&outer));
        Ok(Some((self.result)(outer, matches)))
    }
}
