//! Checked arithmetic primitives for the numeric folds (`sum`, `average`).
//!
//! Each scalar type names its own accumulators so the overflow policy matches
//! the standard exactly:
//!
//! | type | sum accumulates in | average accumulates in | average result |
//! |------|--------------------|------------------------|----------------|
//! | i32  | checked i32        | checked i64            | f64            |
//! | i64  | checked i64        | checked i64            | f64            |
//! | f32  | f64                | f64                    | f32            |
//! | f64  | f64                | f64                    | f64            |
//!
//! Floating point accumulation never overflows; it saturates to infinity.

use crate::error::{Result, SeqError};

pub trait Numeric: Copy + PartialOrd {
    type SumAcc: Copy;
    type MeanAcc: Copy;
    type Mean;

    const TYPE_NAME: &'static str;

    fn sum_seed() -> Self::SumAcc;
    /// `None` signals overflow.
    fn sum_step(acc: Self::SumAcc, value: Self) -> Option<Self::SumAcc>;
    fn sum_finish(acc: Self::SumAcc) -> Self;

    fn mean_seed() -> Self::MeanAcc;
    /// `None` signals overflow.
    fn mean_step(acc: Self::MeanAcc, value: Self) -> Option<Self::MeanAcc>;
    /// `count` is always at least one.
    fn mean_finish(acc: Self::MeanAcc, count: i64) -> Self::Mean;

    fn checked_sum(acc: Self::SumAcc, value: Self) -> Result<Self::SumAcc> {
        Self::sum_step(acc, value).ok_or(SeqError::Overflow(Self::TYPE_NAME))
    }

    fn checked_mean(acc: Self::MeanAcc, value: Self) -> Result<Self::MeanAcc> {
        Self::mean_step(acc, value).ok_or(SeqError::Overflow(Self::TYPE_NAME))
    }
}

impl Numeric for i32 {
    type SumAcc = i32;
    type MeanAcc = i64;
    type Mean = f64;

    const TYPE_NAME: &'static str = "i32";

    fn sum_seed() -> i32 {
        0
    }

    fn sum_step(acc: i32, value: i32) -> Option<i32> {
        acc.checked_add(value)
    }

    fn sum_finish(acc: i32) -> i32 {
        acc
    }

    fn mean_seed() -> i64 {
        0
    }

    fn mean_step(acc: i64, value: i32) -> Option<i64> {
        acc.checked_add(i64::from(value))
    }

    fn mean_finish(acc: i64, count: i64) -> f64 {
        acc as f64 / count as f64
    }
}

impl Numeric for i64 {
    type SumAcc = i64;
    type MeanAcc = i64;
    type Mean = f64;

    const TYPE_NAME: &'static str = "i64";

    fn sum_seed() -> i64 {
        0
    }

    fn sum_step(acc: i64, value: i64) -> Option<i64> {
        acc.checked_add(value)
    }

    fn sum_finish(acc: i64) -> i64 {
        acc
    }

    fn mean_seed() -> i64 {
        0
    }

    fn mean_step(acc: i64, value: i64) -> Option<i64> {
        acc.checked_add(value)
    }

    fn mean_finish(acc: i64, count: i64) -> f64 {
        acc as f64 / count as f64
    }
}

impl Numeric for f32 {
    type SumAcc = f64;
    type MeanAcc = f64;
    type Mean = f32;

    const TYPE_NAME: &'static str = "f32";

    fn sum_seed() -> f64 {
        0.0
    }

    fn sum_step(acc: f64, value: f32) -> Option<f64> {
        Some(acc + f64::from(value))
    }

    fn sum_finish(acc: f64) -> f32 {
        acc as f32
    }

    fn mean_seed() -> f64 {
        0.0
    }

    fn mean_step(acc: f64, value: f32) -> Option<f64> {
        Some(acc + f64::from(value))
    }

    fn mean_finish(acc: f64, count: i64) -> f32 {
        (acc / count as f64) as f32
    }
}

impl Numeric for f64 {
    type SumAcc = f64;
    type MeanAcc = f64;
    type Mean = f64;

    const TYPE_NAME: &'static str = "f64";

    fn sum_seed() -> f64 {
        0.0
    }

    fn sum_step(acc: f64, value: f64) -> Option<f64> {
        Some(acc + value)
    }

    fn sum_finish(acc: f64) -> f64 {
        acc
    }

    fn mean_seed() -> f64 {
        0.0
    }

    fn mean_step(acc: f64, value: f64) -> Option<f64> {
        Some(acc + value)
    }

    fn mean_finish(acc: f64, count: i64) -> f64 {
        acc / count as f64
    }
}
