//! Injectable randomness for town resolution.
//!
//! Every random decision goes through [`Dice`], so callers choose the
//! generator: entropy-seeded in play, seeded for replays, scripted in tests.

use rand::Rng;
use std::ops::RangeInclusive;

/// Source of the two kinds of draws the town needs.
pub trait Dice {
    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform integer draw in the inclusive range.
    fn roll_range(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn roll_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.gen_range(range)
    }
}
