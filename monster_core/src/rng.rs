//! Random number sources
//!
//! Every roll the monster makes goes through [`RandomSource`], so a session can
//! be driven by a real generator ([`RngSource`]) or by a fixed script
//! ([`ScriptedRolls`]) in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplier of the dice rolls used by monster actions
pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both ends inclusive
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// `true` with the given probability
    fn roll_chance(&mut self, probability: f64) -> bool;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll_range(low, high)
    }

    fn roll_chance(&mut self, probability: f64) -> bool {
        (**self).roll_chance(probability)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll_range(low, high)
    }

    fn roll_chance(&mut self, probability: f64) -> bool {
        (**self).roll_chance(probability)
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn roll_chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Deterministic source that replays queued values
///
/// Range rolls are clamped into the requested bounds. Once a queue runs dry,
/// range rolls return `low` and chance rolls return `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    ranges: VecDeque<u32>,
    chances: VecDeque<bool>,
}

impl ScriptedRolls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue values for successive range rolls
    pub fn with_ranges(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ranges.extend(values);
        self
    }

    /// Queue outcomes for successive chance rolls
    pub fn with_chances(mut self, outcomes: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(outcomes);
        self
    }

    /// Whether every queued value has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.ranges.is_empty() && self.chances.is_empty()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        match self.ranges.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low,
        }
    }

    fn roll_chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
