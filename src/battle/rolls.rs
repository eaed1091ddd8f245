//! Sources of uniform rolls for damage variance and crit checks

use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::Rng;

/// Anything that can produce uniform values in [0, 1)
pub trait RollSource {
    fn roll(&mut self) -> f64;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Rolls drawn from a random number generator
#[derive(Debug, Clone)]
pub struct EntropyRolls<R: Rng> {
    rng: R,
}

impl EntropyRolls<ThreadRng> {
    /// Unseeded rolls from the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> EntropyRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for EntropyRolls<R> {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// A fixed sequence of rolls; once exhausted every roll is `fallback`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
    fallback: f64,
}

/// Largest value below one, so scripted rolls stay in [0, 1)
const BELOW_ONE: f64 = 1.0 - f64::EPSILON;

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: 0.5,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .unwrap_or(self.fallback)
            .clamp(0.0, BELOW_ONE)
    }
}
