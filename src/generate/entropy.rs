//! Random source threaded through every generation call.
//!
//! Every `rand::Rng` is an `Entropy`, so production code passes
//! `rand::rng()` and tests pass a seeded `StdRng` or a scripted source.

use rand::Rng;

/// The three random primitives generation needs.
pub trait Entropy {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`.
    fn between(&mut self, low: usize, high: usize) -> usize;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Entropy for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn between(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Entropy that replays fixed answers, one queue per primitive.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedEntropy {
    units: std::collections::VecDeque<f64>,
    counts: std::collections::VecDeque<usize>,
    indices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedEntropy {
    pub(crate) fn new(units: &[f64], counts: &[usize], indices: &[usize]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            counts: counts.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.counts.is_empty() && self.indices.is_empty()
    }
}

#[cfg(test)]
impl Entropy for ScriptedEntropy {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("script ran out of unit draws")
    }

    fn between(&mut self, low: usize, high: usize) -> usize {
        let value = self.counts.pop_front().expect("script ran out of counts");
        assert!((low..=high).contains(&value), "scripted count {value} outside {low}..={high}");
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.indices.pop_front().expect("script ran out of indices");
        assert!(value < len, "scripted index {value} out of bounds for {len}");
        value
    }
}
