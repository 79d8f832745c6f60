//! A common interface over the two selection strategies.
//!
//! Example using the builder:
//! ```rust
//! use kselect::cs::select::{RandomizedSelector, Selector};
//!
//! let mut selector = RandomizedSelector::builder().seed(42).build();
//! assert_eq!(selector.median(&[9, 2, 7, 4, 5]).unwrap(), 5);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cs::select::median_of_medians::select_deterministic;
use crate::cs::select::randomized_quickselect::select_randomized_with;
use crate::error::Result;

/// Something that can find the k-th smallest element of a slice.
pub trait Selector {
    /// Returns the element at rank `k` (0-indexed) of `data` in ascending order.
    fn select<T: Ord + Clone>(&mut self, data: &[T], k: usize) -> Result<T>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Selects rank `len / 2`, the upper median for even lengths.
    fn median<T: Ord + Clone>(&mut self, data: &[T]) -> Result<T> {
        self.select(data, data.len() / 2)
    }
}

/// Median-of-medians selection. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeterministicSelector;

impl DeterministicSelector {
    pub fn new() -> Self {
        DeterministicSelector
    }
}

impl Selector for DeterministicSelector {
    fn select<T: Ord + Clone>(&mut self, data: &[T], k: usize) -> Result<T> {
        select_deterministic(data, k)
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }
}

/// Randomized quickselect that owns its pivot generator, so runs can be reproduced by seeding.
#[derive(Debug, Clone)]
pub struct RandomizedSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomizedSelector<StdRng> {
    /// Creates a selector seeded from the OS RNG.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a selector whose pivot sequence is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn builder() -> RandomizedSelectorBuilder {
        RandomizedSelectorBuilder::new()
    }
}

impl Default for RandomizedSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomizedSelector<R> {
    /// Wraps an existing generator, e.g. a `ChaCha20Rng`.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> Selector for RandomizedSelector<R> {
    fn select<T: Ord + Clone>(&mut self, data: &[T], k: usize) -> Result<T> {
        select_randomized_with(data, k, &mut self.rng)
    }

    fn name(&self) -> &'static str {
        "randomized"
    }
}

/// A builder for [`RandomizedSelector`].
#[derive(Debug, Clone, Default)]
pub struct RandomizedSelectorBuilder {
    seed: Option<u64>,
}

impl RandomizedSelectorBuilder {
    /// Creates a builder that will seed from entropy unless [`seed`](Self::seed) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit seed for the pivot generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> RandomizedSelector<StdRng> {
        match self.seed {
            Some(s) => RandomizedSelector::with_seed(s),
            None => RandomizedSelector::new(),
        }
    }
}
