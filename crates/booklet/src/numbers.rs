//! # Unique ticket numbers

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::ConfigError;

/// An inclusive range of ticket numbers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NumberRange {
    min: u32,
    max: u32,
}

impl NumberRange {
    /// Create a new range, checking that `min <= max`
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The smallest number in the range
    pub fn min(&self) -> u32 {
        self.min
    }

    /// The largest number in the range
    pub fn max(&self) -> u32 {
        self.max
    }

    /// The amount of numbers in the range
    pub fn len(&self) -> u64 {
        u64::from(self.max) - u64::from(self.min) + 1
    }

    /// A range always holds at least one number
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether `value` lies in the range
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Upper bound for the used set's preallocation, it grows past that on demand
const MAX_PREALLOCATED: u64 = 1 << 16;

fn initial_capacity(requested: u64) -> usize {
    usize::try_from(requested.min(MAX_PREALLOCATED)).unwrap_or(0)
}

/// Hands out random numbers from a range, never the same one twice
///
/// The set of used numbers lives as long as the allocator, so numbers are
/// unique across all sheets of a run, not just within a single sheet.
pub struct NumberAllocator<R = StdRng> {
    range: NumberRange,
    used: HashSet<u32>,
    rng: R,
}

impl NumberAllocator<StdRng> {
    /// Create an allocator for `requested` numbers, seeded from the OS
    pub fn new(range: NumberRange, requested: u64) -> Result<Self, ConfigError> {
        Self::with_rng(range, requested, StdRng::from_entropy())
    }

    /// Create an allocator for `requested` numbers with a fixed seed
    pub fn with_seed(range: NumberRange, requested: u64, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(range, requested, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NumberAllocator<R> {
    /// Create an allocator using the given random source
    ///
    /// Fails if the range cannot provide `requested` distinct numbers. This
    /// check is what keeps [`NumberAllocator::allocate`] from spinning forever.
    pub fn with_rng(range: NumberRange, requested: u64, rng: R) -> Result<Self, ConfigError> {
        let available = range.len();
        if requested > available {
            return Err(ConfigError::NotEnoughNumbers {
                requested,
                available,
            });
        }
        Ok(Self {
            range,
            used: HashSet::with_capacity(initial_capacity(requested)),
            rng,
        })
    }

    /// The range numbers are drawn from
    pub fn range(&self) -> NumberRange {
        self.range
    }

    /// The amount of numbers that were not handed out yet
    pub fn remaining(&self) -> u64 {
        self.range.len() - self.used.len() as u64
    }

    /// Draw a number that was not returned before
    pub fn allocate(&mut self) -> u32 {
        debug_assert!(self.remaining() > 0, "number range exhausted");
        loop {
            let number = self.rng.gen_range(self.range.min..=self.range.max);
            if self.used.insert(number) {
                return number;
            }
        }
    }
}
