use fibdemo_consts::MAX_INDEX;

use crate::{FibError, MemoCache};

/// The ways of computing a Fibonacci number. The variant order is the order
/// in which the demo runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Plain exponential recursion
    Naive,
    /// Bottom-up dynamic programming over a table
    Tabulation,
    /// Top-down recursion backed by a cache
    Memoized,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Tabulation, Strategy::Memoized];

    /// Computes F(`index`) with this strategy. Only [`Strategy::Memoized`]
    /// reads or writes `cache`; the caller decides when it is reset.
    pub fn run(self, index: u64, cache: &mut MemoCache) -> Result<u64, FibError> {
        match self {
            Strategy::Naive => naive(index),
            Strategy::Tabulation => tabulation(index),
            Strategy::Memoized => memoized(index, cache),
        }
    }

    /// Computes F(`index`) with a cache owned by this call alone.
    pub fn compute(self, index: u64) -> Result<u64, FibError> {
        let mut cache = MemoCache::for_index(index)?;
        self.run(index, &mut cache)
    }
}

/// Checks that F(`index`) is representable and returns the index as a
/// `usize` suitable for indexing tables.
pub fn validate_index(index: u64) -> Result<usize, FibError> {
    if index > MAX_INDEX {
        return Err(FibError::out_of_range(index));
    }
    usize::try_from(index).map_err(|_| FibError::out_of_range(index))
}

/// F(n) = F(n-1) + F(n-2), recomputing every subproblem.
pub fn naive(index: u64) -> Result<u64, FibError> {
    validate_index(index)?;
    Ok(naive_unchecked(index))
}

fn naive_unchecked(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => naive_unchecked(n - 1) + naive_unchecked(n - 2),
    }
}

/// Fills a table of `index + 1` entries from the base cases upward.
pub fn tabulation(index: u64) -> Result<u64, FibError> {
    let index = validate_index(index)?;

    let mut table: Vec<u64> = Vec::new();
    table
        .try_reserve_exact(index + 1)
        .map_err(|source| FibError::Allocation { index, source })?;

    table.push(0);
    if index >= 1 {
        table.push(1);
    }
    for i in 2..=index {
        let next = table[i - 1] + table[i - 2];
        table.push(next);
    }

    Ok(table[index])
}

/// Same recurrence as [`naive`], but every result is looked up in and
/// stored to `cache`.
pub fn memoized(index: u64, cache: &mut MemoCache) -> Result<u64, FibError> {
    let index = validate_index(index)?;
    if !cache.covers(index) {
        return Err(FibError::CacheTooSmall {
            index,
            max_index: cache.max_index(),
        });
    }
    Ok(memoized_unchecked(index, cache))
}

fn memoized_unchecked(n: usize, cache: &mut MemoCache) -> u64 {
    if let Some(value) = cache.get(n) {
        return value;
    }

    let value = match n {
        0 => 0,
        1 => 1,
        n => memoized_unchecked(n - 1, cache) + memoized_unchecked(n - 2, cache),
    };
    cache.store(n, value);
    value
}
