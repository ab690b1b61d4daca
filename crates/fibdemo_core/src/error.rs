use std::collections::TryReserveError;

use fibdemo_consts::MAX_INDEX;
use miette::Diagnostic;
use thiserror::Error;

/// An error that may occur while computing a Fibonacci number.
#[derive(Debug, Error, Diagnostic)]
pub enum FibError {
    #[error("index {index} is out of range, F({index}) does not fit in 64 bits")]
    #[diagnostic(help("choose an index between 0 and {max}"))]
    IndexOutOfRange { index: u64, max: u64 },

    #[error("the memoization cache covers indices up to {max_index}, but index {index} was requested")]
    #[diagnostic(help("create the cache with `MemoCache::for_index` or grow it with `ensure_index`"))]
    CacheTooSmall { index: usize, max_index: usize },

    #[error("failed to allocate the tabulation table for index {index}")]
    Allocation {
        index: usize,
        #[source]
        source: TryReserveError,
    },
}

impl FibError {
    pub(crate) fn out_of_range(index: u64) -> Self {
        FibError::IndexOutOfRange {
            index,
            max: MAX_INDEX,
        }
    }
}

/// An error that may occur while timing a strategy.
#[derive(Debug, Error, Diagnostic)]
pub enum MeasureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fib(#[from] FibError),

    #[error("failed to write the result")]
    Io(#[from] std::io::Error),
}
