use std::{
    io::Write,
    time::{Duration, Instant},
};

use tracing::instrument;

use crate::{MeasureError, MemoCache, Strategy};

/// The outcome of running one strategy once.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub index: u64,
    pub value: u64,
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed wall-clock time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Writes the line reporting how long the strategy took.
    pub fn write_elapsed(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{}({}) took {:.6} seconds to execute",
            self.strategy,
            self.index,
            self.seconds()
        )
    }
}

/// Runs `strategy` exactly once for `index`, timing it with a monotonic
/// clock, and writes the computed value to `out`.
#[instrument(skip(cache, out))]
pub fn measure(
    strategy: Strategy,
    index: u64,
    cache: &mut MemoCache,
    out: &mut impl Write,
) -> Result<Measurement, MeasureError> {
    let start = Instant::now();
    let value = strategy.run(index, cache)?;
    let elapsed = start.elapsed();

    tracing::debug!(value, ?elapsed, "strategy finished");
    writeln!(out, "Fibonacci sequence at index {index} = {value}")?;

    Ok(Measurement {
        strategy,
        index,
        value,
        elapsed,
    })
}
