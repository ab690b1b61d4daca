use std::io::Write;

use fibdemo_consts::NAIVE_WARN_INDEX;
use fibdemo_core::{Comparison, Measurement, MemoCache, Strategy, measure, pairwise};
use miette::IntoDiagnostic;

use crate::Args;

/// Everything a run of the demo produced.
#[derive(Debug)]
pub struct Report {
    pub measurements: Vec<Measurement>,
    pub comparisons: Vec<Comparison>,
}

/// Times every selected strategy for `args.index`, writing the results to
/// `out`, and then compares each pair of strategies.
pub fn run(args: &Args, out: &mut impl Write) -> miette::Result<Report> {
    let index = args.index;
    let strategies = args.strategies();

    let mut cache = MemoCache::for_index(index)?;
    cache.reset();

    if index > NAIVE_WARN_INDEX && strategies.contains(&Strategy::Naive) {
        tracing::warn!(
            "naive recursion for index {index} takes exponential time, this may run for a long while"
        );
    }

    let mut measurements = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        if strategy == Strategy::Memoized {
            cache.reset();
        }
        tracing::info!("running {strategy} for index {index}");
        let measurement = measure(strategy, index, &mut cache, out)?;
        measurement.write_elapsed(out).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
        measurements.push(measurement);
    }

    let comparisons = if args.no_compare {
        Vec::new()
    } else {
        pairwise(&measurements, args.metric)
    };
    for comparison in &comparisons {
        writeln!(out, "{}", comparison.render()).into_diagnostic()?;
    }

    Ok(Report {
        measurements,
        comparisons,
    })
}
