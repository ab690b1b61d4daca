//! # fibdemo core
//!
//! Three ways of computing Fibonacci numbers and the machinery to time and
//! compare them.
//!
//! - [`Strategy`] selects between [`naive`], [`tabulation`] and [`memoized`].
//! - [`MemoCache`] holds the intermediate results of the memoized strategy.
//! - [`measure`] runs a strategy once and records a [`Measurement`].
//! - [`Comparison`] turns two measurements into a percentage and a verdict.
//!
//! All strategies follow the convention F(0) = 0, F(1) = 1.

mod cache;
pub mod compare;
mod error;
mod strategy;
mod timing;

pub use cache::MemoCache;
pub use compare::{Comparison, Metric, Verdict, pairwise};
pub use error::{FibError, MeasureError};
pub use strategy::{Strategy, memoized, naive, tabulation, validate_index};
pub use timing::{Measurement, measure};
