//! Relative comparisons between two [`Measurement`]s.
//!
//! Two formulas are available and they are deliberately kept apart:
//!
//! - [`percentage_difference`] is symmetric, it normalizes by the average of
//!   both durations: `(a - b) / ((a + b) / 2) * 100`.
//! - [`percentage_change`] treats the first duration as the baseline:
//!   `(final - initial) / initial * 100`.
//!
//! Both return `None` instead of an infinite or NaN result when a
//! denominator is zero.

use std::fmt::{Display, Formatter};

use console::Style;
use fibdemo_consts::{FASTER_STYLE, SLOWER_STYLE, STRATEGY_STYLE, UNMEASURABLE_STYLE};
use itertools::Itertools;

use crate::{Measurement, Strategy};

/// Which formula to use when comparing two durations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Symmetric percentage difference, normalized by the average
    #[default]
    Difference,
    /// Percentage change relative to the first duration
    Change,
}

impl Metric {
    /// Applies the formula to two durations in seconds.
    pub fn apply(self, first: f64, second: f64) -> Option<f64> {
        match self {
            Metric::Difference => percentage_difference(first, second),
            Metric::Change => percentage_change(first, second),
        }
    }

    /// Interprets a computed percentage: did the second duration improve on
    /// the first? Anything that rounds to 0% is unmeasurable.
    pub fn verdict(self, percent: Option<f64>) -> Verdict {
        match (self, percent) {
            (_, None) => Verdict::Unmeasurable,
            (_, Some(p)) if p.abs() < 0.5 => Verdict::Unmeasurable,
            (Metric::Difference, Some(p)) if p > 0.0 => Verdict::Faster,
            (Metric::Change, Some(p)) if p < 0.0 => Verdict::Faster,
            _ => Verdict::Slower,
        }
    }
}

/// `((a - b) / ((a + b) / 2)) * 100`
pub fn percentage_difference(a: f64, b: f64) -> Option<f64> {
    let average = (a + b) / 2.0;
    if average == 0.0 {
        return None;
    }
    Some((a - b) / average * 100.0).filter(|p| p.is_finite())
}

/// `((final - initial) / initial) * 100`
pub fn percentage_change(initial: f64, r#final: f64) -> Option<f64> {
    if initial == 0.0 {
        return None;
    }
    Some((r#final - initial) / initial * 100.0).filter(|p| p.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Faster,
    Slower,
    Unmeasurable,
}

impl Verdict {
    fn style(self) -> &'static Style {
        match self {
            Verdict::Faster => &FASTER_STYLE,
            Verdict::Slower => &SLOWER_STYLE,
            Verdict::Unmeasurable => &UNMEASURABLE_STYLE,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Faster => write!(f, "faster"),
            Verdict::Slower => write!(f, "slower"),
            Verdict::Unmeasurable => write!(f, "no measurable difference"),
        }
    }
}

/// How `to` performed relative to `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub from: Strategy,
    pub to: Strategy,
    pub metric: Metric,
    pub percent: Option<f64>,
}

impl Comparison {
    pub fn between(from: &Measurement, to: &Measurement, metric: Metric) -> Self {
        Self {
            from: from.strategy,
            to: to.strategy,
            metric,
            percent: metric.apply(from.seconds(), to.seconds()),
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.metric.verdict(self.percent)
    }

    /// Like the [`Display`] output but with console styling applied.
    pub fn render(&self) -> String {
        let verdict = self.verdict();
        let label = verdict.style().apply_to(verdict);
        let from = STRATEGY_STYLE.apply_to(self.from);
        let to = STRATEGY_STYLE.apply_to(self.to);
        match (verdict, self.percent) {
            (Verdict::Unmeasurable, _) | (_, None) => format!("[+] {from} -> {to}: {label}"),
            (_, Some(percent)) => format!(
                "[+] {from} -> {to} ~= {:.0}% {label}",
                percent.abs().round()
            ),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verdict = self.verdict();
        match (verdict, self.percent) {
            (Verdict::Unmeasurable, _) | (_, None) => {
                write!(f, "[+] {} -> {}: {verdict}", self.from, self.to)
            }
            (_, Some(percent)) => write!(
                f,
                "[+] {} -> {} ~= {:.0}% {verdict}",
                self.from,
                self.to,
                percent.abs().round()
            ),
        }
    }
}

/// Compares every pair of measurements, keeping the input order within each
/// pair.
pub fn pairwise(measurements: &[Measurement], metric: Metric) -> Vec<Comparison> {
    measurements
        .iter()
        .tuple_combinations()
        .map(|(from, to)| Comparison::between(from, to, metric))
        .collect()
}
