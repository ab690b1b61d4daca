use console::Style;
use lazy_static::lazy_static;

pub const FIBDEMO_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The largest index whose Fibonacci number still fits in a `u64`.
/// F(93) = 12200160415121876738, F(94) overflows.
pub const MAX_INDEX: u64 = 93;

/// Above this index the naive strategy takes long enough to be worth a
/// warning.
pub const NAIVE_WARN_INDEX: u64 = 40;

pub const CLAP_GLOBAL_OPTIONS: &str = "Global Options";
pub const CLAP_REPORT_OPTIONS: &str = "Report Options";

lazy_static! {
    pub static ref STRATEGY_STYLE: Style = Style::new().cyan();
    pub static ref FASTER_STYLE: Style = Style::new().green().bold();
    pub static ref SLOWER_STYLE: Style = Style::new().red().bold();
    pub static ref UNMEASURABLE_STYLE: Style = Style::new().yellow();
}
