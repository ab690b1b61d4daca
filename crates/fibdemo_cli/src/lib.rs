//! # fibdemo CLI
//!
//! Parses the command line, sets up logging and hands over to [`run`],
//! which times each Fibonacci strategy and prints how they compare.
#![deny(clippy::dbg_macro, clippy::unwrap_used)]

use std::{env, io::Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap::builder::styling::{AnsiColor, Color, Style};
use fibdemo_consts as consts;
use fibdemo_core::{Metric, Strategy};
use miette::IntoDiagnostic;
use tracing::level_filters::LevelFilter;

mod run;

pub use run::{Report, run};

#[derive(Parser, Debug)]
#[command(
    name = "fibdemo",
    version(consts::FIBDEMO_VERSION),
    about = "Times naive recursion, tabulation and memoization computing the same Fibonacci number and compares them."
)]
#[clap(styles = get_styles())]
pub struct Args {
    /// The Fibonacci index to compute (0 to 93)
    #[arg(env = "FIBDEMO_INDEX")]
    pub index: u64,

    /// The strategies to run, all of them by default
    #[arg(short, long = "strategy", value_enum, help_heading = consts::CLAP_REPORT_OPTIONS)]
    pub strategies: Vec<Strategy>,

    /// The formula used to compare two running times
    #[arg(long, value_enum, default_value_t, env = "FIBDEMO_METRIC", help_heading = consts::CLAP_REPORT_OPTIONS)]
    pub metric: Metric,

    /// Only report the running times, skip the comparisons
    #[arg(long, env = "FIBDEMO_NO_COMPARE", help_heading = consts::CLAP_REPORT_OPTIONS)]
    pub no_compare: bool,

    #[clap(flatten)]
    pub global_options: GlobalOptions,
}

#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Increase logging verbosity (warnings by default, -v for info, -vv for debug, -vvv for trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true, help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    verbose: u8,

    /// Decrease logging verbosity (quiet mode)
    #[clap(short, long, action = clap::ArgAction::Count, global = true, help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    quiet: u8,

    /// Whether the output needs to be colored.
    #[clap(long, default_value = "auto", global = true, env = "FIBDEMO_COLOR", help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    color: ColorOutput,
}

impl Args {
    /// The strategies to run in the order they are run, without duplicates.
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            return Strategy::ALL.to_vec();
        }
        let mut strategies = self.strategies.clone();
        strategies.sort();
        strategies.dedup();
        strategies
    }

    /// Determine the log level filter based on verbose and quiet counts.
    fn log_level_filter(&self) -> LevelFilter {
        match (self.global_options.quiet, self.global_options.verbose) {
            // Quiet mode overrides verbose
            (q, _) if q > 0 => LevelFilter::OFF,
            (_, 0) => LevelFilter::WARN, // Default
            (_, 1) => LevelFilter::INFO,
            (_, 2) => LevelFilter::DEBUG,
            (_, _) => LevelFilter::TRACE,
        }
    }
}

pub fn execute() -> miette::Result<()> {
    let args = parse_args();

    set_console_colors(&args);
    let use_colors = console::colors_enabled_stderr();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::default()
                .color(use_colors)
                .build(),
        )
    }))?;

    setup_logging(&args, use_colors)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush().into_diagnostic()
}

/// Parses the command line, exiting on failure. A malformed value gets the
/// same usage line as a missing one.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        // Help and version output go to stdout.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{}", render_parse_error(&err));
            std::process::exit(err.exit_code());
        }
    }
}

fn render_parse_error(err: &clap::Error) -> String {
    let mut rendered = err.render().to_string();
    if matches!(
        err.kind(),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue
    ) {
        rendered.push_str(&format!("\n{}\n", Args::command().render_usage()));
    }
    rendered
}

fn setup_logging(args: &Args, use_colors: bool) -> miette::Result<()> {
    use tracing_subscriber::{
        EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    };

    let level_filter = args.log_level_filter();
    let directives = format!(
        "fibdemo={level_filter},fibdemo_cli={level_filter},fibdemo_core={level_filter}"
    );

    // CLI verbosity flags win over RUST_LOG, otherwise RUST_LOG extends the
    // defaults.
    let cli_verbosity_set = args.global_options.verbose > 0 || args.global_options.quiet > 0;
    let final_directives = match env::var("RUST_LOG") {
        Ok(env_directives) if !cli_verbosity_set && !env_directives.is_empty() => {
            format!("{directives},{env_directives}")
        }
        _ => directives,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .parse(&final_directives)
        .into_diagnostic()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(use_colors)
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

/// Whether to use colored output.
/// Option `Auto` enables color output only if the output goes to a terminal
/// and the `NO_COLOR` environment variable is not set.
#[derive(clap::ValueEnum, Debug, Clone, Default)]
pub enum ColorOutput {
    Always,
    Never,

    #[default]
    Auto,
}

fn set_console_colors(args: &Args) {
    // FORCE_COLOR and NO_COLOR take precedence over the CLI flag and
    // FIBDEMO_COLOR.
    let color = match env::var("FORCE_COLOR") {
        Ok(_) => &ColorOutput::Always,
        Err(_) => match env::var("NO_COLOR") {
            Ok(_) => &ColorOutput::Never,
            Err(_) => &args.global_options.color,
        },
    };

    match color {
        ColorOutput::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorOutput::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorOutput::Auto => {}
    };
}

pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::BrightGreen))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::BrightGreen))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightCyan))))
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightCyan))))
}
