//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "covbadge",
    version,
    about = "Generate coverage badges from a coverage summary report",
    long_about = "Covbadge — a tiny CLI that reads coverage-summary.json, fetches rendered SVG badges from a badge service, and writes them to an output directory.\n\nConfiguration precedence: CLI > covbadge.toml > defaults.",
    after_help = "Examples:\n  covbadge --input coverage/coverage-summary.json --output coverage\n  covbadge --average\n  covbadge --average lines,branches --mode json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Output directory for badge files (default: ./coverage)")]
    pub output: Option<String>,
    #[arg(
        long,
        help = "Path to the coverage summary JSON (default: ./coverage/coverage-summary.json)"
    )]
    pub input: Option<String>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "all",
        value_name = "KEYS",
        help = "Also write an averaged badge over comma-separated keys, or 'all' (bare flag implies all)"
    )]
    pub average: Option<String>,
    #[arg(long, help = "Badge service base URL (default: https://img.shields.io)")]
    pub service: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub mode: Option<String>,
}
