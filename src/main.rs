//! Covbadge CLI binary entry point.
//! Resolves configuration, runs the badge pipeline, and prints results.

use clap::Parser;
use covbadge::cli::Cli;
use covbadge::{config, generate, output, utils};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(None, &cli);

    // Friendly note if no covbadge config was found
    if config::load_config(&config::detect_root(std::path::Path::new("."))).is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No covbadge.toml found; using defaults."
        );
    }
    // Friendly error if the report file is missing
    if !eff.input.exists() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!(
                "Coverage report not found: {} (pass --input or add covbadge.toml)",
                eff.input.display()
            )
        );
        std::process::exit(2);
    }

    match generate::run_generate(&eff) {
        Ok(badges) => output::print_badges(&badges, &eff.mode),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    }
}
