//! # Primer CLI Module
//!
//! This module implements the CLI interface for Primer.
//!
//! ## Available Commands
//!
//! - `primes` - List the first N primes (and optionally their squares)
//! - `check` - Test a single number for primality
//! - `nth` - Show the zero-based N-th prime
//! - `speed` - Divide a distance by a duration
//! - `sum` - Sum a list of numbers
//! - `point` - Render a point through the `Printable` capability
//! - `scene` - Render a scene of shapes (built-in or from a JSON file)

mod commands;

use crate::config::PrimerConfig;
use clap::{Parser, Subcommand};
use primer_core::PrimerError;
use std::io::Write;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Primer - lazy prime sequences and friends
///
/// Produces primes on demand without materializing the search domain.
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true, overrides_with = "no_json_mode")]
    pub json_mode: bool,

    /// Output plain text even if the config enables JSON
    #[arg(long, global = true, overrides_with = "json_mode")]
    pub no_json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List the first N primes
    Primes {
        /// How many primes to produce (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Also print the square of each prime
        #[arg(short, long, overrides_with = "no_squares")]
        squares: bool,

        /// Omit squares even if the config enables them
        #[arg(long, overrides_with = "squares")]
        no_squares: bool,
    },

    /// Check whether a number is prime
    Check {
        /// The number to test
        value: u64,
    },

    /// Show the zero-based N-th prime
    Nth {
        /// Index into the prime sequence (0 is 2)
        index: usize,
    },

    /// Compute a speed from a distance and a duration
    Speed {
        /// Distance in meters
        #[arg(short, long, allow_negative_numbers = true)]
        meters: f64,

        /// Duration in seconds
        #[arg(short, long, allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Sum a list of numbers
    Sum {
        /// Values to add
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Render a point
    Point {
        /// Horizontal coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Vertical coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Render a scene of shapes
    Scene {
        /// JSON file holding an array of shapes (defaults to the built-in scene)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, writing results to `out`.
pub fn execute(
    cli: &Cli,
    config: &PrimerConfig,
    out: &mut dyn Write,
) -> Result<(), PrimerError> {
    let json_mode = resolve_switch(cli.json_mode, cli.no_json_mode, config.output.json);

    match &cli.command {
        Some(Commands::Primes {
            count,
            squares,
            no_squares,
        }) => cmd_primes(
            out,
            config,
            json_mode,
            *count,
            resolve_switch(*squares, *no_squares, config.output.squares),
        ),
        Some(Commands::Check { value }) => cmd_check(out, json_mode, *value),
        Some(Commands::Nth { index }) => cmd_nth(out, config, json_mode, *index),
        Some(Commands::Speed { meters, seconds }) => cmd_speed(out, json_mode, *meters, *seconds),
        Some(Commands::Sum { values }) => cmd_sum(out, json_mode, values),
        Some(Commands::Point { x, y }) => cmd_point(out, json_mode, *x, *y),
        Some(Commands::Scene { file }) => cmd_scene(out, json_mode, file.as_deref()),
        None => {
            // No subcommand - list primes with configured defaults
            cmd_primes(out, config, json_mode, None, config.output.squares)
        }
    }
}

/// An explicit `--flag` or `--no-flag` wins over the configured value.
fn resolve_switch(on: bool, off: bool, configured: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}
