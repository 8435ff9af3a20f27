//! # Primer
//!
//! The command-line front end for primer-core.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              apps/primer (THE BINARY)        │
//! │                                              │
//! │   ┌──────────┐   ┌──────────┐   ┌─────────┐  │
//! │   │   CLI    │   │  Config  │   │ Logging │  │
//! │   │  (clap)  │   │  (toml)  │   │(tracing)│  │
//! │   └────┬─────┘   └────┬─────┘   └─────────┘  │
//! │        └──────┬───────┘                      │
//! │               ▼                              │
//! │       ┌───────────────┐                      │
//! │       │  primer-core  │                      │
//! │       │  (THE LOGIC)  │                      │
//! │       └───────────────┘                      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! primer primes -n 15 --squares
//! primer check 97
//! primer --json-mode scene -f shapes.json
//! ```

use clap::Parser;
use primer::cli::{self, Cli};
use primer::config::PrimerConfig;
use primer_core::PrimerError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = run(&cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr. `PRIMER_LOG_FORMAT=json` enables
/// machine-parseable output; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("PRIMER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose { "primer=debug" } else { "primer=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli) -> Result<(), PrimerError> {
    let working_dir = std::env::current_dir()
        .map_err(|e| PrimerError::IoError(format!("Cannot resolve working directory: {}", e)))?;
    let config = PrimerConfig::load(cli.config.as_deref(), &working_dir)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(cli, &config, &mut out)
}

/// Print the startup banner to stderr so stdout carries results only.
fn print_banner() {
    eprintln!("primer v{} - lazy primes on demand", env!("CARGO_PKG_VERSION"));
}
