//! Integration tests for CLI parsing and command execution.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use primer::cli::{Cli, Commands, execute};
use primer::config::PrimerConfig;
use primer::report::{CheckReport, NthReport, PrimesReport, SceneReport, SpeedReport};
use primer_core::PrimerError;
use std::io::Write;

/// Parse arguments and run them against `config`, returning stdout.
fn run_with(args: &[&str], config: &PrimerConfig) -> Result<String, PrimerError> {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut out = Vec::new();
    execute(&cli, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn run(args: &[&str]) -> Result<String, PrimerError> {
    run_with(args, &PrimerConfig::default())
}

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_parse_primes_flags() {
    let cli = Cli::try_parse_from(["primer", "primes", "-n", "5", "--squares"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Primes {
            count: Some(5),
            squares: true,
            no_squares: false,
        })
    );
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["primer", "check", "7", "--json-mode", "-q"]).unwrap();
    assert!(cli.json_mode);
    assert!(cli.quiet);
    assert_eq!(cli.command, Some(Commands::Check { value: 7 }));
}

#[test]
fn test_parse_last_output_switch_wins() {
    let cli =
        Cli::try_parse_from(["primer", "--json-mode", "--no-json-mode", "check", "7"]).unwrap();
    assert!(!cli.json_mode);
    assert!(cli.no_json_mode);

    let cli = Cli::try_parse_from(["primer", "primes", "--no-squares", "-s"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Primes {
            count: None,
            squares: true,
            no_squares: false,
        })
    );
}

#[test]
fn test_parse_negative_coordinates() {
    let cli = Cli::try_parse_from(["primer", "point", "-x", "1.25", "-y", "-3.5"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Point { x: 1.25, y: -3.5 }));
}

#[test]
fn test_parse_rejects_negative_count() {
    assert!(Cli::try_parse_from(["primer", "primes", "-n", "-1"]).is_err());
}

// =============================================================================
// PRIMES COMMAND TESTS
// =============================================================================

#[test]
fn test_primes_text_output() {
    let output = run(&["primer", "primes", "-n", "15"]).unwrap();
    assert_eq!(
        output,
        "first 15 primes: 2 3 5 7 11 13 17 19 23 29 31 37 41 43 47\n"
    );
}

#[test]
fn test_primes_with_squares() {
    let output = run(&["primer", "primes", "-n", "4", "-s"]).unwrap();
    assert_eq!(output, "first 4 primes: 2 3 5 7\nsquares: 4 9 25 49\n");
}

#[test]
fn test_primes_zero_count() {
    let output = run(&["primer", "primes", "-n", "0"]).unwrap();
    assert_eq!(output, "first 0 primes: \n");
}

#[test]
fn test_no_subcommand_uses_configured_default() {
    let mut config = PrimerConfig::default();
    config.primes.default_count = 3;
    let output = run_with(&["primer"], &config).unwrap();
    assert_eq!(output, "first 3 primes: 2 3 5\n");
}

#[test]
fn test_primes_json_output() {
    let output = run(&["primer", "--json-mode", "primes", "-n", "3", "--squares"]).unwrap();
    let report: PrimesReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.count, 3);
    assert_eq!(report.primes, vec![2, 3, 5]);
    assert_eq!(report.squares, Some(vec![4, 9, 25]));
}

#[test]
fn test_config_enables_json_and_squares() {
    let mut config = PrimerConfig::default();
    config.output.json = true;
    config.output.squares = true;
    let output = run_with(&["primer", "primes", "-n", "2"], &config).unwrap();
    let report: PrimesReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.squares, Some(vec![4, 9]));
}

#[test]
fn test_flags_disable_config_json_and_squares() {
    let mut config = PrimerConfig::default();
    config.output.json = true;
    config.output.squares = true;
    let output = run_with(
        &["primer", "--no-json-mode", "primes", "-n", "2", "--no-squares"],
        &config,
    )
    .unwrap();
    assert_eq!(output, "first 2 primes: 2 3
");
}

#[test]
fn test_primes_over_limit_rejected() {
    let mut config = PrimerConfig::default();
    config.primes.max_count = 10;
    let result = run_with(&["primer", "primes", "-n", "11"], &config);
    assert_eq!(
        result,
        Err(PrimerError::CountTooLarge {
            requested: 11,
            max: 10
        })
    );
}

// =============================================================================
// CHECK / NTH COMMAND TESTS
// =============================================================================

#[test]
fn test_check_prime_and_composite() {
    assert_eq!(run(&["primer", "check", "97"]).unwrap(), "97 is prime\n");
    assert_eq!(run(&["primer", "check", "100"]).unwrap(), "100 is not prime\n");
}

#[test]
fn test_check_json() {
    let output = run(&["primer", "--json-mode", "check", "1"]).unwrap();
    let report: CheckReport = serde_json::from_str(&output).unwrap();
    assert_eq!(
        report,
        CheckReport {
            value: 1,
            is_prime: false
        }
    );
}

#[test]
fn test_nth_prime() {
    assert_eq!(run(&["primer", "nth", "0"]).unwrap(), "prime #0: 2\n");

    let output = run(&["primer", "--json-mode", "nth", "14"]).unwrap();
    let report: NthReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.prime, 47);
}

#[test]
fn test_nth_respects_limit() {
    let mut config = PrimerConfig::default();
    config.primes.max_count = 5;
    assert!(run_with(&["primer", "nth", "4"], &config).is_ok());
    assert!(matches!(
        run_with(&["primer", "nth", "5"], &config),
        Err(PrimerError::CountTooLarge { .. })
    ));
}

// =============================================================================
// VALUE COMMAND TESTS
// =============================================================================

#[test]
fn test_speed_command() {
    let output = run(&["primer", "speed", "-m", "42", "-s", "6"]).unwrap();
    assert_eq!(output, "speed (m/s): 7\n");

    let output = run(&["primer", "--json-mode", "speed", "-m", "10", "-s", "4"]).unwrap();
    let report: SpeedReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.meters_per_second.get(), 2.5);
}

#[test]
fn test_speed_rejects_zero_duration() {
    let result = run(&["primer", "speed", "-m", "42", "-s", "0"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));
}

#[test]
fn test_sum_command() {
    assert_eq!(run(&["primer", "sum", "1", "2.5", "3"]).unwrap(), "sum: 6.5\n");
    assert_eq!(run(&["primer", "sum", "-1", "1"]).unwrap(), "sum: 0\n");
    assert_eq!(run(&["primer", "sum"]).unwrap(), "sum: 0\n");
}

#[test]
fn test_sum_rejects_non_finite_values() {
    let result = run(&["primer", "--json-mode", "sum", "inf", "1"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));

    let result = run(&["primer", "sum", "NaN"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));
}

#[test]
fn test_sum_rejects_overflowing_total() {
    let result = run(&["primer", "--json-mode", "sum", "1e308", "1e308"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));
}

#[test]
fn test_point_command() {
    let output = run(&["primer", "point", "-x", "1.25", "-y", "-3.5"]).unwrap();
    assert_eq!(output, "point: Point(1.250000,-3.500000)\n");
}

#[test]
fn test_point_rejects_non_finite_coordinates() {
    let result = run(&["primer", "--json-mode", "point", "-x", "NaN", "-y", "0"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));

    let result = run(&["primer", "point", "-x", "0", "-y", "inf"]);
    assert!(matches!(result, Err(PrimerError::InvalidQuantity(_))));
}

// =============================================================================
// SCENE COMMAND TESTS
// =============================================================================

#[test]
fn test_default_scene() {
    let output = run(&["primer", "scene"]).unwrap();
    assert_eq!(
        output,
        "scene: Circle(c=Point(0.000000,0.000000), r=10), \
         Rectangle(p=Point(-5.000000,2.000000), w=8, h=3)\n"
    );
}

#[test]
fn test_scene_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"kind": "circle", "c": {{"x": 1.0, "y": 2.0}}, "r": 0.5}}]"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let output = run(&["primer", "--json-mode", "scene", "-f", path]).unwrap();
    let report: SceneReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.shapes, 1);
    assert_eq!(report.rendered, "Circle(c=Point(1.000000,2.000000), r=0.5)");
}

#[test]
fn test_scene_missing_file() {
    let result = run(&["primer", "scene", "-f", "/nonexistent/shapes.json"]);
    assert!(matches!(result, Err(PrimerError::IoError(_))));
}

#[test]
fn test_scene_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"kind": "hexagon"}}]"#).unwrap();

    let path = file.path().to_str().unwrap();
    let result = run(&["primer", "scene", "-f", path]);
    assert!(matches!(result, Err(PrimerError::SerializationError(_))));
}

#[test]
fn test_scene_directory_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    let result = run(&["primer", "scene", "-f", path]);
    assert!(matches!(result, Err(PrimerError::IoError(_))));
}
