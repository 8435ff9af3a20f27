//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Every command writes its result to the supplied sink; diagnostics go
//! through `tracing` to stderr.

use crate::config::PrimerConfig;
use crate::report::{
    CheckReport, NthReport, PointReport, PrimesReport, SceneReport, SpeedReport, SumReport,
};
use primer_core::limits::{MAX_SCENE_FILE_SIZE, MAX_SCENE_SHAPES};
use primer_core::{
    Meters, MetersPerSecond, Point2D, PrimerError, Printable, Scene, Seconds, Shape,
    first_n_primes, is_prime, nth_prime, squares, sum_all,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn io_err(e: std::io::Error) -> PrimerError {
    PrimerError::IoError(format!("Write output: {}", e))
}

/// Write a report as pretty-printed JSON followed by a newline.
fn write_json<T: Serialize>(out: &mut dyn Write, report: &T) -> Result<(), PrimerError> {
    let text = serde_json::to_string_pretty(report)
        .map_err(|e| PrimerError::SerializationError(e.to_string()))?;
    writeln!(out, "{}", text).map_err(io_err)
}

/// Reject NaN and infinities, which JSON cannot represent.
fn ensure_finite(name: &str, value: f64) -> Result<f64, PrimerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PrimerError::InvalidQuantity(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Join displayable values with single spaces.
fn join_spaced<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file path before reading.
///
/// Canonicalizes the path (resolving ".." and symlinks) and requires a
/// regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PrimerError> {
    let canonical = path.canonicalize().map_err(|e| {
        PrimerError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PrimerError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PrimerError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PrimerError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(PrimerError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Load a scene from a JSON array of shapes.
pub fn load_scene(path: &Path) -> Result<Scene, PrimerError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_SCENE_FILE_SIZE)?;

    let contents = std::fs::read(&validated_path)
        .map_err(|e| PrimerError::IoError(format!("Read file: {}", e)))?;
    let shapes: Vec<Shape> = serde_json::from_slice(&contents)
        .map_err(|e| PrimerError::SerializationError(format!("Parse scene: {}", e)))?;

    if shapes.len() > MAX_SCENE_SHAPES {
        return Err(PrimerError::SerializationError(format!(
            "Shape count {} exceeds maximum allowed {}",
            shapes.len(),
            MAX_SCENE_SHAPES
        )));
    }

    Ok(Scene::from(shapes))
}

// =============================================================================
// PRIMES COMMAND
// =============================================================================

/// List the first `count` primes.
pub fn cmd_primes(
    out: &mut dyn Write,
    config: &PrimerConfig,
    json_mode: bool,
    count: Option<usize>,
    with_squares: bool,
) -> Result<(), PrimerError> {
    let count = config.resolve_count(count)?;
    tracing::info!("Generating {} primes", count);

    let primes = first_n_primes(count);
    let squared: Option<Vec<u128>> =
        with_squares.then(|| squares(primes.iter().copied()).collect());

    if json_mode {
        return write_json(
            out,
            &PrimesReport {
                count,
                primes,
                squares: squared,
            },
        );
    }

    writeln!(out, "first {} primes: {}", count, join_spaced(&primes)).map_err(io_err)?;
    if let Some(squared) = squared {
        writeln!(out, "squares: {}", join_spaced(&squared)).map_err(io_err)?;
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Report whether `value` is prime.
pub fn cmd_check(out: &mut dyn Write, json_mode: bool, value: u64) -> Result<(), PrimerError> {
    let report = CheckReport {
        value,
        is_prime: is_prime(value),
    };
    tracing::debug!("is_prime({}) = {}", value, report.is_prime);

    if json_mode {
        return write_json(out, &report);
    }

    let verdict = if report.is_prime { "prime" } else { "not prime" };
    writeln!(out, "{} is {}", value, verdict).map_err(io_err)
}

// =============================================================================
// NTH COMMAND
// =============================================================================

/// Report the zero-based `index`-th prime.
pub fn cmd_nth(
    out: &mut dyn Write,
    config: &PrimerConfig,
    json_mode: bool,
    index: usize,
) -> Result<(), PrimerError> {
    // Reaching index i means generating i + 1 primes.
    config.resolve_count(Some(index.saturating_add(1)))?;

    let prime = nth_prime(index).ok_or_else(|| {
        PrimerError::InvalidQuantity(format!("no prime at index {} within u64", index))
    })?;

    if json_mode {
        return write_json(out, &NthReport { index, prime });
    }

    writeln!(out, "prime #{}: {}", index, prime).map_err(io_err)
}

// =============================================================================
// SPEED COMMAND
// =============================================================================

/// Divide a distance by a duration.
pub fn cmd_speed(
    out: &mut dyn Write,
    json_mode: bool,
    meters: f64,
    seconds: f64,
) -> Result<(), PrimerError> {
    let speed = MetersPerSecond::checked_from(Meters::new(meters), Seconds::new(seconds))?;

    if json_mode {
        return write_json(
            out,
            &SpeedReport {
                meters,
                seconds,
                meters_per_second: speed,
            },
        );
    }

    writeln!(out, "speed (m/s): {}", speed.get()).map_err(io_err)
}

// =============================================================================
// SUM COMMAND
// =============================================================================

/// Sum the given values.
pub fn cmd_sum(out: &mut dyn Write, json_mode: bool, values: &[f64]) -> Result<(), PrimerError> {
    for &value in values {
        ensure_finite("value", value)?;
    }
    // Adding +0.0 turns the -0.0 of an empty float sum into 0.
    let total = ensure_finite("sum", sum_all(values.iter().copied()) + 0.0)?;

    if json_mode {
        return write_json(
            out,
            &SumReport {
                terms: values.len(),
                total,
            },
        );
    }

    writeln!(out, "sum: {}", total).map_err(io_err)
}

// =============================================================================
// POINT COMMAND
// =============================================================================

/// Render a point via `Printable`.
pub fn cmd_point(out: &mut dyn Write, json_mode: bool, x: f64, y: f64) -> Result<(), PrimerError> {
    let point = Point2D::new(ensure_finite("x", x)?, ensure_finite("y", y)?);
    let repr = point.to_display_string();

    if json_mode {
        return write_json(out, &PointReport { point, repr });
    }

    writeln!(out, "point: {}", repr).map_err(io_err)
}

// =============================================================================
// SCENE COMMAND
// =============================================================================

/// Render the built-in scene or one loaded from `file`.
pub fn cmd_scene(
    out: &mut dyn Write,
    json_mode: bool,
    file: Option<&Path>,
) -> Result<(), PrimerError> {
    let scene = match file {
        Some(path) => {
            tracing::info!("Loading scene from {:?}", path);
            load_scene(path)?
        }
        None => Scene::default_scene(),
    };
    tracing::debug!("Rendering {} shapes", scene.len());

    let rendered = scene.render();

    if json_mode {
        return write_json(
            out,
            &SceneReport {
                shapes: scene.len(),
                rendered,
            },
        );
    }

    writeln!(out, "scene: {}", rendered).map_err(io_err)
}
