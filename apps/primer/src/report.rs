//! # Report Types
//!
//! JSON shapes emitted by `--json-mode`. Field names are stable; scripts
//! depend on them.

use primer_core::{MetersPerSecond, Point2D};
use serde::{Deserialize, Serialize};

/// Output of `primer primes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimesReport {
    /// Number of primes requested.
    pub count: usize,
    /// The primes, in increasing order.
    pub primes: Vec<u64>,
    /// Squares of `primes`, when requested.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub squares: Option<Vec<u128>>,
}

/// Output of `primer check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// The number tested.
    pub value: u64,
    /// Whether it is prime.
    pub is_prime: bool,
}

/// Output of `primer nth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NthReport {
    /// Zero-based index.
    pub index: usize,
    /// The prime at that index.
    pub prime: u64,
}

/// Output of `primer speed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedReport {
    /// Distance in meters.
    pub meters: f64,
    /// Duration in seconds.
    pub seconds: f64,
    /// The resulting speed.
    pub meters_per_second: MetersPerSecond,
}

/// Output of `primer sum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumReport {
    /// Number of values added.
    pub terms: usize,
    /// Their total.
    pub total: f64,
}

/// Output of `primer point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointReport {
    /// The point itself.
    pub point: Point2D,
    /// Its `Printable` rendering.
    pub repr: String,
}

/// Output of `primer scene`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneReport {
    /// Number of shapes rendered.
    pub shapes: usize,
    /// The joined rendering.
    pub rendered: String,
}
