//! # Fixed Limits
//!
//! Compile-time constants shared by the core and the CLI.
//!
//! The core generator itself is unbounded; these limits exist for the outer
//! surfaces (CLI, configuration, scene files) that accept untrusted input.

/// The smallest prime and the first value the search domain produces.
pub const FIRST_PRIME: u64 = 2;

/// Number of primes produced when no count is requested.
pub const DEFAULT_PRIME_COUNT: usize = 15;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of primes a single request may ask for.
///
/// Enforced by the CLI; the core generator itself is unbounded.
pub const MAX_PRIME_COUNT: usize = 1_000_000;

/// Maximum number of shapes accepted in one scene file.
pub const MAX_SCENE_SHAPES: usize = 10_000;

/// Maximum size of a scene file (10 MiB).
pub const MAX_SCENE_FILE_SIZE: u64 = 10 * 1024 * 1024;
