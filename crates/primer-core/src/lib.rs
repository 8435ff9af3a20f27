//! # primer-core
//!
//! The pure building blocks of Primer - THE LOGIC.
//!
//! The centerpiece is a bounded predicate sequence generator: it produces the
//! first N natural numbers satisfying a predicate (primality) by composing an
//! unbounded producer, a filter and a limiter. Nothing beyond the N-th match is
//! ever tested.
//!
//! Alongside it live a handful of small, independent value types:
//! - `units` - strong-typed wrappers (`Meters / Seconds -> MetersPerSecond`)
//! - `aggregate` - variadic summation via the `sum!` macro
//! - `render` - the `Printable` capability contract
//! - `shapes` - drawable shapes held in a homogeneous `Scene`
//!
//! ## Architectural Constraints
//!
//! - NO I/O, NO logging, NO async (pure Rust)
//! - The predicate and the generator are total: no error paths
//! - Fallible edges (unit construction) return `PrimerError`

// =============================================================================
// MODULES
// =============================================================================

pub mod aggregate;
pub mod limits;
pub mod primes;
pub mod render;
pub mod sequence;
pub mod shapes;
pub mod types;
pub mod units;

// =============================================================================
// RE-EXPORTS: Sequence Generation
// =============================================================================

pub use primes::{first_n_matching, first_n_primes, is_prime, nth_prime, primes, squares};
pub use sequence::Naturals;

// =============================================================================
// RE-EXPORTS: Value Types
// =============================================================================

pub use aggregate::sum_all;
pub use render::{Point2D, Printable};
pub use shapes::{Circle, Draw, Rectangle, Scene, Shape};
pub use types::PrimerError;
pub use units::{Meters, MetersPerSecond, Seconds};
