//! # Configuration
//!
//! Primer reads an optional TOML file:
//!
//! ```toml
//! [primes]
//! default_count = 15
//! max_count = 1000000
//!
//! [output]
//! json = false
//! squares = false
//! ```
//!
//! Every key is optional. Lookup order:
//! 1. The path given with `--config` (must exist)
//! 2. `primer.toml` in the working directory (if present)
//! 3. Built-in defaults
//!
//! Command-line flags override whatever the file sets.

use primer_core::PrimerError;
use primer_core::limits::{DEFAULT_PRIME_COUNT, MAX_PRIME_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name probed in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimerConfig {
    /// Prime generation settings.
    pub primes: PrimesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// `[primes]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimesConfig {
    /// Count used when `primes` is run without `-n`.
    pub default_count: usize,
    /// Largest count a single request may ask for.
    pub max_count: usize,
}

impl Default for PrimesConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_PRIME_COUNT,
            max_count: MAX_PRIME_COUNT,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON instead of text.
    pub json: bool,
    /// Also print squares after a prime listing.
    pub squares: bool,
}

// =============================================================================
// LOADING
// =============================================================================

impl PrimerConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, PrimerError> {
        let config: Self =
            toml::from_str(text).map_err(|e| PrimerError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, PrimerError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PrimerError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PrimerError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            PrimerError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the configuration following the documented lookup order.
    ///
    /// An explicit path must exist; the implicit `primer.toml` is skipped
    /// when absent.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, PrimerError> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {:?}", path);
            return Self::from_file(path);
        }

        let implicit = working_dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!("Loading config from {:?}", implicit);
            return Self::from_file(&implicit);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Check the values are mutually consistent.
    pub fn validate(&self) -> Result<(), PrimerError> {
        if self.primes.max_count > MAX_PRIME_COUNT {
            return Err(PrimerError::ConfigError(format!(
                "primes.max_count {} exceeds hard limit {}",
                self.primes.max_count, MAX_PRIME_COUNT
            )));
        }
        if self.primes.default_count > self.primes.max_count {
            return Err(PrimerError::ConfigError(format!(
                "primes.default_count {} exceeds primes.max_count {}",
                self.primes.default_count, self.primes.max_count
            )));
        }
        Ok(())
    }

    /// Resolve a requested count against the configured default and limit.
    pub fn resolve_count(&self, requested: Option<usize>) -> Result<usize, PrimerError> {
        let count = requested.unwrap_or(self.primes.default_count);
        if count > self.primes.max_count {
            return Err(PrimerError::CountTooLarge {
                requested: count,
                max: self.primes.max_count,
            });
        }
        Ok(count)
    }
}

// =============================================================================
// TESTS
// =============================================================================
