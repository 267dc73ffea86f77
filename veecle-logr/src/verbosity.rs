//! Verbosity threshold deciding which info records are emitted.
//!
//! A [`Logger`][crate::Logger] at level `L` emits info records only while the threshold of its [`Verbosity`] is at
//! least `L`.
//! A higher threshold therefore means more records.
//! Error records ignore the threshold.
//!
//! All loggers created with [`Logger::new`][crate::Logger::new] share the process-wide instance returned by
//! [`global`], which starts at `0` and is changed with [`set_verbosity`].
//! Isolated instances can be handed to [`Logger::with_verbosity`][crate::Logger::with_verbosity] instead, e.g. for
//! tests that must not affect each other.
//!
//! The threshold is not guarded by a lock.
//! Configure it once, before loggers are used concurrently: a change racing with emission on other threads may or
//! may not be observed by those emissions.

use std::ffi::OsString;
use std::num::ParseIntError;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, LazyLock};

/// Name of the environment variable read by [`set_verbosity_from_env`].
pub const VERBOSITY_ENV_VAR: &str = "VEECLE_LOGR_VERBOSITY";

static GLOBAL_VERBOSITY: LazyLock<Arc<Verbosity>> = LazyLock::new(|| Arc::new(Verbosity::new(0)));

/// A verbosity threshold.
///
/// ```rust
/// use veecle_logr::verbosity::Verbosity;
///
/// let verbosity = Verbosity::new(1);
/// assert!(verbosity.is_enabled(1));
/// assert!(!verbosity.is_enabled(3));
///
/// assert_eq!(verbosity.set(3), 1);
/// assert!(verbosity.is_enabled(3));
/// ```
#[derive(Debug, Default)]
pub struct Verbosity {
    threshold: AtomicI32,
}

impl Verbosity {
    /// Creates a new threshold.
    pub const fn new(threshold: i32) -> Self {
        Self {
            threshold: AtomicI32::new(threshold),
        }
    }

    /// Returns the current threshold.
    pub fn get(&self) -> i32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Installs `threshold`, returning the previous one.
    ///
    /// Any value is accepted, including negative ones.
    pub fn set(&self, threshold: i32) -> i32 {
        self.threshold.swap(threshold, Ordering::Relaxed)
    }

    /// Returns whether records at `level` are emitted.
    pub fn is_enabled(&self, level: i32) -> bool {
        self.get() >= level
    }

    /// Installs the threshold configured in [`VERBOSITY_ENV_VAR`], returning the previous one.
    ///
    /// Returns `Ok(None)` without changing anything if the variable is unset or empty.
    pub fn set_from_env(&self) -> Result<Option<i32>, VerbosityEnvError> {
        let threshold = parse_env_value(std::env::var_os(VERBOSITY_ENV_VAR))?;
        Ok(threshold.map(|threshold| self.set(threshold)))
    }
}

/// Returns the process-wide threshold.
pub fn global() -> Arc<Verbosity> {
    Arc::clone(&GLOBAL_VERBOSITY)
}

/// Sets the process-wide threshold, returning the previous one.
///
/// Every logger created with [`Logger::new`][crate::Logger::new] compares its level against this threshold.
/// See the [module documentation](self) for the lack of synchronization.
pub fn set_verbosity(threshold: i32) -> i32 {
    GLOBAL_VERBOSITY.set(threshold)
}

/// Returns whether records at `level` are emitted according to the process-wide threshold.
pub fn is_enabled(level: i32) -> bool {
    GLOBAL_VERBOSITY.is_enabled(level)
}

/// Sets the process-wide threshold from [`VERBOSITY_ENV_VAR`].
///
/// See [`Verbosity::set_from_env`].
pub fn set_verbosity_from_env() -> Result<Option<i32>, VerbosityEnvError> {
    GLOBAL_VERBOSITY.set_from_env()
}

/// Errors that can occur when reading the threshold from the environment.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VerbosityEnvError {
    /// The variable is not valid unicode.
    #[error("VEECLE_LOGR_VERBOSITY is not valid unicode")]
    NotUnicode,

    /// The variable is not an integer.
    #[error("invalid VEECLE_LOGR_VERBOSITY value {value:?}")]
    InvalidThreshold {
        /// The rejected value.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },
}

fn parse_env_value(value: Option<OsString>) -> Result<Option<i32>, VerbosityEnvError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value
        .into_string()
        .map_err(|_| VerbosityEnvError::NotUnicode)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|source| VerbosityEnvError::InvalidThreshold { value, source })
}
