//! Engine error type.
//!
//! The error surface is narrow by design: every runtime input is an
//! internally constructed numeric value, so the only fallible boundary is
//! configuration.  Degenerate configs are rejected here rather than silently
//! propagated (a zero `max_speed` would otherwise freeze the whole flock
//! with no signal).

use thiserror::Error;

/// The top-level error type for all `flock-*` crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("population size must be at least 1, got {0}")]
    EmptyPopulation(u32),

    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveLimit { name: &'static str, value: f32 },

    #[error("{name} weight must be non-negative and finite, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },

    #[error("vertical band is empty: floor {floor} is not below ceiling {ceiling}")]
    EmptyVerticalBand { floor: f32, ceiling: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
