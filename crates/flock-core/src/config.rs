//! Simulation configuration.
//!
//! All tunables are explicit values handed to the tick driver — there is no
//! ambient global state.  Defaults reproduce the reference flock: 32 boids,
//! separation-dominant weights, a ±100-unit world box with a 0–75 vertical
//! band, and spawning inside a ±50 × 0–50 volume.
//!
//! Every mutation path into a running simulation (`Sim::new`, `resize`,
//! `set_weights`, `set_bounds`, `update_limits`) re-validates the affected
//! fields, so a `Sim` can never hold a degenerate config.

use crate::error::{FlockError, FlockResult};

// ── Validation helpers ────────────────────────────────────────────────────────

fn require_positive(name: &'static str, value: f32) -> FlockResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlockError::NonPositiveLimit { name, value })
    }
}

fn require_weight(name: &'static str, value: f32) -> FlockResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlockError::InvalidWeight { name, value })
    }
}

// ── BehaviorWeights ───────────────────────────────────────────────────────────

/// Simulation-wide weights for the three interactive steering behaviors.
///
/// Boundary containment is structural and never weighted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorWeights {
    pub separation: f32,
    pub alignment:  f32,
    pub cohesion:   f32,
}

impl Default for BehaviorWeights {
    fn default() -> Self {
        Self { separation: 1.5, alignment: 1.0, cohesion: 1.0 }
    }
}

impl BehaviorWeights {
    pub fn validate(&self) -> FlockResult<()> {
        require_weight("separation", self.separation)?;
        require_weight("alignment", self.alignment)?;
        require_weight("cohesion", self.cohesion)
    }
}

// ── SpeedLimits ───────────────────────────────────────────────────────────────

/// Per-boid kinematic limits, stamped from shared config at spawn and
/// broadcast to live boids on change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedLimits {
    /// Upper bound on `|velocity|`, enforced after every integration step.
    pub max_speed: f32,
    /// Upper bound on the length of each clamped steering force.
    pub max_force: f32,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self { max_speed: 2.0, max_force: 0.05 }
    }
}

impl SpeedLimits {
    pub fn validate(&self) -> FlockResult<()> {
        require_positive("max_speed", self.max_speed)?;
        require_positive("max_force", self.max_force)
    }
}

// ── WorldBounds ───────────────────────────────────────────────────────────────

/// Soft world box used by boundary containment.
///
/// The x and z axes use a symmetric `±margin`; the vertical axis uses the
/// asymmetric `[floor, ceiling]` band ("keep the flock above ground, below
/// ceiling").  Outside the box, each violated axis receives a fixed
/// `turn_factor` nudge back toward it — containment is a small constant
/// push, not a `max_force`-clamped steering correction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub margin:      f32,
    pub floor:       f32,
    pub ceiling:     f32,
    pub turn_factor: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self { margin: 100.0, floor: 0.0, ceiling: 75.0, turn_factor: 0.5 }
    }
}

impl WorldBounds {
    pub fn validate(&self) -> FlockResult<()> {
        require_positive("margin", self.margin)?;
        require_positive("turn_factor", self.turn_factor)?;
        if !(self.floor.is_finite() && self.ceiling.is_finite() && self.floor < self.ceiling) {
            return Err(FlockError::EmptyVerticalBand {
                floor:   self.floor,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

// ── SpawnVolume ───────────────────────────────────────────────────────────────

/// Bounded box for randomized spawn positions: x and z uniform in
/// `±half_extent`, y uniform in `[0, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnVolume {
    pub half_extent: f32,
    pub height:      f32,
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self { half_extent: 50.0, height: 50.0 }
    }
}

impl SpawnVolume {
    pub fn validate(&self) -> FlockResult<()> {
        require_positive("spawn half_extent", self.half_extent)?;
        require_positive("spawn height", self.height)
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from UI panel values by the harness and passed to
/// `Sim::new`; with the `serde` feature it can be loaded from a preset file.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockConfig {
    /// Target population size for the next reset.  Must be at least 1.
    pub boid_count: u32,

    /// Weights for separation / alignment / cohesion.
    pub weights: BehaviorWeights,

    /// Shared `max_speed` / `max_force` stamped on every boid.
    pub limits: SpeedLimits,

    /// World box for boundary containment.
    pub bounds: WorldBounds,

    /// Spawn volume for randomized initial positions.
    pub spawn: SpawnVolume,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            boid_count: 32,
            weights:    BehaviorWeights::default(),
            limits:     SpeedLimits::default(),
            bounds:     WorldBounds::default(),
            spawn:      SpawnVolume::default(),
            seed:       0,
        }
    }
}

impl FlockConfig {
    /// Fail fast on any degenerate field.
    pub fn validate(&self) -> FlockResult<()> {
        if self.boid_count == 0 {
            return Err(FlockError::EmptyPopulation(self.boid_count));
        }
        self.weights.validate()?;
        self.limits.validate()?;
        self.bounds.validate()?;
        self.spawn.validate()
    }
}
