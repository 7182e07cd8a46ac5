//! The `Sim` struct: tick driver and external call contract.

use flock_core::{
    BehaviorWeights, FlockConfig, FlockError, FlockResult, SimRng, SpeedLimits, Tick, WorldBounds,
};

use crate::steering::SteeringBundle;
use crate::{Flock, FlockObserver};

/// The simulation driver.
///
/// Two states: **Idle** (empty flock, every `tick()` is a no-op) and
/// **Running** (population present).  The first [`reset`][Self::reset]
/// transitions Idle → Running; there is no Paused state — a harness pauses by
/// simply not calling `tick()`.
///
/// A tick is a two-phase simultaneous update:
///
/// 1. **Steer**: compute a [`SteeringBundle`] for every boid against the
///    frozen pre-tick population, so no boid observes an already-updated
///    neighbor.
/// 2. **Integrate**: apply each bundle and integrate every boid exactly once.
///
/// Nothing executes concurrently with a tick; external readers take
/// `sim.flock()` between ticks only.
pub struct Sim {
    config: FlockConfig,
    flock:  Flock,
    rng:    SimRng,
    tick:   Tick,
}

impl Sim {
    // ── Construction and configuration ────────────────────────────────────

    /// Validate `config` and create an Idle simulation (no population yet).
    pub fn new(config: FlockConfig) -> FlockResult<Self> {
        config.validate()?;
        Ok(Self {
            rng: SimRng::new(config.seed),
            config,
            flock: Flock::empty(),
            tick: Tick::ZERO,
        })
    }

    /// Discard the current population and spawn `config.boid_count` fresh
    /// boids.  Always yields exactly that many, whatever the prior size.
    pub fn reset(&mut self) {
        let spawn_seed: u64 = self.rng.random();
        self.flock.respawn(
            self.config.boid_count,
            self.config.limits,
            &self.config.spawn,
            spawn_seed,
        );
    }

    /// Change the target population size and respawn.  "32 boids → 50 boids"
    /// discards all 32 and spawns 50 new ones.
    pub fn resize(&mut self, boid_count: u32) -> FlockResult<()> {
        if boid_count == 0 {
            return Err(FlockError::EmptyPopulation(boid_count));
        }
        self.config.boid_count = boid_count;
        self.reset();
        Ok(())
    }

    /// Replace the behavior weights.  Takes effect from the next tick.
    pub fn set_weights(&mut self, weights: BehaviorWeights) -> FlockResult<()> {
        weights.validate()?;
        self.config.weights = weights;
        Ok(())
    }

    /// Replace the world bounds used by containment.
    pub fn set_bounds(&mut self, bounds: WorldBounds) -> FlockResult<()> {
        bounds.validate()?;
        self.config.bounds = bounds;
        Ok(())
    }

    /// Adjust `max_speed` and/or `max_force` and broadcast the new limits to
    /// every live boid (boids are mutated, not respawned).
    pub fn update_limits(
        &mut self,
        max_speed: Option<f32>,
        max_force: Option<f32>,
    ) -> FlockResult<()> {
        let limits = SpeedLimits {
            max_speed: max_speed.unwrap_or(self.config.limits.max_speed),
            max_force: max_force.unwrap_or(self.config.limits.max_force),
        };
        limits.validate()?;
        self.config.limits = limits;
        self.flock.update_limits(limits);
        Ok(())
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance the whole population by one fixed unit step.
    ///
    /// Atomic from the caller's point of view: every boid steers against the
    /// same frozen snapshot, then every boid integrates exactly once.  A
    /// no-op while Idle.
    pub fn tick(&mut self) {
        if !self.flock.is_empty() {
            // Phase 1: steer against the frozen pre-tick population.
            let snapshot = self.flock.boids();
            let bundles: Vec<SteeringBundle> = snapshot
                .iter()
                .map(|boid| {
                    SteeringBundle::compute(boid, snapshot, &self.config.weights, &self.config.bounds)
                })
                .collect();

            // Phase 2: commit forces and integrate.
            for (boid, bundle) in self.flock.boids_mut().iter_mut().zip(&bundles) {
                bundle.apply_to(boid);
                boid.integrate();
            }
        }
        self.tick = self.tick + 1;
    }

    /// Run exactly `n` ticks, invoking observer hooks at every boundary.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.tick();
            observer.on_tick_end(now, &self.flock);
        }
    }

    // ── Outbound data ─────────────────────────────────────────────────────

    /// The live population.  Safe to read between ticks only.
    #[inline]
    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Ticks completed so far.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    #[cfg(test)]
    pub(crate) fn flock_mut(&mut self) -> &mut Flock {
        &mut self.flock
    }
}
