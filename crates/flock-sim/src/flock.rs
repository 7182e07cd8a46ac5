//! The population manager.

use flock_core::{BoidId, SpawnVolume, SpeedLimits};

use crate::Boid;

/// The live boid population, in insertion order.
///
/// Order carries no simulation meaning (the tick is a simultaneous update);
/// it only makes iteration deterministic for tests and renderers.  Membership
/// changes exclusively through [`respawn`][Self::respawn] — there is no
/// incremental add/remove.
#[derive(Default)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    /// An empty flock — the tick driver's Idle state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Discard every current boid and spawn exactly `count` fresh ones.
    ///
    /// Each boid draws its randomized position and velocity from its own
    /// deterministic RNG (seeded from `spawn_seed` and its `BoidId`) and is
    /// stamped with `limits`.  A resize is a full respawn: no boid survives.
    pub(crate) fn respawn(
        &mut self,
        count:      u32,
        limits:     SpeedLimits,
        volume:     &SpawnVolume,
        spawn_seed: u64,
    ) {
        self.boids = (0..count)
            .map(|i| Boid::spawn(BoidId(i), spawn_seed, limits, volume))
            .collect();
    }

    /// Broadcast new limits to every live boid (mutation, not respawn).
    /// Takes effect from the next tick.
    pub(crate) fn update_limits(&mut self, limits: SpeedLimits) {
        for boid in &mut self.boids {
            boid.max_speed = limits.max_speed;
            boid.max_force = limits.max_force;
        }
    }

    /// Read-only snapshot of the population for behaviors and renderers.
    #[inline]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Iterator over `(BoidId, &Boid)` in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (BoidId, &Boid)> + '_ {
        self.boids
            .iter()
            .enumerate()
            .map(|(i, b)| (BoidId(i as u32), b))
    }
}
