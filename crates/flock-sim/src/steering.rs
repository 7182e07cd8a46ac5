//! The steering behavior set and the per-boid force composer.
//!
//! Every behavior is a pure function of the acting boid and the full
//! population snapshot (which includes the acting boid itself — self is
//! excluded by the strict `d > 0` distance check).  Three of the four
//! interactive behaviors share one shape: gather neighbors within a radius,
//! aggregate a field, convert the aggregate into a bounded velocity change.
//! That shape is factored into [`neighbor_average`] and [`velocity_match`];
//! separation keeps its own loop because it weights each contribution by
//! inverse distance.

use flock_core::{BehaviorWeights, Vec3, VecExt, WorldBounds};

use crate::Boid;

/// Repulsion radius: only very close neighbors push back.
pub const SEPARATION_RADIUS: f32 = 5.0;

/// Perception radius shared by alignment and cohesion.
pub const NEIGHBOR_RADIUS: f32 = 20.0;

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Average `field(other)` over all neighbors with `0 < d < radius`.
///
/// Returns `None` when no neighbor qualifies, which every caller maps to the
/// zero steering force (isolation case).
fn neighbor_average(
    boid:   &Boid,
    others: &[Boid],
    radius: f32,
    field:  impl Fn(&Boid) -> Vec3,
) -> Option<Vec3> {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for other in others {
        let d = boid.position.distance(other.position);
        if d > 0.0 && d < radius {
            sum += field(other);
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f32)
}

/// Reynolds steering: rescale `desired` to full speed, subtract the current
/// velocity, and clamp the correction to `max_force`.
///
/// A zero `desired` rescales to zero (defined fallback, never NaN), so the
/// result degrades to braking toward a stop, bounded by `max_force`.
fn velocity_match(boid: &Boid, desired: Vec3) -> Vec3 {
    (desired.with_length(boid.max_speed) - boid.velocity).clamp_length_max(boid.max_force)
}

// ── Behaviors ─────────────────────────────────────────────────────────────────

/// Repulsion from very close neighbors, weighted inversely by distance.
pub fn separation(boid: &Boid, others: &[Boid]) -> Vec3 {
    let mut steer = Vec3::ZERO;
    let mut count = 0u32;

    for other in others {
        let d = boid.position.distance(other.position);
        // d == 0 excluded: it is either self or an exactly coincident
        // neighbor with no defined push direction.
        if d > 0.0 && d < SEPARATION_RADIUS {
            steer += (boid.position - other.position).normalize() / d;
            count += 1;
        }
    }

    if count > 0 {
        steer /= count as f32;
    }
    if steer.length_squared() > 0.0 {
        steer = velocity_match(boid, steer);
    }
    steer
}

/// Match the average heading of neighbors within [`NEIGHBOR_RADIUS`].
pub fn alignment(boid: &Boid, others: &[Boid]) -> Vec3 {
    neighbor_average(boid, others, NEIGHBOR_RADIUS, |o| o.velocity)
        .map(|avg| velocity_match(boid, avg))
        .unwrap_or(Vec3::ZERO)
}

/// Steer toward the local center of mass of neighbors within
/// [`NEIGHBOR_RADIUS`].
pub fn cohesion(boid: &Boid, others: &[Boid]) -> Vec3 {
    neighbor_average(boid, others, NEIGHBOR_RADIUS, |o| o.position)
        .map(|center| seek(boid, center))
        .unwrap_or(Vec3::ZERO)
}

/// Steer toward an arbitrary target point.  Pure; reused by cohesion and by
/// any future goal-seeking behavior.
pub fn seek(boid: &Boid, target: Vec3) -> Vec3 {
    velocity_match(boid, target - boid.position)
}

/// Soft world-box repulsion.
///
/// Independent per axis: a fixed `turn_factor` nudge back toward the box on
/// each violated axis, exactly zero on in-bounds axes.  Deliberately not
/// clamped by `max_force` — containment must win against the flocking forces
/// no matter how low the force limit is tuned.
pub fn contain(boid: &Boid, bounds: &WorldBounds) -> Vec3 {
    let mut steer = Vec3::ZERO;
    let p = boid.position;

    if p.x > bounds.margin {
        steer.x = -bounds.turn_factor;
    } else if p.x < -bounds.margin {
        steer.x = bounds.turn_factor;
    }

    // Asymmetric vertical band: above ground, below ceiling.
    if p.y > bounds.ceiling {
        steer.y = -bounds.turn_factor;
    } else if p.y < bounds.floor {
        steer.y = bounds.turn_factor;
    }

    if p.z > bounds.margin {
        steer.z = -bounds.turn_factor;
    } else if p.z < -bounds.margin {
        steer.z = bounds.turn_factor;
    }

    steer
}

// ── Force composer ────────────────────────────────────────────────────────────

/// The four per-tick steering outputs for one boid, with behavior weights
/// already applied (containment is structural and stays unweighted).
///
/// Computing bundles for the whole population against a frozen snapshot
/// before any boid integrates is what makes the tick a simultaneous update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringBundle {
    pub separation:  Vec3,
    pub alignment:   Vec3,
    pub cohesion:    Vec3,
    pub containment: Vec3,
}

impl SteeringBundle {
    /// Evaluate all behaviors for `boid` against the `snapshot` population.
    pub fn compute(
        boid:     &Boid,
        snapshot: &[Boid],
        weights:  &BehaviorWeights,
        bounds:   &WorldBounds,
    ) -> Self {
        Self {
            separation:  separation(boid, snapshot) * weights.separation,
            alignment:   alignment(boid, snapshot) * weights.alignment,
            cohesion:    cohesion(boid, snapshot) * weights.cohesion,
            containment: contain(boid, bounds),
        }
    }

    /// Accumulate every component onto `boid`.  Order is irrelevant — force
    /// accumulation is commutative.
    pub fn apply_to(&self, boid: &mut Boid) {
        boid.apply_force(self.separation);
        boid.apply_force(self.alignment);
        boid.apply_force(self.cohesion);
        boid.apply_force(self.containment);
    }
}
