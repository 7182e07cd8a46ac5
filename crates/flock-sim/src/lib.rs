//! `flock-sim` — the simulation core of the `rust_flock` engine.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`boid`]     | `Boid` — kinematic state, force accumulation, integration |
//! | [`steering`] | The behavior set and the `SteeringBundle` force composer  |
//! | [`flock`]    | `Flock` — the population manager                          |
//! | [`sim`]      | `Sim` — the tick driver and the external call contract    |
//! | [`observer`] | `FlockObserver` tick-boundary callbacks                   |
//!
//! # Tick data flow
//!
//! One direction per tick:
//!
//! ```text
//! Sim::tick → frozen Flock snapshot → steering behaviors → SteeringBundle
//!           → Boid::apply_force + Boid::integrate → updated Flock
//! ```
//!
//! The external render harness reads `sim.flock()` between ticks and is
//! otherwise uninvolved.

pub mod boid;
pub mod flock;
pub mod observer;
pub mod sim;
pub mod steering;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boid::Boid;
pub use flock::Flock;
pub use observer::{FlockObserver, NoopObserver};
pub use sim::Sim;
pub use steering::SteeringBundle;
