//! `flock-core` — foundational types for the `rust_flock` engine.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `BoidId`                                            |
//! | [`vec`]     | `Vec3` re-export, `VecExt` steering helpers         |
//! | [`time`]    | `Tick`                                              |
//! | [`rng`]     | `BoidRng` (per-boid), `SimRng` (global)             |
//! | [`config`]  | `FlockConfig` and its sub-structs, with validation  |
//! | [`error`]   | `FlockError`, `FlockResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and ID types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BehaviorWeights, FlockConfig, SpawnVolume, SpeedLimits, WorldBounds};
pub use error::{FlockError, FlockResult};
pub use ids::BoidId;
pub use rng::{BoidRng, SimRng};
pub use time::Tick;
pub use vec::{Vec3, VecExt};
