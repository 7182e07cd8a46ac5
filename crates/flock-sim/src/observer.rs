//! Tick-boundary observer trait for progress reporting and render hand-off.

use flock_core::Tick;

use crate::Flock;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_tick_end` hands out the flock
/// between ticks — the only moment an external reader may observe it.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, flock: &Flock) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} boids", flock.len());
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before a tick's forces are computed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every boid has integrated, with the post-tick population.
    fn on_tick_end(&mut self, _tick: Tick, _flock: &Flock) {}
}

/// A [`FlockObserver`] that does nothing.  Use when you need `run_ticks` but
/// don't want callbacks.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
