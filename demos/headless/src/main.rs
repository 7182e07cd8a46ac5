//! headless — smallest runnable demo of the rust_flock engine.
//!
//! Simulates the reference 32-boid flock for 10 simulated seconds at 60
//! ticks per second, printing a flock summary once per second and a final
//! position table.  This binary plays the role of the external harness: it
//! owns pacing and presentation, the core only ever sees `tick()` calls.

use std::time::Instant;

use anyhow::Result;

use flock_core::{FlockConfig, Tick};
use flock_sim::{Flock, FlockObserver, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT:     u32 = 32;
const SEED:           u64 = 42;
const TICKS_PER_SEC:  u64 = 60;
const SIM_SECONDS:    u64 = 10;
const REPORT_TICKS:   u64 = 60; // one summary line per simulated second

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl FlockObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, flock: &Flock) {
        if (tick.0 + 1) % REPORT_TICKS != 0 {
            return;
        }
        let n = flock.len() as f32;
        let center = flock
            .boids()
            .iter()
            .map(|b| b.position)
            .sum::<flock_core::Vec3>()
            / n;
        let mean_speed = flock.boids().iter().map(|b| b.speed()).sum::<f32>() / n;
        println!(
            "{:>6}  center ({:>7.2}, {:>6.2}, {:>7.2})  mean speed {:.3}",
            tick.to_string(),
            center.x,
            center.y,
            center.z,
            mean_speed,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== headless — rust_flock engine ===");
    println!("Boids: {BOID_COUNT}  |  Seconds: {SIM_SECONDS}  |  Seed: {SEED}");
    println!();

    let config = FlockConfig { boid_count: BOID_COUNT, seed: SEED, ..Default::default() };
    let mut sim = Sim::new(config)?;
    sim.reset();

    let t0 = Instant::now();
    sim.run_ticks(SIM_SECONDS * TICKS_PER_SEC, &mut ProgressPrinter);
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Simulated {} ticks in {:.3} s",
        sim.current_tick(),
        elapsed.as_secs_f64()
    );
    println!();

    // Final per-boid table — exactly what a renderer would consume.
    println!("{:<12} {:<28} {:<28}", "Boid", "Position", "Heading");
    println!("{}", "-".repeat(68));
    for (id, boid) in sim.flock().iter() {
        let p = boid.position;
        let h = boid.heading;
        println!(
            "{:<12} ({:>7.2}, {:>6.2}, {:>7.2})    ({:>5.2}, {:>5.2}, {:>5.2})",
            id.to_string(),
            p.x, p.y, p.z,
            h.x, h.y, h.z,
        );
    }

    Ok(())
}
