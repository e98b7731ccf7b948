//! Headless three-body run
//!
//! Starts the default three rows with a black hole and an orbit attractor,
//! runs with merging enabled and prints the diagnostics once per second of
//! frame time.
//!
//! Run with: cargo run --package gravity-sandbox --example three_body

use gravity_sandbox::attractor::OrbitAttractor;
use gravity_sandbox::config::SimulationConfig;
use gravity_sandbox::input::BodyInput;
use gravity_sandbox::{SimError, Simulation};
use nalgebra::{Point2, Vector2};

const FRAME: f64 = 1.0 / 60.0;
const SECONDS: usize = 20;

fn main() -> Result<(), SimError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimulationConfig {
        merge: true,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config);

    let size = sim.config().world_size();
    let rows: Vec<BodyInput> = (0..3).map(|i| BodyInput::default_row(i, size)).collect();
    sim.start(&rows);

    sim.add_fixed_attractor(Point2::new(size.x * 0.25, size.y * 0.5), 5_000.0)?;
    sim.add_orbit_attractor(OrbitAttractor::new(
        Point2::new(size.x * 0.5, size.y * 0.5),
        Vector2::new(200.0, 120.0),
        0.5,
        2_000.0,
    )?)?;

    println!("Gravity sandbox: three bodies, one black hole, one orbit\n");
    println!("{}", "=".repeat(60));
    println!("{:>6} {:>7} {:>14} {:>14} {:>14}", "t", "bodies", "kinetic", "potential", "total");

    for second in 1..=SECONDS {
        for _ in 0..60 {
            sim.step(FRAME, 1.0, 1.0);
        }

        let diag = sim.diagnostics();
        println!(
            "{:>6} {:>7} {:>14.3} {:>14.3} {:>14.3}",
            second,
            sim.bodies().len(),
            diag.kinetic,
            diag.potential,
            diag.total_energy
        );
    }

    println!("{}", "=".repeat(60));
    for (body, energy) in sim.bodies().iter().zip(&sim.diagnostics().bodies) {
        println!(
            "{:?}: mass {:.0}, position ({:.1}, {:.1}), speed {:.3}",
            body.id, body.mass, body.position.x, body.position.y, energy.speed
        );
        if let Some(last) = body.trail.latest() {
            println!(
                "    trail: {} points, last at ({:.1}, {:.1})",
                body.trail.len(),
                last.x,
                last.y
            );
        }
    }

    if let Some(com) = sim.state().center_of_mass() {
        println!("\nCenter of mass: ({:.1}, {:.1})", com.x, com.y);
    }

    Ok(())
}
