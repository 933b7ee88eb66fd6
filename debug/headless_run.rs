use charge_sandbox::*;
use log::LevelFilter;
use std::time::Instant;

const FRAMES: usize = 1000;
const SEPARATION: f32 = 500.0;

fn main() {
    app::init_logging(LevelFilter::Debug);
    log::info!("=== Headless head-on run ===");

    let config = config::WorldConfig::default();
    let bodies = scenario::head_on_pair(&config, SEPARATION);
    let mut sim = simulation::Simulation::new(config, bodies);

    let start = Instant::now();
    let mut collisions = 0;
    for _ in 0..FRAMES {
        let report = sim.step();
        collisions += report.collisions.len();

        if sim.frame % 100 == 0 {
            let d = utils::distance(sim.bodies[0].pos, sim.bodies[1].pos);
            log::info!(
                "frame {:>4}: distance {:>8.3}, kinetic energy {:.6}",
                sim.frame,
                d,
                sim.kinetic_energy()
            );
        }

        if sim.bodies.iter().any(|b| !b.is_finite()) {
            log::error!("non-finite state at frame {}", sim.frame);
            break;
        }
    }

    log::info!(
        "{} frames, {} collisions, t = {:.1}, took {:.2}ms",
        sim.frame,
        collisions,
        sim.time_elapsed,
        start.elapsed().as_secs_f64() * 1000.0
    );
}
