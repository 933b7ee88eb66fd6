// simulation/simulation.rs
// Contains the Simulation struct and the per-frame driver

use super::collision;
use super::forces;
use crate::body::Body;
use crate::config::WorldConfig;
use crate::profile_scope;
use ultraviolet::Vec2;

/// What happened during one call to [`Simulation::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame: usize,
    /// Colliding pairs in resolution order.
    pub collisions: Vec<(usize, usize)>,
}

/// The world: bodies, the constants they live under, and the grab state.
pub struct Simulation {
    pub config: WorldConfig,
    pub bodies: Vec<Body>,
    pub frame: usize,
    /// Accumulated simulated time. Informational only.
    pub time_elapsed: f32,
    pub(crate) grabbed: Option<usize>,
}

impl Simulation {
    pub fn new(config: WorldConfig, bodies: Vec<Body>) -> Self {
        Self {
            config,
            bodies,
            frame: 0,
            time_elapsed: 0.0,
            grabbed: None,
        }
    }

    /// Advance one frame:
    /// forces, velocity integration into staging, collision resolution into
    /// staging, commit, then position integration with wall bounce.
    pub fn step(&mut self) -> FrameReport {
        profile_scope!("simulation_step");
        let dt = self.config.dt;

        forces::attract(self);

        for body in &mut self.bodies {
            body.integrate_velocity(dt);
        }

        let collisions = collision::collide(self);
        if !collisions.is_empty() {
            log::debug!("frame {}: collisions {:?}", self.frame, collisions);
        }

        for body in &mut self.bodies {
            body.commit();
        }

        self.iterate();

        self.time_elapsed += dt;
        self.frame += 1;

        debug_assert!(
            self.bodies.iter().all(Body::is_finite),
            "non-finite body state after frame {}",
            self.frame
        );
        log::trace!(
            "frame {} t={:.3} collisions={}",
            self.frame,
            self.time_elapsed,
            collisions.len()
        );

        FrameReport {
            frame: self.frame,
            collisions,
        }
    }

    /// Position integration and wall bounce for every body.
    pub fn iterate(&mut self) {
        profile_scope!("iterate");
        let (width, height) = (self.config.width, self.config.height);
        for body in &mut self.bodies {
            body.update(width, height);
        }
    }

    /// Committed velocities, in body order.
    pub fn velocities(&self) -> Vec<Vec2> {
        self.bodies.iter().map(|b| b.vel).collect()
    }

    /// Total kinetic energy from committed velocities.
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.vel.mag_sq())
            .sum()
    }
}
