//! Electrostatic force evaluation.
//!
//! Every body feels an inverse-square push or pull from every other body.
//! The result is a pure function of the current positions and is recomputed
//! from scratch each frame.

use crate::body::Body;
use crate::profile_scope;
use crate::simulation::Simulation;
use crate::utils::{distance, Polar};
use std::f32::consts::PI;
use ultraviolet::Vec2;

/// Net force on `bodies[index]` from every other body.
///
/// - `f = k * |q_i * q_j| / d^2`
/// - like charges point away from the other body, opposite charges toward it
/// - pairs at zero distance are skipped
pub fn net_force(index: usize, bodies: &[Body], k: f32) -> Polar {
    let body = &bodies[index];
    let mut sum = Vec2::zero();
    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        let d = distance(body.pos, other.pos);
        if d == 0.0 {
            continue;
        }
        let product = body.charge() * other.charge();
        let f = k * product.abs() / (d * d);
        let mut t = (other.pos.y - body.pos.y).atan2(other.pos.x - body.pos.x);
        if product > 0.0 {
            t += PI;
        }
        let (sin, cos) = t.sin_cos();
        sum.x += f * cos;
        sum.y += f * sin;
    }
    Polar::from_cartesian(sum)
}

/// Recompute and store the net force on every body.
pub fn attract(sim: &mut Simulation) {
    profile_scope!("forces_attract");
    let k = sim.config.coulomb_k;
    let forces: Vec<Polar> = (0..sim.bodies.len())
        .map(|i| net_force(i, &sim.bodies, k))
        .collect();
    for (body, force) in sim.bodies.iter_mut().zip(forces) {
        body.set_force(force);
    }
}
