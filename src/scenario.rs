// scenario.rs
// Builds the starting bodies from configuration and provides the built-in layouts

use crate::body::Body;
use crate::config::WorldConfig;
use crate::init_config::{InitConfig, ScatterConfig};
use crate::simulation::collision::is_colliding;
use ultraviolet::Vec2;

/// Placement attempts per scattered atom before giving up on it.
pub const RANDOM_ATTEMPTS: usize = 100;

/// Distance of the default pair from their corners.
pub const CORNER_INSET: f32 = 50.0;

/// The two corner atoms the sandbox starts with when nothing else is configured.
/// In a box too small for the inset they are pulled in until they touch the walls.
pub fn default_pair(config: &WorldConfig) -> Vec<Body> {
    let r = config.default_radius;
    let inside = |v: f32, extent: f32| v.clamp(r, extent - r);
    let near = Vec2::new(inside(CORNER_INSET, config.width), inside(CORNER_INSET, config.height));
    let far = Vec2::new(
        inside(config.width - CORNER_INSET, config.width),
        inside(config.height - CORNER_INSET, config.height),
    );
    vec![
        Body::with_defaults(near, Vec2::new(0.01, -0.1), -1.0, config),
        Body::with_defaults(far, Vec2::new(-0.1, 0.1), 1.0, config),
    ]
}

/// A negative and a positive atom at rest, `separation` apart on the
/// horizontal mid-line.
pub fn head_on_pair(config: &WorldConfig, separation: f32) -> Vec<Body> {
    let center = Vec2::new(config.width / 2.0, config.height / 2.0);
    let offset = Vec2::new(separation / 2.0, 0.0);
    vec![
        Body::with_defaults(center - offset, Vec2::zero(), -1.0, config),
        Body::with_defaults(center + offset, Vec2::zero(), 1.0, config),
    ]
}

/// Place `scatter.count` atoms at seeded random spots that overlap neither
/// `existing` nor each other. Charges alternate starting with positive.
pub fn scatter(config: &WorldConfig, scatter: &ScatterConfig, existing: &[Body]) -> Vec<Body> {
    let mut rng = fastrand::Rng::with_seed(scatter.seed);
    let r = config.default_radius;
    let mut placed: Vec<Body> = Vec::with_capacity(scatter.count);

    for n in 0..scatter.count {
        let charge = if n % 2 == 0 { 1.0 } else { -1.0 };
        let candidate = (0..RANDOM_ATTEMPTS).find_map(|_| {
            let pos = Vec2::new(
                r + rng.f32() * (config.width - 2.0 * r),
                r + rng.f32() * (config.height - 2.0 * r),
            );
            let (sin, cos) = (rng.f32() * std::f32::consts::TAU).sin_cos();
            let vel = Vec2::new(cos, sin) * scatter.speed;
            let body = Body::with_defaults(pos, vel, charge, config);
            let free = existing
                .iter()
                .chain(placed.iter())
                .all(|other| !is_colliding(&body, other));
            free.then_some(body)
        });
        match candidate {
            Some(body) => placed.push(body),
            None => log::warn!(
                "could not place scattered atom {} after {} attempts",
                n,
                RANDOM_ATTEMPTS
            ),
        }
    }

    placed
}

/// Bodies described by `init`, falling back to [`default_pair`] when it names none.
pub fn build_bodies(init: &InitConfig) -> Vec<Body> {
    let world = &init.world;
    let mut bodies: Vec<Body> = init
        .particles
        .atoms
        .iter()
        .map(|atom| {
            Body::new(
                Vec2::from(atom.pos),
                Vec2::from(atom.vel),
                atom.mass(world),
                atom.radius(world),
                atom.charge,
            )
        })
        .collect();

    if let Some(ref layout) = init.particles.scatter {
        let extra = scatter(world, layout, &bodies);
        bodies.extend(extra);
    }

    if bodies.is_empty() {
        log::info!("no atoms configured, using the default pair");
        return default_pair(world);
    }
    bodies
}
