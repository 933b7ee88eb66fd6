// body/types.rs
// Contains the Body struct: intrinsic properties plus committed and staged kinematic state

use crate::config::WorldConfig;
use crate::utils::Polar;
use ultraviolet::Vec2;

/// Sign class of a charge. Zero counts as negative.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn of(charge: f32) -> Self {
        if charge > 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    pub fn color(&self) -> [u8; 4] {
        match self {
            Polarity::Positive => [255, 0, 0, 255], // Red
            Polarity::Negative => [0, 0, 255, 255], // Blue
        }
    }
}

/// A charged point mass with a finite radius.
///
/// `vel` is the committed velocity: rendering, the force law and collision
/// math all read it. Anything that changes velocity during a frame writes
/// `staged_vel` instead, and [`Body::commit`] promotes it once per frame.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub(crate) staged_vel: Vec2,
    pub(crate) force: Polar,
    radius: f32,
    mass: f32,
    charge: f32,
    polarity: Polarity,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, mass: f32, radius: f32, charge: f32) -> Self {
        Self {
            pos,
            vel,
            staged_vel: vel,
            force: Polar::zero(),
            radius,
            mass,
            charge,
            polarity: Polarity::of(charge),
        }
    }

    /// Create a Body using the world's default mass and radius
    pub fn with_defaults(pos: Vec2, vel: Vec2, charge: f32, config: &WorldConfig) -> Self {
        Self::new(pos, vel, config.default_mass, config.default_radius, charge)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn charge(&self) -> f32 {
        self.charge
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn color(&self) -> [u8; 4] {
        self.polarity.color()
    }

    /// Net force from the last force pass.
    pub fn force(&self) -> Polar {
        self.force
    }

    /// Velocity that will become authoritative at the next commit.
    pub fn staged_vel(&self) -> Vec2 {
        self.staged_vel
    }

    /// Replace the stored force. Forces are recomputed every frame, never accumulated.
    pub fn set_force(&mut self, force: Polar) {
        self.force = force;
    }

    /// Forward-Euler step of the staged velocity using the stored force.
    pub fn integrate_velocity(&mut self, dt: f32) {
        if dt == 0.0 {
            return;
        }
        let (sin, cos) = self.force.angle.sin_cos();
        self.staged_vel.x += self.force.magnitude * cos * dt / self.mass;
        self.staged_vel.y += self.force.magnitude * sin * dt / self.mass;
    }

    /// Add an instantaneous change of velocity, bypassing the force path.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.staged_vel += impulse;
    }

    /// Make the staged velocity authoritative.
    pub fn commit(&mut self) {
        self.vel = self.staged_vel;
    }

    /// Advance the position by one committed-velocity step and bounce off the
    /// walls of a `width` x `height` box.
    ///
    /// Displacement is the raw velocity, not scaled by `dt`. A bounce clamps
    /// the position immediately but only stages the reflected velocity, so it
    /// takes effect at the next commit.
    pub fn update(&mut self, width: f32, height: f32) {
        self.pos += self.vel;

        if self.pos.x + self.radius >= width {
            self.pos.x = width - self.radius;
            self.staged_vel.x = -self.vel.x;
        } else if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.staged_vel.x = -self.vel.x;
        }

        if self.pos.y + self.radius >= height {
            self.pos.y = height - self.radius;
            self.staged_vel.y = -self.vel.y;
        } else if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.staged_vel.y = -self.vel.y;
        }
    }

    /// True when every kinematic component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite()
            && self.pos.y.is_finite()
            && self.vel.x.is_finite()
            && self.vel.y.is_finite()
            && self.staged_vel.x.is_finite()
            && self.staged_vel.y.is_finite()
    }
}
