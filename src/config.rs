// Centralized configuration for world parameters

use serde::{Deserialize, Serialize};

// ====================
// World Box
// ====================
/// Width of the world box in pixels; also the right bounce boundary.
pub const DEFAULT_WIDTH: f32 = 800.0;
/// Height of the world box in pixels; also the bottom bounce boundary.
pub const DEFAULT_HEIGHT: f32 = 600.0;

// ====================
// Physics
// ====================
/// Scale factor of the inverse-square force law. Tuned for feel, not physics.
pub const DEFAULT_COULOMB_K: f32 = 1000.0;
/// Fixed timestep used for force integration.
pub const DEFAULT_DT: f32 = 0.1;

// ====================
// Particle Defaults
// ====================
pub const DEFAULT_RADIUS: f32 = 20.0;
pub const DEFAULT_MASS: f32 = 1.0;

// ====================
// Sling Gesture
// ====================
/// Grab zone is `radius * GRAB_RADIUS_FACTOR`, compared against squared distance.
pub const GRAB_RADIUS_FACTOR: f32 = 40.0;
/// Drag distance is divided by this to get the impulse magnitude.
pub const IMPULSE_DIVISOR: f32 = 1000.0;

// ====================
// Overlays
// ====================
pub const FORCE_DISPLAY_SCALE: f32 = 1.0e4;
pub const VELOCITY_DISPLAY_SCALE: f32 = 500.0;

/// Constants the simulation is built with. Fixed once the world exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub coulomb_k: f32,
    pub dt: f32,
    pub default_radius: f32,
    pub default_mass: f32,
    pub grab_radius_factor: f32,
    pub impulse_divisor: f32,
    pub force_display_scale: f32,
    pub velocity_display_scale: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            coulomb_k: DEFAULT_COULOMB_K,
            dt: DEFAULT_DT,
            default_radius: DEFAULT_RADIUS,
            default_mass: DEFAULT_MASS,
            grab_radius_factor: GRAB_RADIUS_FACTOR,
            impulse_divisor: IMPULSE_DIVISOR,
            force_display_scale: FORCE_DISPLAY_SCALE,
            velocity_display_scale: VELOCITY_DISPLAY_SCALE,
        }
    }
}

impl WorldConfig {
    /// Check the values that would make the world degenerate.
    pub fn validate(&self) -> Result<(), crate::init_config::ConfigError> {
        use crate::init_config::ConfigError;

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("default_radius", self.default_radius),
            ("default_mass", self.default_mass),
            ("impulse_divisor", self.impulse_divisor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidWorld(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let diameter = 2.0 * self.default_radius;
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value <= diameter {
                return Err(ConfigError::InvalidWorld(format!(
                    "{name} {value} must exceed the default atom diameter {diameter}"
                )));
            }
        }
        if !(self.dt.is_finite() && self.dt >= 0.0) {
            return Err(ConfigError::InvalidWorld(format!(
                "dt must be non-negative, got {}",
                self.dt
            )));
        }
        if !self.coulomb_k.is_finite() || !self.grab_radius_factor.is_finite() {
            return Err(ConfigError::InvalidWorld(
                "coulomb_k and grab_radius_factor must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
