// init_config.rs
// Parses the world constants and starting particles from init_config.toml,
// which is baked into the binary at compile time

use crate::config::WorldConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The repository's `init_config.toml`.
pub const EMBEDDED_CONFIG: &str = include_str!("../init_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid world: {0}")]
    InvalidWorld(String),
    #[error("invalid atom {index}: {reason}")]
    InvalidBody { index: usize, reason: String },
    #[error("invalid scatter: {0}")]
    InvalidScatter(String),
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub particles: ParticlesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticlesConfig {
    #[serde(default)]
    pub atoms: Vec<AtomConfig>,
    pub scatter: Option<ScatterConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AtomConfig {
    pub pos: [f32; 2],
    #[serde(default)]
    pub vel: [f32; 2],
    pub charge: f32,
    /// Falls back to the world default when omitted.
    pub radius: Option<f32>,
    /// Falls back to the world default when omitted.
    pub mass: Option<f32>,
}

/// Randomly placed atoms with alternating charge.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScatterConfig {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
    /// Initial speed, in a random direction.
    #[serde(default)]
    pub speed: f32,
}

impl InitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: InitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        for (index, atom) in self.particles.atoms.iter().enumerate() {
            atom.validate(&self.world)
                .map_err(|reason| ConfigError::InvalidBody { index, reason })?;
        }
        if let Some(scatter) = &self.particles.scatter {
            scatter.validate().map_err(ConfigError::InvalidScatter)?;
        }
        Ok(())
    }
}

impl AtomConfig {
    pub fn radius(&self, world: &WorldConfig) -> f32 {
        self.radius.unwrap_or(world.default_radius)
    }

    pub fn mass(&self, world: &WorldConfig) -> f32 {
        self.mass.unwrap_or(world.default_mass)
    }

    fn validate(&self, world: &WorldConfig) -> Result<(), String> {
        let values = [self.pos[0], self.pos[1], self.vel[0], self.vel[1], self.charge];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("position, velocity and charge must be finite".to_string());
        }
        let radius = self.radius(world);
        let mass = self.mass(world);
        if !(radius.is_finite() && radius > 0.0) {
            return Err(format!("radius must be positive, got {radius}"));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(format!("mass must be positive, got {mass}"));
        }
        let [x, y] = self.pos;
        if x < radius || x > world.width - radius || y < radius || y > world.height - radius {
            return Err(format!("({x}, {y}) with radius {radius} does not fit in the world"));
        }
        Ok(())
    }
}

impl ScatterConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(format!("speed must be finite and non-negative, got {}", self.speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = InitConfig::embedded().expect("init_config.toml should be valid");
        assert_eq!(config.world, WorldConfig::default());
        assert_eq!(config.particles.atoms.len(), 2);
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let config = InitConfig::from_toml_str("").unwrap();
        assert_eq!(config.world, WorldConfig::default());
        assert!(config.particles.atoms.is_empty());
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn partial_world_keeps_other_defaults() {
        let config = InitConfig::from_toml_str(
            r#"
            log_level = "debug"
            [world]
            width = 1024.0
            dt = 0.05
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 1024.0);
        assert_eq!(config.world.dt, 0.05);
        assert_eq!(config.world.height, crate::config::DEFAULT_HEIGHT);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn atom_defaults_and_overrides() {
        let config = InitConfig::from_toml_str(
            r#"
            [[particles.atoms]]
            pos = [100.0, 100.0]
            charge = 1.0

            [[particles.atoms]]
            pos = [300.0, 200.0]
            vel = [0.5, 0.0]
            charge = -2.0
            radius = 10.0
            mass = 4.0
            "#,
        )
        .unwrap();
        let world = &config.world;
        let atoms = &config.particles.atoms;
        assert_eq!(atoms[0].vel, [0.0, 0.0]);
        assert_eq!(atoms[0].radius(world), world.default_radius);
        assert_eq!(atoms[1].radius(world), 10.0);
        assert_eq!(atoms[1].mass(world), 4.0);
    }

    #[test]
    fn rejects_degenerate_world() {
        let err = InitConfig::from_toml_str("[world]\nwidth = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorld(_)), "got {err}");

        let err = InitConfig::from_toml_str("[world]\ndt = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorld(_)), "got {err}");
    }

    #[test]
    fn rejects_world_smaller_than_an_atom() {
        let err = InitConfig::from_toml_str("[world]\nwidth = 30.0\nheight = 30.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorld(_)), "got {err}");

        let err = InitConfig::from_toml_str("[world]\nheight = 40.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorld(_)), "got {err}");

        let config = InitConfig::from_toml_str("[world]\nwidth = 60.0\nheight = 60.0").unwrap();
        assert_eq!(config.world.width, 60.0);
    }

    #[test]
    fn rejects_non_finite_scatter_speed() {
        for speed in ["inf", "nan", "-inf", "-1.0"] {
            let content = format!("[particles.scatter]\ncount = 2\nseed = 1\nspeed = {speed}");
            let err = InitConfig::from_toml_str(&content).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidScatter(_)), "speed {speed}: got {err}");
        }

        let config =
            InitConfig::from_toml_str("[particles.scatter]\ncount = 2\nspeed = 0.5").unwrap();
        assert_eq!(config.particles.scatter.map(|s| s.speed), Some(0.5));
    }

    #[test]
    fn rejects_atom_outside_box() {
        let err = InitConfig::from_toml_str(
            r#"
            [[particles.atoms]]
            pos = [10.0, 300.0]
            charge = 1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBody { index: 0, .. }), "got {err}");
    }

    #[test]
    fn reports_parse_errors() {
        let err = InitConfig::from_toml_str("[world\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
