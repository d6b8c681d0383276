//! Tunables for the particle field.
//!
//! Every field has a default, so a TOML file only needs the keys it wants
//! to override:
//!
//! ```toml
//! particle_count = 120
//! pointer_radius = 90.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of particles created by [`crate::field::ParticleField::reset`].
    pub particle_count: usize,
    /// Initial velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Particles strictly closer than this to the pointer are pushed away.
    pub pointer_radius: f32,
    /// Distance a particle is pushed per frame while inside the radius.
    pub repel_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 80,
            max_speed: 0.3,
            min_size: 1.0,
            max_size: 3.0,
            pointer_radius: 120.0,
            repel_step: 2.0,
        }
    }
}

impl Config {
    /// Checks that every value is usable by the simulator.
    ///
    /// ### Returns
    /// `Ok(())`, or [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        let finite_non_negative = [
            ("max_speed", self.max_speed),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("repel_step", self.repel_step),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if self.min_size > self.max_size {
            return Err(Error::Config(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if !self.pointer_radius.is_finite() || self.pointer_radius <= 0.0 {
            return Err(Error::Config(format!(
                "pointer_radius must be finite and > 0, got {}",
                self.pointer_radius
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`Config::load`], but a missing file yields [`Config::default`].
    ///
    /// A file that exists and fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
