//! Scenario files: the ship's starting state, the bodies and the
//! simulation constants, read from TOML.
//!
//! ```toml
//! [config]
//! gravity_constant = 20.0
//! tick_size = 0.01
//! lookahead_depth = 10
//!
//! [ship]
//! position = [0.0, 0.0]
//! velocity = [0.0, 0.0]
//! mass = 2.0
//! radius = 5.0
//!
//! [[bodies]]
//! position = [200.0, 100.0]
//! mass = 100.0
//! radius = 20.0
//! ```

use crate::config::{
    SimConfig, DEFAULT_GRAVITY_CONSTANT, DEFAULT_LOOKAHEAD_DEPTH, DEFAULT_TICK_SIZE,
};
use crate::engine::{Body, BodyRegistry};
use crate::error::SimError;
use crate::ship::Ship;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Error loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SimError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigTable {
    pub gravity_constant: f64,
    pub tick_size: f64,
    pub lookahead_depth: usize,
}

impl Default for ConfigTable {
    fn default() -> Self {
        Self {
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            tick_size: DEFAULT_TICK_SIZE,
            lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShipTable {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyTable {
    pub position: [f64; 2],
    pub mass: f64,
    pub radius: f64,
}

/// A complete, not yet validated, simulation setup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: ConfigTable,
    pub ship: ShipTable,
    #[serde(default)]
    pub bodies: Vec<BodyTable>,
}

impl Scenario {
    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate every value and build the runtime pieces
    pub fn build(&self) -> Result<(SimConfig, BodyRegistry, Ship), SimError> {
        let config = SimConfig::new(
            self.config.gravity_constant,
            self.config.tick_size,
            self.config.lookahead_depth,
        )?;

        let bodies = self
            .bodies
            .iter()
            .map(|b| Body::new(b.position.into(), b.mass, b.radius))
            .collect::<Result<Vec<_>, _>>()?;

        let ship = Ship::new(
            self.ship.position.into(),
            self.ship.velocity.into(),
            self.ship.mass,
            self.ship.radius,
        )?;

        Ok((config, BodyRegistry::new(bodies), ship))
    }
}

impl Default for Scenario {
    /// Three bodies to the upper right of a ship at rest at the origin
    fn default() -> Self {
        Self {
            config: ConfigTable::default(),
            ship: ShipTable {
                position: [0.0, 0.0],
                velocity: [0.0, 0.0],
                mass: 2.0,
                radius: 5.0,
            },
            bodies: vec![
                BodyTable {
                    position: [200.0, 100.0],
                    mass: 100.0,
                    radius: 20.0,
                },
                BodyTable {
                    position: [250.0, 300.0],
                    mass: 50.0,
                    radius: 10.0,
                },
                BodyTable {
                    position: [275.0, 200.0],
                    mass: 50.0,
                    radius: 10.0,
                },
            ],
        }
    }
}
