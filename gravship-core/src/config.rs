//! Simulation constants, passed explicitly to the integrator and stepper.

use crate::error::SimError;

pub const DEFAULT_GRAVITY_CONSTANT: f64 = 20.0;
pub const DEFAULT_TICK_SIZE: f64 = 0.01;
pub const DEFAULT_LOOKAHEAD_DEPTH: usize = 10;

/// Validated simulation configuration.
///
/// Fields are private so a `SimConfig` that exists is always usable: the
/// tick size is positive and finite, the gravity constant is finite and the
/// lookahead depth holds at least one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    gravity_constant: f64,
    tick_size: f64,
    lookahead_depth: usize,
}

impl SimConfig {
    pub fn new(
        gravity_constant: f64,
        tick_size: f64,
        lookahead_depth: usize,
    ) -> Result<Self, SimError> {
        if !gravity_constant.is_finite() {
            return Err(SimError::invalid(format!(
                "gravity constant must be finite, got {}",
                gravity_constant
            )));
        }
        if !(tick_size.is_finite() && tick_size > 0.0) {
            return Err(SimError::invalid(format!(
                "tick size must be positive, got {}",
                tick_size
            )));
        }
        if lookahead_depth == 0 {
            return Err(SimError::invalid("lookahead depth must be at least 1"));
        }

        Ok(Self {
            gravity_constant,
            tick_size,
            lookahead_depth,
        })
    }

    /// Scale factor `G` of the force law
    pub fn gravity_constant(&self) -> f64 {
        self.gravity_constant
    }

    /// Simulated seconds per tick
    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    /// Number of ticks the stepper keeps precomputed ahead of the committed state
    pub fn lookahead_depth(&self) -> usize {
        self.lookahead_depth
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            tick_size: DEFAULT_TICK_SIZE,
            lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
        }
    }
}
