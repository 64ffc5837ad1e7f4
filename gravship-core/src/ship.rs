use crate::engine::check_positive;
use crate::error::SimError;
use crate::vector::Vector;
use std::collections::VecDeque;

/// Position and velocity of the ship at one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipState {
    pub position: Vector,
    pub velocity: Vector,
}

impl ShipState {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }
}

/// The body under simulation.
///
/// `state` is the committed state at `tick_count`. `lookahead[i]` is the
/// state at `tick_count + i + 1`, integrated from `state` against the body
/// registry. Only the stepper advances `tick_count`, and only by promoting
/// the front of the lookahead buffer.
#[derive(Debug, Clone)]
pub struct Ship {
    pub(crate) state: ShipState,
    mass: f64,
    radius: f64,
    pub(crate) tick_count: u64,
    pub(crate) remainder: f64,
    pub(crate) lookahead: VecDeque<ShipState>,
}

impl Ship {
    pub fn new(position: Vector, velocity: Vector, mass: f64, radius: f64) -> Result<Self, SimError> {
        if !(position.is_finite() && velocity.is_finite()) {
            return Err(SimError::invalid("ship position and velocity must be finite"));
        }
        check_positive("ship mass", mass)?;
        check_positive("ship radius", radius)?;

        Ok(Self {
            state: ShipState::new(position, velocity),
            mass,
            radius,
            tick_count: 0,
            remainder: 0.0,
            lookahead: VecDeque::new(),
        })
    }

    /// Committed state
    pub fn state(&self) -> ShipState {
        self.state
    }

    pub fn position(&self) -> Vector {
        self.state.position
    }

    pub fn velocity(&self) -> Vector {
        self.state.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Index of the last committed tick
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Real time carried over that has not yet added up to a whole tick
    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    /// Predicted states for the ticks after `tick_count`, nearest first
    pub fn lookahead(&self) -> &VecDeque<ShipState> {
        &self.lookahead
    }
}
