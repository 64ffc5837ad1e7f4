use crate::vector::Vector;
use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The force law was evaluated with the ship sitting exactly on a body.
    /// The simulation cannot continue from this state.
    #[error("degenerate distance: ship and body coincide at {position}")]
    DegenerateDistance { position: Vector },

    /// A value supplied at the boundary was rejected before any state changed
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SimError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
