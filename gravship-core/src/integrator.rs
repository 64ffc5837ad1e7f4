use crate::config::SimConfig;
use crate::engine::{net_force, BodyRegistry};
use crate::error::SimError;
use crate::ship::{Ship, ShipState};

/// Integrate one tick forward from `state`.
///
/// Explicit Euler using the old velocity for the position update:
/// `x' = x + v*dt + (f/m)*dt^2`, `v' = v + (f/m)*dt`.
pub fn advance(
    state: ShipState,
    mass: f64,
    bodies: &BodyRegistry,
    config: &SimConfig,
) -> Result<ShipState, SimError> {
    let dt = config.tick_size();
    let force = net_force(state.position, mass, bodies, config.gravity_constant())?;
    let accel = force.scale(1.0 / mass);

    let position = state
        .position
        .add(state.velocity.scale(dt))
        .add(accel.scale(dt).scale(dt));
    let velocity = state.velocity.add(accel.scale(dt));

    Ok(ShipState { position, velocity })
}

/// Extend the ship's lookahead buffer by up to `ticks` predicted states.
///
/// Each new entry is integrated from the buffer's tail, or from the
/// committed state when the buffer is empty. The buffer never grows past
/// the configured lookahead depth, so fewer than `ticks` entries are added
/// when it would.
///
/// On error the entries appended before the failing tick are kept; they
/// are still valid predictions.
pub fn predict(
    ship: &mut Ship,
    bodies: &BodyRegistry,
    config: &SimConfig,
    ticks: usize,
) -> Result<(), SimError> {
    let room = config.lookahead_depth().saturating_sub(ship.lookahead.len());
    for _ in 0..ticks.min(room) {
        let last = ship.lookahead.back().copied().unwrap_or(ship.state);
        let next = advance(last, ship.mass(), bodies, config)?;
        ship.lookahead.push_back(next);
    }
    Ok(())
}
