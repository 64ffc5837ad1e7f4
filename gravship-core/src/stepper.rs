//! Fixed-tick stepping driven by irregular real-time intervals.

use crate::config::SimConfig;
use crate::engine::BodyRegistry;
use crate::error::SimError;
use crate::integrator::{advance, predict};
use crate::ship::Ship;
use tracing::{debug, trace};

/// Split `total` real time into whole ticks plus the leftover fraction.
///
/// Floored division: the remainder is always in `[0, tick_size)` for
/// non-negative `total`.
pub fn split_ticks(total: f64, tick_size: f64) -> (u64, f64) {
    let remainder = total.rem_euclid(tick_size);
    let ticks = ((total - remainder) / tick_size).round() as u64;
    (ticks, remainder)
}

/// Advance the ship by `dt` seconds of real time.
///
/// Carries the fractional part of a tick over to the next call, so the
/// sequence of committed states depends only on the total time fed in, not
/// on how it was chunked. Before each tick the lookahead buffer is topped
/// up to the configured depth; the front entry is then committed.
///
/// Returns the number of ticks committed. On error the ship is left
/// exactly as it was before the call.
pub fn step(
    ship: &mut Ship,
    bodies: &BodyRegistry,
    config: &SimConfig,
    dt: f64,
) -> Result<u64, SimError> {
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(SimError::invalid(format!(
            "elapsed time must be non-negative, got {}",
            dt
        )));
    }

    let (ticks_due, remainder) = split_ticks(ship.remainder + dt, config.tick_size());
    if ticks_due == 0 {
        ship.remainder = remainder;
        return Ok(0);
    }

    if ticks_due > config.lookahead_depth() as u64 {
        debug!(ticks = ticks_due, dt, "committing burst of ticks");
    }

    let mut staged = ship.clone();
    for _ in 0..ticks_due {
        let missing = config
            .lookahead_depth()
            .saturating_sub(staged.lookahead.len());
        predict(&mut staged, bodies, config, missing)?;

        let next = match staged.lookahead.pop_front() {
            Some(next) => next,
            None => advance(staged.state, staged.mass(), bodies, config)?,
        };
        staged.state = next;
        staged.tick_count += 1;
        trace!(tick = staged.tick_count, position = %next.position, "committed tick");
    }
    staged.remainder = remainder;

    *ship = staged;
    Ok(ticks_due)
}
