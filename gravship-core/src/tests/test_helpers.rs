//! Test helper utilities for gravship tests

use crate::config::SimConfig;
use crate::engine::{Body, BodyRegistry};
use crate::integrator::advance;
use crate::ship::{Ship, ShipState};
use crate::vector::Vector;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are component-wise approximately equal
pub fn vec_approx_eq(a: Vector, b: Vector, tol: f64) -> bool {
    approx_eq(a.x(), b.x(), tol) && approx_eq(a.y(), b.y(), tol)
}

/// Single body at (200, 100) with mass 100
pub fn single_body_registry() -> BodyRegistry {
    BodyRegistry::new(vec![Body::new(Vector::new(200.0, 100.0), 100.0, 20.0)
        .expect("valid body")])
}

/// The three bodies of the default scenario
pub fn three_body_registry() -> BodyRegistry {
    BodyRegistry::new(vec![
        Body::new(Vector::new(200.0, 100.0), 100.0, 20.0).expect("valid body"),
        Body::new(Vector::new(250.0, 300.0), 50.0, 10.0).expect("valid body"),
        Body::new(Vector::new(275.0, 200.0), 50.0, 10.0).expect("valid body"),
    ])
}

/// Ship of mass 2 at rest at the origin
pub fn ship_at_origin() -> Ship {
    Ship::new(Vector::ZERO, Vector::ZERO, 2.0, 5.0).expect("valid ship")
}

/// Ship of mass 2 at `position` moving with `velocity`
pub fn moving_ship(position: Vector, velocity: Vector) -> Ship {
    Ship::new(position, velocity, 2.0, 5.0).expect("valid ship")
}

/// Integrate `ticks` ticks from `state` without any buffering, for
/// comparison against the stepper and the lookahead buffer
pub fn integrate_ticks(
    state: ShipState,
    mass: f64,
    bodies: &BodyRegistry,
    config: &SimConfig,
    ticks: u64,
) -> ShipState {
    let mut current = state;
    for _ in 0..ticks {
        current = advance(current, mass, bodies, config).expect("integration failed");
    }
    current
}
