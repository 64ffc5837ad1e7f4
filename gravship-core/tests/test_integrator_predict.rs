//! Tests for the predictive integrator and the lookahead buffer

use gravship_core::tests::test_helpers::{
    integrate_ticks, moving_ship, ship_at_origin, single_body_registry, three_body_registry,
    vec_approx_eq,
};
use gravship_core::{advance, predict, step, Body, BodyRegistry, SimConfig, SimError, ShipState, Vector};

#[test]
fn test_advance_single_body_from_rest() {
    let config = SimConfig::default();
    let start = ShipState::new(Vector::ZERO, Vector::ZERO);

    let next = advance(start, 2.0, &single_body_registry(), &config).unwrap();

    // F = 20 * 2 * 100 / |(200,100)| toward (200,100) = (16, 8); a = F/m = (8, 4)
    // v' = a * dt, x' = a * dt^2
    assert!(vec_approx_eq(next.velocity, Vector::new(0.08, 0.04), 1e-12));
    assert!(vec_approx_eq(next.position, Vector::new(0.0008, 0.0004), 1e-12));
}

#[test]
fn test_advance_uses_old_velocity_for_position() {
    let config = SimConfig::default();
    let start = ShipState::new(Vector::new(-50.0, 20.0), Vector::new(3.0, -1.0));
    let bodies = single_body_registry();

    let next = advance(start, 2.0, &bodies, &config).unwrap();

    let accel = gravship_core::net_force(start.position, 2.0, &bodies, 20.0)
        .unwrap()
        .scale(0.5);
    let expected_pos = start
        .position
        .add(start.velocity.scale(0.01))
        .add(accel.scale(0.01).scale(0.01));
    assert!(vec_approx_eq(next.position, expected_pos, 1e-12));
    assert!(vec_approx_eq(
        next.velocity,
        start.velocity.add(accel.scale(0.01)),
        1e-12
    ));
}

#[test]
fn test_zero_force_is_pure_inertia() {
    let config = SimConfig::default();
    let mut ship = moving_ship(Vector::new(1.0, 2.0), Vector::new(0.3, -7.0));
    let bodies = BodyRegistry::empty();

    predict(&mut ship, &bodies, &config, 10).unwrap();

    let mut last = ship.state();
    for predicted in ship.lookahead() {
        assert_eq!(predicted.velocity, last.velocity);
        assert_eq!(
            predicted.position,
            last.position.add(last.velocity.scale(config.tick_size()))
        );
        last = *predicted;
    }
}

#[test]
fn test_predict_fills_from_committed_state() {
    let config = SimConfig::default();
    let bodies = three_body_registry();
    let mut ship = ship_at_origin();

    predict(&mut ship, &bodies, &config, 4).unwrap();

    assert_eq!(ship.lookahead().len(), 4);
    for (i, predicted) in ship.lookahead().iter().enumerate() {
        let expected = integrate_ticks(ship.state(), ship.mass(), &bodies, &config, i as u64 + 1);
        assert_eq!(*predicted, expected);
    }
    // Prediction never touches the committed state
    assert_eq!(ship.tick_count(), 0);
    assert_eq!(ship.position(), Vector::ZERO);
}

#[test]
fn test_predict_extends_from_tail() {
    let config = SimConfig::default();
    let bodies = three_body_registry();

    let mut chunked = ship_at_origin();
    predict(&mut chunked, &bodies, &config, 3).unwrap();
    predict(&mut chunked, &bodies, &config, 5).unwrap();

    let mut at_once = ship_at_origin();
    predict(&mut at_once, &bodies, &config, 8).unwrap();

    assert_eq!(chunked.lookahead(), at_once.lookahead());
}

#[test]
fn test_predict_stops_at_lookahead_depth() {
    let config = SimConfig::new(20.0, 0.01, 6).unwrap();
    let mut ship = ship_at_origin();

    predict(&mut ship, &single_body_registry(), &config, 50).unwrap();
    assert_eq!(ship.lookahead().len(), 6);

    predict(&mut ship, &single_body_registry(), &config, 1).unwrap();
    assert_eq!(ship.lookahead().len(), 6);
}

#[test]
fn test_predict_zero_ticks_is_noop() {
    let config = SimConfig::default();
    let mut ship = ship_at_origin();

    predict(&mut ship, &single_body_registry(), &config, 0).unwrap();
    assert!(ship.lookahead().is_empty());
}

#[test]
fn test_buffer_matches_committed_state_after_steps() {
    let config = SimConfig::default();
    let bodies = three_body_registry();
    let mut ship = moving_ship(Vector::new(-20.0, 40.0), Vector::new(12.0, -3.0));

    for dt in [0.016, 0.033, 0.0, 0.25, 0.007, 0.016] {
        step(&mut ship, &bodies, &config, dt).unwrap();

        assert!(ship.lookahead().len() <= config.lookahead_depth());
        for (i, predicted) in ship.lookahead().iter().enumerate() {
            let expected =
                integrate_ticks(ship.state(), ship.mass(), &bodies, &config, i as u64 + 1);
            assert_eq!(*predicted, expected, "entry {} after dt {}", i, dt);
        }
    }
}

#[test]
fn test_predict_stops_at_degenerate_tick() {
    // G = 0 keeps the motion exactly inertial: x advances by 1.0 per tick
    let config = SimConfig::new(0.0, 0.01, 30).unwrap();
    let bodies = BodyRegistry::new(vec![Body::new(Vector::new(25.0, 0.0), 10.0, 1.0).unwrap()]);
    let mut ship = moving_ship(Vector::ZERO, Vector::new(100.0, 0.0));

    let err = predict(&mut ship, &bodies, &config, 30).unwrap_err();

    assert_eq!(
        err,
        SimError::DegenerateDistance {
            position: Vector::new(25.0, 0.0)
        }
    );
    // Ticks 1..=25 were predicted before the ship reached the body
    assert_eq!(ship.lookahead().len(), 25);
    assert_eq!(ship.lookahead()[24].position, Vector::new(25.0, 0.0));
}
