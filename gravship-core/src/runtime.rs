use crate::config::SimConfig;
use crate::engine::BodyRegistry;
use crate::error::SimError;
use crate::scenario::Scenario;
use crate::ship::{Ship, ShipState};
use crate::stepper;
use crate::vector::Vector;
use tracing::info;

/// Everything a render loop needs to drive the ship: constants, the fixed
/// bodies and the ship itself
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    bodies: BodyRegistry,
    ship: Ship,
    elapsed: f64,
}

/// State after a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: f64,
    pub remainder: f64,
    pub position: Vector,
    pub velocity: Vector,
}

impl Simulation {
    pub fn new(config: SimConfig, bodies: BodyRegistry, ship: Ship) -> Self {
        Self {
            config,
            bodies,
            ship,
            elapsed: 0.0,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SimError> {
        let (config, bodies, ship) = scenario.build()?;
        info!(
            bodies = bodies.len(),
            tick_size = config.tick_size(),
            "built simulation from scenario"
        );
        Ok(Self::new(config, bodies, ship))
    }

    /// Feed `dt` seconds of real time to the stepper
    pub fn step(&mut self, dt: f64) -> Result<u64, SimError> {
        let ticks = stepper::step(&mut self.ship, &self.bodies, &self.config, dt)?;
        self.elapsed += dt;
        Ok(ticks)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Committed ship state, authoritative for rendering
    pub fn ship_state(&self) -> ShipState {
        self.ship.state()
    }

    /// Total real time accepted by `step` so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.ship.tick_count(),
            elapsed: self.elapsed,
            remainder: self.ship.remainder(),
            position: self.ship.position(),
            velocity: self.ship.velocity(),
        }
    }
}

/// Drive `sim` for `duration` seconds in frames of `frame_dt`, the last
/// frame taking whatever time is left
pub fn run_for(sim: &mut Simulation, duration: f64, frame_dt: f64) -> Result<RunSummary, SimError> {
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(SimError::invalid(format!(
            "duration must be non-negative, got {}",
            duration
        )));
    }
    if !(frame_dt.is_finite() && frame_dt > 0.0) {
        return Err(SimError::invalid(format!(
            "frame interval must be positive, got {}",
            frame_dt
        )));
    }

    let frames = (duration / frame_dt).floor() as u64;
    for _ in 0..frames {
        sim.step(frame_dt)?;
    }
    let rest = duration - frames as f64 * frame_dt;
    if rest > 0.0 {
        sim.step(rest)?;
    }

    Ok(sim.summary())
}

/// Main entry point: parse a scenario and run it headless
pub fn run_scenario(
    source: &str,
    duration: f64,
    frame_dt: f64,
) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let scenario = Scenario::from_toml_str(source)?;
    let mut sim = Simulation::from_scenario(&scenario)?;
    Ok(run_for(&mut sim, duration, frame_dt)?)
}
