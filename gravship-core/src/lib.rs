pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod runtime;
pub mod scenario;
pub mod ship;
pub mod stepper;
pub mod vector;

pub use config::SimConfig;
pub use engine::{gravity_force, net_force, Body, BodyRegistry};
pub use error::SimError;
pub use integrator::{advance, predict};
pub use runtime::{run_for, run_scenario, RunSummary, Simulation};
pub use scenario::{Scenario, ScenarioError};
pub use ship::{Ship, ShipState};
pub use stepper::step;
pub use vector::Vector;

// Test helpers module (public for integration tests)
pub mod tests;
