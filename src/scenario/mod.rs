//! Scenario harness: benchmark tables driven through the solver.
//!
//! The only externally triggered entry point in the crate. A scenario takes
//! a table of waypoint rows, assembles the mission (depot prepended, return
//! entry appended, takeoff payload accumulated), runs the nearest-neighbor
//! constructor and then the simulated-annealing refiner, and reports the
//! ordered waypoint list, its cost breakdown, and the elapsed scheduler
//! ticks. The suite driver runs scenarios sequentially, yielding the
//! processor between runs and honoring a stop flag checked only at scenario
//! boundaries — never mid-solve.

pub mod benchmarks;
mod runner;
mod scheduler;

pub use benchmarks::{benchmark_suite, Benchmark};
pub use runner::{ScenarioReport, ScenarioRunner, INITIAL_DELAY_MS, INTER_SCENARIO_DELAY_MS};
pub use scheduler::{Scheduler, StdScheduler};
