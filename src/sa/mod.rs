//! Simulated-annealing route refinement.
//!
//! A single-solution local search over the trajectory cost: each step swaps
//! a random waypoint with its immediate successor (adjacent transposition,
//! never the depot), re-evaluates the route, and accepts or rejects the
//! candidate. Strict improvements — fewer missed deadlines, or an energy
//! reduction at equal misses — are always accepted; otherwise the
//! temperature-driven [`AcceptanceRule`] decides. Cooling is linear and the
//! search stops once the best-so-far route misses few enough deadlines or
//! the temperature is exhausted.
//!
//! The rejected working copy is deliberately never rolled back, so
//! consecutive rejections compound into a random walk around the last
//! accepted route. See [`AcceptanceRule`] for the legacy/corrected rule
//! split.

mod config;
mod runner;

pub use config::{AcceptanceRule, SaConfig};
pub use runner::{SaResult, SaRunner};
