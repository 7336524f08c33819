//! Nearest-neighbor route construction.
//!
//! Deterministic greedy heuristic used to seed the simulated-annealing
//! refiner: precompute all pairwise flight times at one reference speed,
//! then repeatedly hop to the nearest unvisited waypoint. No randomness and
//! no per-leg speed search — every leg departs at the reference speed.

mod runner;

pub use runner::{NnResult, NnRunner};
