//! Trajectory planning for multi-waypoint delivery missions.
//!
//! Orders a set of delivery waypoints, assigns a per-leg flight speed, and
//! evaluates the resulting route's battery consumption and deadline
//! compliance:
//!
//! - **Mission model**: waypoint/record types and the bounded, capacity
//!   checked mission buffer ([`mission`]).
//! - **Cost evaluator**: great-circle chord flight time and a simplified
//!   rotor-thrust energy model, aggregated over a whole route ([`cost`]).
//! - **Nearest-neighbor constructor**: deterministic greedy seed route
//!   ([`nn`]).
//! - **Simulated-annealing refiner**: stochastic local search over the
//!   time/energy/deadline cost, with selectable acceptance rule ([`sa`]).
//! - **Scenario harness**: literal benchmark tables driven through the
//!   solver with elapsed-tick measurement ([`scenario`]).
//! - **Deferred work queue**: bounded closure queue with explicit
//!   queue-full rejection, consumed by one worker loop ([`worker`]).
//!
//! # Architecture
//!
//! The solver is pure synchronous computation: one invocation owns its
//! mission buffer, runs to completion, and shares no state with other
//! invocations. The scenario harness is the only layer that touches the
//! outside world (scheduler ticks, delays, a stop flag between runs).

pub mod cost;
pub mod mission;
pub mod nn;
pub mod sa;
pub mod scenario;
pub mod worker;
