//! Mission model: delivery waypoints and the bounded mission buffer.
//!
//! A mission is a depot, up to [`MAX_DELIVERY_ITEMS`] delivery points, and a
//! synthetic return-to-depot entry appended after the last delivery. The
//! buffer is owned by exactly one solver invocation; solvers reorder it only
//! through index permutations and mutate nothing but the per-leg departure
//! speed.

mod types;

pub use types::{
    route_is_permutation, MissionItem, MissionPlan, MissionWaypoint, Route, MAX_DELIVERY_ITEMS,
};
