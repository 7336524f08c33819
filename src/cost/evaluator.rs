//! Whole-route cost aggregation.

use super::physics::{energy_use, flight_time};
use crate::mission::MissionWaypoint;

/// Aggregate cost of one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryCost {
    /// Battery capacity consumed over the whole route, percent.
    pub required_energy: f32,
    /// Number of legs whose cumulative arrival time exceeds the destination
    /// waypoint's deadline.
    pub missed_deadlines: u32,
    /// Mean overshoot over the missed legs, seconds. Exactly 0 when no
    /// deadline is missed.
    pub avg_delay: f32,
}

impl TrajectoryCost {
    /// Cost of an empty, zero-leg route.
    pub const ZERO: TrajectoryCost = TrajectoryCost {
        required_energy: 0.0,
        missed_deadlines: 0,
        avg_delay: 0.0,
    };

    /// Lexicographic improvement test: fewer missed deadlines, or a tie on
    /// misses with strictly less energy. This is the ordering both solvers
    /// optimize.
    pub fn improves_on(&self, other: &TrajectoryCost) -> bool {
        self.missed_deadlines < other.missed_deadlines
            || (self.missed_deadlines == other.missed_deadlines
                && self.required_energy < other.required_energy)
    }
}

/// Evaluates a route permutation over a mission waypoint list.
///
/// `waypoints` holds the depot, the deliveries, and the appended
/// return-to-depot entry, so `waypoints.len() == route.len() + 1`. The
/// route's `n-1` delivery legs accumulate energy and arrival time; arrival
/// past a destination's deadline counts a miss and its overshoot. Payload
/// decreases as each delivery is dropped, so later legs fly lighter. One
/// final energy term covers the return leg at the last leg's speed, with no
/// deadline evaluated.
///
/// The route must index into `waypoints`; only debug assertions check that
/// here. Entry points taking routes from outside the crate validate them
/// with [`crate::mission::route_is_permutation`] before calling.
///
/// Pure: given the same inputs, repeat calls produce bit-identical results.
pub fn route_cost(
    waypoints: &[MissionWaypoint],
    route: &[usize],
    speeds: &[f32],
) -> TrajectoryCost {
    debug_assert_eq!(waypoints.len(), route.len() + 1);
    debug_assert_eq!(speeds.len(), route.len());

    if route.is_empty() {
        return TrajectoryCost::ZERO;
    }

    let mut cost = TrajectoryCost::ZERO;
    let mut missed_delay_sum = 0.0_f32;
    let mut arrival = 0.0_f32;
    let mut payload = waypoints[0].item.payload_weight;

    for j in 0..route.len() - 1 {
        let from = &waypoints[route[j]].item;
        let to = &waypoints[route[j + 1]].item;

        cost.required_energy += energy_use(from, to, speeds[j], payload);
        arrival += flight_time(from, to, speeds[j]);

        if arrival > to.deadline {
            cost.missed_deadlines += 1;
            missed_delay_sum += arrival - to.deadline;
        }

        payload -= to.payload_weight;
    }

    // Return-to-depot energy at the last leg's speed; no deadline applies.
    let last = route.len() - 1;
    cost.required_energy += energy_use(
        &waypoints[route[last]].item,
        &waypoints[route.len()].item,
        speeds[last],
        payload,
    );

    cost.avg_delay = if cost.missed_deadlines == 0 {
        0.0
    } else {
        missed_delay_sum / cost.missed_deadlines as f32
    };

    cost
}
