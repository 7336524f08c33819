//! Greedy construction loop.

use crate::cost::{flight_time, route_cost, TrajectoryCost};
use crate::mission::{MissionPlan, Route};

/// Result of a nearest-neighbor construction.
#[derive(Debug, Clone)]
pub struct NnResult {
    /// The constructed permutation, depot first.
    pub route: Route,
    /// Per-leg departure speeds; uniform at the construction speed.
    pub speeds: Vec<f32>,
    /// Cost of the constructed route.
    pub cost: TrajectoryCost,
}

/// Executes the nearest-neighbor heuristic.
pub struct NnRunner;

impl NnRunner {
    /// Builds a route greedily: starting at the depot, always fly to the
    /// closest (minimum flight time) unvisited waypoint next. Ties break to
    /// the lowest index via the ascending scan. Deterministic for a given
    /// plan and speed.
    pub fn construct(plan: &MissionPlan, speed: f32) -> NnResult {
        let n = plan.num_waypoints();
        let waypoints = plan.waypoints();

        // Pairwise flight times at the single evaluation speed.
        let mut leg_time = vec![vec![0.0_f32; n]; n];
        for (i, row) in leg_time.iter_mut().enumerate() {
            for (t, cell) in row.iter_mut().enumerate() {
                *cell = flight_time(&waypoints[i].item, &waypoints[t].item, speed);
            }
        }

        let mut visited = vec![false; n];
        let mut route: Route = Vec::with_capacity(n);
        visited[0] = true;
        route.push(0);

        let mut current = 0;
        for _ in 1..n {
            let mut min_time = f32::INFINITY;
            let mut chosen = 0;
            for candidate in 1..n {
                if !visited[candidate] && leg_time[current][candidate] < min_time {
                    min_time = leg_time[current][candidate];
                    chosen = candidate;
                }
            }
            route.push(chosen);
            visited[chosen] = true;
            current = chosen;
        }

        let speeds = vec![speed; n];
        let cost = route_cost(waypoints, &route, &speeds);

        NnResult {
            route,
            speeds,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CRUISE_SPEED;
    use crate::mission::{route_is_permutation, MissionItem};

    fn delivery(lat: f32, lon: f32, payload: f32) -> MissionItem {
        MissionItem {
            id: 0,
            user: 'A',
            lat,
            lon,
            altitude: 20.0,
            speed: CRUISE_SPEED,
            payload_weight: payload,
            deadline: 500.0,
        }
    }

    fn depot() -> MissionItem {
        delivery(47.397751, 8.545608, 0.0)
    }

    #[test]
    fn test_collinear_points_visited_in_order() {
        // Three deliveries due north of the depot at increasing distance,
        // listed shuffled: greedy must visit them near-to-far.
        let items = [
            delivery(47.403751, 8.545608, 0.1), // farthest
            delivery(47.399751, 8.545608, 0.1), // nearest
            delivery(47.401751, 8.545608, 0.1), // middle
        ];
        let plan = MissionPlan::assemble(depot(), &items).unwrap();
        let result = NnRunner::construct(&plan, CRUISE_SPEED);
        assert_eq!(result.route, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_output_is_permutation_with_uniform_speeds() {
        let items = [
            delivery(47.400531, 8.545726, 0.17),
            delivery(47.398529, 8.548123, 0.13),
            delivery(47.401395, 8.548786, 0.14),
            delivery(47.400935, 8.548626, 0.16),
        ];
        let plan = MissionPlan::assemble(depot(), &items).unwrap();
        let result = NnRunner::construct(&plan, CRUISE_SPEED);
        assert!(route_is_permutation(&result.route, plan.num_waypoints()));
        assert!(result.speeds.iter().all(|&s| s == CRUISE_SPEED));
        assert!(result.cost.required_energy > 0.0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let items = [
            delivery(47.400531, 8.545726, 0.17),
            delivery(47.398529, 8.548123, 0.13),
            delivery(47.401395, 8.548786, 0.14),
        ];
        let plan = MissionPlan::assemble(depot(), &items).unwrap();
        let a = NnRunner::construct(&plan, CRUISE_SPEED);
        let b = NnRunner::construct(&plan, CRUISE_SPEED);
        assert_eq!(a.route, b.route);
        assert_eq!(
            a.cost.required_energy.to_bits(),
            b.cost.required_energy.to_bits()
        );
    }

    #[test]
    fn test_depot_only_mission() {
        let plan = MissionPlan::assemble(depot(), &[]).unwrap();
        let result = NnRunner::construct(&plan, CRUISE_SPEED);
        assert_eq!(result.route, vec![0]);
    }
}
