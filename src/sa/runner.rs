//! SA refinement loop.

use super::config::{AcceptanceRule, SaConfig};
use crate::cost::{route_cost, TrajectoryCost};
use crate::mission::{route_is_permutation, MissionPlan, Route};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a simulated-annealing refinement.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best route found, depot first.
    pub route: Route,
    /// Per-leg departure speeds of the best route.
    pub speeds: Vec<f32>,
    /// Cost of the best route.
    pub cost: TrajectoryCost,
    /// Number of candidate evaluations performed.
    pub evaluations: usize,
    /// Temperature when the search stopped.
    pub final_temperature: f32,
}

/// Executes the simulated-annealing refiner.
pub struct SaRunner;

impl SaRunner {
    /// Refines a seed route (typically the nearest-neighbor construction,
    /// or any caller-supplied permutation with the depot first). Malformed
    /// seeds — wrong length, or not a depot-first permutation — are
    /// rejected before any evaluation.
    ///
    /// Three solution states are kept:
    ///
    /// - the *working* candidate, perturbed every inner iteration and never
    ///   restored on rejection (the firmware's compounding random walk);
    /// - the *accepted* solution, the acceptance rule's comparison baseline;
    /// - the *best-so-far* solution, replaced only on lexicographic
    ///   improvement of (missed deadlines, required energy) and returned to
    ///   the caller, so the result never regresses below the seed even
    ///   under the legacy acceptance rule.
    ///
    /// With fewer than three waypoints no adjacent transposition exists
    /// away from the depot, and the seed is returned unrefined.
    pub fn refine(
        plan: &MissionPlan,
        seed_route: &[usize],
        seed_speeds: &[f32],
        config: &SaConfig,
    ) -> Result<SaResult, String> {
        config.validate()?;

        let n = plan.num_waypoints();
        if seed_route.len() != n || seed_speeds.len() != n {
            return Err(format!(
                "seed route/speed length {}/{} does not match {n} waypoints",
                seed_route.len(),
                seed_speeds.len()
            ));
        }
        if !route_is_permutation(seed_route, n) {
            return Err(format!(
                "seed route {seed_route:?} is not a depot-first permutation of {n} waypoints"
            ));
        }

        let waypoints = plan.waypoints();
        let seed_cost = route_cost(waypoints, seed_route, seed_speeds);

        if n < 3 {
            return Ok(SaResult {
                route: seed_route.to_vec(),
                speeds: seed_speeds.to_vec(),
                cost: seed_cost,
                evaluations: 0,
                final_temperature: config.initial_temperature,
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Every leg departs at the seed speed; the per-leg speed sweep of
        // the original design was never activated.
        let leg_speed = seed_speeds[0];
        let speeds = vec![leg_speed; n];

        let mut working: Route = seed_route.to_vec();
        let mut accepted: Route = seed_route.to_vec();
        let mut accepted_cost = route_cost(waypoints, &accepted, &speeds);
        let mut best: Route = accepted.clone();
        let mut best_cost = accepted_cost;

        // Acceptable once misses drop to 10% (by default) of the waypoint
        // count, rounded.
        let miss_budget = (n as f32 * config.acceptable_miss_fraction).round() as u32;

        let mut temperature = config.initial_temperature;
        let mut evaluations = 0usize;

        loop {
            for _ in 0..config.iterations_per_temperature {
                // Adjacent transposition away from the fixed depot slot.
                let i = rng.random_range(1..n - 1);
                working.swap(i, i + 1);

                let candidate_cost = route_cost(waypoints, &working, &speeds);
                evaluations += 1;

                let accept = if candidate_cost.improves_on(&accepted_cost) {
                    true
                } else {
                    match config.rule {
                        AcceptanceRule::Legacy => {
                            // Boolean comparison as the Metropolis numerator,
                            // against a fixed threshold. See AcceptanceRule.
                            let improved =
                                candidate_cost.required_energy < accepted_cost.required_energy;
                            let probability = (-(improved as i32 as f32) / temperature).exp();
                            probability > config.acceptance_threshold
                        }
                        AcceptanceRule::Metropolis => {
                            let delta =
                                candidate_cost.required_energy - accepted_cost.required_energy;
                            let probability = (-delta / temperature).exp();
                            rng.random_range(0.0_f32..1.0) < probability
                        }
                    }
                };

                if accept {
                    accepted.copy_from_slice(&working);
                    accepted_cost = candidate_cost;

                    if accepted_cost.improves_on(&best_cost) {
                        best.copy_from_slice(&accepted);
                        best_cost = accepted_cost;
                    }
                }
                // On rejection the working copy keeps its perturbation; the
                // next swap compounds on top of it.
            }

            temperature -= config.cooling_step;

            if best_cost.missed_deadlines <= miss_budget || temperature <= 0.0 {
                break;
            }
        }

        Ok(SaResult {
            route: best,
            speeds,
            cost: best_cost,
            evaluations,
            final_temperature: temperature,
        })
    }
}
