//! Scenario execution and the sequential suite driver.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info};

use super::benchmarks::Benchmark;
use super::scheduler::Scheduler;
use crate::cost::{TrajectoryCost, CRUISE_SPEED};
use crate::mission::{MissionItem, MissionPlan, MissionWaypoint, MAX_DELIVERY_ITEMS};
use crate::nn::NnRunner;
use crate::sa::{SaConfig, SaRunner};

/// Delay before the first scenario of a suite, milliseconds.
pub const INITIAL_DELAY_MS: u64 = 10_000;

/// Delay between consecutive scenarios, milliseconds.
pub const INTER_SCENARIO_DELAY_MS: u64 = 5_000;

/// Takeoff position and time origin shared by every scenario.
const DEPOT_LAT: f32 = 47.397751;
const DEPOT_LON: f32 = 8.545608;
const DEPOT_ALT: f32 = 20.0;

/// Everything one scenario run produces.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    /// Waypoints in flight order with their assigned departure speeds.
    pub ordered: Vec<MissionWaypoint>,
    /// Cost of the final (refined) route.
    pub cost: TrajectoryCost,
    /// Cost of the nearest-neighbor seed, for comparison.
    pub seed_cost: TrajectoryCost,
    /// Candidate evaluations spent by the refiner.
    pub evaluations: usize,
    /// Wall time of the whole solve, scheduler ticks (ms).
    pub elapsed_ticks: u64,
}

/// Drives waypoint tables through the constructor and refiner.
///
/// Owns no mission state between runs: each call assembles its own buffer
/// and releases it on return, so independent runners never share anything.
pub struct ScenarioRunner<'a, S: Scheduler> {
    scheduler: &'a S,
    sa: SaConfig,
}

impl<'a, S: Scheduler> ScenarioRunner<'a, S> {
    pub fn new(scheduler: &'a S, sa: SaConfig) -> Result<Self, String> {
        sa.validate()?;
        Ok(Self { scheduler, sa })
    }

    /// Runs one scenario: assemble the mission from `rows`, construct,
    /// refine, report.
    ///
    /// Rows follow the benchmark layout
    /// `[lat, lon, altitude, speed, deadline, payload]`. More rows than the
    /// mission capacity is rejected before any buffer is built; zero rows
    /// yields a zero-leg, zero-cost report without entering the solver.
    pub fn run(&self, rows: &[[f32; 6]]) -> Result<ScenarioReport, String> {
        let start_ticks = self.scheduler.ticks();

        let depot = MissionItem {
            id: 0,
            user: 'A',
            lat: DEPOT_LAT,
            lon: DEPOT_LON,
            altitude: DEPOT_ALT,
            speed: CRUISE_SPEED,
            payload_weight: 0.0,
            deadline: 0.0,
        };

        if rows.is_empty() {
            return Ok(ScenarioReport {
                ordered: Vec::new(),
                cost: TrajectoryCost::ZERO,
                seed_cost: TrajectoryCost::ZERO,
                evaluations: 0,
                elapsed_ticks: self.scheduler.ticks() - start_ticks,
            });
        }

        let items: Vec<MissionItem> = rows
            .iter()
            .enumerate()
            .map(|(i, &[lat, lon, altitude, speed, deadline, payload_weight])| {
                let id = i as u32 + 1;
                MissionItem {
                    id,
                    user: (b'A' + (id as u8 % 26)) as char,
                    lat,
                    lon,
                    altitude,
                    speed,
                    payload_weight,
                    deadline,
                }
            })
            .collect();

        let plan = MissionPlan::assemble(depot, &items)?;
        debug!(
            "assembled {} waypoints, takeoff weight {:.4} kg",
            plan.num_waypoints(),
            plan.waypoints()[0].item.payload_weight
        );

        let seed = NnRunner::construct(&plan, CRUISE_SPEED);
        info!(
            "nearest neighbour route {} missed {}",
            format_route(&seed.route),
            seed.cost.missed_deadlines
        );

        let refined = SaRunner::refine(&plan, &seed.route, &seed.speeds, &self.sa)?;
        info!(
            "sa route {} missed {} after {} evaluations",
            format_route(&refined.route),
            refined.cost.missed_deadlines,
            refined.evaluations
        );

        let ordered = plan.ordered(&refined.route, &refined.speeds);

        Ok(ScenarioReport {
            ordered,
            cost: refined.cost,
            seed_cost: seed.cost,
            evaluations: refined.evaluations,
            elapsed_ticks: self.scheduler.ticks() - start_ticks,
        })
    }

    /// Runs a benchmark suite sequentially, yielding the processor between
    /// scenarios and checking `stop` only at scenario boundaries, so each
    /// solve stays atomic.
    ///
    /// Each benchmark contributes its leading [`MAX_DELIVERY_ITEMS`] rows.
    pub fn run_suite(
        &self,
        benchmarks: &[Benchmark],
        stop: Option<&AtomicBool>,
    ) -> Vec<(&'static str, Result<ScenarioReport, String>)> {
        let stopped = || stop.is_some_and(|flag| flag.load(Ordering::Relaxed));
        let mut reports = Vec::with_capacity(benchmarks.len());

        self.scheduler.delay(Duration::from_millis(INITIAL_DELAY_MS));

        for (i, benchmark) in benchmarks.iter().enumerate() {
            if stopped() {
                info!("suite stopped before {}", benchmark.name);
                break;
            }
            if i > 0 {
                self.scheduler
                    .delay(Duration::from_millis(INTER_SCENARIO_DELAY_MS));
            }

            info!("executing {}", benchmark.name);
            let rows = &benchmark.rows[..MAX_DELIVERY_ITEMS.min(benchmark.rows.len())];
            let report = self.run(rows);
            if let Ok(ref report) = report {
                info!("elapsed time was {} ms", report.elapsed_ticks);
            }
            reports.push((benchmark.name, report));
        }

        reports
    }
}

/// `0--->3--->1--->0` rendering of a route, return leg included.
fn format_route(route: &[usize]) -> String {
    let mut out = String::new();
    for wp in route {
        let _ = write!(out, "{wp}--->");
    }
    out.push('0');
    out
}
