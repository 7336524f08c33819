//! Criterion benchmarks for the trajectory solver.
//!
//! Uses the first benchmark table so the measured work matches the scenario
//! harness: cost aggregation alone, greedy construction, and a full
//! refinement at each acceptance rule.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drone_traj::cost::{route_cost, CRUISE_SPEED};
use drone_traj::mission::{MissionItem, MissionPlan};
use drone_traj::nn::NnRunner;
use drone_traj::sa::{AcceptanceRule, SaConfig, SaRunner};
use drone_traj::scenario::benchmark_suite;

fn plan_from_rows(rows: &[[f32; 6]]) -> MissionPlan {
    let depot = MissionItem {
        id: 0,
        user: 'A',
        lat: 47.397751,
        lon: 8.545608,
        altitude: 20.0,
        speed: CRUISE_SPEED,
        payload_weight: 0.0,
        deadline: 0.0,
    };
    let items: Vec<MissionItem> = rows
        .iter()
        .enumerate()
        .map(|(i, &[lat, lon, altitude, speed, deadline, payload_weight])| MissionItem {
            id: i as u32 + 1,
            user: 'B',
            lat,
            lon,
            altitude,
            speed,
            payload_weight,
            deadline,
        })
        .collect();
    MissionPlan::with_capacity(rows.len(), depot, &items).unwrap()
}

fn bench_route_cost(c: &mut Criterion) {
    let suite = benchmark_suite();
    let plan = plan_from_rows(&suite[0].rows[..6]);
    let n = plan.num_waypoints();
    let route: Vec<usize> = (0..n).collect();
    let speeds = vec![CRUISE_SPEED; n];

    c.bench_function("route_cost/7wp", |b| {
        b.iter(|| route_cost(black_box(plan.waypoints()), black_box(&route), black_box(&speeds)))
    });
}

fn bench_nn_construct(c: &mut Criterion) {
    let suite = benchmark_suite();
    let mut group = c.benchmark_group("nn_construct");
    for deliveries in [3usize, 6, 15] {
        let plan = plan_from_rows(&suite[0].rows[..deliveries]);
        group.bench_with_input(
            BenchmarkId::from_parameter(deliveries),
            &plan,
            |b, plan| b.iter(|| NnRunner::construct(black_box(plan), CRUISE_SPEED)),
        );
    }
    group.finish();
}

fn bench_sa_refine(c: &mut Criterion) {
    let suite = benchmark_suite();
    let plan = plan_from_rows(&suite[0].rows[..6]);
    let seed = NnRunner::construct(&plan, CRUISE_SPEED);

    let mut group = c.benchmark_group("sa_refine");
    for (name, rule) in [
        ("legacy", AcceptanceRule::Legacy),
        ("metropolis", AcceptanceRule::Metropolis),
    ] {
        let config = SaConfig::default().with_rule(rule).with_seed(42);
        group.bench_function(name, |b| {
            b.iter(|| {
                SaRunner::refine(
                    black_box(&plan),
                    black_box(&seed.route),
                    black_box(&seed.speeds),
                    &config,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route_cost, bench_nn_construct, bench_sa_refine);
criterion_main!(benches);
