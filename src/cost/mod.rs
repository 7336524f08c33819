//! Physics and cost evaluation.
//!
//! Flight time between two waypoints is the straight-line chord between two
//! altitude-offset points on a sphere, divided by the leg speed, plus fixed
//! delivery and acceleration overheads. Energy use is a simplified
//! rotor-thrust power estimate integrated over that time and expressed as a
//! percentage of battery capacity. [`route_cost`] aggregates both over a
//! whole route permutation and is pure: the constructor and the refiner
//! call it thousands of times per solve.

mod evaluator;
mod physics;

pub use evaluator::{route_cost, TrajectoryCost};
pub use physics::{
    energy_use, flight_time, ACCELERATION_TIME, AIRFRAME_MASS, AIR_DENSITY, BATTERY_ENERGY_WH,
    BATTERY_MASS, CRUISE_SPEED, DELIVERY_TIME, EARTH_RADIUS, EFFICIENCY_PCT, GRAVITY, ROTOR_AREA,
};
