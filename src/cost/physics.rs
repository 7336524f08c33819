//! Flight-time and energy formulas with the airframe's physical constants.

use crate::mission::MissionItem;

/// Earth radius, meters.
pub const EARTH_RADIUS: f32 = 6_371_000.0;

/// π as the flight firmware defines it, kept for parity with its degree
/// conversion.
const PI: f64 = 3.141_592_6;

/// Gravitational acceleration, m/s².
pub const GRAVITY: f32 = 9.81;

/// Air density at sea level, kg/m³.
pub const AIR_DENSITY: f32 = 1.225;

/// Effective rotor disc area, m².
pub const ROTOR_AREA: f32 = 0.568;

/// Fixed dwell time spent dropping an item at a waypoint, seconds.
pub const DELIVERY_TIME: f32 = 5.0;

/// Fixed acceleration/deceleration overhead per leg, seconds.
pub const ACCELERATION_TIME: f32 = 3.0;

/// Airframe mass without battery or payload, kg.
pub const AIRFRAME_MASS: f32 = 1.38;

/// Battery mass, kg (accounted inside the airframe figure on this frame).
pub const BATTERY_MASS: f32 = 0.0;

/// Usable battery energy, watt-hours.
pub const BATTERY_ENERGY_WH: f32 = 81.3;

/// Powertrain efficiency, percent.
pub const EFFICIENCY_PCT: f32 = 100.0;

/// Reference cruise speed used when no per-leg speed has been assigned, m/s.
pub const CRUISE_SPEED: f32 = 5.0;

/// Straight-line chord between the two altitude-offset points.
///
/// Spherical law of cosines gives the central angle; the chord then comes
/// from the law of cosines for a triangle with the two altitude-adjusted
/// radii as sides. Not a surface (haversine) distance: altitude perturbs
/// each radius.
/// The trigonometry runs in `f64`: at delivery-field separations the
/// central angle is a few 1e-5 rad, so its cosine sits within half an f32
/// ulp of 1.0 and a single-precision chord collapses to zero.
fn chord_distance(a: &MissionItem, b: &MissionItem) -> f32 {
    let lat1 = (a.lat as f64 / 180.0) * PI;
    let lat2 = (b.lat as f64 / 180.0) * PI;
    let lon1 = (a.lon as f64 / 180.0) * PI;
    let lon2 = (b.lon as f64 / 180.0) * PI;

    let r1 = EARTH_RADIUS as f64 + a.altitude as f64;
    let r2 = EARTH_RADIUS as f64 + b.altitude as f64;

    let cos_central = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

    // Coincident points can leave a tiny negative residue.
    (r1.powi(2) + r2.powi(2) - 2.0 * r1 * r2 * cos_central).max(0.0).sqrt() as f32
}

/// Approximate time to fly one leg and deliver, seconds.
///
/// Chord distance over the leg speed plus the fixed delivery dwell and
/// acceleration overheads. The constants are part of the model, not tuning
/// knobs.
pub fn flight_time(a: &MissionItem, b: &MissionItem, flight_speed: f32) -> f32 {
    chord_distance(a, b) / flight_speed + DELIVERY_TIME + ACCELERATION_TIME
}

/// Estimated battery percentage consumed flying one leg with `payload` kg
/// still on board.
///
/// Hover power from the simplified rotor-thrust relation
/// `P = sqrt(m³ g³ / (2 ρ A))`, integrated over the leg's flight time and
/// scaled to the battery's joule capacity and the powertrain efficiency.
pub fn energy_use(a: &MissionItem, b: &MissionItem, flight_speed: f32, payload: f32) -> f32 {
    let time = flight_time(a, b, flight_speed);

    let total_mass = AIRFRAME_MASS + BATTERY_MASS + payload;
    let power = (total_mass.powi(3) * GRAVITY.powi(3) / (2.0 * AIR_DENSITY * ROTOR_AREA)).sqrt();

    ((power * time) / (BATTERY_ENERGY_WH * 3600.0) * 100.0) / (EFFICIENCY_PCT / 100.0)
}
