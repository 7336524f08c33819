//! Waypoint record types and the capacity-checked mission plan.

/// Default delivery capacity of a mission buffer.
///
/// Expandable, but every plan validates its input against its own capacity
/// before any buffer is touched — there is no silent overflow path.
pub const MAX_DELIVERY_ITEMS: usize = 6;

/// One delivery point, immutable once read from input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionItem {
    /// Sequential item id assigned at upload.
    pub id: u32,
    /// Originating-user tag.
    pub user: char,
    /// Geodetic latitude in degrees.
    pub lat: f32,
    /// Geodetic longitude in degrees.
    pub lon: f32,
    /// Altitude above the reference sphere, meters.
    pub altitude: f32,
    /// Nominal flight speed, m/s.
    pub speed: f32,
    /// Payload weight dropped at this point, kg.
    pub payload_weight: f32,
    /// Delivery deadline, seconds from mission start.
    pub deadline: f32,
}

/// A mission item placed in a solvable route.
///
/// `departure_speed` is the only field the solvers mutate: it is the speed
/// assigned to the leg departing this waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionWaypoint {
    pub item: MissionItem,
    /// Position of the item in the unsorted input list.
    pub original_index: usize,
    /// Speed assigned by the solver for the departing leg, m/s.
    pub departure_speed: f32,
}

/// An ordered route: indices into a plan's waypoint list.
///
/// Valid routes are permutations of `{0, .., n-1}` with the depot (index 0)
/// fixed first. The return-to-depot leg is implicit; evaluators target the
/// plan's appended return entry at index `n`.
pub type Route = Vec<usize>;

/// Checks the route invariant: a permutation of `{0, .., n-1}`, depot first.
pub fn route_is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n || route.first() != Some(&0) {
        return false;
    }
    let mut seen = vec![false; n];
    for &wp in route {
        if wp >= n || seen[wp] {
            return false;
        }
        seen[wp] = true;
    }
    true
}

/// A fully assembled mission: depot, deliveries, return entry.
///
/// Constructed once per scenario run and discarded when it completes. The
/// depot carries the mission's total payload; the return entry is a depot
/// copy with zero payload.
#[derive(Debug, Clone)]
pub struct MissionPlan {
    waypoints: Vec<MissionWaypoint>,
    capacity: usize,
}

impl MissionPlan {
    /// Assembles a plan from a depot item and the uploaded delivery items,
    /// using the default capacity.
    pub fn assemble(depot: MissionItem, items: &[MissionItem]) -> Result<MissionPlan, String> {
        Self::with_capacity(MAX_DELIVERY_ITEMS, depot, items)
    }

    /// Assembles a plan with an explicit delivery capacity.
    ///
    /// Rejects the input before any buffer access when it holds more than
    /// `capacity` deliveries.
    pub fn with_capacity(
        capacity: usize,
        depot: MissionItem,
        items: &[MissionItem],
    ) -> Result<MissionPlan, String> {
        if items.len() > capacity {
            return Err(format!(
                "too many waypoints: {} deliveries exceed capacity {capacity}",
                items.len()
            ));
        }

        let mut depot = depot;
        depot.payload_weight = items.iter().map(|it| it.payload_weight).sum();

        let mut waypoints = Vec::with_capacity(items.len() + 2);
        waypoints.push(MissionWaypoint {
            item: depot,
            original_index: 0,
            departure_speed: depot.speed,
        });
        for (i, item) in items.iter().enumerate() {
            waypoints.push(MissionWaypoint {
                item: *item,
                original_index: i + 1,
                departure_speed: item.speed,
            });
        }

        // Return-to-depot entry: nothing left to carry on the last leg.
        let mut home = waypoints[0];
        home.item.payload_weight = 0.0;
        waypoints.push(home);

        Ok(MissionPlan {
            waypoints,
            capacity,
        })
    }

    /// Depot + deliveries + return entry.
    pub fn waypoints(&self) -> &[MissionWaypoint] {
        &self.waypoints
    }

    /// Number of routable waypoints (depot + deliveries, excluding the
    /// return entry). This is the `n` of the route permutation.
    pub fn num_waypoints(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Number of delivery points.
    pub fn num_deliveries(&self) -> usize {
        self.waypoints.len() - 2
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Materializes a solver output: the waypoints in route order with the
    /// solver's departure speeds applied.
    pub fn ordered(&self, route: &[usize], speeds: &[f32]) -> Vec<MissionWaypoint> {
        debug_assert!(route_is_permutation(route, self.num_waypoints()));
        debug_assert_eq!(route.len(), speeds.len());
        route
            .iter()
            .zip(speeds)
            .map(|(&wp, &speed)| {
                let mut out = self.waypoints[wp];
                out.departure_speed = speed;
                out
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, payload: f32) -> MissionItem {
        MissionItem {
            id,
            user: (b'A' + id as u8) as char,
            lat: 47.39,
            lon: 8.54,
            altitude: 20.0,
            speed: 5.0,
            payload_weight: payload,
            deadline: 300.0,
        }
    }

    #[test]
    fn test_assemble_accumulates_payload_on_depot() {
        let plan = MissionPlan::assemble(item(0, 0.0), &[item(1, 0.2), item(2, 0.3)]).unwrap();
        let wps = plan.waypoints();
        assert_eq!(wps.len(), 4);
        assert!((wps[0].item.payload_weight - 0.5).abs() < 1e-6);
        assert_eq!(wps[3].item.payload_weight, 0.0);
        assert_eq!(plan.num_waypoints(), 3);
        assert_eq!(plan.num_deliveries(), 2);
    }

    #[test]
    fn test_assemble_preserves_original_index() {
        let plan = MissionPlan::assemble(item(0, 0.0), &[item(1, 0.1), item(2, 0.1)]).unwrap();
        let indices: Vec<usize> = plan.waypoints().iter().map(|w| w.original_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_capacity_violation_rejected() {
        let items: Vec<MissionItem> = (1..=7).map(|i| item(i, 0.1)).collect();
        let err = MissionPlan::assemble(item(0, 0.0), &items).unwrap_err();
        assert!(err.contains("too many waypoints"), "{err}");
    }

    #[test]
    fn test_capacity_expandable() {
        let items: Vec<MissionItem> = (1..=7).map(|i| item(i, 0.1)).collect();
        let plan = MissionPlan::with_capacity(8, item(0, 0.0), &items).unwrap();
        assert_eq!(plan.num_deliveries(), 7);
    }

    #[test]
    fn test_zero_deliveries_assembles() {
        let plan = MissionPlan::assemble(item(0, 0.0), &[]).unwrap();
        assert_eq!(plan.num_waypoints(), 1);
        assert_eq!(plan.waypoints()[0].item.payload_weight, 0.0);
    }

    #[test]
    fn test_route_permutation_check() {
        assert!(route_is_permutation(&[0, 2, 1, 3], 4));
        assert!(!route_is_permutation(&[1, 0, 2, 3], 4)); // depot not first
        assert!(!route_is_permutation(&[0, 1, 1, 3], 4)); // duplicate
        assert!(!route_is_permutation(&[0, 1, 2], 4)); // wrong length
        assert!(!route_is_permutation(&[0, 1, 4, 2], 4)); // out of range
        assert!(!route_is_permutation(&[], 0)); // empty has no depot
    }

    #[test]
    fn test_ordered_applies_speeds() {
        let plan = MissionPlan::assemble(item(0, 0.0), &[item(1, 0.1), item(2, 0.1)]).unwrap();
        let ordered = plan.ordered(&[0, 2, 1], &[5.0, 4.0, 3.0]);
        assert_eq!(ordered[1].item.id, 2);
        assert_eq!(ordered[1].departure_speed, 4.0);
        assert_eq!(ordered[2].item.id, 1);
        assert_eq!(ordered[2].departure_speed, 3.0);
    }
}
