#[cfg(test)]
#[path = "../../tests/unit/ails/resolver_test.rs"]
mod resolver_test;

use crate::format::*;
use crate::models::*;

/// Recovers canonical vehicle type of every route using its reported capacity.
///
/// The type index printed by solver is stale, capacity is the only descriptor field which
/// solver keeps correct. When several types share the same capacity, the first one is used.
pub fn resolve_routes(instance: &Instance, routes: Vec<RawRouteRecord>) -> ConvertResult<Vec<ResolvedRoute>> {
    routes.into_iter().map(|route| resolve_route(instance, route)).collect()
}

fn resolve_route(instance: &Instance, route: RawRouteRecord) -> ConvertResult<ResolvedRoute> {
    let capacity = route.reported_capacity();

    instance
        .capacities()
        .iter()
        .position(|&known| known == capacity)
        .map(|type_id| ResolvedRoute { type_id, visits: route.visits })
        .ok_or_else(|| {
            ConvertError::new_with_details(
                ErrorKind::UnknownVehicleCapacity,
                format!("cannot find vehicle type with capacity {capacity}"),
                format!("known capacities: {:?}", instance.capacities()),
            )
        })
}
