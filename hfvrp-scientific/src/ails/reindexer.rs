#[cfg(test)]
#[path = "../../tests/unit/ails/reindexer_test.rs"]
mod reindexer_test;

use crate::format::*;
use crate::models::*;

/// Places resolved routes into canonical slots: the k-th route of type `t` (in order of appearance)
/// goes to slot `offset(t) + k`, where `offset(t)` is the total amount of vehicles of preceding types.
/// Slots of unused vehicles stay empty.
pub fn reindex_routes(instance: &Instance, routes: Vec<ResolvedRoute>, cost: f64) -> ConvertResult<CanonicalSolution> {
    let offsets = instance.slot_offsets();
    let mut used = vec![0_usize; instance.types()];
    let mut slots = vec![Vec::default(); instance.total_vehicles()];

    for ResolvedRoute { type_id, visits } in routes {
        // unknown type has no reserved slots
        let available = instance.vehicles_per_type().get(type_id).copied().unwrap_or_default();
        let ordinal = used.get(type_id).copied().unwrap_or_default();

        if ordinal >= available {
            return Err(ConvertError::new_with_details(
                ErrorKind::SlotOverflow,
                format!("too many routes for vehicle type {type_id}"),
                format!("available vehicles: {available}"),
            ));
        }

        slots[offsets[type_id] + ordinal] = visits;
        used[type_id] += 1;
    }

    Ok(CanonicalSolution { slots, cost })
}
