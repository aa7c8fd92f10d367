//! Contains models which are built once per (instance, solution) pair and discarded after
//! the canonical solution is written.

#[cfg(test)]
#[path = "../tests/unit/models_test.rs"]
mod models_test;

/// Vehicle metadata of heterogeneous fleet instance. Index of each vector is a canonical vehicle type id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    capacities: Vec<i64>,
    vehicles_per_type: Vec<usize>,
}

impl Instance {
    /// Creates a new instance. Returns `None` when capacities and vehicle counts differ in length.
    pub fn new(capacities: Vec<i64>, vehicles_per_type: Vec<usize>) -> Option<Self> {
        (capacities.len() == vehicles_per_type.len()).then_some(Self { capacities, vehicles_per_type })
    }

    /// Returns capacity per vehicle type.
    pub fn capacities(&self) -> &[i64] {
        self.capacities.as_slice()
    }

    /// Returns amount of available vehicles per vehicle type.
    pub fn vehicles_per_type(&self) -> &[usize] {
        self.vehicles_per_type.as_slice()
    }

    /// Returns amount of vehicle types.
    pub fn types(&self) -> usize {
        self.capacities.len()
    }

    /// Returns total amount of available vehicles, which is the amount of canonical slots.
    pub fn total_vehicles(&self) -> usize {
        self.vehicles_per_type.iter().sum()
    }

    /// Returns index of the first slot reserved for every vehicle type.
    pub fn slot_offsets(&self) -> Vec<usize> {
        self.vehicles_per_type
            .iter()
            .scan(0, |offset, &count| {
                let start = *offset;
                *offset += count;
                Some(start)
            })
            .collect()
    }

    /// Returns true if the same capacity is used by more than one vehicle type.
    pub fn has_ambiguous_capacities(&self) -> bool {
        self.capacities.iter().enumerate().any(|(idx, capacity)| self.capacities[..idx].contains(capacity))
    }
}

/// A vehicle descriptor as printed by solver, e.g. `[type=0, q=283, f=575, r=1.16]`.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleDescriptor {
    /// Type index reported by solver. It is known to be stale and must not be used for resolution.
    pub reported_type: usize,
    /// Vehicle capacity.
    pub capacity: i64,
    /// Fixed cost.
    pub fixed_cost: i64,
    /// Variable cost coefficient.
    pub variable_cost: f64,
}

/// A route as reported by solver.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRouteRecord {
    /// A vehicle descriptor.
    pub descriptor: VehicleDescriptor,
    /// Node ids in visiting order.
    pub visits: Vec<usize>,
}

impl RawRouteRecord {
    /// Returns reported capacity which is the only trusted field of descriptor.
    pub fn reported_capacity(&self) -> i64 {
        self.descriptor.capacity
    }
}

/// A solution as reported by solver.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSolution {
    /// Routes in order of appearance.
    pub routes: Vec<RawRouteRecord>,
    /// Rounded total cost.
    pub cost: f64,
}

/// A route with vehicle type recovered from the instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Canonical vehicle type id.
    pub type_id: usize,
    /// Node ids in visiting order.
    pub visits: Vec<usize>,
}

/// A solution with one route per available vehicle, ordered by vehicle type.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalSolution {
    /// Visits per canonical slot, empty for unused vehicles.
    pub slots: Vec<Vec<usize>>,
    /// Rounded total cost.
    pub cost: f64,
}

impl CanonicalSolution {
    /// Returns amount of slots with at least one visit.
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }
}

/// Rounds value to given amount of decimal places. The exact binary value is rounded, so the result
/// is the same as the one printed with `{:.precision$}`.
pub(crate) fn round_to(value: f64, precision: usize) -> f64 {
    format!("{value:.precision$}").parse().unwrap_or(value)
}
