use carmatch_core::constants::DRIVER_SEATS;
use carmatch_core::models::{InferredFilters, PassengerInfo};
use tracing::debug;

/// Minimum seats = child seats + other passengers + the driver.
///
/// Always recomputed, never backfilled: passenger answers are the only
/// source of truth for the seat count.
pub fn apply_passenger_seats(filters: &mut InferredFilters, passengers: Option<&PassengerInfo>) {
    let Some(passengers) = passengers else {
        return;
    };
    let seats = passengers
        .children()
        .saturating_add(passengers.others())
        .saturating_add(DRIVER_SEATS);
    debug!(seats, "seat count recomputed");
    filters.min_seats = Some(seats);
}
