//! Impulse movement within a quadrant.

use trek_core::constants::IMPULSE_COST_PER_UNIT;
use trek_core::position::{distance_between, GridPoint};
use trek_core::state::GameData;

/// Energy cost of an impulse hop, scaled up as the impulse drive degrades.
/// Returns infinity at zero drive health.
pub fn impulse_cost(data: &GameData, sector: GridPoint) -> f64 {
    let destination = data.player.position.with_sector(sector);
    let distance = distance_between(&data.player.position, &destination);
    let drive_health = data.player.attributes.impulse_drives.status.fraction();
    distance * IMPULSE_COST_PER_UNIT / drive_health
}

/// Move the player to `sector` in the current quadrant and deduct the
/// energy cost. Returns whether the move happened; occupied or invalid
/// destinations and unaffordable moves are refused.
pub fn impulse_to(data: &mut GameData, sector: GridPoint) -> bool {
    let destination = data.player.position.with_sector(sector);
    if !destination.is_valid() || data.object_at_position(destination).is_some() {
        return false;
    }
    let cost = impulse_cost(data, sector);
    if !cost.is_finite() || cost > data.player.attributes.energy.current {
        return false;
    }
    data.player.position = destination;
    data.player.attributes.energy.apply_delta(-cost);
    true
}
