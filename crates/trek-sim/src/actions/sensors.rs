//! Sensors: fog-of-war discovery and malfunction masking.

use rand::Rng;

use trek_core::constants::{
    CRITICAL_DAMAGE_THRESHOLD, QUADRANT_GRID_SIZE, SENSOR_CRITICAL_THRESHOLD,
    SENSOR_MALFUNCTION_THRESHOLD,
};
use trek_core::entities::ObjectId;
use trek_core::position::GridPoint;
use trek_core::state::GameData;

/// Mark the 3x3 block of quadrants around the player as discovered.
/// Does nothing while the sensors are critically damaged.
pub fn long_range_scan(data: &mut GameData) {
    if data.player.attributes.sensors.status.fraction() < CRITICAL_DAMAGE_THRESHOLD {
        return;
    }
    let quadrant = data.player.position.quadrant;
    for y in (quadrant.y - 1).max(0)..=(quadrant.y + 1).min(QUADRANT_GRID_SIZE - 1) {
        for x in (quadrant.x - 1).max(0)..=(quadrant.x + 1).min(QUADRANT_GRID_SIZE - 1) {
            data.mark_discovered(GridPoint::new(x, y));
        }
    }
}

/// Degraded sensors lose track of contacts in the current quadrant.
///
/// The masked set only grows while the ship stays put; warping to a new
/// quadrant clears it. Below the critical threshold every contact is
/// masked.
pub fn apply_sensor_damage(data: &mut GameData, rng: &mut impl Rng) {
    let fraction = data.player.attributes.sensors.status.fraction();
    if fraction > SENSOR_MALFUNCTION_THRESHOLD {
        return;
    }
    let contacts: Vec<ObjectId> = data
        .objects_in_quadrant(data.player.position.quadrant)
        .iter()
        .filter(|o| !o.is_player())
        .map(|o| o.id())
        .collect();
    let masked_count = if fraction < SENSOR_CRITICAL_THRESHOLD {
        contacts.len()
    } else {
        (contacts.len() as f64 * (1.0 - fraction)).floor() as usize
    };
    let mut unmasked: Vec<ObjectId> = contacts
        .into_iter()
        .filter(|id| !data.sensor_impacted_ids.contains(id))
        .collect();
    while data.sensor_impacted_ids.len() < masked_count && !unmasked.is_empty() {
        let index = rng.gen_range(0..unmasked.len());
        data.sensor_impacted_ids.push(unmasked.swap_remove(index));
    }
}
