//! Target lock management.
//!
//! The lock list drives the firing sequence: one firing step is queued
//! per entry, so locking the same object twice means two volleys.

use trek_core::constants::MAXIMUM_TARGETS;
use trek_core::entities::ObjectId;
use trek_core::state::GameData;

/// How many locks the sensors can currently sustain, never more than
/// the global cap.
pub fn max_targets(data: &GameData) -> usize {
    let fraction = data.player.attributes.sensors.status.fraction();
    let cap = (fraction * MAXIMUM_TARGETS as f64).round() as usize;
    cap.min(MAXIMUM_TARGETS)
}

pub fn can_add_target(data: &GameData) -> bool {
    data.player.attributes.weapons.target_ids.len() < max_targets(data)
}

/// Lock `target` up to `count` times, bounded by the sensor-derived cap.
/// Unknown ids are ignored. Clears the inspection selection on success.
pub fn add_target(data: &mut GameData, target: ObjectId, count: usize) {
    if !can_add_target(data) || data.object_with_id(target).is_none() {
        return;
    }
    let cap = max_targets(data);
    for _ in 0..count.max(1) {
        if data.player.attributes.weapons.target_ids.len() >= cap {
            break;
        }
        data.player.attributes.weapons.target_ids.push(target);
    }
    data.selected_object = None;
}

/// Drop the lock at `index`; out-of-range indexes are ignored.
pub fn remove_target_at(data: &mut GameData, index: usize) {
    let targets = &mut data.player.attributes.weapons.target_ids;
    if index < targets.len() {
        targets.remove(index);
    }
}

/// Drop every lock on `target` and clear the inspection selection.
pub fn remove_target(data: &mut GameData, target: ObjectId) {
    data.player
        .attributes
        .weapons
        .target_ids
        .retain(|id| *id != target);
    data.selected_object = None;
}
