//! Crew repair allocation and the passage of time.
//!
//! Repair points accrue continuously: every action that advances the
//! stardate routes through [`pass_time`], which spends the accrued
//! points on damaged systems.

use trek_core::constants::{REPAIR_CREW_FRACTION, REPAIR_RATE_PER_CREW_PER_DAY};
use trek_core::enums::SystemId;
use trek_core::state::GameData;

/// Repair points produced by the crew in one day.
pub fn daily_repair_points(data: &GameData) -> f64 {
    data.player.attributes.crew.current * REPAIR_CREW_FRACTION * REPAIR_RATE_PER_CREW_PER_DAY
}

/// Advance the stardate and spend the repair points the elapsed time
/// produced.
pub fn pass_time(data: &mut GameData, days: f64) {
    data.stardate += days;
    apply_repair_for_time(data, days);
}

/// Systems eligible for repair at the given priority tier. The hull can
/// only be worked on while docked at a starbase.
fn repairable_systems(data: &GameData, prioritised: bool) -> Vec<SystemId> {
    SystemId::ALL
        .iter()
        .copied()
        .filter(|id| {
            let system = data.player.attributes.system(*id);
            system.repair_prioritised == prioritised
                && !system.status.is_full()
                && (*id != SystemId::Hull || data.player.attributes.docked)
        })
        .collect()
}

/// Repair points needed to fully restore one priority tier.
fn tier_repair_points(data: &GameData, prioritised: bool) -> f64 {
    SystemId::ALL
        .iter()
        .filter(|id| {
            let system = data.player.attributes.system(**id);
            system.repair_prioritised == prioritised
                && (**id != SystemId::Hull || data.player.attributes.docked)
        })
        .map(|id| data.player.attributes.system(*id).status.missing())
        .sum()
}

/// Days needed to fully restore the prioritised systems.
pub fn prioritised_repair_days(data: &GameData) -> f64 {
    tier_repair_points(data, true) / daily_repair_points(data)
}

/// Days needed to fully restore the non-prioritised systems.
pub fn non_prioritised_repair_days(data: &GameData) -> f64 {
    tier_repair_points(data, false) / daily_repair_points(data)
}

/// Repairs are only possible without hostiles in the quadrant.
pub fn can_repair(data: &GameData) -> bool {
    !data.has_enemies_in_player_quadrant()
}

/// Spend `days` worth of repair points: prioritised systems first, then
/// the rest, splitting each round evenly across the still-damaged set.
pub fn apply_repair_for_time(data: &mut GameData, days: f64) {
    let mut points = daily_repair_points(data) * days;
    points = repair_tier(data, repairable_systems(data, true), points);
    if points > 0.0 {
        repair_tier(data, repairable_systems(data, false), points);
    }
}

/// Even-split allocation rounds: each pass divides the remaining points
/// across the systems of the tier that still have headroom, so points
/// freed by a system topping out flow to the others.
fn repair_tier(data: &mut GameData, tier: Vec<SystemId>, mut points: f64) -> f64 {
    while points > 0.0 {
        let damaged: Vec<SystemId> = tier
            .iter()
            .copied()
            .filter(|id| !data.player.attributes.system(*id).status.is_full())
            .collect();
        if damaged.is_empty() {
            break;
        }
        let share = points / damaged.len() as f64;
        let mut spent = 0.0;
        for id in &damaged {
            let status = &mut data.player.attributes.system_mut(*id).status;
            let applied = share.min(status.missing());
            status.apply_delta(applied);
            spent += applied;
        }
        points -= spent;
        if spent <= 0.0 {
            break;
        }
    }
    points
}
