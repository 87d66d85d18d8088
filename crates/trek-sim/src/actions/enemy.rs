//! Enemy phaser fire against the player.
//!
//! One enemy acts per `AdvanceEnemyTurn`. Its volley first drains the
//! player's shield facing toward the attacker, then scattershots the
//! leftover energy across random ship systems.

use rand::Rng;

use trek_core::constants::{
    CRITICAL_DAMAGE_THRESHOLD, ENEMY_PHASER_ON_SHIELDS_MULTIPLIER,
    ENEMY_PHASER_ON_SYSTEMS_MULTIPLIER, QUADRANT_GRID_SIZE,
};
use trek_core::entities::ObjectId;
use trek_core::enums::{LogLevel, ShieldFacing, SystemId};
use trek_core::position::GridPoint;
use trek_core::state::GameData;

/// Which of the player's four shield arcs faces the attacker, from the
/// attacker's bearing within the sector grid. 0 degrees is fore; each
/// arc spans 90 degrees.
pub fn impacted_facing(player_sector: GridPoint, attacker_sector: GridPoint) -> ShieldFacing {
    let dx = (player_sector.x - attacker_sector.x) as f64;
    let dy = (player_sector.y - attacker_sector.y) as f64;
    let angle = (dy.atan2(dx).to_degrees() - 90.0).rem_euclid(360.0);
    if angle >= 315.0 || angle < 45.0 {
        ShieldFacing::Fore
    } else if angle < 135.0 {
        ShieldFacing::Starboard
    } else if angle < 225.0 {
        ShieldFacing::Aft
    } else {
        ShieldFacing::Port
    }
}

/// One enemy's phaser volley at the player.
pub fn fire_phasers(data: &mut GameData, rng: &mut impl Rng, actor: ObjectId) {
    let Some(enemy) = data.enemy_with_id(actor) else {
        return;
    };
    let half = enemy.attributes.max_phaser_power * 0.5;
    let power = enemy
        .attributes
        .energy
        .current
        .min(half + rng.gen::<f64>() * half);
    let attacker_sector = enemy.position.sector;

    let mut remaining = power;
    if data.player.attributes.shields.raised {
        let facing = impacted_facing(data.player.position.sector, attacker_sector);
        let shield = data.player.attributes.shields.facing_mut(facing);
        let absorbed = shield
            .current
            .min(power * ENEMY_PHASER_ON_SHIELDS_MULTIPLIER);
        shield.apply_delta(-absorbed);
        remaining = power - absorbed / ENEMY_PHASER_ON_SHIELDS_MULTIPLIER;

        if shield.is_depleted() {
            data.log(LogLevel::Red, format!("{} shields down", facing.label()));
        } else {
            data.log(
                LogLevel::Yellow,
                format!("{} shields holding", facing.label()),
            );
        }
    }

    scattershot_systems(data, rng, remaining.floor());
}

/// Spread leftover volley energy over random still-functional systems
/// at reduced effectiveness, one system per round, until the energy is
/// spent, everything is wrecked, or the ship is destroyed.
fn scattershot_systems(data: &mut GameData, rng: &mut impl Rng, mut remaining: f64) {
    while remaining > 0.0 && !data.player.is_destroyed() {
        let candidates: Vec<SystemId> = SystemId::ALL
            .iter()
            .copied()
            .filter(|id| data.player.attributes.system(*id).status.current > 0.0)
            .collect();
        if candidates.is_empty() {
            break;
        }
        let system_id = candidates[rng.gen_range(0..candidates.len())];

        let status = &mut data.player.attributes.system_mut(system_id).status;
        let applied = status
            .current
            .min(remaining * ENEMY_PHASER_ON_SYSTEMS_MULTIPLIER);
        status.apply_delta(-applied);
        remaining -= applied / ENEMY_PHASER_ON_SYSTEMS_MULTIPLIER;

        report_system_damage(data, system_id, applied);
    }
}

/// Log the hit, plus the knock-on effect of critically damaging certain
/// systems: generators drop the shields, sensors lose the short range
/// scanners, the computer loses the galaxy map.
fn report_system_damage(data: &mut GameData, system_id: SystemId, applied: f64) {
    let status = data.player.attributes.system(system_id).status;

    match system_id {
        SystemId::ShieldGenerators
            if status.fraction() < CRITICAL_DAMAGE_THRESHOLD
                && data.player.attributes.shields.raised =>
        {
            data.player.attributes.shields.raised = false;
            data.log(
                LogLevel::Red,
                "Shield generators critically damaged, shields offline",
            );
            return;
        }
        SystemId::Sensors if status.fraction() < CRITICAL_DAMAGE_THRESHOLD => {
            data.log(
                LogLevel::Red,
                "Sensors critically damaged, short range scanners offline",
            );
            return;
        }
        SystemId::Computer if status.fraction() < CRITICAL_DAMAGE_THRESHOLD => {
            // The map collapses to the quadrant the ship is sitting in.
            data.quadrant_mapped =
                [[false; QUADRANT_GRID_SIZE as usize]; QUADRANT_GRID_SIZE as usize];
            let here = data.player.position.quadrant;
            data.mark_discovered(here);
            data.log(LogLevel::Red, "Computer critically damaged, map data lost");
        }
        _ => {}
    }

    if status.is_depleted() {
        data.log(
            LogLevel::Red,
            format!("{} destroyed by enemy phasers", system_id.label()),
        );
    } else if status.fraction() < CRITICAL_DAMAGE_THRESHOLD {
        data.log(
            LogLevel::Red,
            format!("{} critically damaged by enemy phasers", system_id.label()),
        );
    } else {
        data.log(
            LogLevel::Yellow,
            format!("{} sustained {:.0} damage", system_id.label(), applied),
        );
    }
}
