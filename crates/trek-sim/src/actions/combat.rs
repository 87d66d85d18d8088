//! Player weapons fire and the step-by-step firing sequence.
//!
//! Firing queues one step per target lock; the presentation layer then
//! advances the sequence one step at a time so each shot lands in sync
//! with its effect. A step that kills its target is retagged
//! `Destroyed` in place, and the entity leaves the world on the next
//! advance.

use trek_core::constants::{
    CRITICAL_DAMAGE_THRESHOLD, PHASER_ON_HULL_MULTIPLIER, PHASER_ON_SHIELDS_MULTIPLIER,
    PHASER_TEMPERATURE_MULTIPLIER, TORPEDO_DAMAGE, TORPEDO_ON_HULL_MULTIPLIER,
    TORPEDO_ON_SHIELDS_MULTIPLIER,
};
use trek_core::entities::{Enemy, Player};
use trek_core::enums::{FiringAction, GameOverState, LogLevel};
use trek_core::state::{FiringStep, GameData};

/// What advancing the firing sequence produced, so the turn machine
/// knows whether the player's turn is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No sequence in progress.
    Idle,
    /// A step resolved; more remain.
    Advanced,
    /// The head step killed its target and was retagged in place.
    TargetDestroyed,
    /// The last step resolved; the turn should end.
    SequenceFinished,
}

pub fn can_fire_phasers(data: &GameData) -> bool {
    let attributes = &data.player.attributes;
    !attributes.weapons.target_ids.is_empty()
        && attributes.weapons.phaser_power.current > 0.0
        && attributes.phasers.status.fraction() >= CRITICAL_DAMAGE_THRESHOLD
        && attributes.sensors.status.fraction() >= CRITICAL_DAMAGE_THRESHOLD
        && attributes.energy.current > 0.0
}

pub fn can_fire_torpedoes(data: &GameData) -> bool {
    let attributes = &data.player.attributes;
    !attributes.weapons.target_ids.is_empty()
        && attributes.weapons.torpedoes.current > 0.0
        && attributes.torpedo_tubes.status.fraction() >= CRITICAL_DAMAGE_THRESHOLD
        && attributes.sensors.status.fraction() >= CRITICAL_DAMAGE_THRESHOLD
}

/// Queue one firing step per target lock, in lock order.
pub fn begin_firing_sequence(data: &mut GameData, action: FiringAction) {
    data.firing_sequence = data
        .player
        .attributes
        .weapons
        .target_ids
        .iter()
        .map(|target| FiringStep {
            action,
            target: *target,
        })
        .collect();
}

/// Resolve the head of the firing sequence.
pub fn next_firing_step(data: &mut GameData) -> StepOutcome {
    let Some(step) = data.firing_sequence.first().copied() else {
        return StepOutcome::Idle;
    };

    match step.action {
        FiringAction::Destroyed => {
            data.enemies.retain(|e| e.id != step.target);
            data.player
                .attributes
                .weapons
                .target_ids
                .retain(|id| *id != step.target);
            if data.enemies.is_empty() && data.game_over == GameOverState::No {
                data.game_over = GameOverState::Victory;
                data.log(LogLevel::Green, "The last enemy ship has been destroyed");
            }
        }
        FiringAction::Phasers | FiringAction::Torpedoes => {
            if let Some(index) = data.enemies.iter().position(|e| e.id == step.target) {
                let destroyed = {
                    let player = &mut data.player;
                    let enemy = &mut data.enemies[index];
                    match step.action {
                        FiringAction::Phasers => apply_phaser_hit(player, enemy),
                        _ => apply_torpedo_hit(player, enemy),
                    }
                };
                if destroyed {
                    data.firing_sequence[0].action = FiringAction::Destroyed;
                    return StepOutcome::TargetDestroyed;
                }
            }
        }
    }

    data.firing_sequence.remove(0);
    if data.firing_sequence.is_empty() {
        StepOutcome::SequenceFinished
    } else {
        StepOutcome::Advanced
    }
}

/// One phaser volley. Power is bounded by the remaining energy; shields
/// absorb at full effectiveness, the leftover hits the hull at reduced
/// effectiveness, and the phaser bank heats up for the power spent.
fn apply_phaser_hit(player: &mut Player, enemy: &mut Enemy) -> bool {
    let weapons = &mut player.attributes.weapons;
    let power = player
        .attributes
        .energy
        .current
        .min(weapons.phaser_power.current);

    let absorbed = enemy
        .attributes
        .shields
        .current
        .min(power * PHASER_ON_SHIELDS_MULTIPLIER);
    enemy.attributes.shields.apply_delta(-absorbed);

    let remaining = power - absorbed / PHASER_ON_SHIELDS_MULTIPLIER;
    if remaining > 0.0 {
        enemy
            .attributes
            .hull
            .apply_delta(-(remaining * PHASER_ON_HULL_MULTIPLIER));
    }

    player.attributes.energy.apply_delta(-power);
    weapons
        .phaser_temperature
        .apply_delta(power * PHASER_TEMPERATURE_MULTIPLIER);

    enemy.is_destroyed()
}

/// One torpedo hit. Shields only stop a fifth of a torpedo's yield; the
/// leftover strikes the hull at full effect.
fn apply_torpedo_hit(player: &mut Player, enemy: &mut Enemy) -> bool {
    let absorbed = enemy
        .attributes
        .shields
        .current
        .min(TORPEDO_DAMAGE * TORPEDO_ON_SHIELDS_MULTIPLIER);
    enemy.attributes.shields.apply_delta(-absorbed);

    let remaining = TORPEDO_DAMAGE - absorbed / TORPEDO_ON_SHIELDS_MULTIPLIER;
    if remaining > 0.0 {
        enemy
            .attributes
            .hull
            .apply_delta(-(remaining * TORPEDO_ON_HULL_MULTIPLIER));
    }

    player.attributes.weapons.torpedoes.apply_delta(-1.0);

    enemy.is_destroyed()
}
