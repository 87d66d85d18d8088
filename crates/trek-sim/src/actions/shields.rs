//! Shield management: raising, point transfers, equalization.

use trek_core::constants::CRITICAL_DAMAGE_THRESHOLD;
use trek_core::enums::ShieldFacing;
use trek_core::state::GameData;

/// Raise or lower the shields. Raising is refused while the shield
/// generators are critically damaged; lowering always works.
pub fn toggle(data: &mut GameData) {
    let attributes = &data.player.attributes;
    if !attributes.shields.raised
        && attributes.shield_generators.status.fraction() < CRITICAL_DAMAGE_THRESHOLD
    {
        return;
    }
    data.player.attributes.shields.raised = !data.player.attributes.shields.raised;
}

/// Move energy from the ship's reserve into one shield facing, bounded
/// by both the reserve and the facing's headroom.
pub fn transfer_energy(data: &mut GameData, facing: ShieldFacing) {
    let available = data.player.attributes.energy.current;
    let shield = data.player.attributes.shields.facing_mut(facing);
    let transferred = available.min(shield.missing());
    shield.apply_delta(transferred);
    data.player.attributes.energy.apply_delta(-transferred);
}

/// Redistribute the pooled shield energy so every facing sits at the
/// same fraction of its capacity. Total shield energy is conserved.
pub fn equalize(data: &mut GameData) {
    let shields = &mut data.player.attributes.shields;
    let facings = [
        ShieldFacing::Fore,
        ShieldFacing::Starboard,
        ShieldFacing::Aft,
        ShieldFacing::Port,
    ];
    let total_current: f64 = facings.iter().map(|f| shields.facing(*f).current).sum();
    let total_max: f64 = facings.iter().map(|f| shields.facing(*f).max).sum();
    if total_max <= 0.0 {
        return;
    }
    let ratio = total_current / total_max;
    for facing in facings {
        let shield = shields.facing_mut(facing);
        let target = ratio * shield.max;
        shield.set(target);
    }
}
