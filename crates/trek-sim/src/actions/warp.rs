//! Warp travel economics: anchored S-curve cost and time models, the
//! engine health penalty, and the two-phase warp itself.

use rand::Rng;

use trek_core::constants::{
    SHIELDS_LOWERED_GENERATION_MULTIPLIER, WARP_COST_AT_WARP_1, WARP_COST_AT_WARP_10,
    WARP_ENERGY_CURVE_STEEPNESS, WARP_ENERGY_GENERATION_PER_QUADRANT, WARP_FIRST_STRIKE_CHANCE,
    WARP_HEALTH_MULTIPLIER_MAX, WARP_HEALTH_MULTIPLIER_MIN, WARP_MIN_ENGINE_HEALTH,
    WARP_TIME_AT_WARP_1, WARP_TIME_AT_WARP_10, WARP_TIME_AT_WARP_5, WARP_TIME_CURVE_STEEPNESS,
};
use trek_core::position::{quadrant_distance, GridPoint};
use trek_core::state::GameData;

use super::{repair, sensors};

/// Soft-S interpolation parameter for `s` in [0, 1]: flat near both
/// ends, steep in the middle. `steepness` below 1 sharpens the ends.
fn s_curve(s: f64, steepness: f64) -> f64 {
    0.5 * (s.powf(steepness) + 1.0 - (1.0 - s).powf(steepness))
}

/// Evaluate an S-curve between `start` and `end` over warp 1..=10,
/// with the exponent solved so the curve passes through
/// (`anchor_warp`, `anchor_value`).
fn anchored_curve(
    warp: f64,
    steepness: f64,
    start: f64,
    end: f64,
    anchor_warp: f64,
    anchor_value: f64,
) -> f64 {
    let normalized = (warp.clamp(1.0, 10.0) - 1.0) / 9.0;
    let t = s_curve(normalized, steepness);

    let anchor_normalized = (anchor_warp - 1.0) / 9.0;
    let anchor_t = s_curve(anchor_normalized, steepness).clamp(1e-6, 1.0 - 1e-6);
    let anchor_target = ((anchor_value - start) / (end - start)).clamp(1e-6, 1.0 - 1e-6);
    let exponent = anchor_target.ln() / anchor_t.ln();

    start + (end - start) * t.powf(exponent)
}

/// Energy cost per quadrant at full engine health, anchored so warp 4
/// breaks even with energy generation.
pub fn base_energy_cost(warp: f64) -> f64 {
    anchored_curve(
        warp,
        WARP_ENERGY_CURVE_STEEPNESS,
        WARP_COST_AT_WARP_1,
        WARP_COST_AT_WARP_10,
        4.0,
        WARP_ENERGY_GENERATION_PER_QUADRANT,
    )
}

/// Travel time per quadrant in days, anchored at one day per quadrant
/// at warp 5.
pub fn travel_time_per_quadrant(warp: f64) -> f64 {
    anchored_curve(
        warp,
        WARP_TIME_CURVE_STEEPNESS,
        WARP_TIME_AT_WARP_1,
        WARP_TIME_AT_WARP_10,
        5.0,
        WARP_TIME_AT_WARP_5,
    )
}

/// Cost penalty for damaged warp engines: power-2 ramp from 1x at full
/// health to 3x at the minimum usable health, infinite below it.
pub fn engine_health_multiplier(health: f64) -> f64 {
    if health < WARP_MIN_ENGINE_HEALTH {
        return f64::INFINITY;
    }
    let span = 1.0 - WARP_MIN_ENGINE_HEALTH;
    let degradation = (1.0 - health.clamp(WARP_MIN_ENGINE_HEALTH, 1.0)) / span;
    WARP_HEALTH_MULTIPLIER_MIN
        + (WARP_HEALTH_MULTIPLIER_MAX - WARP_HEALTH_MULTIPLIER_MIN) * degradation.powi(2)
}

/// Net energy change of warping `distance` quadrants at the current
/// warp factor: generation (boosted with shields lowered) minus the
/// health-scaled consumption. Negative infinity when the engines are
/// below minimum health.
pub fn energy_delta(data: &GameData, distance: f64) -> f64 {
    let attributes = &data.player.attributes;
    let consumption = base_energy_cost(attributes.warp_speed.current)
        * engine_health_multiplier(attributes.warp_engines.status.fraction())
        * distance;
    let generation_multiplier = if attributes.shields.raised {
        1.0
    } else {
        SHIELDS_LOWERED_GENERATION_MULTIPLIER
    };
    WARP_ENERGY_GENERATION_PER_QUADRANT * distance * generation_multiplier - consumption
}

/// Distance in quadrants to the recorded warp destination.
pub fn target_distance(data: &GameData) -> f64 {
    let destination = data
        .player
        .position
        .with_quadrant(data.player.attributes.target_quadrant);
    quadrant_distance(&data.player.position, &destination)
}

/// Whether the ship can afford to warp to `quadrant` at the current
/// warp factor without draining the reserve past zero.
pub fn can_warp_to(data: &GameData, quadrant: GridPoint) -> bool {
    let destination = data.player.position.with_quadrant(quadrant);
    let distance = quadrant_distance(&data.player.position, &destination);
    data.player.attributes.energy.current + energy_delta(data, distance) >= 0.0
}

/// Enter the warping state. Position and energy are only committed by
/// [`end_warp`]; unaffordable jumps are refused.
pub fn begin_warp(data: &mut GameData) {
    if !can_warp_to(data, data.player.attributes.target_quadrant) {
        return;
    }
    data.is_warping = true;
}

/// Commit the warp: advance time, settle the energy ledger, move the
/// ship, refresh the sensor picture. Returns whether the enemy gets a
/// first strike in the new quadrant.
pub fn end_warp(data: &mut GameData, rng: &mut impl Rng) -> bool {
    let distance = target_distance(data);
    let time = travel_time_per_quadrant(data.player.attributes.warp_speed.current) * distance;
    let delta = energy_delta(data, distance);

    repair::pass_time(data, time);
    data.player.attributes.energy.apply_delta(delta);
    data.player.attributes.weapons.target_ids.clear();
    data.is_warping = false;
    data.player.position.quadrant = data.player.attributes.target_quadrant;

    data.sensor_impacted_ids.clear();
    sensors::apply_sensor_damage(data, rng);
    sensors::long_range_scan(data);

    rng.gen::<f64>() < WARP_FIRST_STRIKE_CHANCE
}
