//! Simulation constants and tuning parameters.

// --- Map ---

/// Galaxy grid width/height in quadrants.
pub const QUADRANT_GRID_SIZE: i32 = 8;

/// Quadrant grid width/height in sectors.
pub const SECTOR_GRID_SIZE: i32 = 8;

// --- Global rules ---

/// Fraction below which a ship system is considered substantially impaired.
pub const CRITICAL_DAMAGE_THRESHOLD: f64 = 0.2;

/// Hard cap on simultaneous weapon target locks.
pub const MAXIMUM_TARGETS: usize = 3;

/// Stardate cost of one combat turn (impulse move, firing sequence, wait).
pub const TURN_TIME_COST: f64 = 0.1;

/// Stardate at the start of a new game.
pub const STARTING_STARDATE: f64 = 2509.1;

// --- Player phasers vs enemy ---

/// Phaser damage absorbed by enemy shields, per point of power.
pub const PHASER_ON_SHIELDS_MULTIPLIER: f64 = 1.0;

/// Phaser power left over after shields, converted to hull damage.
pub const PHASER_ON_HULL_MULTIPLIER: f64 = 0.4;

/// Phaser temperature rise per point of power spent.
pub const PHASER_TEMPERATURE_MULTIPLIER: f64 = 0.4;

/// Phaser temperature shed at the end of every turn.
pub const PHASER_COOLDOWN_PER_TURN: f64 = 200.0;

// --- Player torpedoes vs enemy ---

/// Raw damage of one torpedo.
pub const TORPEDO_DAMAGE: f64 = 800.0;

/// Torpedo effectiveness against shields (shield budget = damage * this).
pub const TORPEDO_ON_SHIELDS_MULTIPLIER: f64 = 0.2;

/// Torpedo effectiveness against hull after shields.
pub const TORPEDO_ON_HULL_MULTIPLIER: f64 = 1.0;

// --- Enemy phasers vs player ---

/// Enemy phaser damage absorbed per point of player shield health.
pub const ENEMY_PHASER_ON_SHIELDS_MULTIPLIER: f64 = 1.2;

/// Enemy phaser energy converted to system damage once shields are spent.
pub const ENEMY_PHASER_ON_SYSTEMS_MULTIPLIER: f64 = 0.7;

// --- Impulse movement ---

/// Energy cost per distance unit at full impulse drive health.
pub const IMPULSE_COST_PER_UNIT: f64 = 75.0;

// --- Warp travel ---

/// Energy cost per quadrant at warp 1.
pub const WARP_COST_AT_WARP_1: f64 = 10.0;

/// Energy cost per quadrant at warp 10.
pub const WARP_COST_AT_WARP_10: f64 = 600.0;

/// Energy generated per quadrant travelled.
pub const WARP_ENERGY_GENERATION_PER_QUADRANT: f64 = 100.0;

/// Generation bonus when travelling with shields lowered.
pub const SHIELDS_LOWERED_GENERATION_MULTIPLIER: f64 = 1.2;

/// Steepness of the energy cost S-curve near the warp range ends.
pub const WARP_ENERGY_CURVE_STEEPNESS: f64 = 0.98;

/// Travel time per quadrant at warp 1 (days).
pub const WARP_TIME_AT_WARP_1: f64 = 3.0;

/// Travel time per quadrant at warp 5 (days), the curve's anchor point.
pub const WARP_TIME_AT_WARP_5: f64 = 1.0;

/// Travel time per quadrant at warp 10 (days).
pub const WARP_TIME_AT_WARP_10: f64 = 0.1;

/// Steepness of the travel time S-curve.
pub const WARP_TIME_CURVE_STEEPNESS: f64 = 0.5;

/// Engine health fraction below which warp travel is refused.
pub const WARP_MIN_ENGINE_HEALTH: f64 = 0.1;

/// Consumption multiplier at full engine health.
pub const WARP_HEALTH_MULTIPLIER_MIN: f64 = 1.0;

/// Consumption multiplier at minimum usable engine health.
pub const WARP_HEALTH_MULTIPLIER_MAX: f64 = 3.0;

/// Chance of the enemy acting first after arriving in a new quadrant.
pub const WARP_FIRST_STRIKE_CHANCE: f64 = 0.25;

// --- Repair ---

/// Fraction of the crew available for repair duty.
pub const REPAIR_CREW_FRACTION: f64 = 0.25;

/// Repair points produced per crew member per day.
pub const REPAIR_RATE_PER_CREW_PER_DAY: f64 = 0.5;

// --- Sensors ---

/// Sensor health fraction at or below which contacts start dropping out.
pub const SENSOR_MALFUNCTION_THRESHOLD: f64 = 0.6;

/// Sensor health fraction below which every contact is masked.
pub const SENSOR_CRITICAL_THRESHOLD: f64 = 0.2;

// --- Gauge color tiers ---

/// Percentage below which a gauge reads critical.
pub const GAUGE_CRITICAL_PERCENTAGE: f64 = 15.0;

/// Absolute value below which a gauge reads warning.
pub const GAUGE_WARNING_ABSOLUTE: f64 = 30.0;
