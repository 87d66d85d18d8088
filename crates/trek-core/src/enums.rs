//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Whose turn it is. Every player intent is gated on `PlayerTurn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    PlayerTurn,
    EnemyTurn,
}

/// One step in the player's pending firing sequence.
///
/// A step whose target's hull reaches zero is retagged `Destroyed` rather
/// than removed, so the presentation layer can play the destruction effect
/// before the entity leaves the world on the next advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiringAction {
    Phasers,
    Torpedoes,
    Destroyed,
}

/// Severity tier of a game log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Green,
    Yellow,
    Red,
}

/// Terminal state of the game. `Defeat` halts all further simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverState {
    #[default]
    No,
    Victory,
    Defeat,
}

/// Enemy ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    Scout,
    Warbird,
    Cube,
}

/// The player's twelve damageable ship systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemId {
    Hull,
    Sensors,
    Computer,
    Deflectors,
    Communications,
    WarpEngines,
    ImpulseDrives,
    ShieldGenerators,
    TorpedoTubes,
    Phasers,
    LifeSupport,
    EnergyConverter,
}

impl SystemId {
    /// All systems, in the fixed iteration order used by repair and
    /// damage allocation.
    pub const ALL: [SystemId; 12] = [
        SystemId::Hull,
        SystemId::Sensors,
        SystemId::Computer,
        SystemId::Deflectors,
        SystemId::Communications,
        SystemId::WarpEngines,
        SystemId::ImpulseDrives,
        SystemId::ShieldGenerators,
        SystemId::TorpedoTubes,
        SystemId::Phasers,
        SystemId::LifeSupport,
        SystemId::EnergyConverter,
    ];

    /// Display label used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            SystemId::Hull => "Hull",
            SystemId::Sensors => "Sensors",
            SystemId::Computer => "Computer",
            SystemId::Deflectors => "Deflectors",
            SystemId::Communications => "Communications",
            SystemId::WarpEngines => "Warp engines",
            SystemId::ImpulseDrives => "Impulse drive",
            SystemId::ShieldGenerators => "Shield generators",
            SystemId::TorpedoTubes => "Torpedo tubes",
            SystemId::Phasers => "Phasers",
            SystemId::LifeSupport => "Life support",
            SystemId::EnergyConverter => "Energy converter",
        }
    }
}

/// Directional shield quadrant on the player ship, 0° = fore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShieldFacing {
    Fore,
    Starboard,
    Aft,
    Port,
}

impl ShieldFacing {
    pub fn label(&self) -> &'static str {
        match self {
            ShieldFacing::Fore => "Fore",
            ShieldFacing::Starboard => "Starboard",
            ShieldFacing::Aft => "Aft",
            ShieldFacing::Port => "Port",
        }
    }
}

/// Tiered gauge readout for a `RangedValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GaugeColor {
    Nominal,
    Warning,
    Critical,
}
