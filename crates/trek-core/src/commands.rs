//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands issued outside their valid turn state, or once the game is
//! over, are silent no-ops by policy.

use serde::{Deserialize, Serialize};

use crate::entities::ObjectId;
use crate::enums::{ShieldFacing, SystemId};
use crate::position::GridPoint;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Impulse move to a sector within the current quadrant.
    MoveTo { sector: GridPoint },

    // --- Weapons ---
    /// Queue a phaser firing step for every locked target.
    FirePhasers,
    /// Queue a torpedo firing step for every locked target.
    FireTorpedoes,
    /// Resolve the head of the firing sequence (issued once per visual step).
    NextFiringStep,
    /// Set the phaser bank power level.
    SetPhaserPower { power: f64 },

    // --- Targeting ---
    /// Lock a target, optionally several times for repeated volleys.
    AddTarget { target: ObjectId, count: usize },
    /// Drop the lock at an index in the target list.
    RemoveTargetAt { index: usize },
    /// Drop every lock on an object.
    RemoveTarget { target: ObjectId },
    /// Select or deselect an object for inspection.
    SelectObject { target: Option<ObjectId> },

    // --- Shields ---
    /// Raise or lower the shields.
    ToggleShields,
    /// Fill one shield facing from the ship's energy reserve.
    TransferEnergyToShield { facing: ShieldFacing },
    /// Redistribute shield energy proportionally across all four facings.
    EqualizeShields,

    // --- Warp ---
    /// Record the warp destination quadrant.
    SetTargetQuadrant { quadrant: GridPoint },
    /// Set the warp factor (clamped to 1..=10).
    SetWarpSpeed { speed: f64 },
    /// Start warping (position commit is deferred to `EndWarp`).
    BeginWarp,
    /// Commit the warp: advance time, settle energy, move the ship.
    EndWarp,

    // --- Repair ---
    /// Flip a system's repair priority flag.
    ToggleRepairPriority { system: SystemId },
    /// Spend the given number of days on repairs, then end the turn.
    Repair { days: f64 },

    // --- Turn control ---
    /// Pass: advance 0.1 stardates and end the turn.
    EndTurn,
    /// Let the next enemy actor take its action (enemy turn only).
    AdvanceEnemyTurn,
}
