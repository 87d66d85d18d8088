//! The game state aggregate and its query helpers.
//!
//! `GameData` is mutated exclusively through the engine's guarded
//! actions; its serde representation is the persisted state layout.

use serde::{Deserialize, Serialize};

use crate::constants::QUADRANT_GRID_SIZE;
use crate::entities::{Enemy, ObjectId, ObjectRef, Player, Star, Starbase};
use crate::enums::{FiringAction, GameOverState, LogLevel, TurnState};
use crate::events::GameLog;
use crate::position::{GridPoint, UniversePosition};

/// One pending step of the player's attack, advanced one entry at a time
/// to stay in sync with presentation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiringStep {
    pub action: FiringAction,
    pub target: ObjectId,
}

/// Derived capability booleans, recomputed after every state-changing
/// action and consumed by the presentation layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_fire_phasers: bool,
    pub can_fire_torpedoes: bool,
    pub can_repair: bool,
}

/// The aggregate root: everything the simulation knows about one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    pub stardate: f64,
    pub turn: TurnState,
    pub player: Player,
    pub stars: Vec<Star>,
    pub enemies: Vec<Enemy>,
    pub starbases: Vec<Starbase>,
    pub selected_object: Option<ObjectId>,
    pub firing_sequence: Vec<FiringStep>,
    /// Fog-of-war discovery map, indexed `[y][x]`. Grows monotonically
    /// except for the computer-damage collapse.
    pub quadrant_mapped: [[bool; QUADRANT_GRID_SIZE as usize]; QUADRANT_GRID_SIZE as usize],
    pub is_warping: bool,
    pub logs: Vec<GameLog>,
    /// Objects whose stats the malfunctioning sensors cannot resolve.
    /// Only grows within a quadrant visit; cleared by warping.
    pub sensor_impacted_ids: Vec<ObjectId>,
    pub game_over: GameOverState,
}

impl GameData {
    /// Append a log entry stamped with the current stardate.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logs.push(GameLog {
            message: message.into(),
            stardate: self.stardate,
            level,
        });
    }

    /// Every object in the given quadrant, the player included when present.
    pub fn objects_in_quadrant(&self, quadrant: GridPoint) -> Vec<ObjectRef<'_>> {
        let mut objects: Vec<ObjectRef<'_>> = Vec::new();
        objects.extend(
            self.stars
                .iter()
                .filter(|s| s.position.quadrant == quadrant)
                .map(ObjectRef::Star),
        );
        objects.extend(
            self.enemies
                .iter()
                .filter(|e| e.position.quadrant == quadrant)
                .map(ObjectRef::Enemy),
        );
        objects.extend(
            self.starbases
                .iter()
                .filter(|s| s.position.quadrant == quadrant)
                .map(ObjectRef::Starbase),
        );
        if self.player.position.quadrant == quadrant {
            objects.push(ObjectRef::Player(&self.player));
        }
        objects
    }

    /// The object occupying an exact position, if any.
    pub fn object_at_position(&self, position: UniversePosition) -> Option<ObjectRef<'_>> {
        self.objects_in_quadrant(position.quadrant)
            .into_iter()
            .find(|o| o.position().sector == position.sector)
    }

    /// Look up any non-player object by id.
    pub fn object_with_id(&self, id: ObjectId) -> Option<ObjectRef<'_>> {
        self.enemies
            .iter()
            .find(|e| e.id == id)
            .map(ObjectRef::Enemy)
            .or_else(|| {
                self.starbases
                    .iter()
                    .find(|s| s.id == id)
                    .map(ObjectRef::Starbase)
            })
            .or_else(|| self.stars.iter().find(|s| s.id == id).map(ObjectRef::Star))
    }

    pub fn enemy_with_id(&self, id: ObjectId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_with_id_mut(&mut self, id: ObjectId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Enemy ids sharing the given quadrant, in world-list order.
    pub fn enemy_ids_in_quadrant(&self, quadrant: GridPoint) -> Vec<ObjectId> {
        self.enemies
            .iter()
            .filter(|e| e.position.quadrant == quadrant)
            .map(|e| e.id)
            .collect()
    }

    pub fn has_enemies_in_player_quadrant(&self) -> bool {
        let quadrant = self.player.position.quadrant;
        self.enemies
            .iter()
            .any(|e| e.position.quadrant == quadrant)
    }

    /// Mark one quadrant discovered on the fog-of-war map.
    pub fn mark_discovered(&mut self, quadrant: GridPoint) {
        if quadrant.x >= 0
            && quadrant.x < QUADRANT_GRID_SIZE
            && quadrant.y >= 0
            && quadrant.y < QUADRANT_GRID_SIZE
        {
            self.quadrant_mapped[quadrant.y as usize][quadrant.x as usize] = true;
        }
    }
}
