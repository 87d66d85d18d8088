//! The game engine: command dispatch and the turn state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use trek_core::commands::PlayerCommand;
use trek_core::constants::{PHASER_COOLDOWN_PER_TURN, TURN_TIME_COST};
use trek_core::entities::ObjectId;
use trek_core::enums::{FiringAction, GameOverState, LogLevel, TurnState};
use trek_core::position::GridPoint;
use trek_core::state::{Capabilities, GameData};

use crate::actions::{combat, enemy, movement, repair, sensors, shields, targeting, warp};
use crate::world_setup;

/// Engine configuration. The seed fixes the world layout and every
/// subsequent random draw, so two engines with the same seed and the
/// same command stream produce identical states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Owns the game state and applies player commands to it.
///
/// All mutation goes through [`GameEngine::apply`]; reads go through
/// [`GameEngine::data`] and the query helpers.
pub struct GameEngine {
    data: GameData,
    rng: ChaCha8Rng,
    /// Enemies still to act this enemy turn, front first.
    ai_sequence: Vec<ObjectId>,
    /// Player input is ignored while a firing sequence or the enemy
    /// turn is playing out.
    input_disabled: bool,
    capabilities: Capabilities,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let data = world_setup::new_game(&mut rng);
        let mut engine = Self {
            data,
            rng,
            ai_sequence: Vec::new(),
            input_disabled: false,
            capabilities: Capabilities::default(),
        };
        sensors::long_range_scan(&mut engine.data);
        engine.refresh_capabilities();
        engine
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    #[cfg(test)]
    pub(crate) fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn ai_sequence(&self) -> &[ObjectId] {
        &self.ai_sequence
    }

    pub fn input_disabled(&self) -> bool {
        self.input_disabled
    }

    // --- Query helpers for the presentation layer ---

    pub fn can_warp_to(&self, quadrant: GridPoint) -> bool {
        warp::can_warp_to(&self.data, quadrant)
    }

    pub fn max_targets(&self) -> usize {
        targeting::max_targets(&self.data)
    }

    pub fn can_add_target(&self) -> bool {
        targeting::can_add_target(&self.data)
    }

    pub fn prioritised_repair_days(&self) -> f64 {
        repair::prioritised_repair_days(&self.data)
    }

    pub fn non_prioritised_repair_days(&self) -> f64 {
        repair::non_prioritised_repair_days(&self.data)
    }

    /// Apply one command. Commands are silently ignored once the game
    /// is over, or when issued in the wrong turn state.
    pub fn apply(&mut self, command: PlayerCommand) {
        if self.data.game_over != GameOverState::No {
            return;
        }
        match command {
            PlayerCommand::AdvanceEnemyTurn => self.advance_enemy_turn(),
            player_intent => self.apply_player_intent(player_intent),
        }
        self.refresh_capabilities();
    }

    fn apply_player_intent(&mut self, command: PlayerCommand) {
        if self.data.turn != TurnState::PlayerTurn {
            return;
        }
        match command {
            PlayerCommand::MoveTo { sector } => {
                if movement::impulse_to(&mut self.data, sector) {
                    repair::pass_time(&mut self.data, TURN_TIME_COST);
                    self.end_turn();
                }
            }
            PlayerCommand::FirePhasers => {
                if self.capabilities.can_fire_phasers {
                    combat::begin_firing_sequence(&mut self.data, FiringAction::Phasers);
                    self.input_disabled = true;
                }
            }
            PlayerCommand::FireTorpedoes => {
                if self.capabilities.can_fire_torpedoes {
                    combat::begin_firing_sequence(&mut self.data, FiringAction::Torpedoes);
                    self.input_disabled = true;
                }
            }
            PlayerCommand::NextFiringStep => {
                if combat::next_firing_step(&mut self.data) == combat::StepOutcome::SequenceFinished
                {
                    repair::pass_time(&mut self.data, TURN_TIME_COST);
                    self.end_turn();
                }
            }
            PlayerCommand::SetPhaserPower { power } => {
                self.data.player.attributes.weapons.phaser_power.set(power);
            }
            PlayerCommand::AddTarget { target, count } => {
                targeting::add_target(&mut self.data, target, count);
            }
            PlayerCommand::RemoveTargetAt { index } => {
                targeting::remove_target_at(&mut self.data, index);
            }
            PlayerCommand::RemoveTarget { target } => {
                targeting::remove_target(&mut self.data, target);
            }
            PlayerCommand::SelectObject { target } => {
                self.data.selected_object =
                    target.filter(|id| self.data.object_with_id(*id).is_some());
            }
            PlayerCommand::ToggleShields => {
                shields::toggle(&mut self.data);
            }
            PlayerCommand::TransferEnergyToShield { facing } => {
                shields::transfer_energy(&mut self.data, facing);
            }
            PlayerCommand::EqualizeShields => {
                shields::equalize(&mut self.data);
            }
            PlayerCommand::SetTargetQuadrant { quadrant } => {
                if self
                    .data
                    .player
                    .position
                    .with_quadrant(quadrant)
                    .is_valid()
                {
                    self.data.player.attributes.target_quadrant = quadrant;
                }
            }
            PlayerCommand::SetWarpSpeed { speed } => {
                self.data.player.attributes.warp_speed.set(speed);
            }
            PlayerCommand::BeginWarp => {
                warp::begin_warp(&mut self.data);
            }
            PlayerCommand::EndWarp => {
                if self.data.is_warping {
                    let first_strike = warp::end_warp(&mut self.data, &mut self.rng);
                    if first_strike {
                        self.end_turn();
                    }
                }
            }
            PlayerCommand::ToggleRepairPriority { system } => {
                let system = self.data.player.attributes.system_mut(system);
                system.repair_prioritised = !system.repair_prioritised;
            }
            PlayerCommand::Repair { days } => {
                if self.capabilities.can_repair && days > 0.0 {
                    repair::pass_time(&mut self.data, days);
                    self.end_turn();
                }
            }
            PlayerCommand::EndTurn => {
                repair::pass_time(&mut self.data, TURN_TIME_COST);
                self.end_turn();
            }
            // Handled before the turn-state gate.
            PlayerCommand::AdvanceEnemyTurn => {}
        }
    }

    /// End the player's turn: shed phaser heat, refresh the long range
    /// picture, then either hand over to the hostiles in the quadrant
    /// or start the next player turn.
    fn end_turn(&mut self) {
        self.data
            .player
            .attributes
            .weapons
            .phaser_temperature
            .apply_delta(-PHASER_COOLDOWN_PER_TURN);
        sensors::long_range_scan(&mut self.data);

        if self.data.has_enemies_in_player_quadrant() {
            self.ai_sequence = self
                .data
                .enemy_ids_in_quadrant(self.data.player.position.quadrant);
            self.input_disabled = true;
            self.data.turn = TurnState::EnemyTurn;
        } else {
            self.begin_player_turn();
        }
    }

    fn begin_player_turn(&mut self) {
        self.data.turn = TurnState::PlayerTurn;
        self.input_disabled = false;
    }

    /// One enemy acts, then leaves the queue. An empty queue hands the
    /// turn back to the player. The player's destruction ends the game
    /// on the spot.
    fn advance_enemy_turn(&mut self) {
        if self.data.turn != TurnState::EnemyTurn {
            return;
        }
        let Some(actor) = self.ai_sequence.first().copied() else {
            self.finish_enemy_turn();
            return;
        };

        enemy::fire_phasers(&mut self.data, &mut self.rng, actor);

        if self.data.player.is_destroyed() {
            self.data.game_over = GameOverState::Defeat;
            self.data.log(LogLevel::Red, "The ship has been destroyed");
            self.ai_sequence.clear();
            return;
        }

        self.ai_sequence.remove(0);
        sensors::apply_sensor_damage(&mut self.data, &mut self.rng);

        if self.ai_sequence.is_empty() {
            self.finish_enemy_turn();
        }
    }

    fn finish_enemy_turn(&mut self) {
        self.ai_sequence.clear();
        self.begin_player_turn();
    }

    fn refresh_capabilities(&mut self) {
        self.capabilities = Capabilities {
            can_fire_phasers: combat::can_fire_phasers(&self.data),
            can_fire_torpedoes: combat::can_fire_torpedoes(&self.data),
            can_repair: repair::can_repair(&self.data),
        };
    }
}
