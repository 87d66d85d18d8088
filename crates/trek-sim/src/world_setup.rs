//! World factory: populates a fresh galaxy from the engine's RNG.

use std::collections::HashSet;

use rand::Rng;

use trek_core::constants::{QUADRANT_GRID_SIZE, SECTOR_GRID_SIZE, STARTING_STARDATE};
use trek_core::entities::{Enemy, ObjectIdAllocator, Player, Star, Starbase};
use trek_core::enums::{EnemyClass, GameOverState, TurnState};
use trek_core::position::{GridPoint, UniversePosition};
use trek_core::state::GameData;

/// Build a new game. Population scales off the quadrant count: 1.5
/// enemies per quadrant (a third scouts, half warbirds, the rest
/// cubes), two stars per quadrant, one starbase per eight quadrants.
pub fn new_game(rng: &mut impl Rng) -> GameData {
    let mut ids = ObjectIdAllocator::default();
    let mut occupied: HashSet<UniversePosition> = HashSet::new();

    let quadrant_count = (QUADRANT_GRID_SIZE * QUADRANT_GRID_SIZE) as f64;
    let enemy_count = (quadrant_count * 1.5).round() as usize;
    let scout_count = (enemy_count as f64 / 3.0).round() as usize;
    let warbird_count = (enemy_count as f64 / 2.0).round() as usize;
    let cube_count = enemy_count - scout_count - warbird_count;
    let star_count = (quadrant_count * 2.0) as usize;
    let starbase_count = (quadrant_count / 8.0).round() as usize;

    let player = Player::new(ids.allocate(), unique_position(rng, &mut occupied));

    let mut enemies = Vec::with_capacity(enemy_count);
    for (class, count) in [
        (EnemyClass::Scout, scout_count),
        (EnemyClass::Warbird, warbird_count),
        (EnemyClass::Cube, cube_count),
    ] {
        for _ in 0..count {
            enemies.push(Enemy::new(
                ids.allocate(),
                class,
                unique_position(rng, &mut occupied),
            ));
        }
    }

    let stars = (0..star_count)
        .map(|_| Star::new(ids.allocate(), unique_position(rng, &mut occupied)))
        .collect();

    let starbases = (0..starbase_count)
        .map(|number| Starbase::new(ids.allocate(), unique_position(rng, &mut occupied), number))
        .collect();

    GameData {
        stardate: STARTING_STARDATE,
        turn: TurnState::PlayerTurn,
        player,
        stars,
        enemies,
        starbases,
        selected_object: None,
        firing_sequence: Vec::new(),
        quadrant_mapped: [[false; QUADRANT_GRID_SIZE as usize]; QUADRANT_GRID_SIZE as usize],
        is_warping: false,
        logs: Vec::new(),
        sensor_impacted_ids: Vec::new(),
        game_over: GameOverState::No,
    }
}

/// Draw positions until one lands on an unoccupied sector.
fn unique_position(rng: &mut impl Rng, occupied: &mut HashSet<UniversePosition>) -> UniversePosition {
    loop {
        let position = UniversePosition::new(
            GridPoint::new(
                rng.gen_range(0..QUADRANT_GRID_SIZE),
                rng.gen_range(0..QUADRANT_GRID_SIZE),
            ),
            GridPoint::new(
                rng.gen_range(0..SECTOR_GRID_SIZE),
                rng.gen_range(0..SECTOR_GRID_SIZE),
            ),
        );
        if occupied.insert(position) {
            return position;
        }
    }
}
