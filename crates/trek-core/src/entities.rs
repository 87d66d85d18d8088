//! The things that populate the universe: the player ship, the three
//! enemy classes, starbases, and stars.

use serde::{Deserialize, Serialize};

use crate::constants::MAXIMUM_TARGETS;
use crate::enums::{EnemyClass, ShieldFacing, SystemId};
use crate::position::{GridPoint, UniversePosition};
use crate::range::RangedValue;

/// Unique identity of a game object, allocated by the world factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// Hands out sequential object ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectIdAllocator {
    next: u32,
}

impl ObjectIdAllocator {
    pub fn allocate(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }
}

// --- Player ---

/// One damageable ship system and its repair priority flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSystem {
    pub status: RangedValue,
    pub repair_prioritised: bool,
}

impl ShipSystem {
    fn new(capacity: f64) -> Self {
        Self {
            status: RangedValue::full(capacity),
            repair_prioritised: false,
        }
    }
}

/// The four directional shields plus the raised flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shields {
    pub fore: RangedValue,
    pub starboard: RangedValue,
    pub aft: RangedValue,
    pub port: RangedValue,
    pub raised: bool,
}

impl Shields {
    pub fn facing(&self, facing: ShieldFacing) -> &RangedValue {
        match facing {
            ShieldFacing::Fore => &self.fore,
            ShieldFacing::Starboard => &self.starboard,
            ShieldFacing::Aft => &self.aft,
            ShieldFacing::Port => &self.port,
        }
    }

    pub fn facing_mut(&mut self, facing: ShieldFacing) -> &mut RangedValue {
        match facing {
            ShieldFacing::Fore => &mut self.fore,
            ShieldFacing::Starboard => &mut self.starboard,
            ShieldFacing::Aft => &mut self.aft,
            ShieldFacing::Port => &mut self.port,
        }
    }
}

/// Weapon state: target locks, torpedo stores, phaser bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapons {
    /// Up to `MAXIMUM_TARGETS` locked object ids; one firing step is
    /// queued per entry.
    pub target_ids: Vec<ObjectId>,
    pub torpedoes: RangedValue,
    pub phaser_power: RangedValue,
    pub phaser_temperature: RangedValue,
}

/// Everything the player ship carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub energy: RangedValue,
    pub warp_speed: RangedValue,
    pub target_quadrant: GridPoint,
    pub docked: bool,
    pub shields: Shields,
    pub hull: ShipSystem,
    pub sensors: ShipSystem,
    pub computer: ShipSystem,
    pub deflectors: ShipSystem,
    pub communications: ShipSystem,
    pub warp_engines: ShipSystem,
    pub impulse_drives: ShipSystem,
    pub shield_generators: ShipSystem,
    pub torpedo_tubes: ShipSystem,
    pub phasers: ShipSystem,
    pub life_support: ShipSystem,
    pub energy_converter: ShipSystem,
    pub crew: RangedValue,
    pub weapons: Weapons,
}

impl PlayerAttributes {
    pub fn system(&self, id: SystemId) -> &ShipSystem {
        match id {
            SystemId::Hull => &self.hull,
            SystemId::Sensors => &self.sensors,
            SystemId::Computer => &self.computer,
            SystemId::Deflectors => &self.deflectors,
            SystemId::Communications => &self.communications,
            SystemId::WarpEngines => &self.warp_engines,
            SystemId::ImpulseDrives => &self.impulse_drives,
            SystemId::ShieldGenerators => &self.shield_generators,
            SystemId::TorpedoTubes => &self.torpedo_tubes,
            SystemId::Phasers => &self.phasers,
            SystemId::LifeSupport => &self.life_support,
            SystemId::EnergyConverter => &self.energy_converter,
        }
    }

    pub fn system_mut(&mut self, id: SystemId) -> &mut ShipSystem {
        match id {
            SystemId::Hull => &mut self.hull,
            SystemId::Sensors => &mut self.sensors,
            SystemId::Computer => &mut self.computer,
            SystemId::Deflectors => &mut self.deflectors,
            SystemId::Communications => &mut self.communications,
            SystemId::WarpEngines => &mut self.warp_engines,
            SystemId::ImpulseDrives => &mut self.impulse_drives,
            SystemId::ShieldGenerators => &mut self.shield_generators,
            SystemId::TorpedoTubes => &mut self.torpedo_tubes,
            SystemId::Phasers => &mut self.phasers,
            SystemId::LifeSupport => &mut self.life_support,
            SystemId::EnergyConverter => &mut self.energy_converter,
        }
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            energy: RangedValue::full(3000.0),
            warp_speed: RangedValue::new(7.0, 10.0, 1.0),
            target_quadrant: GridPoint::new(-1, -1),
            docked: false,
            shields: Shields {
                fore: RangedValue::full(500.0),
                starboard: RangedValue::full(500.0),
                aft: RangedValue::full(500.0),
                port: RangedValue::full(500.0),
                raised: false,
            },
            hull: ShipSystem::new(750.0),
            sensors: ShipSystem::new(200.0),
            computer: ShipSystem::new(200.0),
            deflectors: ShipSystem::new(200.0),
            communications: ShipSystem::new(200.0),
            warp_engines: ShipSystem::new(300.0),
            impulse_drives: ShipSystem::new(300.0),
            shield_generators: ShipSystem::new(200.0),
            torpedo_tubes: ShipSystem::new(300.0),
            phasers: ShipSystem::new(200.0),
            life_support: ShipSystem::new(300.0),
            energy_converter: ShipSystem::new(200.0),
            crew: RangedValue::full(323.0),
            weapons: Weapons {
                target_ids: Vec::with_capacity(MAXIMUM_TARGETS),
                torpedoes: RangedValue::full(9.0),
                phaser_power: RangedValue::new(375.0, 750.0, 0.0),
                phaser_temperature: RangedValue::new(0.0, 1500.0, 0.0),
            },
        }
    }
}

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: ObjectId,
    pub position: UniversePosition,
    pub rotation: f64,
    pub attributes: PlayerAttributes,
}

impl Player {
    pub fn new(id: ObjectId, position: UniversePosition) -> Self {
        let attributes = PlayerAttributes {
            target_quadrant: position.quadrant,
            ..PlayerAttributes::default()
        };
        Self {
            id,
            position,
            rotation: 0.0,
            attributes,
        }
    }

    /// Destroyed once the hull is gone.
    pub fn is_destroyed(&self) -> bool {
        self.attributes.hull.status.current <= 0.0
    }
}

// --- Enemies ---

/// Combat stats for one enemy ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyAttributes {
    pub hull: RangedValue,
    pub shields: RangedValue,
    pub energy: RangedValue,
    pub torpedoes: RangedValue,
    pub max_phaser_power: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: ObjectId,
    pub class: EnemyClass,
    pub position: UniversePosition,
    pub rotation: f64,
    pub attributes: EnemyAttributes,
}

impl Enemy {
    pub fn new(id: ObjectId, class: EnemyClass, position: UniversePosition) -> Self {
        let (hull, shields, energy, torpedoes, max_phaser_power) = enemy_class_stats(class);
        Self {
            id,
            class,
            position,
            rotation: 0.0,
            attributes: EnemyAttributes {
                hull: RangedValue::full(hull),
                shields: RangedValue::full(shields),
                energy: RangedValue::full(energy),
                torpedoes: RangedValue::full(torpedoes),
                max_phaser_power,
            },
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.attributes.hull.current <= 0.0
    }
}

/// Stats per enemy class: (hull, shields, energy, torpedoes, max phaser power).
fn enemy_class_stats(class: EnemyClass) -> (f64, f64, f64, f64, f64) {
    match class {
        EnemyClass::Scout => (100.0, 200.0, 750.0, 0.0, 150.0),
        EnemyClass::Warbird => (200.0, 350.0, 1500.0, 3.0, 300.0),
        EnemyClass::Cube => (800.0, 1500.0, 4500.0, 9.0, 700.0),
    }
}

// --- Starbases ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarbaseAttributes {
    pub hull: RangedValue,
    pub shields: RangedValue,
    pub energy: RangedValue,
    pub torpedo_stocks: RangedValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starbase {
    pub id: ObjectId,
    pub name: String,
    pub position: UniversePosition,
    pub rotation: f64,
    pub attributes: StarbaseAttributes,
}

impl Starbase {
    pub fn new(id: ObjectId, position: UniversePosition, number: usize) -> Self {
        Self {
            id,
            name: starbase_name(number),
            position,
            rotation: 0.0,
            attributes: StarbaseAttributes {
                hull: RangedValue::full(3000.0),
                shields: RangedValue::full(6000.0),
                energy: RangedValue::full(10000.0),
                torpedo_stocks: RangedValue::full(100.0),
            },
        }
    }
}

const GREEK_LETTERS: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

fn starbase_name(number: usize) -> String {
    format!("Starbase {}", GREEK_LETTERS[number % GREEK_LETTERS.len()])
}

// --- Stars ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: ObjectId,
    pub position: UniversePosition,
    pub rotation: f64,
}

impl Star {
    pub fn new(id: ObjectId, position: UniversePosition) -> Self {
        Self {
            id,
            position,
            rotation: 0.0,
        }
    }
}

// --- Polymorphic view ---

/// Borrowed view over any object in the world, for the few sites that
/// operate on objects regardless of variant (quadrant queries, sector
/// blocking, sensor masking).
#[derive(Debug, Clone, Copy)]
pub enum ObjectRef<'a> {
    Star(&'a Star),
    Enemy(&'a Enemy),
    Starbase(&'a Starbase),
    Player(&'a Player),
}

impl<'a> ObjectRef<'a> {
    pub fn id(&self) -> ObjectId {
        match self {
            ObjectRef::Star(s) => s.id,
            ObjectRef::Enemy(e) => e.id,
            ObjectRef::Starbase(s) => s.id,
            ObjectRef::Player(p) => p.id,
        }
    }

    pub fn position(&self) -> UniversePosition {
        match self {
            ObjectRef::Star(s) => s.position,
            ObjectRef::Enemy(e) => e.position,
            ObjectRef::Starbase(s) => s.position,
            ObjectRef::Player(p) => p.position,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, ObjectRef::Player(_))
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, ObjectRef::Enemy(_))
    }
}
