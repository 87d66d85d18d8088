//! Two-level coordinates: an 8×8 galaxy of quadrants, each an 8×8 grid
//! of sectors.

use serde::{Deserialize, Serialize};

use crate::constants::{QUADRANT_GRID_SIZE, SECTOR_GRID_SIZE};

/// A cell in one of the 8×8 grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A full position in the universe: quadrant plus sector within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversePosition {
    pub quadrant: GridPoint,
    pub sector: GridPoint,
}

impl UniversePosition {
    pub fn new(quadrant: GridPoint, sector: GridPoint) -> Self {
        Self { quadrant, sector }
    }

    /// Both coordinates inside their 8×8 grids.
    pub fn is_valid(&self) -> bool {
        in_grid(self.quadrant, QUADRANT_GRID_SIZE) && in_grid(self.sector, SECTOR_GRID_SIZE)
    }

    /// Same position, different sector.
    pub fn with_sector(&self, sector: GridPoint) -> Self {
        Self {
            quadrant: self.quadrant,
            sector,
        }
    }

    /// Same position, different quadrant.
    pub fn with_quadrant(&self, quadrant: GridPoint) -> Self {
        Self {
            quadrant,
            sector: self.sector,
        }
    }
}

fn in_grid(point: GridPoint, size: i32) -> bool {
    point.x >= 0 && point.x < size && point.y >= 0 && point.y < size
}

/// Euclidean distance measured in whole quadrants.
pub fn quadrant_distance(a: &UniversePosition, b: &UniversePosition) -> f64 {
    let dx = (b.quadrant.x - a.quadrant.x) as f64;
    let dy = (b.quadrant.y - a.quadrant.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance within a quadrant, normalized so crossing the full
/// sector grid counts as one unit per axis.
pub fn sector_distance(a: &UniversePosition, b: &UniversePosition) -> f64 {
    let span = (SECTOR_GRID_SIZE - 1) as f64;
    let dx = b.sector.x as f64 / span - a.sector.x as f64 / span;
    let dy = b.sector.y as f64 / span - a.sector.y as f64 / span;
    (dx * dx + dy * dy).sqrt()
}

/// Combined travel distance: quadrant distance plus the sub-quadrant
/// sector component.
pub fn distance_between(a: &UniversePosition, b: &UniversePosition) -> f64 {
    quadrant_distance(a, b) + sector_distance(a, b)
}
