//! Log entries emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::LogLevel;

/// One entry in the append-only game log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLog {
    pub message: String,
    /// Stardate at which the entry was written.
    pub stardate: f64,
    pub level: LogLevel,
}
