//! Clamped scalar used for every depletable quantity: hull, shields,
//! energy, crew, torpedoes, phaser temperature.
//!
//! A plain data struct: serde round-trips lose nothing, so persisted
//! games need no rehydration pass.

use serde::{Deserialize, Serialize};

use crate::constants::{GAUGE_CRITICAL_PERCENTAGE, GAUGE_WARNING_ABSOLUTE};
use crate::enums::GaugeColor;

/// A scalar clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangedValue {
    pub current: f64,
    pub max: f64,
    pub min: f64,
}

impl RangedValue {
    /// A value starting at its maximum, with a floor of zero.
    pub fn full(value: f64) -> Self {
        Self {
            current: value,
            max: value,
            min: 0.0,
        }
    }

    pub fn new(current: f64, max: f64, min: f64) -> Self {
        Self { current, max, min }
    }

    /// Current value as a fraction of the maximum.
    pub fn fraction(&self) -> f64 {
        self.current / self.max
    }

    /// Current value as a percentage of the maximum.
    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Gauge classification: critical below 15%, warning below 30
    /// absolute units, nominal otherwise.
    pub fn color(&self) -> GaugeColor {
        if self.percentage() < GAUGE_CRITICAL_PERCENTAGE {
            GaugeColor::Critical
        } else if self.current < GAUGE_WARNING_ABSOLUTE {
            GaugeColor::Warning
        } else {
            GaugeColor::Nominal
        }
    }

    /// Add `delta` (may be negative), clamping to `[min, max]`.
    pub fn apply_delta(&mut self, delta: f64) {
        self.set(self.current + delta);
    }

    /// Replace the current value, clamping to `[min, max]`.
    pub fn set(&mut self, value: f64) {
        self.current = value.clamp(self.min, self.max);
    }

    /// Headroom left before the maximum.
    pub fn missing(&self) -> f64 {
        self.max - self.current
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}
