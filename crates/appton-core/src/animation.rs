//! Presentation-layer animation for the orbiting logos.
//!
//! The orbit itself is static; each logo oscillates around its anchor
//! with one of a small set of float variants, assigned round-robin by
//! index. The variants are pure functions of elapsed time, so no
//! animation state lives in the layout engine.

use crate::geometry::Point;
use std::f32::consts::TAU;

/// Oscillation amplitude in percent of the container.
const FLOAT_AMPLITUDE: f32 = 1.5;

/// Seconds per full oscillation cycle.
const FLOAT_PERIOD: f32 = 3.2;

/// Float animation variants applied to orbit items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatVariant {
    /// Oscillate vertically
    #[default]
    UpDown,
    /// Oscillate horizontally
    LeftRight,
}

impl FloatVariant {
    /// All variants in assignment order.
    pub const ALL: [Self; 2] = [Self::UpDown, Self::LeftRight];

    /// Variant for an item index: `index mod variant_count`.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Offset from the anchor position at time `t` (seconds), in percent
    /// units. Items share the clock; a per-index phase shift keeps
    /// neighbors out of sync.
    #[must_use]
    pub fn offset(self, t: f32, index: usize) -> Point {
        let phase = TAU * (t / FLOAT_PERIOD + index as f32 * 0.25);
        let displacement = FLOAT_AMPLITUDE * phase.sin();
        match self {
            Self::UpDown => Point::new(0.0, displacement),
            Self::LeftRight => Point::new(displacement, 0.0),
        }
    }
}

/// Easing functions for host-shell transitions (smooth scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation
    #[default]
    Linear,
    /// Slow start and end
    EaseInOut,
}

impl Easing {
    /// Apply the easing to a normalized time value in [0.0, 1.0].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f32).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}
