//! Viewport breakpoints and the ellipse radii tied to them.
//!
//! The thresholds and radii are carried over from the shipped site
//! unchanged; treat them as configuration constants. The step function is
//! re-evaluated on every resize with no debouncing or hysteresis.

use serde::{Deserialize, Serialize};

/// Widths below this are the small tier.
pub const SMALL_MAX_WIDTH: f32 = 400.0;

/// Widths below this (and at least [`SMALL_MAX_WIDTH`]) are the medium tier.
pub const MEDIUM_MAX_WIDTH: f32 = 700.0;

/// Discrete configuration tier selected by container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    /// Phones: width < 400
    Small,
    /// Tablets: 400 <= width < 700
    Medium,
    /// Desktop: width >= 700
    Large,
}

/// Horizontal and vertical ellipse radii in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseRadii {
    /// Horizontal radius
    pub a: f32,
    /// Vertical radius
    pub b: f32,
}

impl EllipseRadii {
    /// Create radii.
    #[must_use]
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }
}

impl Breakpoint {
    /// Select the tier for a measured container width.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width < SMALL_MAX_WIDTH {
            Self::Small
        } else if width < MEDIUM_MAX_WIDTH {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Orbit ellipse radii for this tier.
    #[must_use]
    pub const fn radii(self) -> EllipseRadii {
        match self {
            Self::Small => EllipseRadii::new(28.0, 24.0),
            Self::Medium => EllipseRadii::new(36.0, 32.0),
            Self::Large => EllipseRadii::new(40.0, 40.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_selection() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Small);
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Small);
        assert_eq!(Breakpoint::for_width(500.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Large);
    }

    #[test]
    fn test_exact_boundaries() {
        // Boundary widths land on the upper tier.
        assert_eq!(Breakpoint::for_width(399.0).radii(), EllipseRadii::new(28.0, 24.0));
        assert_eq!(Breakpoint::for_width(400.0).radii(), EllipseRadii::new(36.0, 32.0));
        assert_eq!(Breakpoint::for_width(699.0).radii(), EllipseRadii::new(36.0, 32.0));
        assert_eq!(Breakpoint::for_width(700.0).radii(), EllipseRadii::new(40.0, 40.0));
    }

    #[test]
    fn test_large_tier_is_circular() {
        let radii = Breakpoint::Large.radii();
        assert_eq!(radii.a, radii.b);
    }

    #[test]
    fn test_recomputation_is_pure() {
        // Rapid resizes just recompute; equal inputs give equal outputs.
        for _ in 0..3 {
            assert_eq!(Breakpoint::for_width(650.0), Breakpoint::Medium);
        }
    }
}
