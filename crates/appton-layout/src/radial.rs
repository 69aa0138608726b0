//! Even placement of N items on an ellipse.

use crate::breakpoint::EllipseRadii;
use appton_core::Point;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Center of the orbit in percent of the container.
const CENTER: Point = Point::new(50.0, 45.0);

/// Places items evenly around an ellipse.
///
/// All outputs are in percent of the container. The engine holds no
/// animation or measurement state; callers gate on having measured the
/// container before asking for positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialLayout {
    center: Point,
    radii: EllipseRadii,
}

impl RadialLayout {
    /// Create a layout with the standard center.
    #[must_use]
    pub const fn new(radii: EllipseRadii) -> Self {
        Self {
            center: CENTER,
            radii,
        }
    }

    /// Override the center (percent units).
    #[must_use]
    pub const fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// The configured radii.
    #[must_use]
    pub const fn radii(&self) -> EllipseRadii {
        self.radii
    }

    /// Angle in radians for item `index` of `count`: `2π·index / count`.
    ///
    /// Returns 0.0 when `count` is 0; there is nothing to place and no
    /// division happens.
    #[must_use]
    pub fn angle(index: usize, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        TAU * index as f32 / count as f32
    }

    /// Position for item `index` of `count`, in percent of the container.
    #[must_use]
    pub fn position(&self, index: usize, count: usize) -> Point {
        let angle = Self::angle(index, count);
        Point::new(
            self.center.x + self.radii.a * angle.cos(),
            self.center.y + self.radii.b * angle.sin(),
        )
    }

    /// Positions for all `count` items. Empty when `count` is 0.
    #[must_use]
    pub fn positions(&self, count: usize) -> Vec<Point> {
        (0..count).map(|i| self.position(i, count)).collect()
    }
}
