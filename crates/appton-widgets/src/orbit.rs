//! Orbiting logo cloud above the hero headline.
//!
//! App logos sit evenly spaced on an ellipse sized by the container's
//! breakpoint tier. Until the container has been measured once, the
//! widget paints nothing; a zero-width measurement would otherwise
//! produce a visible flash of wrongly-placed tiles.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FloatVariant, MouseButton, Point, Rect, Size, Theme, TypeId,
    Widget,
};
use appton_data::AppRecord;
use appton_layout::{Breakpoint, RadialLayout};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Preferred section height.
const ORBIT_HEIGHT: f32 = 420.0;

/// Logo tile edge length (image plus padding).
const TILE_SIZE: f32 = 56.0;

/// Logo image edge length inside the tile.
const IMAGE_SIZE: f32 = 48.0;

/// Tile corner radius.
const TILE_RADIUS: f32 = 18.0;

/// Image corner radius.
const IMAGE_RADIUS: f32 = 16.0;

/// Ring stroke width around each tile.
const RING_WIDTH: f32 = 2.0;

/// One orbiting logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct OrbitItem {
    image: String,
    link: String,
}

/// Message emitted when a logo tile is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoActivated {
    /// Index of the activated app
    pub index: usize,
    /// External link of the activated app
    pub link: String,
}

/// The orbiting logo cloud widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoOrbit {
    items: Vec<OrbitItem>,
    theme: Theme,
    /// Animation clock in seconds, advanced by the page on ticks.
    #[serde(skip)]
    phase: f32,
    /// Radii derived from the last measured width; `None` until the
    /// first real measurement.
    #[serde(skip)]
    layout: Option<RadialLayout>,
    #[serde(skip)]
    bounds: Rect,
}

impl LogoOrbit {
    /// Create an orbit over the app portfolio.
    #[must_use]
    pub fn new(apps: &[AppRecord]) -> Self {
        Self {
            items: apps
                .iter()
                .map(|a| OrbitItem {
                    image: a.image.clone(),
                    link: a.link.clone(),
                })
                .collect(),
            theme: Theme::dark(),
            phase: 0.0,
            layout: None,
            bounds: Rect::default(),
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Advance the animation clock.
    pub fn set_phase(&mut self, seconds: f32) {
        self.phase = seconds;
    }

    /// Whether the container has been measured at least once.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.layout.is_some()
    }

    /// Number of orbiting items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Anchor positions in percent of the container, animation applied.
    ///
    /// Empty until the first measurement and for an empty portfolio.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        let Some(layout) = self.layout else {
            return Vec::new();
        };
        layout
            .positions(self.items.len())
            .into_iter()
            .enumerate()
            .map(|(i, p)| p + FloatVariant::for_index(i).offset(self.phase, i))
            .collect()
    }

    /// Tile rectangle for item `i` in absolute pixels.
    fn tile_rect(&self, position: Point) -> Rect {
        let center = Point::new(
            self.bounds.x + position.x / 100.0 * self.bounds.width,
            self.bounds.y + position.y / 100.0 * self.bounds.height,
        );
        Rect::centered_at(center, Size::new(TILE_SIZE, TILE_SIZE))
    }

    fn item_at_point(&self, point: &Point) -> Option<usize> {
        self.positions()
            .iter()
            .position(|p| self.tile_rect(*p).contains_point(point))
    }
}

impl Widget for LogoOrbit {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, ORBIT_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        // Zero width means the container is not established yet; keep the
        // gate closed rather than place tiles at a bogus breakpoint.
        if bounds.width > 0.0 {
            self.layout = Some(RadialLayout::new(
                Breakpoint::for_width(bounds.width).radii(),
            ));
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for (item, position) in self.items.iter().zip(self.positions()) {
            let tile = self.tile_rect(position);
            canvas.fill_rounded_rect(tile, TILE_RADIUS, self.theme.tile);
            canvas.stroke_rounded_rect(tile, TILE_RADIUS, self.theme.ring, RING_WIDTH);
            canvas.draw_image(
                &item.image,
                Rect::centered_at(tile.center(), Size::new(IMAGE_SIZE, IMAGE_SIZE)),
                IMAGE_RADIUS,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if let Some(index) = self.item_at_point(position) {
                return Some(Box::new(LogoActivated {
                    index,
                    link: self.items[index].link.clone(),
                }));
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        !self.items.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("App logos")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
