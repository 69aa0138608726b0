//! Hero headline section.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FontWeight, Rect, Size, TextAlign, TextStyle, Theme, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Preferred section height.
const HERO_HEIGHT: f32 = 180.0;

/// Headline font size.
const HEADLINE_SIZE: f32 = 36.0;

/// Centered headline below the orbit area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    headline: String,
    theme: Theme,
    #[serde(skip)]
    bounds: Rect,
}

impl Hero {
    /// Create a hero with the headline text.
    #[must_use]
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            theme: Theme::dark(),
            bounds: Rect::default(),
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The headline text.
    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }
}

impl Widget for Hero {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, HERO_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: HEADLINE_SIZE,
            color: self.theme.text,
            weight: FontWeight::Bold,
            align: TextAlign::Center,
        };
        canvas.draw_text(&self.headline, self.bounds.center(), &style);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.headline)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Heading
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
