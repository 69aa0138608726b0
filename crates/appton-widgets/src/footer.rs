//! Page footer: contact details and organization data.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FontWeight, Point, Rect, Size, TextAlign, TextStyle, Theme,
    TypeId, Widget,
};
use appton_data::SiteManifest;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Preferred section height.
const FOOTER_HEIGHT: f32 = 160.0;

/// Vertical distance between footer lines.
const LINE_SPACING: f32 = 24.0;

/// The footer widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    manifest: SiteManifest,
    theme: Theme,
    #[serde(skip)]
    bounds: Rect,
}

impl Footer {
    /// Create a footer from the site manifest.
    #[must_use]
    pub fn new(manifest: SiteManifest) -> Self {
        Self {
            manifest,
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

    /// Lines rendered top to bottom.
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.manifest.contact_email.clone(),
            self.manifest.address.single_line(),
        ];
        lines.extend(self.manifest.social.iter().cloned());
        lines.push(format!("\u{a9} {}", self.manifest.name));
        lines
    }
}

impl Widget for Footer {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, FOOTER_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: 13.0,
            color: self.theme.text_muted,
            weight: FontWeight::Normal,
            align: TextAlign::Center,
        };
        let center_x = self.bounds.center().x;
        let mut y = self.bounds.y + 32.0;

        for line in self.lines() {
            canvas.draw_text(&line, Point::new(center_x, y), &style);
            y += LINE_SPACING;
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ContentInfo
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
