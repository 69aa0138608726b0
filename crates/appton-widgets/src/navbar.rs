//! Navigation bar: anchor links flanking the wordmark.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FontWeight, MouseButton, Point, Rect, Size, TextAlign, TextStyle,
    Theme, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Bar height in logical pixels.
const NAV_HEIGHT: f32 = 64.0;

/// Gap between a link and the wordmark.
const LINK_GAP: f32 = 48.0;

/// Wordmark display width.
const LOGO_WIDTH: f32 = 74.0;

/// Wordmark display height.
const LOGO_HEIGHT: f32 = 22.0;

/// Approximate glyph advance used for link hit areas.
const GLYPH_ADVANCE: f32 = 8.5;

/// One navigation link targeting an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Uppercase label
    pub label: String,
    /// Anchor id without the leading '#'
    pub target: String,
}

impl NavLink {
    /// Create a link.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Message emitted when a navigation link is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavActivated {
    /// Anchor id of the activated link
    pub target: String,
}

/// The navigation bar widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavBar {
    logo: String,
    links: Vec<NavLink>,
    theme: Theme,
    #[serde(skip)]
    bounds: Rect,
}

impl NavBar {
    /// Create a bar with the wordmark image and links.
    #[must_use]
    pub fn new(logo: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            links: Vec::new(),
            theme: Theme::dark(),
            bounds: Rect::default(),
        }
    }

    /// Add a link.
    #[must_use]
    pub fn link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The configured links.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    fn link_width(link: &NavLink) -> f32 {
        link.label.chars().count() as f32 * GLYPH_ADVANCE
    }

    /// Rectangles for each link, flanking the centered wordmark.
    ///
    /// Links alternate left and right of the wordmark in declaration
    /// order: first link to the left, second to the right, and so on.
    fn link_rects(&self) -> Vec<Rect> {
        let center = self.bounds.center();
        let mut left_edge = center.x - LOGO_WIDTH / 2.0 - LINK_GAP;
        let mut right_edge = center.x + LOGO_WIDTH / 2.0 + LINK_GAP;
        let y = center.y - NAV_HEIGHT / 4.0;
        let h = NAV_HEIGHT / 2.0;

        self.links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let w = Self::link_width(link);
                if i % 2 == 0 {
                    left_edge -= w;
                    let rect = Rect::new(left_edge, y, w, h);
                    left_edge -= LINK_GAP;
                    rect
                } else {
                    let rect = Rect::new(right_edge, y, w, h);
                    right_edge += w + LINK_GAP;
                    rect
                }
            })
            .collect()
    }

    fn logo_rect(&self) -> Rect {
        Rect::centered_at(self.bounds.center(), Size::new(LOGO_WIDTH, LOGO_HEIGHT))
    }
}

impl Widget for NavBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, NAV_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: 14.0,
            color: self.theme.text,
            weight: FontWeight::Medium,
            align: TextAlign::Left,
        };

        for (link, rect) in self.links.iter().zip(self.link_rects()) {
            canvas.draw_text(&link.label, Point::new(rect.x, rect.center().y), &style);
        }

        canvas.draw_image(&self.logo, self.logo_rect(), 0.0);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            for (link, rect) in self.links.iter().zip(self.link_rects()) {
                if rect.contains_point(position) {
                    return Some(Box::new(NavActivated {
                        target: link.target.clone(),
                    }));
                }
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        !self.links.is_empty()
    }

    fn is_focusable(&self) -> bool {
        !self.links.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("Main navigation")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Navigation
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appton_core::DrawList;

    fn bar() -> NavBar {
        let mut bar = NavBar::new("logo_appton.png")
            .link(NavLink::new("OUR APPS", "apps"))
            .link(NavLink::new("CONTACT", "contact"));
        bar.layout(Rect::new(0.0, 0.0, 1000.0, NAV_HEIGHT));
        bar
    }

    #[test]
    fn test_links_flank_the_wordmark() {
        let bar = bar();
        let rects = bar.link_rects();
        let logo = bar.logo_rect();
        assert_eq!(rects.len(), 2);
        assert!(rects[0].x + rects[0].width < logo.x);
        assert!(rects[1].x > logo.x + logo.width);
    }

    #[test]
    fn test_click_on_link_emits_target() {
        let mut bar = bar();
        let rect = bar.link_rects()[1];
        let result = bar.event(&Event::MouseDown {
            position: rect.center(),
            button: MouseButton::Left,
        });
        let msg = result
            .expect("click must react")
            .downcast::<NavActivated>()
            .expect("NavActivated message");
        assert_eq!(msg.target, "contact");
    }

    #[test]
    fn test_click_outside_links_is_ignored() {
        let mut bar = bar();
        let result = bar.event(&Event::MouseDown {
            position: Point::new(5.0, 5.0),
            button: MouseButton::Left,
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_paint_draws_labels_and_logo() {
        let bar = bar();
        let mut list = DrawList::new(Size::new(1000.0, NAV_HEIGHT));
        bar.paint(&mut list);
        assert_eq!(list.count_text_containing("OUR APPS"), 1);
        assert_eq!(list.count_text_containing("CONTACT"), 1);
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, appton_core::DrawCommand::Image { source, .. } if source == "logo_appton.png")));
    }

    #[test]
    fn test_measure_fills_width() {
        let bar = bar();
        let size = bar.measure(Constraints::loose(Size::new(800.0, 600.0)));
        assert_eq!(size, Size::new(800.0, NAV_HEIGHT));
    }

    #[test]
    fn test_empty_bar_is_not_interactive() {
        let bar = NavBar::new("logo.png");
        assert!(!bar.is_interactive());
    }
}
