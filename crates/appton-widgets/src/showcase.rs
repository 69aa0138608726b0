//! App showcase carousel.
//!
//! One app is presented at a time in a detail panel; a row of dot
//! controls below it selects which. Selection is the only state: no
//! history, no auto-advance, no terminal state.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FontWeight, Key, MouseButton, Point, Rect, Size, TextAlign,
    TextStyle, Theme, TypeId, Widget,
};
use appton_data::AppRecord;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Preferred section height.
const SHOWCASE_HEIGHT: f32 = 360.0;

/// Detail image edge length.
const DETAIL_IMAGE_SIZE: f32 = 96.0;

/// Detail image corner radius, matching the orbit tiles.
const IMAGE_RADIUS: f32 = 16.0;

/// Dot control radius.
const DOT_RADIUS: f32 = 5.0;

/// Distance between dot centers.
const DOT_SPACING: f32 = 24.0;

/// Hit-test radius around a dot center.
const DOT_HIT_RADIUS: f32 = 10.0;

/// Distance of the dot row above the section's bottom edge.
const DOT_ROW_INSET: f32 = 28.0;

/// Message emitted when the selected app changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseChanged {
    /// Index of the newly selected app
    pub index: usize,
    /// Name of the newly selected app
    pub name: String,
}

/// The showcase carousel widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showcase {
    items: Vec<AppRecord>,
    selected: usize,
    theme: Theme,
    #[serde(skip)]
    bounds: Rect,
}

impl Showcase {
    /// Create a showcase over the app portfolio, first app selected.
    #[must_use]
    pub fn new(apps: &[AppRecord]) -> Self {
        Self {
            items: apps.to_vec(),
            selected: 0,
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

    /// Currently selected index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Whether control `index` is the selected one.
    #[must_use]
    pub const fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// The currently displayed app, if any.
    #[must_use]
    pub fn selected_app(&self) -> Option<&AppRecord> {
        self.items.get(self.selected)
    }

    /// Number of apps in the carousel.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Select `index`, returning a message when the selection actually
    /// changed. Re-selecting the active index is a no-op; indices come
    /// from the same slice the controls render, so out-of-range values
    /// only occur through misuse and are ignored.
    pub fn select(&mut self, index: usize) -> Option<ShowcaseChanged> {
        if index >= self.items.len() || index == self.selected {
            return None;
        }
        self.selected = index;
        Some(ShowcaseChanged {
            index,
            name: self.items[index].name.clone(),
        })
    }

    /// Select the next app, wrapping at the end.
    pub fn select_next(&mut self) -> Option<ShowcaseChanged> {
        if self.items.is_empty() {
            return None;
        }
        self.select((self.selected + 1) % self.items.len())
    }

    /// Select the previous app, wrapping at the start.
    pub fn select_prev(&mut self) -> Option<ShowcaseChanged> {
        if self.items.is_empty() {
            return None;
        }
        let prev = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
        self.select(prev)
    }

    /// Center of dot control `index`.
    fn dot_center(&self, index: usize) -> Point {
        let n = self.items.len();
        let row_width = DOT_SPACING * n.saturating_sub(1) as f32;
        let start_x = self.bounds.center().x - row_width / 2.0;
        Point::new(
            start_x + DOT_SPACING * index as f32,
            self.bounds.y + self.bounds.height - DOT_ROW_INSET,
        )
    }

    fn dot_at_point(&self, point: &Point) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.dot_center(i).distance(point) <= DOT_HIT_RADIUS)
    }

    fn paint_detail(&self, canvas: &mut dyn Canvas) {
        let Some(app) = self.selected_app() else {
            return;
        };
        let center_x = self.bounds.center().x;
        let top = self.bounds.y + 24.0;

        canvas.draw_image(
            &app.image,
            Rect::centered_at(
                Point::new(center_x, top + DETAIL_IMAGE_SIZE / 2.0),
                Size::new(DETAIL_IMAGE_SIZE, DETAIL_IMAGE_SIZE),
            ),
            IMAGE_RADIUS,
        );

        let name_style = TextStyle {
            size: 24.0,
            color: self.theme.text,
            weight: FontWeight::Semibold,
            align: TextAlign::Center,
        };
        canvas.draw_text(
            &app.name,
            Point::new(center_x, top + DETAIL_IMAGE_SIZE + 36.0),
            &name_style,
        );

        let subtitle_style = TextStyle {
            size: 16.0,
            color: self.theme.text_muted,
            weight: FontWeight::Medium,
            align: TextAlign::Center,
        };
        canvas.draw_text(
            &app.subtitle,
            Point::new(center_x, top + DETAIL_IMAGE_SIZE + 62.0),
            &subtitle_style,
        );

        let body_style = TextStyle {
            size: 14.0,
            color: self.theme.text_muted,
            weight: FontWeight::Normal,
            align: TextAlign::Center,
        };
        canvas.draw_text(
            &app.description,
            Point::new(center_x, top + DETAIL_IMAGE_SIZE + 90.0),
            &body_style,
        );

        self.paint_badges(canvas, app, top + DETAIL_IMAGE_SIZE + 124.0);
    }

    fn paint_badges(&self, canvas: &mut dyn Canvas, app: &AppRecord, y: f32) {
        let label_style = TextStyle {
            size: 13.0,
            color: self.theme.text,
            weight: FontWeight::Medium,
            align: TextAlign::Center,
        };

        if !app.published {
            canvas.draw_text("Coming soon", Point::new(self.bounds.center().x, y), &label_style);
            return;
        }

        let badges: Vec<&str> = [
            app.app_store_link.as_ref().map(|_| "App Store"),
            app.play_store_link.as_ref().map(|_| "Google Play"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let badge_size = Size::new(120.0, 36.0);
        let gap = 16.0;
        let total = badges.len() as f32 * badge_size.width + gap * badges.len().saturating_sub(1) as f32;
        let mut x = self.bounds.center().x - total / 2.0;

        for label in badges {
            let rect = Rect::new(x, y - badge_size.height / 2.0, badge_size.width, badge_size.height);
            canvas.fill_rounded_rect(rect, 8.0, self.theme.surface);
            canvas.stroke_rounded_rect(rect, 8.0, self.theme.ring, 1.0);
            canvas.draw_text(label, rect.center(), &label_style);
            x += badge_size.width + gap;
        }
    }

    fn paint_dots(&self, canvas: &mut dyn Canvas) {
        for i in 0..self.items.len() {
            let center = self.dot_center(i);
            if self.is_selected(i) {
                canvas.fill_circle(center, DOT_RADIUS, self.theme.accent);
            } else {
                canvas.stroke_circle(center, DOT_RADIUS, self.theme.text_muted, 1.5);
            }
        }
    }
}

impl Widget for Showcase {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, SHOWCASE_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.items.is_empty() {
            return;
        }
        self.paint_detail(canvas);
        self.paint_dots(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let index = self.dot_at_point(position)?;
                self.select(index)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            Event::KeyDown { key: Key::ArrowRight } => self
                .select_next()
                .map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            Event::KeyDown { key: Key::ArrowLeft } => self
                .select_prev()
                .map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.items.is_empty()
    }

    fn is_focusable(&self) -> bool {
        !self.items.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("App showcase")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Tab
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
