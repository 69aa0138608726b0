//! Team roster section.

use appton_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, FontWeight, MouseButton, Point, Rect, Size, TextAlign, TextStyle,
    Theme, TypeId, Widget,
};
use appton_data::MemberRecord;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Preferred section height.
const TEAM_HEIGHT: f32 = 320.0;

/// Card dimensions.
const CARD_SIZE: Size = Size::new(180.0, 220.0);

/// Gap between cards.
const CARD_GAP: f32 = 24.0;

/// Portrait edge length inside a card.
const PORTRAIT_SIZE: f32 = 96.0;

/// Message emitted when a member card is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberActivated {
    /// Index of the activated member
    pub index: usize,
    /// External profile link of the activated member
    pub link: String,
}

/// The team roster widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSection {
    title: String,
    members: Vec<MemberRecord>,
    theme: Theme,
    #[serde(skip)]
    bounds: Rect,
}

impl TeamSection {
    /// Create a roster section.
    #[must_use]
    pub fn new(members: &[MemberRecord]) -> Self {
        Self {
            title: "The people behind the apps".to_string(),
            members: members.to_vec(),
            theme: Theme::dark(),
            bounds: Rect::default(),
        }
    }

    /// Set the section title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Card rectangle for member `index`, cards centered as one row.
    fn card_rect(&self, index: usize) -> Rect {
        let n = self.members.len();
        let row_width = CARD_SIZE.width * n as f32 + CARD_GAP * n.saturating_sub(1) as f32;
        let start_x = self.bounds.center().x - row_width / 2.0;
        Rect::new(
            start_x + (CARD_SIZE.width + CARD_GAP) * index as f32,
            self.bounds.y + 64.0,
            CARD_SIZE.width,
            CARD_SIZE.height,
        )
    }

    fn card_at_point(&self, point: &Point) -> Option<usize> {
        (0..self.members.len()).find(|&i| self.card_rect(i).contains_point(point))
    }
}

impl Widget for TeamSection {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.biggest().width, TEAM_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.members.is_empty() {
            return;
        }

        let title_style = TextStyle {
            size: 24.0,
            color: self.theme.text,
            weight: FontWeight::Semibold,
            align: TextAlign::Center,
        };
        canvas.draw_text(
            &self.title,
            Point::new(self.bounds.center().x, self.bounds.y + 32.0),
            &title_style,
        );

        let name_style = TextStyle {
            size: 16.0,
            color: self.theme.text,
            weight: FontWeight::Medium,
            align: TextAlign::Center,
        };
        let title_text_style = TextStyle {
            size: 13.0,
            color: self.theme.text_muted,
            weight: FontWeight::Normal,
            align: TextAlign::Center,
        };

        for (i, member) in self.members.iter().enumerate() {
            let card = self.card_rect(i);
            canvas.fill_rounded_rect(card, 12.0, self.theme.surface);
            canvas.draw_image(
                &member.image,
                Rect::centered_at(
                    Point::new(card.center().x, card.y + 24.0 + PORTRAIT_SIZE / 2.0),
                    Size::new(PORTRAIT_SIZE, PORTRAIT_SIZE),
                ),
                PORTRAIT_SIZE / 2.0,
            );
            canvas.draw_text(
                &member.name,
                Point::new(card.center().x, card.y + PORTRAIT_SIZE + 56.0),
                &name_style,
            );
            canvas.draw_text(
                &member.title,
                Point::new(card.center().x, card.y + PORTRAIT_SIZE + 80.0),
                &title_text_style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if let Some(index) = self.card_at_point(position) {
                return Some(Box::new(MemberActivated {
                    index,
                    link: self.members[index].link.clone(),
                }));
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        !self.members.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appton_core::DrawList;

    fn sample_members() -> Vec<MemberRecord> {
        vec![
            MemberRecord {
                name: "Maya Lindholm".to_string(),
                title: "Founder".to_string(),
                image: "team/maya.png".to_string(),
                link: "https://linkedin.com/in/maya".to_string(),
            },
            MemberRecord {
                name: "Tomas Rivera".to_string(),
                title: "Engineering".to_string(),
                image: "team/tomas.png".to_string(),
                link: "https://linkedin.com/in/tomas".to_string(),
            },
        ]
    }

    fn section() -> TeamSection {
        let mut section = TeamSection::new(&sample_members());
        section.layout(Rect::new(0.0, 1000.0, 900.0, TEAM_HEIGHT));
        section
    }

    #[test]
    fn test_cards_form_a_centered_row() {
        let section = section();
        let left = section.card_rect(0);
        let right = section.card_rect(1);
        assert_eq!(left.y, right.y);
        assert!((right.x - (left.x + CARD_SIZE.width + CARD_GAP)).abs() < 1e-4);

        let row_center = (left.x + (right.x + right.width)) / 2.0;
        assert!((row_center - 450.0).abs() < 1e-3);
    }

    #[test]
    fn test_click_on_card_emits_profile_link() {
        let mut section = section();
        let target = section.card_rect(1).center();
        let result = section.event(&Event::MouseDown {
            position: target,
            button: MouseButton::Left,
        });
        let msg = result
            .expect("card click must react")
            .downcast::<MemberActivated>()
            .expect("MemberActivated message");
        assert_eq!(msg.index, 1);
        assert_eq!(msg.link, "https://linkedin.com/in/tomas");
    }

    #[test]
    fn test_click_between_cards_is_ignored() {
        let mut section = section();
        let left = section.card_rect(0);
        let gap_point = Point::new(left.x + left.width + CARD_GAP / 2.0, left.center().y);
        assert!(section
            .event(&Event::MouseDown {
                position: gap_point,
                button: MouseButton::Left,
            })
            .is_none());
    }

    #[test]
    fn test_paint_renders_names_and_titles() {
        let section = section();
        let mut list = DrawList::new(Size::new(900.0, TEAM_HEIGHT));
        section.paint(&mut list);

        assert_eq!(list.count_text_containing("Maya Lindholm"), 1);
        assert_eq!(list.count_text_containing("Founder"), 1);
        assert_eq!(list.count_text_containing("Tomas Rivera"), 1);
        assert!(list.is_finite());
    }

    #[test]
    fn test_empty_roster_paints_nothing() {
        let mut section = TeamSection::new(&[]);
        section.layout(Rect::new(0.0, 0.0, 900.0, TEAM_HEIGHT));
        let mut list = DrawList::new(Size::new(900.0, TEAM_HEIGHT));
        section.paint(&mut list);
        assert!(list.is_empty());
        assert!(!section.is_interactive());
    }
}
