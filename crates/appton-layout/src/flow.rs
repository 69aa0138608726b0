//! Vertical stacking of page sections.

use appton_core::Rect;
use serde::{Deserialize, Serialize};

/// Stacks sections top to bottom across the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionFlow {
    width: f32,
    spacing: f32,
}

impl SectionFlow {
    /// Create a flow for a viewport width.
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self {
            width,
            spacing: 0.0,
        }
    }

    /// Set the gap between consecutive sections.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Lay out sections with the given heights, top to bottom.
    #[must_use]
    pub fn layout(&self, heights: &[f32]) -> Vec<Rect> {
        let mut y = 0.0;
        let mut rects = Vec::with_capacity(heights.len());
        for (i, &height) in heights.iter().enumerate() {
            if i > 0 {
                y += self.spacing;
            }
            rects.push(Rect::new(0.0, y, self.width, height));
            y += height;
        }
        rects
    }

    /// Total height of the stacked sections including gaps.
    #[must_use]
    pub fn total_height(&self, heights: &[f32]) -> f32 {
        let gaps = self.spacing * heights.len().saturating_sub(1) as f32;
        heights.iter().sum::<f32>() + gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flow() {
        let flow = SectionFlow::new(800.0);
        assert!(flow.layout(&[]).is_empty());
        assert_eq!(flow.total_height(&[]), 0.0);
    }

    #[test]
    fn test_sections_stack_without_overlap() {
        let flow = SectionFlow::new(800.0).spacing(24.0);
        let rects = flow.layout(&[100.0, 200.0, 50.0]);

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 800.0, 100.0));
        assert_eq!(rects[1], Rect::new(0.0, 124.0, 800.0, 200.0));
        assert_eq!(rects[2], Rect::new(0.0, 348.0, 800.0, 50.0));
        assert!(!rects[0].intersects(&rects[1]));
        assert!(!rects[1].intersects(&rects[2]));
    }

    #[test]
    fn test_total_height_accounts_for_gaps() {
        let flow = SectionFlow::new(320.0).spacing(10.0);
        assert_eq!(flow.total_height(&[100.0, 200.0, 50.0]), 370.0);
    }

    #[test]
    fn test_negative_spacing_is_clamped() {
        let flow = SectionFlow::new(320.0).spacing(-5.0);
        let rects = flow.layout(&[10.0, 10.0]);
        assert_eq!(rects[1].y, 10.0);
    }

    #[test]
    fn test_sections_span_full_width() {
        let flow = SectionFlow::new(1440.0);
        for rect in flow.layout(&[10.0, 20.0]) {
            assert_eq!(rect.width, 1440.0);
        }
    }
}
