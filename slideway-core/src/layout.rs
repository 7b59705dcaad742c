//! Track layout: where each item sits on the strip.
//!
//! Slides are laid back to back, each exactly one viewport long. Inside a
//! slide, items share the viewport with `gap` pixels between neighbours.

use std::ops::Range;

use crate::config::SliderConfig;

/// Span of one item along the slider axis, relative to the strip origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpan {
    /// Start of the item along the axis.
    pub offset: f32,
    /// Length of the item along the axis.
    pub extent: f32,
}

/// Geometry of a strip for a given viewport extent along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub viewport: f32,
    pub items_per_slide: usize,
    pub gap: f32,
    pub item_count: usize,
}

impl TrackLayout {
    pub fn new(config: &SliderConfig, viewport: f32) -> Self {
        Self {
            viewport: viewport.max(0.0),
            items_per_slide: config.items_per_slide.max(1),
            gap: config.gap.max(0.0),
            item_count: config.item_count,
        }
    }

    pub fn total_slides(&self) -> usize {
        self.item_count.div_ceil(self.items_per_slide)
    }

    /// Full strip extent: one viewport per slide.
    pub fn strip_extent(&self) -> f32 {
        self.viewport * self.total_slides() as f32
    }

    /// `viewport / n - gap * (n - 1) / n`, floored at zero.
    pub fn item_extent(&self) -> f32 {
        let n = self.items_per_slide as f32;
        (self.viewport / n - self.gap * (n - 1.0) / n).max(0.0)
    }

    pub fn item_span(&self, index: usize) -> ItemSpan {
        let slide = index / self.items_per_slide;
        let slot = index % self.items_per_slide;
        let extent = self.item_extent();
        ItemSpan {
            offset: slide as f32 * self.viewport + slot as f32 * (extent + self.gap),
            extent,
        }
    }

    /// Item indices that belong to `slide`.
    pub fn slide_items(&self, slide: usize) -> Range<usize> {
        let start = (slide * self.items_per_slide).min(self.item_count);
        let end = (start + self.items_per_slide).min(self.item_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(item_count: usize, items_per_slide: usize, gap: f32, viewport: f32) -> TrackLayout {
        let config = SliderConfig::new(item_count)
            .with_items_per_slide(items_per_slide)
            .with_gap(gap);
        TrackLayout::new(&config, viewport)
    }

    #[test]
    fn items_fill_one_viewport_per_slide() {
        let track = layout(12, 4, 20.0, 800.0);
        assert_eq!(track.total_slides(), 3);
        assert_eq!(track.strip_extent(), 2400.0);
        assert_eq!(track.item_extent(), 185.0);

        let last_in_slide = track.item_span(3);
        assert_eq!(last_in_slide.offset + last_in_slide.extent, 800.0);
        assert_eq!(track.item_span(4).offset, 800.0);
        assert_eq!(track.item_span(5).offset, 800.0 + 185.0 + 20.0);
    }

    #[test]
    fn short_last_slide_keeps_item_size() {
        let track = layout(5, 2, 0.0, 100.0);
        assert_eq!(track.slide_items(2), 4..5);
        assert_eq!(track.item_span(4), ItemSpan { offset: 200.0, extent: 50.0 });
        assert_eq!(track.slide_items(9), 5..5);
    }

    #[test]
    fn oversized_gap_collapses_items() {
        let track = layout(3, 3, 500.0, 300.0);
        assert_eq!(track.item_extent(), 0.0);
    }
}
