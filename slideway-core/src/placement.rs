//! Visual placement of the item strip.

/// Where the strip should be drawn along the slider axis.
///
/// While idle the strip sits at a percentage of its own extent derived from
/// the current slide; while dragging the live pixel offset takes over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Negative translation as a percentage of the strip extent, `0..100`.
    Percent(f32),
    /// Signed translation in pixels, always `<= 0`.
    Pixels(f32),
}

impl Placement {
    /// Signed translation in pixels for a strip `strip_extent` long.
    pub fn translation(self, strip_extent: f32) -> f32 {
        match self {
            Placement::Percent(percent) => -(percent / 100.0) * strip_extent,
            Placement::Pixels(offset) => offset,
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, Placement::Pixels(_))
    }
}

/// `(index / total_slides) * 100`, or `0` when there are no slides.
pub fn snap_percent(index: usize, total_slides: usize) -> f32 {
    if total_slides == 0 {
        return 0.0;
    }
    index as f32 / total_slides as f32 * 100.0
}
