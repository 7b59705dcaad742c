//! Gesture primitives shared by every pointer-like input source.
//!
//! Mouse and touch events are reduced to a [`PointerSample`] at the widget
//! boundary, so the controller never needs to know which device produced a
//! drag.

/// Axis of motion for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// A single position reported by a mouse cursor or a finger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate of the sample along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl From<(f32, f32)> for PointerSample {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Drag lifecycle of a slider.
///
/// Moves and releases are only meaningful in [`DragState::Dragging`]; in
/// [`DragState::Idle`] they are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer coordinate along the slider axis when the drag began.
        start_pos: f32,
        /// Strip offset in pixels when the drag began.
        offset_at_start: f32,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
