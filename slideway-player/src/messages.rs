use slideway_core::AutoplayTick;

use crate::widgets::Gesture;

/// Identifies a slider on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(pub usize);

#[derive(Debug, Clone)]
pub enum SliderMessage {
    // Navigation
    Previous,
    Next,
    GoTo(usize),

    // Pointer / touch drag
    Gesture(Gesture),

    // Timer
    AutoplayTick(AutoplayTick),
}

#[derive(Debug, Clone)]
pub enum Message {
    Slider(SliderId, SliderMessage),
}
