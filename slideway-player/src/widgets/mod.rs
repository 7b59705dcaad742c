pub mod slide_track;

pub use slide_track::{Gesture, SlideTrack, slide_track};
