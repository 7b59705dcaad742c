//! Slideway core
//!
//! Headless carousel logic shared by every Slideway front end: configuration,
//! slide paging, drag tracking with snap-on-release, placement of the item
//! strip, and autoplay scheduling. Nothing here depends on a GUI toolkit;
//! renderers feed in pointer samples and the measured strip extent, and read
//! back a [`placement::Placement`].

#![allow(missing_docs)]

pub mod autoplay;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod placement;
pub mod showcase;

pub use autoplay::{ArmRequest, AutoplayDriver, AutoplaySchedule, AutoplayTick, AutoplayTimer};
pub use config::{NavType, SliderConfig, StartPosition};
pub use controller::SliderController;
pub use error::{ConfigError, Result};
pub use gesture::{Axis, DragState, PointerSample};
pub use layout::{ItemSpan, TrackLayout};
pub use placement::Placement;
pub use showcase::{Showcase, ShowcaseEntry};
