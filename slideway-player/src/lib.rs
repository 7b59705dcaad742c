//! Slideway Player library
//!
//! Desktop showcase for Slideway carousels. The binary in `src/main.rs`
//! renders a page of sliders; the modules here hold the iced glue (state,
//! update, view, subscriptions), the `SlideTrack` widget and the theme.
//!
//! Notes
//! - Slider logic lives in `slideway-core`; this crate only renders it and
//!   forwards input.
//! - The library is exposed mainly to enable testing.

pub mod app;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
pub mod widgets;
