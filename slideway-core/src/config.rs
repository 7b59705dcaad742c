//! Slider configuration.
//!
//! Every option has a default so partial descriptions (for example a
//! `[[slider]]` table that only sets `nav_type`) deserialize cleanly. Values
//! that would break the paging math are clamped by [`SliderConfig::normalized`]
//! instead of being rejected.

use std::time::Duration;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::gesture::Axis;

/// Items shown per slide when unset.
pub const DEFAULT_ITEMS_PER_SLIDE: usize = 4;
/// Autoplay interval in milliseconds when unset.
pub const DEFAULT_AUTOPLAY_SPEED_MS: u64 = 3000;
/// Pixels between items of a slide when unset.
pub const DEFAULT_GAP: f32 = 20.0;

/// Which navigation controls a slider renders.
///
/// Unknown names deserialize to [`NavType::Both`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavType {
    Dots,
    Arrows,
    #[default]
    Both,
    None,
}

impl NavType {
    pub fn shows_arrows(self) -> bool {
        matches!(self, NavType::Arrows | NavType::Both)
    }

    pub fn shows_dots(self) -> bool {
        matches!(self, NavType::Dots | NavType::Both)
    }
}

/// Slide a slider shows when it mounts or its slide count changes.
///
/// Deserializes from `"start"`, `"center"`, `"end"` or a slide number;
/// anything else falls back to [`StartPosition::Start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StartPosition {
    #[default]
    Start,
    Center,
    End,
    /// Explicit slide number, clamped into range.
    Slide(i64),
}

/// Raw form of a named-or-numbered option before fallbacks are applied.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Number(i64),
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for NavType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOption::deserialize(deserializer)?;
        let nav_type = match &raw {
            RawOption::Name(name) => match name.to_ascii_lowercase().as_str() {
                "dots" => Some(NavType::Dots),
                "arrows" => Some(NavType::Arrows),
                "both" => Some(NavType::Both),
                "none" => Some(NavType::None),
                _ => None,
            },
            _ => None,
        };
        Ok(nav_type.unwrap_or_else(|| {
            tracing::warn!(nav_type = %raw, "unknown nav_type, using both");
            NavType::Both
        }))
    }
}

impl<'de> Deserialize<'de> for StartPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOption::deserialize(deserializer)?;
        let position = match &raw {
            RawOption::Number(n) => Some(StartPosition::Slide(*n)),
            RawOption::Name(name) => match name.to_ascii_lowercase().as_str() {
                "start" => Some(StartPosition::Start),
                "center" => Some(StartPosition::Center),
                "end" => Some(StartPosition::End),
                _ => None,
            },
            RawOption::Other(_) => None,
        };
        Ok(position.unwrap_or_else(|| {
            tracing::warn!(start_position = %raw, "unknown start_position, using start");
            StartPosition::Start
        }))
    }
}

impl std::fmt::Display for RawOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawOption::Number(n) => write!(f, "{n}"),
            RawOption::Name(name) => write!(f, "{name:?}"),
            RawOption::Other(_) => f.write_str("<unsupported value>"),
        }
    }
}

/// Counts below zero become `0`; [`SliderConfig::normalized`] clamps further.
pub(crate) fn lenient_count<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<usize, D::Error> {
    let value = i64::deserialize(deserializer)?;
    Ok(usize::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(value, "negative count clamped to 0");
        0
    }))
}

/// A negative autoplay interval falls back to the default speed.
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = i64::deserialize(deserializer)?;
    Ok(u64::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(
            value,
            default = DEFAULT_AUTOPLAY_SPEED_MS,
            "negative autoplay_speed replaced by the default"
        );
        DEFAULT_AUTOPLAY_SPEED_MS
    }))
}

impl StartPosition {
    /// Resolve to a slide index for a slider with `total_slides` slides.
    ///
    /// Always returns `0` when there are no slides.
    pub fn resolve(self, total_slides: usize) -> usize {
        let last = total_slides.saturating_sub(1);
        match self {
            StartPosition::Slide(n) => {
                usize::try_from(n.max(0)).map_or(last, |n| n.min(last))
            }
            StartPosition::Center => total_slides / 2,
            StartPosition::End => last,
            StartPosition::Start => 0,
        }
    }
}

/// Static configuration of one slider instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    #[serde(deserialize_with = "lenient_count")]
    pub item_count: usize,
    #[serde(deserialize_with = "lenient_count")]
    pub items_per_slide: usize,
    /// Pixels between neighbouring items of a slide.
    pub gap: f32,
    pub vertical: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub autoplay: bool,
    /// Autoplay interval in milliseconds.
    #[serde(deserialize_with = "lenient_millis")]
    pub autoplay_speed: u64,
    pub start_position: StartPosition,
    pub nav_type: NavType,
    /// Ignore autoplay ticks while the user is dragging the strip.
    pub pause_autoplay_on_drag: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            items_per_slide: DEFAULT_ITEMS_PER_SLIDE,
            gap: DEFAULT_GAP,
            vertical: false,
            looping: true,
            autoplay: true,
            autoplay_speed: DEFAULT_AUTOPLAY_SPEED_MS,
            start_position: StartPosition::Start,
            nav_type: NavType::Both,
            pause_autoplay_on_drag: true,
        }
    }
}

impl SliderConfig {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn with_items_per_slide(mut self, items_per_slide: usize) -> Self {
        self.items_per_slide = items_per_slide;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool, speed_ms: u64) -> Self {
        self.autoplay = autoplay;
        self.autoplay_speed = speed_ms;
        self
    }

    pub fn with_start_position(mut self, start_position: StartPosition) -> Self {
        self.start_position = start_position;
        self
    }

    pub fn with_nav_type(mut self, nav_type: NavType) -> Self {
        self.nav_type = nav_type;
        self
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Clamp options that the paging math cannot handle.
    pub fn normalized(mut self) -> Self {
        if self.items_per_slide == 0 {
            tracing::warn!("items_per_slide of 0 clamped to 1");
            self.items_per_slide = 1;
        }
        if self.autoplay_speed == 0 {
            tracing::warn!("autoplay_speed of 0ms clamped to 1ms");
            self.autoplay_speed = 1;
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            tracing::warn!(gap = self.gap, "invalid gap clamped to 0");
            self.gap = 0.0;
        }
        self
    }

    /// `ceil(item_count / items_per_slide)`, treating 0 items per slide as 1.
    pub fn total_slides(&self) -> usize {
        self.item_count.div_ceil(self.items_per_slide.max(1))
    }

    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.vertical)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_speed.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.items_per_slide, 4);
        assert_eq!(config.autoplay_speed, 3000);
        assert_eq!(config.gap, 20.0);
        assert!(config.autoplay);
        assert!(config.looping);
        assert!(!config.vertical);
        assert_eq!(config.nav_type, NavType::Both);
        assert_eq!(config.start_position, StartPosition::Start);
    }

    #[test]
    fn total_slides_rounds_up() {
        assert_eq!(SliderConfig::new(12).total_slides(), 3);
        assert_eq!(SliderConfig::new(13).total_slides(), 4);
        assert_eq!(SliderConfig::new(0).total_slides(), 0);
        assert_eq!(SliderConfig::new(3).total_slides(), 1);
        assert_eq!(SliderConfig::new(5).with_items_per_slide(0).total_slides(), 5);
    }

    #[test]
    fn normalized_clamps_degenerate_values() {
        let config = SliderConfig::new(4)
            .with_items_per_slide(0)
            .with_autoplay(true, 0)
            .with_gap(-3.0)
            .normalized();
        assert_eq!(config.items_per_slide, 1);
        assert_eq!(config.autoplay_speed, 1);
        assert_eq!(config.gap, 0.0);

        let nan_gap = SliderConfig::new(1).with_gap(f32::NAN).normalized();
        assert_eq!(nan_gap.gap, 0.0);
    }

    #[test]
    fn start_position_resolution() {
        assert_eq!(StartPosition::Center.resolve(5), 2);
        assert_eq!(StartPosition::End.resolve(5), 4);
        assert_eq!(StartPosition::Start.resolve(5), 0);
        assert_eq!(StartPosition::Slide(7).resolve(5), 4);
        assert_eq!(StartPosition::Slide(-3).resolve(5), 0);
        assert_eq!(StartPosition::Slide(2).resolve(5), 2);
    }

    #[test]
    fn start_position_without_slides_is_zero() {
        for position in [
            StartPosition::Start,
            StartPosition::Center,
            StartPosition::End,
            StartPosition::Slide(3),
        ] {
            assert_eq!(position.resolve(0), 0);
        }
    }

    #[test]
    fn nav_type_controls() {
        assert!(NavType::Both.shows_arrows() && NavType::Both.shows_dots());
        assert!(NavType::Arrows.shows_arrows() && !NavType::Arrows.shows_dots());
        assert!(!NavType::Dots.shows_arrows() && NavType::Dots.shows_dots());
        assert!(!NavType::None.shows_arrows() && !NavType::None.shows_dots());
    }

    #[test]
    fn deserializes_named_and_numeric_start_positions() {
        let config: SliderConfig =
            toml::from_str("start_position = \"center\"\nloop = false").unwrap();
        assert_eq!(config.start_position, StartPosition::Center);
        assert!(!config.looping);

        let config: SliderConfig = toml::from_str("start_position = 3").unwrap();
        assert_eq!(config.start_position, StartPosition::Slide(3));
        assert_eq!(config.items_per_slide, DEFAULT_ITEMS_PER_SLIDE);

        let config: SliderConfig = toml::from_str("start_position = \"End\"").unwrap();
        assert_eq!(config.start_position, StartPosition::End);
    }

    #[test]
    fn unknown_option_values_fall_back_to_defaults() {
        let config: SliderConfig =
            toml::from_str("start_position = \"middle\"\nnav_type = \"tabs\"").unwrap();
        assert_eq!(config.start_position, StartPosition::Start);
        assert_eq!(config.nav_type, NavType::Both);

        let config: SliderConfig =
            toml::from_str("start_position = 2.5\nnav_type = 1").unwrap();
        assert_eq!(config.start_position, StartPosition::Start);
        assert_eq!(config.nav_type, NavType::Both);
    }

    #[test]
    fn negative_counts_and_speeds_are_clamped() {
        let config: SliderConfig = toml::from_str(
            "item_count = -2\nitems_per_slide = -1\nautoplay_speed = -500",
        )
        .unwrap();
        assert_eq!(config.item_count, 0);
        assert_eq!(config.items_per_slide, 0);
        assert_eq!(config.autoplay_speed, DEFAULT_AUTOPLAY_SPEED_MS);
        assert_eq!(config.normalized().items_per_slide, 1);
    }
}
