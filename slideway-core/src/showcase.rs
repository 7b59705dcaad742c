//! Showcase descriptions: a titled list of sliders loaded from TOML.
//!
//! ```toml
//! [[slider]]
//! title = "Dots only"
//! items = 12
//! items_per_slide = 2
//! nav_type = "dots"
//! start_position = "end"
//! gap = 16
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::config::{NavType, SliderConfig, StartPosition, lenient_count};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Showcase {
    #[serde(rename = "slider", default)]
    pub sliders: Vec<ShowcaseEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowcaseEntry {
    pub title: String,
    /// Number of generated `Item N` cards; ignored when `labels` is set.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<usize>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(flatten)]
    pub options: SliderConfig,
    /// Keys that matched no option; logged and otherwise ignored.
    #[serde(flatten)]
    pub unknown: toml::Table,
}

fn lenient_items<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<usize>, D::Error> {
    lenient_count(deserializer).map(Some)
}

impl ShowcaseEntry {
    pub fn labels(&self) -> Vec<String> {
        if !self.labels.is_empty() {
            return self.labels.clone();
        }
        let count = self.items.unwrap_or(self.options.item_count);
        (1..=count).map(|n| format!("Item {n}")).collect()
    }

    /// Slider configuration with `item_count` taken from the labels.
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            item_count: self.labels().len(),
            ..self.options.clone()
        }
    }
}

impl Showcase {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let showcase: Self = toml::from_str(source)?;
        for entry in &showcase.sliders {
            for key in entry.unknown.keys() {
                tracing::warn!(slider = %entry.title, key = %key, "unknown slider option ignored");
            }
        }
        Ok(showcase)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let showcase = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            sliders = showcase.sliders.len(),
            "showcase loaded"
        );
        Ok(showcase)
    }

    /// The built-in demo page: three sliders over twelve items.
    pub fn demo() -> Self {
        let entry = |title: &str, options: SliderConfig| ShowcaseEntry {
            title: title.to_string(),
            items: Some(12),
            labels: Vec::new(),
            options,
            unknown: toml::Table::new(),
        };

        Self {
            sliders: vec![
                entry(
                    "Horizontal Slider (4 items per slide, starting at center)",
                    SliderConfig::default()
                        .with_items_per_slide(4)
                        .with_autoplay(true, 5000)
                        .with_nav_type(NavType::Both)
                        .with_start_position(StartPosition::Center),
                ),
                entry(
                    "Vertical Slider (3 items per slide)",
                    SliderConfig::default()
                        .with_items_per_slide(3)
                        .with_vertical(true)
                        .with_nav_type(NavType::None)
                        .with_start_position(StartPosition::Start),
                ),
                entry(
                    "Dots-only Navigation (2 items per slide)",
                    SliderConfig::default()
                        .with_items_per_slide(2)
                        .with_nav_type(NavType::Dots)
                        .with_start_position(StartPosition::End)
                        .with_gap(16.0),
                ),
            ],
        }
    }
}
