use slideway_core::{Showcase, ShowcaseEntry, SliderController};

use crate::messages::SliderId;

/// One titled slider on the page.
#[derive(Debug, Clone)]
pub struct SliderSection {
    pub id: SliderId,
    pub title: String,
    pub labels: Vec<String>,
    pub controller: SliderController,
}

impl SliderSection {
    pub fn new(id: SliderId, entry: &ShowcaseEntry) -> Self {
        Self {
            id,
            title: entry.title.clone(),
            labels: entry.labels(),
            controller: SliderController::new(entry.config()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub sliders: Vec<SliderSection>,
}

impl State {
    pub fn from_showcase(showcase: &Showcase) -> Self {
        let sliders = showcase
            .sliders
            .iter()
            .enumerate()
            .map(|(index, entry)| SliderSection::new(SliderId(index), entry))
            .collect();
        Self { sliders }
    }

    pub fn section(&self, id: SliderId) -> Option<&SliderSection> {
        self.sliders.iter().find(|section| section.id == id)
    }

    pub fn section_mut(&mut self, id: SliderId) -> Option<&mut SliderSection> {
        self.sliders.iter_mut().find(|section| section.id == id)
    }
}
