use iced::Task;
use slideway_core::SliderController;

use crate::messages::{Message, SliderMessage};
use crate::state::State;
use crate::widgets::Gesture;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Slider(id, message) => {
            match state.section_mut(id) {
                Some(section) => update_slider(&mut section.controller, message),
                None => log::warn!("Message for unknown slider {:?}: {:?}", id, message),
            }
            Task::none()
        }
    }
}

/// Apply a single slider message to its controller.
pub fn update_slider(controller: &mut SliderController, message: SliderMessage) {
    match message {
        SliderMessage::Previous => controller.previous(),
        SliderMessage::Next => controller.next(),
        SliderMessage::GoTo(index) => {
            controller.go_to(i64::try_from(index).unwrap_or(i64::MAX))
        }
        SliderMessage::Gesture(gesture) => handle_gesture(controller, gesture),
        SliderMessage::AutoplayTick(tick) => {
            if !controller.autoplay_tick(tick) {
                log::trace!(
                    "Autoplay tick {} skipped (dragging or superseded)",
                    tick.generation
                );
            }
        }
    }
}

fn handle_gesture(controller: &mut SliderController, gesture: Gesture) {
    match gesture {
        Gesture::Started {
            sample,
            strip_extent,
        } => {
            controller.set_container_size(strip_extent);
            controller.drag_start(sample);
        }
        Gesture::Moved {
            sample,
            strip_extent,
        } => {
            controller.set_container_size(strip_extent);
            controller.drag_move(sample);
        }
        Gesture::Ended { strip_extent } => {
            controller.set_container_size(strip_extent);
            controller.drag_end();
            log::debug!("Drag snapped to slide {}", controller.current_index());
        }
    }
}
