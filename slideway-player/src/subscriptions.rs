//! Root-level subscription composition

use iced::Subscription;
use slideway_core::AutoplayTick;

use crate::messages::{Message, SliderMessage};
use crate::state::State;

/// One autoplay timer per slider that wants one.
///
/// Each timer is keyed by slider id and schedule generation. When the
/// generation moves on (slide changed, autoplay toggled, interval changed)
/// the old timer is dropped and a fresh one armed; sliders with autoplay off
/// contribute nothing, which tears their timer down.
pub fn subscription(state: &State) -> Subscription<Message> {
    let subscriptions = state.sliders.iter().filter_map(|section| {
        let request = section.controller.autoplay_request()?;
        Some(
            iced::time::every(request.interval)
                .with((section.id, request.generation))
                .map(|((id, generation), _)| {
                    Message::Slider(
                        id,
                        SliderMessage::AutoplayTick(AutoplayTick { generation }),
                    )
                }),
        )
    });

    Subscription::batch(subscriptions)
}
