//! Clipped, translatable strip of slider items.
//!
//! The track lays every item out on one long strip (one viewport per slide),
//! clips to its own bounds and draws the strip shifted by the controller's
//! [`Placement`]. Mouse and touch input inside the bounds is reduced to
//! [`Gesture`] messages carrying a [`PointerSample`] relative to the track.

use std::fmt;

use iced::advanced::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::event::Event;
use iced::{Element, Length, Point, Rectangle, Size, Theme, Vector, mouse, touch};
use slideway_core::{Axis, Placement, PointerSample, SliderConfig, SliderController, TrackLayout};

/// Drag input reported by a [`SlideTrack`].
///
/// `strip_extent` is the full strip length along the slider axis, which the
/// controller needs as its container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Started {
        sample: PointerSample,
        strip_extent: f32,
    },
    Moved {
        sample: PointerSample,
        strip_extent: f32,
    },
    Ended {
        strip_extent: f32,
    },
}

#[derive(Debug, Default)]
struct State {
    pressed: bool,
}

pub struct SlideTrack<'a, Message> {
    items: Vec<Element<'a, Message>>,
    config: SliderConfig,
    placement: Placement,
    width: Length,
    height: Length,
    on_gesture: Option<Box<dyn Fn(Gesture) -> Message + 'a>>,
}

impl<Message> fmt::Debug for SlideTrack<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideTrack")
            .field("items", &self.items.len())
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

/// Build a track for `items`, positioned from the controller's current state.
pub fn slide_track<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    controller: &SliderController,
) -> SlideTrack<'a, Message> {
    let config = SliderConfig {
        item_count: items.len(),
        ..controller.config().clone()
    };

    SlideTrack {
        items,
        config,
        placement: controller.placement(),
        width: Length::Fill,
        height: Length::Fill,
        on_gesture: None,
    }
}

impl<'a, Message> SlideTrack<'a, Message> {
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn on_gesture(mut self, f: impl Fn(Gesture) -> Message + 'a) -> Self {
        self.on_gesture = Some(Box::new(f));
        self
    }

    fn axis(&self) -> Axis {
        self.config.axis()
    }

    fn track_layout(&self, bounds: Size) -> TrackLayout {
        let viewport = match self.axis() {
            Axis::Horizontal => bounds.width,
            Axis::Vertical => bounds.height,
        };
        TrackLayout::new(&self.config, viewport)
    }

    fn translation(&self, bounds: Size) -> Vector {
        let shift = self
            .placement
            .translation(self.track_layout(bounds).strip_extent());
        match self.axis() {
            Axis::Horizontal => Vector::new(shift, 0.0),
            Axis::Vertical => Vector::new(0.0, shift),
        }
    }
}

/// Reduce one input event to a drag gesture, tracking whether a drag is in
/// progress. Samples are relative to the track origin.
fn gesture_for(
    event: &Event,
    state: &mut State,
    cursor: mouse::Cursor,
    bounds: Rectangle,
    strip_extent: f32,
) -> Option<Gesture> {
    let local = |position: Point| PointerSample::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_over(bounds)?;
            state.pressed = true;
            Some(Gesture::Started {
                sample: local(position),
                strip_extent,
            })
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) if bounds.contains(*position) => {
            state.pressed = true;
            Some(Gesture::Started {
                sample: local(*position),
                strip_extent,
            })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if state.pressed => {
            // Leaving the track ends the drag, like a mouse-leave.
            if bounds.contains(*position) {
                Some(Gesture::Moved {
                    sample: local(*position),
                    strip_extent,
                })
            } else {
                state.pressed = false;
                Some(Gesture::Ended { strip_extent })
            }
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) if state.pressed => {
            Some(Gesture::Moved {
                sample: local(*position),
                strip_extent,
            })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft)
        | Event::Touch(touch::Event::FingerLifted { .. })
        | Event::Touch(touch::Event::FingerLost { .. })
            if state.pressed =>
        {
            state.pressed = false;
            Some(Gesture::Ended { strip_extent })
        }
        _ => None,
    }
}

impl<'a, Message: 'a> From<SlideTrack<'a, Message>> for Element<'a, Message> {
    fn from(track: SlideTrack<'a, Message>) -> Self {
        Element::new(track)
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for SlideTrack<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.items.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.items);
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(self.width, self.height, Size::ZERO);
        let track = self.track_layout(size);
        let axis = self.axis();

        let children = self
            .items
            .iter_mut()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(index, (item, child))| {
                let span = track.item_span(index);
                let (item_size, position) = match axis {
                    Axis::Horizontal => (
                        Size::new(span.extent, size.height),
                        Point::new(span.offset, 0.0),
                    ),
                    Axis::Vertical => (
                        Size::new(size.width, span.extent),
                        Point::new(0.0, span.offset),
                    ),
                };
                item.as_widget_mut()
                    .layout(child, renderer, &layout::Limits::new(Size::ZERO, item_size))
                    .move_to(position)
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(clip) = bounds.intersection(viewport) else {
            return;
        };
        let translation = self.translation(bounds.size());
        // Children live in strip space; shift the cursor into it as well.
        let strip_cursor = match cursor.position() {
            Some(position) => mouse::Cursor::Available(position - translation),
            None => mouse::Cursor::Unavailable,
        };
        let strip_viewport = clip - translation;

        renderer.with_layer(clip, |renderer| {
            renderer.with_translation(translation, |renderer| {
                for ((item, state), child_layout) in
                    self.items.iter().zip(&tree.children).zip(layout.children())
                {
                    if !child_layout.bounds().intersects(&strip_viewport) {
                        continue;
                    }
                    item.as_widget().draw(
                        state,
                        renderer,
                        theme,
                        style,
                        child_layout,
                        strip_cursor,
                        &strip_viewport,
                    );
                }
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let Some(on_gesture) = self.on_gesture.as_ref() else {
            return;
        };
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let strip_extent = self.track_layout(bounds.size()).strip_extent();

        if let Some(gesture) = gesture_for(event, state, cursor, bounds, strip_extent) {
            shell.publish(on_gesture(gesture));
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.pressed {
            mouse::Interaction::Grabbing
        } else if self.on_gesture.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
