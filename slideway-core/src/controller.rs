//! Slider controller: current slide, drag tracking, and snapping.
//!
//! All inputs are clamped; no operation on the controller can fail.

use crate::autoplay::{ArmRequest, AutoplaySchedule, AutoplayTick};
use crate::config::{SliderConfig, StartPosition};
use crate::gesture::{Axis, DragState, PointerSample};
use crate::placement::{Placement, snap_percent};

/// State of one slider: which slide is showing, the drag in progress, and
/// the autoplay schedule.
#[derive(Debug, Clone)]
pub struct SliderController {
    config: SliderConfig,
    total_slides: usize,
    current_index: usize,
    drag: DragState,
    /// Strip offset in pixels, `<= 0`. Live translation while dragging.
    current_offset: f32,
    /// Full strip extent along the axis (one viewport per slide).
    container_size: f32,
    autoplay: AutoplaySchedule,
}

impl SliderController {
    pub fn new(config: SliderConfig) -> Self {
        let config = config.normalized();
        let total_slides = config.total_slides();
        let current_index = config.start_position.resolve(total_slides);
        let autoplay = AutoplaySchedule::new(config.autoplay, config.autoplay_interval());

        tracing::debug!(
            total_slides,
            current_index,
            items_per_slide = config.items_per_slide,
            "slider controller created"
        );

        Self {
            config,
            total_slides,
            current_index,
            drag: DragState::Idle,
            current_offset: 0.0,
            container_size: 0.0,
            autoplay,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn container_size(&self) -> f32 {
        self.container_size
    }

    pub fn axis(&self) -> Axis {
        self.config.axis()
    }

    pub fn autoplay(&self) -> &AutoplaySchedule {
        &self.autoplay
    }

    /// Extent of one slide: `container_size / total_slides`, or `0` when
    /// there are no slides.
    pub fn slide_extent(&self) -> f32 {
        if self.total_slides == 0 {
            return 0.0;
        }
        self.container_size / self.total_slides as f32
    }

    /// Record the strip extent measured by the renderer.
    pub fn set_container_size(&mut self, container_size: f32) {
        let container_size = if container_size.is_finite() {
            container_size.max(0.0)
        } else {
            0.0
        };
        if (container_size - self.container_size).abs() > f32::EPSILON {
            self.container_size = container_size;
            if !self.is_dragging() {
                self.resync_offset();
            }
        }
    }

    /// Apply a new configuration. The current slide is re-resolved from the
    /// start position only when the slide count or start position changed.
    pub fn reconfigure(&mut self, config: SliderConfig) {
        let config = config.normalized();
        let previous_total = self.total_slides;
        let previous_start = self.config.start_position;
        let previous_axis = self.config.axis();

        self.autoplay.set_enabled(config.autoplay);
        self.autoplay.set_interval(config.autoplay_interval());
        self.config = config;
        self.total_slides = self.config.total_slides();

        if self.config.axis() != previous_axis {
            self.drag = DragState::Idle;
        }

        if self.total_slides != previous_total || self.config.start_position != previous_start {
            self.drag = DragState::Idle;
            let index = self.config.start_position.resolve(self.total_slides);
            tracing::debug!(
                total_slides = self.total_slides,
                index,
                "slider reset to start position"
            );
            self.set_index(index);
        } else if !self.is_dragging() {
            self.resync_offset();
        }
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        let mut config = self.config.clone();
        config.item_count = item_count;
        self.reconfigure(config);
    }

    pub fn set_start_position(&mut self, start_position: StartPosition) {
        let mut config = self.config.clone();
        config.start_position = start_position;
        self.reconfigure(config);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.config.autoplay = enabled;
        self.autoplay.set_enabled(enabled);
    }

    pub fn next(&mut self) {
        if self.total_slides == 0 {
            return;
        }
        let last = self.total_slides - 1;
        let index = if self.current_index >= last {
            if self.config.looping { 0 } else { last }
        } else {
            self.current_index + 1
        };
        self.set_index(index);
    }

    pub fn previous(&mut self) {
        if self.total_slides == 0 {
            return;
        }
        let index = if self.current_index == 0 {
            if self.config.looping {
                self.total_slides - 1
            } else {
                0
            }
        } else {
            self.current_index - 1
        };
        self.set_index(index);
    }

    /// Jump to `index`, clamped to `[0, total_slides - 1]`.
    pub fn go_to(&mut self, index: i64) {
        let last = self.total_slides.saturating_sub(1);
        let index = usize::try_from(index.max(0)).map_or(last, |index| index.min(last));
        self.set_index(index);
    }

    pub fn can_go_next(&self) -> bool {
        self.total_slides > 1 && (self.config.looping || self.current_index + 1 < self.total_slides)
    }

    pub fn can_go_previous(&self) -> bool {
        self.total_slides > 1 && (self.config.looping || self.current_index > 0)
    }

    pub fn drag_start(&mut self, pos: PointerSample) {
        let start_pos = pos.along(self.axis());
        self.drag = DragState::Dragging {
            start_pos,
            offset_at_start: self.current_offset,
        };
        tracing::trace!(start_pos, offset = self.current_offset, "drag started");
    }

    pub fn drag_move(&mut self, pos: PointerSample) {
        let DragState::Dragging {
            start_pos,
            offset_at_start,
        } = self.drag
        else {
            return;
        };

        let diff = pos.along(self.axis()) - start_pos;
        let candidate = offset_at_start + diff;
        if !candidate.is_finite() {
            return;
        }
        self.current_offset = candidate.clamp(self.min_offset(), 0.0);
        tracing::trace!(offset = self.current_offset, "drag moved");
    }

    pub fn drag_end(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.drag = DragState::Idle;

        let extent = self.slide_extent();
        let target = if extent > 0.0 {
            let move_percentage = self.current_offset / extent;
            move_percentage.abs().round() as i64
        } else {
            self.current_index as i64
        };
        tracing::trace!(offset = self.current_offset, target, "drag released");
        self.go_to(target);
    }

    /// Where the renderer should place the strip right now.
    pub fn placement(&self) -> Placement {
        if self.is_dragging() {
            Placement::Pixels(self.current_offset)
        } else {
            Placement::Percent(snap_percent(self.current_index, self.total_slides))
        }
    }

    /// The autoplay timer the host should keep armed, if any.
    pub fn autoplay_request(&self) -> Option<ArmRequest> {
        self.autoplay.request()
    }

    /// Advance on an autoplay tick. Returns whether the tick was applied.
    ///
    /// Ticks from a replaced timer are ignored, as are ticks during a drag
    /// when `pause_autoplay_on_drag` is set.
    pub fn autoplay_tick(&mut self, tick: AutoplayTick) -> bool {
        if !self.autoplay.accepts(tick) {
            tracing::trace!(generation = tick.generation, "stale autoplay tick ignored");
            return false;
        }
        if self.is_dragging() && self.config.pause_autoplay_on_drag {
            return false;
        }
        self.next();
        true
    }

    fn min_offset(&self) -> f32 {
        -(self.total_slides.saturating_sub(1) as f32) * self.slide_extent()
    }

    fn set_index(&mut self, index: usize) {
        if index != self.current_index {
            tracing::debug!(from = self.current_index, to = index, "slide changed");
            self.current_index = index;
            self.autoplay.rearm();
        }
        if !self.is_dragging() {
            self.resync_offset();
        }
    }

    fn resync_offset(&mut self) {
        self.current_offset = -(self.current_index as f32) * self.slide_extent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavType;

    fn slider(item_count: usize, items_per_slide: usize, looping: bool) -> SliderController {
        SliderController::new(
            SliderConfig::new(item_count)
                .with_items_per_slide(items_per_slide)
                .with_loop(looping)
                .with_nav_type(NavType::Both),
        )
    }

    #[test]
    fn next_wraps_only_when_looping() {
        let mut looping = slider(3, 1, true);
        looping.go_to(2);
        looping.next();
        assert_eq!(looping.current_index(), 0);

        let mut clamped = slider(3, 1, false);
        clamped.go_to(2);
        clamped.next();
        assert_eq!(clamped.current_index(), 2);
    }

    #[test]
    fn previous_wraps_only_when_looping() {
        let mut looping = slider(3, 1, true);
        looping.previous();
        assert_eq!(looping.current_index(), 2);

        let mut clamped = slider(3, 1, false);
        clamped.previous();
        assert_eq!(clamped.current_index(), 0);
    }

    #[test]
    fn go_to_clamps_any_integer() {
        let mut controller = slider(20, 4, true);
        controller.go_to(-8);
        assert_eq!(controller.current_index(), 0);
        controller.go_to(99);
        assert_eq!(controller.current_index(), 4);
        controller.go_to(i64::MAX);
        assert_eq!(controller.current_index(), 4);
        controller.go_to(2);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut controller = slider(0, 4, true);
        controller.set_container_size(800.0);
        controller.next();
        controller.previous();
        controller.go_to(3);
        controller.drag_start(PointerSample::new(100.0, 0.0));
        controller.drag_move(PointerSample::new(-400.0, 0.0));
        controller.drag_end();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.slide_extent(), 0.0);
        assert_eq!(controller.placement(), Placement::Percent(0.0));
    }

    #[test]
    fn arrows_dim_at_non_looping_edges() {
        let mut controller = slider(8, 4, false);
        assert!(controller.can_go_next());
        assert!(!controller.can_go_previous());
        controller.next();
        assert!(!controller.can_go_next());
        assert!(controller.can_go_previous());

        let single = slider(3, 4, true);
        assert!(!single.can_go_next());
        assert!(!single.can_go_previous());
    }

    #[test]
    fn moves_outside_a_drag_are_ignored() {
        let mut controller = slider(8, 4, true);
        controller.set_container_size(1600.0);
        controller.drag_move(PointerSample::new(-500.0, 0.0));
        assert_eq!(controller.current_offset(), 0.0);
        controller.drag_end();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.drag_state(), DragState::Idle);
    }

    #[test]
    fn vertical_sliders_track_the_y_axis() {
        let mut controller =
            SliderController::new(SliderConfig::new(9).with_items_per_slide(3).with_vertical(true));
        controller.set_container_size(900.0);
        controller.drag_start(PointerSample::new(0.0, 500.0));
        controller.drag_move(PointerSample::new(-1000.0, 250.0));
        assert_eq!(controller.current_offset(), -250.0);
        assert_eq!(controller.placement(), Placement::Pixels(-250.0));
        controller.drag_end();
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn changing_item_count_resets_to_start_position() {
        let mut controller = SliderController::new(
            SliderConfig::new(12)
                .with_items_per_slide(4)
                .with_start_position(StartPosition::End),
        );
        assert_eq!(controller.current_index(), 2);
        controller.go_to(0);

        controller.set_item_count(20);
        assert_eq!(controller.total_slides(), 5);
        assert_eq!(controller.current_index(), 4);

        controller.go_to(1);
        controller.set_start_position(StartPosition::Center);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn unrelated_reconfigure_keeps_current_slide() {
        let mut controller = slider(12, 4, true);
        controller.go_to(2);
        let config = controller.config().clone().with_gap(4.0).with_loop(false);
        controller.reconfigure(config);
        assert_eq!(controller.current_index(), 2);
        assert!(!controller.config().looping);
    }

    #[test]
    fn offset_follows_navigation_while_idle() {
        let mut controller = slider(12, 4, true);
        controller.set_container_size(2400.0);
        controller.next();
        assert_eq!(controller.current_offset(), -800.0);
        controller.go_to(2);
        assert_eq!(controller.current_offset(), -1600.0);
    }
}
