//! Viewport transformations - pan and wheel zoom.

use crate::board::Board;
use crate::input::coords::{CoordinateConverter, ZoomDirection};
use crate::input::state::PanSession;
use crate::input::{EventResponse, PointerEvent, WheelEvent};
use crate::types::{Element, ScreenOffset, WorldPoint};
use tracing::debug;

impl<E: Element> Board<E> {
    /// Convert a surface offset to world space with the current viewport.
    pub fn screen_to_world(&self, offset: ScreenOffset) -> WorldPoint {
        CoordinateConverter::screen_to_world(offset, &self.viewport)
    }

    /// Convert a world point to a surface offset with the current viewport.
    pub fn world_to_screen(&self, point: WorldPoint) -> ScreenOffset {
        CoordinateConverter::world_to_screen(point, &self.viewport)
    }

    pub fn handle_wheel(&mut self, event: &WheelEvent) -> EventResponse {
        // Plain wheel scrolling belongs to the host
        if !event.is_zoom_gesture() {
            return EventResponse::ignored();
        }

        let direction = ZoomDirection::from_wheel_delta(event.delta_y);
        self.viewport.zoom(direction, self.pointer, self.zoom_limits);
        self.notifier.mark_dirty();

        debug!(
            ?direction,
            scale = self.viewport.scale,
            x = self.viewport.corner.x,
            y = self.viewport.corner.y,
            "Viewport zoomed"
        );
        EventResponse::prevent_default()
    }

    pub(crate) fn pan_viewport(&mut self, session: &PanSession, event: &PointerEvent) {
        self.viewport.pan(session.start_corner, event.client - session.anchor);
        self.notifier.mark_dirty();
    }
}
