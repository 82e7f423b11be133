//! Pointer up handling - closes the open session.

use crate::board::Board;
use crate::input::{EventResponse, PointerEvent};
use crate::types::Element;
use tracing::debug;

impl<E: Element> Board<E> {
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.input_state.is_owned_by(event.pointer_id) {
            return EventResponse::ignored();
        }

        if let Some(element_id) = self.input_state.dragged_element_id() {
            debug!(element = %element_id, "Element drag finished");
        } else {
            debug!(x = self.viewport.corner.x, y = self.viewport.corner.y, "Viewport pan finished");
        }

        // Dropping the session is what stops later moves from driving it
        self.input_state.reset();
        EventResponse::release(event.pointer_id)
    }
}
