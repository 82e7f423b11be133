//! Pointer down handling - opens drag and pan sessions.

use crate::board::Board;
use crate::input::{EventResponse, PointerButton, PointerEvent};
use crate::profile_scope;
use crate::types::Element;
use tracing::debug;

impl<E: Element> Board<E> {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("handle_pointer_down");

        if let Some(owner) = self.input_state.session_pointer_id() {
            debug!(
                pointer = event.pointer_id.0,
                owner = owner.0,
                "Pointer down ignored, session already open"
            );
            return EventResponse::ignored();
        }

        match event.pointer_button() {
            PointerButton::Primary => {
                let Some(element_id) = self.hover_element_id else {
                    return EventResponse::ignored();
                };
                // Hover id can outlive the element if the layer changed since the last move
                let Some(element) = self.layer.get(element_id) else {
                    debug!(element = %element_id, "Hovered element is gone, not dragging");
                    return EventResponse::ignored();
                };
                let start_position = element.position();
                self.input_state
                    .start_dragging(event.pointer_id, event.client, element_id, start_position);
                debug!(
                    element = %element_id,
                    x = start_position.x,
                    y = start_position.y,
                    "Element drag started"
                );
                EventResponse::capture(event.pointer_id)
            }
            PointerButton::Auxiliary => {
                let start_corner = self.viewport.corner;
                self.input_state
                    .start_panning(event.pointer_id, event.client, start_corner);
                debug!(x = start_corner.x, y = start_corner.y, "Viewport pan started");
                EventResponse::capture(event.pointer_id)
            }
            PointerButton::Secondary | PointerButton::Other(_) => EventResponse::ignored(),
        }
    }
}
