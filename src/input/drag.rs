//! Pointer move handling - element drag, viewport pan and hover tracking.
//!
//! Move is the hottest path: it fires for every pointer sample whether or not
//! a gesture is open. Session work happens first so the hover pass sees the
//! element and viewport positions the renderer is about to draw.

use crate::board::Board;
use crate::input::state::{DragSession, InputState};
use crate::input::{EventResponse, PointerEvent};
use crate::profile_scope;
use crate::types::Element;
use tracing::debug;

impl<E: Element> Board<E> {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("handle_pointer_move");

        if self.input_state.is_owned_by(event.pointer_id) {
            match self.input_state {
                InputState::DraggingElement(session) => self.drag_element(&session, event),
                InputState::Panning(session) => self.pan_viewport(&session, event),
                InputState::Idle => {}
            }
        }

        self.track_pointer(event.offset());
        EventResponse::ignored()
    }

    fn drag_element(&mut self, session: &DragSession, event: &PointerEvent) {
        profile_scope!("element_drag");

        let delta = (event.client - session.anchor).to_world_delta(self.viewport.scale);
        let Some(element) = self.layer.get_mut(session.element_id) else {
            debug!(element = %session.element_id, "Dragged element is gone");
            return;
        };
        element.set_position(session.start_position + delta);
        self.notifier.mark_dirty();
    }
}
