//! Input state machine - one explicit mode instead of per-gesture flags.
//!
//! Pointer tracking (hover recompute) runs on every move regardless of mode,
//! so it is not a variant here. Zooming is momentary and never opens a session.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingElement   (primary button down while an element is hovered)
//! Idle -> Panning           (auxiliary button down)
//!
//! DraggingElement -> Idle   (pointer up from the session's pointer)
//! Panning -> Idle           (pointer up from the session's pointer)
//! ```
//!
//! A pointer down while a session is open is ignored; sessions never nest.

use crate::input::events::PointerId;
use crate::types::{ElementId, ScreenOffset, WorldPoint};

/// A viewport pan gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    pub pointer_id: PointerId,
    /// Client position at pointer down
    pub anchor: ScreenOffset,
    /// Viewport corner at pointer down
    pub start_corner: WorldPoint,
}

/// An element drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Client position at pointer down
    pub anchor: ScreenOffset,
    pub element_id: ElementId,
    /// Element position at pointer down
    pub start_position: WorldPoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Dragging the viewport (auxiliary button)
    Panning(PanSession),

    /// Dragging a single element (primary button)
    DraggingElement(DragSession),
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }

    pub fn is_dragging_element(&self) -> bool {
        matches!(self, Self::DraggingElement(_))
    }

    /// Get the element being dragged, if any
    pub fn dragged_element_id(&self) -> Option<ElementId> {
        match self {
            Self::DraggingElement(session) => Some(session.element_id),
            _ => None,
        }
    }

    /// Pointer that owns the open session
    pub fn session_pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Panning(session) => Some(session.pointer_id),
            Self::DraggingElement(session) => Some(session.pointer_id),
        }
    }

    /// Whether moves/up from `pointer_id` belong to the open session
    pub fn is_owned_by(&self, pointer_id: PointerId) -> bool {
        self.session_pointer_id() == Some(pointer_id)
    }

    pub fn start_panning(&mut self, pointer_id: PointerId, anchor: ScreenOffset, start_corner: WorldPoint) {
        *self = Self::Panning(PanSession {
            pointer_id,
            anchor,
            start_corner,
        });
    }

    pub fn start_dragging(
        &mut self,
        pointer_id: PointerId,
        anchor: ScreenOffset,
        element_id: ElementId,
        start_position: WorldPoint,
    ) {
        *self = Self::DraggingElement(DragSession {
            pointer_id,
            anchor,
            element_id,
            start_position,
        });
    }

    /// Close any open session
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
