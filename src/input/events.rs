//! Raw pointer and wheel input as delivered by the host surface.

use crate::constants::{BUTTON_AUXILIARY, BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::types::ScreenOffset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

/// Pointer button decoded from the platform's button code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Code 0, usually the left mouse button
    Primary,
    /// Code 1, usually the middle mouse button
    Auxiliary,
    /// Code 2, usually the right mouse button
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_code(code: i16) -> Self {
        match code {
            BUTTON_PRIMARY => Self::Primary,
            BUTTON_AUXILIARY => Self::Auxiliary,
            BUTTON_SECONDARY => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// A pointer down/move/up sample.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    /// Raw button code of the button that changed (meaningful on down/up)
    pub button: i16,
    /// Position in client (window) coordinates
    pub client: ScreenOffset,
    /// Client-space position of the event target's top-left corner
    pub target_origin: ScreenOffset,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, button: i16, client: ScreenOffset) -> Self {
        Self {
            pointer_id,
            button,
            client,
            target_origin: ScreenOffset::default(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_target_origin(mut self, origin: ScreenOffset) -> Self {
        self.target_origin = origin;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn pointer_button(&self) -> PointerButton {
        PointerButton::from_code(self.button)
    }

    /// Position relative to the drawing surface
    #[inline]
    pub fn offset(&self) -> ScreenOffset {
        self.client - self.target_origin
    }
}

/// A wheel notch or trackpad scroll.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub client: ScreenOffset,
    pub target_origin: ScreenOffset,
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn new(delta_y: f64, modifiers: Modifiers) -> Self {
        Self {
            client: ScreenOffset::default(),
            target_origin: ScreenOffset::default(),
            delta_y,
            modifiers,
        }
    }

    /// Whether this wheel event should zoom instead of scroll.
    pub fn is_zoom_gesture(&self) -> bool {
        self.modifiers.ctrl
    }
}

#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Wheel(WheelEvent),
}

/// Pointer capture change the host should apply to its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRequest {
    Capture(PointerId),
    Release(PointerId),
}

/// What the host should do with the native event after the board handled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default behavior (e.g. page scroll)
    pub prevent_default: bool,
    pub capture: Option<CaptureRequest>,
}

impl EventResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            capture: None,
        }
    }

    pub fn capture(pointer_id: PointerId) -> Self {
        Self {
            prevent_default: false,
            capture: Some(CaptureRequest::Capture(pointer_id)),
        }
    }

    pub fn release(pointer_id: PointerId) -> Self {
        Self {
            prevent_default: false,
            capture: Some(CaptureRequest::Release(pointer_id)),
        }
    }
}
