//! Pointer and wheel input handling for the board.
//!
//! ## Architecture
//!
//! An explicit state machine (`InputState`) tracks the open gesture, if any.
//! Hover tracking runs on every move independently of it, and wheel zoom is
//! momentary. Handlers are `impl Board` blocks split by event type.
//!
//! ## Modules
//!
//! - `coords` - Screen/world conversion and the `Viewport` transforms
//! - `events` - Raw input events and the response handed back to the host
//! - `state` - Input state machine enum and session data
//! - `pointer_down` - Session start (element drag, viewport pan)
//! - `drag` - Pointer move (drag, pan, hover tracking)
//! - `pointer_up` - Session end
//! - `transform` - Wheel zoom, pan and coordinate helpers on the board

pub mod coords;
pub mod events;
mod state;
mod pointer_down;
mod drag;
mod pointer_up;
mod transform;

pub use events::{
    CaptureRequest, EventResponse, InputEvent, Modifiers, PointerButton, PointerEvent, PointerId, WheelEvent,
};
pub use state::{DragSession, InputState, PanSession};
