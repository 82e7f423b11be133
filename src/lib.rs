//! Omegaboard - pointer interaction and pan/zoom core for a 2D canvas board.
//!
//! The crate turns raw pointer and wheel events into viewport transforms
//! (pan/zoom), per-element hover state and element position changes, and
//! signals an external renderer when something needs repainting.
//!
//! ## Modules
//!
//! - `types` - World/screen points, element ids, the `Element` trait and `Layer`
//! - `input` - Input events, coordinate transforms and the interaction state machine
//! - `board` - The `Board` that owns viewport, hover and session state
//! - `hit_testing` - Topmost-wins hover dispatch over a layer
//! - `notifier` - Collapsing redraw signal
//! - `settings` - Board configuration loaded from JSON

pub mod board;
pub mod constants;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod notifier;
pub mod perf;
pub mod settings;
pub mod types;

pub use board::Board;
pub use error::{SettingsError, SettingsResult};
pub use input::coords::{PointerSample, Viewport, ZoomDirection};
pub use input::{
    CaptureRequest, EventResponse, InputEvent, InputState, Modifiers, PointerButton, PointerEvent,
    PointerId, WheelEvent,
};
pub use notifier::RedrawNotifier;
pub use settings::BoardSettings;
pub use types::{Element, ElementId, Layer, ScreenOffset, WorldPoint, WorldRect};
