//! The board - owns the element layer, viewport, hover and gesture state.
//!
//! All mutation goes through `handle_event` (or `resize`). Each call runs to
//! completion and ends with exactly one redraw notification if anything
//! changed. Pointer handlers live in `crate::input`.

use crate::error::SettingsResult;
use crate::hit_testing::find_topmost_hover_target;
use crate::input::coords::{PointerSample, Viewport, ZoomLimits};
use crate::input::{EventResponse, InputEvent, InputState};
use crate::notifier::{RedrawNotifier, SubscriptionId};
use crate::settings::BoardSettings;
use crate::types::{Element, ElementId, Layer, ScreenOffset, WorldRect};
use tracing::trace;

#[derive(Debug)]
pub struct Board<E> {
    pub(crate) layer: Layer<E>,
    pub(crate) viewport: Viewport,
    pub(crate) zoom_limits: ZoomLimits,
    /// Last tracked pointer position
    pub(crate) pointer: PointerSample,
    pub(crate) hover_element_id: Option<ElementId>,
    pub(crate) input_state: InputState,
    /// Drawable surface size in pixels
    pub(crate) surface_size: (f64, f64),
    pub(crate) notifier: RedrawNotifier,
}

impl<E: Element> Board<E> {
    pub fn new(layer: Layer<E>) -> Self {
        Self::from_valid_settings(layer, &BoardSettings::default())
    }

    /// Build a board from settings, rejecting any that fail `validate`.
    pub fn with_settings(layer: Layer<E>, settings: &BoardSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::from_valid_settings(layer, settings))
    }

    fn from_valid_settings(layer: Layer<E>, settings: &BoardSettings) -> Self {
        let viewport = settings.viewport();
        Self {
            layer,
            viewport,
            zoom_limits: settings.zoom_limits(),
            pointer: PointerSample::at(ScreenOffset::default(), &viewport),
            hover_element_id: None,
            input_state: InputState::default(),
            surface_size: (0.0, 0.0),
            notifier: RedrawNotifier::new(),
        }
    }

    /// Feed one input event through the state machine.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let response = match event {
            InputEvent::PointerDown(e) => self.handle_pointer_down(e),
            InputEvent::PointerMove(e) => self.handle_pointer_move(e),
            InputEvent::PointerUp(e) => self.handle_pointer_up(e),
            InputEvent::Wheel(e) => self.handle_wheel(e),
        };
        self.notifier.flush();
        response
    }

    /// Record a new surface size and ask for a repaint.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface_size = (width.max(0.0), height.max(0.0));
        self.notifier.mark_dirty();
        self.notifier.flush();
    }

    /// Ask for a repaint after changing elements from outside the board.
    pub fn request_redraw(&mut self) {
        self.notifier.mark_dirty();
        self.notifier.flush();
    }

    /// Recompute pointer sample and hover from a surface offset.
    pub(crate) fn track_pointer(&mut self, offset: ScreenOffset) {
        self.pointer = PointerSample::at(offset, &self.viewport);
        self.hover_element_id = find_topmost_hover_target(&mut self.layer, self.pointer.world);
        trace!(
            x = self.pointer.world.x,
            y = self.pointer.world.y,
            hover = self.hover_element_id.map_or(0, ElementId::get),
            "Pointer tracked"
        );
        self.notifier.mark_dirty();
    }

    // ------------------------------------------------------------------------
    // Read access for renderers
    // ------------------------------------------------------------------------

    pub fn layer(&self) -> &Layer<E> {
        &self.layer
    }

    /// Mutable layer access. Call `request_redraw` afterwards.
    pub fn layer_mut(&mut self) -> &mut Layer<E> {
        &mut self.layer
    }

    pub fn elements(&self) -> &[E] {
        self.layer.as_slice()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    pub fn pointer(&self) -> &PointerSample {
        &self.pointer
    }

    /// Topmost element under the pointer as of the last move
    pub fn hover_element_id(&self) -> Option<ElementId> {
        self.hover_element_id
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn surface_size(&self) -> (f64, f64) {
        self.surface_size
    }

    /// World rectangle currently visible on the surface
    pub fn visible_world_rect(&self) -> WorldRect {
        self.viewport.visible_rect(self.surface_size.0, self.surface_size.1)
    }

    // ------------------------------------------------------------------------
    // Redraw subscription
    // ------------------------------------------------------------------------

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Whether a repaint was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        self.notifier.take_redraw()
    }

    pub fn notifier(&self) -> &RedrawNotifier {
        &self.notifier
    }
}
