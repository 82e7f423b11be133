//! Coordinate conversion and viewport transforms.
//!
//! Screen space is pixels relative to the drawing surface; world space is the
//! board's integer coordinate system. The `Viewport` ties them together:
//!
//! ```text
//! world  = corner + round(screen / scale)
//! screen = (world - corner) * scale
//! ```
//!
//! The conversion is lossy. A screen offset taken to world space and back may
//! differ from the original by up to `scale / 2` pixels per axis because the
//! world side is rounded to whole units.

use crate::constants::{DEFAULT_CORNER, DEFAULT_SCALE, MIN_SCALE, SCALE_QUANTUM, ZOOM_STEP};
use crate::types::{ScreenOffset, WorldPoint, WorldRect};

/// Round a scale to one decimal place.
#[inline]
pub fn quantize_scale(scale: f64) -> f64 {
    (scale * SCALE_QUANTUM).round() / SCALE_QUANTUM
}

/// Whether `value` already sits on the one-decimal scale grid.
#[inline]
pub fn on_scale_grid(value: f64) -> bool {
    let steps = value * SCALE_QUANTUM;
    steps.is_finite() && (steps - steps.round()).abs() < 1e-9
}

/// Current pan/zoom of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen pixels per world unit. Always quantized and never below the floor.
    pub scale: f64,
    /// World point shown at the screen's top-left pixel
    pub corner: WorldPoint,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            corner: DEFAULT_CORNER,
        }
    }
}

/// Zoom direction selected by the wheel.
///
/// `Out` grows the scale and `In` shrinks it towards the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive vertical wheel delta zooms out, anything else zooms in.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }
}

/// Step size and floor used by `Viewport::zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub step: f64,
    pub min_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            min_scale: MIN_SCALE,
        }
    }
}

impl ZoomLimits {
    /// `min_scale` rounded up onto the scale grid, never below one grid step.
    pub fn floor(&self) -> f64 {
        let steps = (self.min_scale * SCALE_QUANTUM - 1e-9).ceil().max(1.0);
        steps / SCALE_QUANTUM
    }
}

/// Last known pointer position in both spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub screen: ScreenOffset,
    pub world: WorldPoint,
}

impl PointerSample {
    pub fn at(screen: ScreenOffset, viewport: &Viewport) -> Self {
        Self {
            screen,
            world: CoordinateConverter::screen_to_world(screen, viewport),
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen offset to the world point under it
    #[inline]
    pub fn screen_to_world(screen: ScreenOffset, viewport: &Viewport) -> WorldPoint {
        viewport.corner + screen.to_world_delta(viewport.scale)
    }

    /// Convert a world point to its screen offset
    #[inline]
    pub fn world_to_screen(world: WorldPoint, viewport: &Viewport) -> ScreenOffset {
        let rel = world - viewport.corner;
        ScreenOffset::new(rel.x as f64 * viewport.scale, rel.y as f64 * viewport.scale)
    }

    /// Convert a screen-space drag delta to a world-space delta
    #[inline]
    pub fn delta_screen_to_world(delta: ScreenOffset, scale: f64) -> WorldPoint {
        delta.to_world_delta(scale)
    }
}

impl Viewport {
    pub fn new(scale: f64, corner: WorldPoint) -> Self {
        Self {
            scale: quantize_scale(scale),
            corner,
        }
    }

    /// Move the viewport for a pan gesture.
    ///
    /// `delta` is the cumulative screen distance since the gesture started and
    /// `start_corner` the corner at that moment, so repeated rounding never
    /// accumulates across moves.
    pub fn pan(&mut self, start_corner: WorldPoint, delta: ScreenOffset) {
        self.corner = start_corner - CoordinateConverter::delta_screen_to_world(delta, self.scale);
    }

    /// Step the scale and re-anchor the corner so `pointer.world` stays under
    /// `pointer.screen`.
    ///
    /// The scale must change before the corner is recomputed; anchoring with
    /// the old scale zooms around the wrong point.
    pub fn zoom(&mut self, direction: ZoomDirection, pointer: PointerSample, limits: ZoomLimits) {
        let next = match direction {
            ZoomDirection::Out => self.scale + limits.step,
            ZoomDirection::In => self.scale - limits.step,
        };
        self.scale = quantize_scale(next).max(limits.floor());
        self.corner = pointer.world - pointer.screen.to_world_delta(self.scale);
    }

    /// World rectangle covered by a `width` x `height` pixel surface.
    pub fn visible_rect(&self, width: f64, height: f64) -> WorldRect {
        let far = CoordinateConverter::screen_to_world(ScreenOffset::new(width, height), self);
        WorldRect {
            min: self.corner,
            max: far,
        }
    }
}
