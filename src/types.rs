//! Core types for the board.
//!
//! This module defines the coordinate types shared by the transform engine and
//! the handlers, the `Element` capability the board drives, and the ordered
//! `Layer` collection that owns elements.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::ops::{Add, Sub};

// ============================================================================
// Coordinates
// ============================================================================

/// A point in world space (the board's logical, integer coordinate system).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i64,
    pub y: i64,
}

impl WorldPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: Self) -> Self::Output {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: Self) -> Self::Output {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for WorldPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// A pixel offset in screen space, relative to the drawing surface's top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenOffset {
    pub x: f64,
    pub y: f64,
}

impl ScreenOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a screen-space length into world units at `scale`,
    /// rounding each axis to the nearest integer (ties away from zero).
    #[inline]
    pub fn to_world_delta(self, scale: f64) -> WorldPoint {
        WorldPoint::new(
            (self.x / scale).round() as i64,
            (self.y / scale).round() as i64,
        )
    }
}

impl Add for ScreenOffset {
    type Output = ScreenOffset;

    fn add(self, rhs: Self) -> Self::Output {
        ScreenOffset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenOffset {
    type Output = ScreenOffset;

    fn sub(self, rhs: Self) -> Self::Output {
        ScreenOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for ScreenOffset {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned world-space rectangle, `min` inclusive, `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldRect {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl WorldRect {
    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Stable, non-zero identifier of an element on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(NonZeroU64);

impl ElementId {
    /// Returns `None` for 0, which is reserved for "no element".
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities the board needs from a drawable shape.
///
/// The board never creates or destroys elements. It only reads and moves them,
/// and flips their hover flag during hit testing. Geometry is entirely up to
/// the implementor.
pub trait Element {
    fn id(&self) -> ElementId;

    fn position(&self) -> WorldPoint;

    fn set_position(&mut self, position: WorldPoint);

    /// Whether `point` (world space) lies on this element.
    fn contains_point(&self, point: WorldPoint) -> bool;

    fn is_hovered(&self) -> bool;

    fn set_hovered(&mut self, hovered: bool);
}

// ============================================================================
// Layer
// ============================================================================

/// Ordered element collection. Later elements render on top.
#[derive(Debug, Clone)]
pub struct Layer<E> {
    elements: Vec<E>,
}

impl<E> Default for Layer<E> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}

impl<E: Element> Layer<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element on top of all existing ones.
    pub fn push(&mut self, element: E) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: ElementId) -> Option<E> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&E> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut E> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Elements bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E: Element> FromIterator<E> for Layer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E: Element> From<Vec<E>> for Layer<E> {
    fn from(elements: Vec<E>) -> Self {
        Self { elements }
    }
}
